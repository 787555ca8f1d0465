//! Google Gemini API client.
//!
//! Implements the `AiClient` trait for Gemini-family models via the
//! Generative Language `generateContent` endpoint.

mod api;
mod client;
mod config;

pub use client::GeminiClient;
pub use config::GeminiConfig;
