//! Chat engine for Sawit.
//!
//! Provides the conversation session behind the portfolio chat widget:
//! - A Gemini `generateContent` client behind the `AiClient` trait
//! - Page-context greetings and the persona preamble
//! - A `ChatSession` that keeps the transcript, persists it, and runs
//!   one single-flight request per send
//! - The markdown-to-HTML transform used for model replies

pub mod context;
pub mod gemini;
pub mod markdown;
pub mod persona;
pub mod session;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use context::PageContext;
pub use gemini::{GeminiClient, GeminiConfig};
pub use markdown::{render_markdown, render_plain};
pub use session::{ChatSession, DisplayEntry, EntryKind, IgnoreReason, SendOutcome};

#[async_trait]
pub trait AiClient: Send + Sync {
    /// Send the whole conversation and return the generated reply.
    async fn send_message(&self, turns: &[Turn]) -> Result<AiResponse, AiError>;

    /// Whether the client has the credentials it needs to make a call.
    fn is_configured(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One message exchanged with the text-generation service.
///
/// Serialized in the service's wire shape:
/// `{"role": "user", "parts": [{"text": "..."}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireTurn", into = "WireTurn")]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct WirePart {
    text: String,
}

#[derive(Serialize, Deserialize)]
struct WireTurn {
    role: Role,
    parts: Vec<WirePart>,
}

impl From<WireTurn> for Turn {
    fn from(wire: WireTurn) -> Self {
        Self {
            role: wire.role,
            text: wire.parts.into_iter().map(|p| p.text).collect(),
        }
    }
}

impl From<Turn> for WireTurn {
    fn from(turn: Turn) -> Self {
        Self {
            role: turn.role,
            parts: vec![WirePart { text: turn.text }],
        }
    }
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    /// The service answered with an explicit error object.
    #[error("API error: {}", .0.as_deref().unwrap_or("Unknown error"))]
    ApiError(Option<String>),
    #[error("Network error: {0}")]
    NetworkError(String),
    /// The response body was not valid JSON.
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Valid JSON, but neither generated text nor an error object.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
    #[error("Timeout")]
    Timeout,
}

impl AiError {
    /// Failures where the request never produced a usable answer from the
    /// service (connection, timeout, unreadable body).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AiError::NetworkError(_) | AiError::ParseError(_) | AiError::Timeout
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_serializes_in_wire_shape() {
        let json = serde_json::to_value(Turn::user("hi")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "role": "user", "parts": [{ "text": "hi" }] })
        );

        let json = serde_json::to_value(Turn::model("yo")).unwrap();
        assert_eq!(json["role"], "model");
    }

    #[test]
    fn turn_deserializes_multi_part_text() {
        let turn: Turn = serde_json::from_value(serde_json::json!({
            "role": "model",
            "parts": [{ "text": "a" }, { "text": "b" }]
        }))
        .unwrap();
        assert_eq!(turn, Turn::model("ab"));
    }

    #[test]
    fn unknown_role_is_rejected() {
        let result: Result<Turn, _> = serde_json::from_value(serde_json::json!({
            "role": "system",
            "parts": [{ "text": "x" }]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn api_error_display_uses_message_or_fallback() {
        assert_eq!(
            AiError::ApiError(Some("quota exceeded".into())).to_string(),
            "API error: quota exceeded"
        );
        assert_eq!(AiError::ApiError(None).to_string(), "API error: Unknown error");
    }

    #[test]
    fn transport_classification() {
        assert!(AiError::NetworkError("dns".into()).is_transport());
        assert!(AiError::ParseError("eof".into()).is_transport());
        assert!(AiError::Timeout.is_transport());
        assert!(!AiError::ApiError(None).is_transport());
        assert!(!AiError::UnexpectedResponse("{}".into()).is_transport());
    }

    #[test]
    fn token_usage_total_saturates() {
        let usage = TokenUsage {
            input_tokens: u64::MAX,
            output_tokens: 1,
        };
        assert_eq!(usage.total_tokens(), u64::MAX);
    }
}
