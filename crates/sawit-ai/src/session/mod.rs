//! Conversation session management.
//!
//! A `ChatSession` holds the conversation history sent to the model and the
//! display log shown to the visitor, persists both, and runs one
//! single-flight request per send.

mod chat;
mod manager;
mod persist;
mod types;


pub use manager::{ChatSession, DEFAULT_DISPLAY_LIMIT, DEFAULT_HISTORY_LIMIT};
pub use types::{DisplayEntry, EntryKind, IgnoreReason, NotifySound, SendOutcome};
