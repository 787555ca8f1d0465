//! Chat session and storage configuration types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Chat session behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Page-context label (Profile, Skills, Projects, Contact, Home).
    /// Unrecognized labels fall back to Home.
    pub page: String,
    /// Turns kept in the conversation history (valid range: 2-200).
    pub history_limit: u32,
    /// Entries kept in the display log (valid range: 1-1000).
    pub display_limit: u32,
    /// Storage key for the display log.
    pub display_key: String,
    /// Storage key for the conversation history.
    pub history_key: String,
    /// Play the notification cue when a reply lands while the chat is closed.
    pub notify_sound: bool,
    /// Optional file replacing the built-in persona preamble.
    /// `{page}` is replaced with the page-context label.
    pub persona_path: Option<PathBuf>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            page: "Home".into(),
            history_limit: 20,
            display_limit: 50,
            display_key: "chat_history".into(),
            history_key: "conv_history".into(),
            notify_sound: true,
            persona_path: None,
        }
    }
}

/// Durable storage location.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Storage directory. Defaults to the platform data directory.
    pub dir: Option<PathBuf>,
}
