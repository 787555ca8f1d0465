//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// Equivalent `tracing` filter directive for the sawit crates.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "sawit=debug",
            LogLevel::Info => "sawit=info",
            LogLevel::Warning => "sawit=warn",
            LogLevel::Error => "sawit=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
