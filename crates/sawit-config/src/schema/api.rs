//! Remote text-generation endpoint settings.

use serde::{Deserialize, Serialize};

/// Default Generative Language API models endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Endpoint, credentials and transport limits.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API key. Empty means "not configured": the chat answers with a notice
    /// instead of calling out.
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub request_timeout_secs: u32,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gemma-3-4b-it".into(),
            base_url: DEFAULT_BASE_URL.into(),
            request_timeout_secs: 120,
        }
    }
}

impl ApiConfig {
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Valid range: 0.0-2.0.
    pub temperature: f64,
    /// Valid range: 1-8192.
    pub max_output_tokens: u32,
    /// Valid range: 0.0-1.0.
    pub top_p: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.85,
            max_output_tokens: 1024,
            top_p: 0.9,
        }
    }
}
