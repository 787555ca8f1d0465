//! Gemini API client configuration.

use std::time::Duration;

pub(crate) const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API client configuration.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub request_timeout: Duration,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("top_p", &self.top_p)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "gemma-3-4b-it".to_string(),
            base_url: GEMINI_API_BASE.to_string(),
            max_tokens: 1024,
            temperature: 0.85,
            top_p: 0.9,
            request_timeout: Duration::from_secs(120),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = top_p;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_widget_generation_settings() {
        let config = GeminiConfig::new("key");
        assert_eq!(config.model, "gemma-3-4b-it");
        assert_eq!(config.temperature, 0.85);
        assert_eq!(config.max_tokens, 1024);
        assert_eq!(config.top_p, 0.9);
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = GeminiConfig::new("AIza-very-secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("AIza-very-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn builders_override_fields() {
        let config = GeminiConfig::new("k")
            .with_model("gemini-2.0-flash")
            .with_base_url("http://localhost:9999")
            .with_max_tokens(64)
            .with_temperature(0.1)
            .with_top_p(0.5)
            .with_request_timeout(Duration::from_secs(5));
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(config.max_tokens, 64);
        assert_eq!(config.temperature, 0.1);
        assert_eq!(config.top_p, 0.5);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }
}
