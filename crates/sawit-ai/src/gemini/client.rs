//! Gemini API client struct, request building, and response parsing.

use crate::{AiError, AiResponse, TokenUsage, Turn};

use super::config::GeminiConfig;

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Build the JSON request body for the Gemini API.
    ///
    /// The preamble travels as the first user turn, so there is no
    /// `systemInstruction`; turns are sent in history order.
    pub(crate) fn build_request_body(&self, turns: &[Turn]) -> serde_json::Value {
        serde_json::json!({
            "contents": turns,
            "generationConfig": {
                "temperature": self.config.temperature,
                "maxOutputTokens": self.config.max_tokens,
                "topP": self.config.top_p,
            }
        })
    }

    /// Parse a Gemini response body.
    ///
    /// An `error` object wins over everything else. Otherwise the first
    /// part of the first candidate must carry non-empty text.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<AiResponse, AiError> {
        if let Some(error) = json.get("error").filter(|e| !e.is_null()) {
            let message = error["message"]
                .as_str()
                .filter(|m| !m.is_empty())
                .map(str::to_string);
            return Err(AiError::ApiError(message));
        }

        let text = json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AiError::UnexpectedResponse(truncate_for_log(&json.to_string())))?;

        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        Ok(AiResponse {
            content: text.to_string(),
            usage,
        })
    }
}

fn truncate_for_log(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}…", &body[..idx]),
        None => body.to_string(),
    }
}
