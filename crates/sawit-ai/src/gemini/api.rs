//! AiClient trait implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiClient, AiError, AiResponse, Turn};

use super::client::GeminiClient;

#[async_trait]
impl AiClient for GeminiClient {
    async fn send_message(&self, turns: &[Turn]) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(turns);
        let url = self.api_url();

        debug!(model = %self.config.model, turns = turns.len(), "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(map_transport_error)?;

        // The error object is authoritative whatever the status code, so the
        // body is parsed before the status is considered.
        let json: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| AiError::ParseError(format!("HTTP {status}: {e}")))?;

        let parsed = self.parse_response(json);
        if let Ok(ref reply) = parsed {
            debug!(
                %status,
                input_tokens = reply.usage.input_tokens,
                output_tokens = reply.usage.output_tokens,
                "Gemini API response"
            );
        }
        parsed
    }

    fn is_configured(&self) -> bool {
        !self.config.api_key.trim().is_empty()
    }
}

fn map_transport_error(e: reqwest::Error) -> AiError {
    if e.is_timeout() {
        AiError::Timeout
    } else {
        AiError::NetworkError(e.to_string())
    }
}
