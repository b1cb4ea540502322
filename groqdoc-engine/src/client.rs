//! Single-attempt blocking completion client.
//!
//! Constructed once at process start from validated configuration and
//! passed explicitly to the recipe — there is no ambient global client.
//! Every failure mode of the round trip (I/O, non-200, malformed body)
//! collapses into `CompletionError`; the caller treats them all as
//! absence and takes the placeholder path. No retries.

use std::time::Duration;

use groqdoc_core::config::GroqdocConfig;
use groqdoc_core::errors::CompletionError;
use groqdoc_core::wire::{ChatMessage, CompletionRequest, CompletionResponse, Model};
use tracing::debug;

/// Fixed endpoint path under the configured base URL.
pub const COMPLETIONS_PATH: &str = "/openai/v1/chat/completions";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct GroqClient {
    base_url: String,
    api_key: String,
    model: Model,
    http: reqwest::blocking::Client,
}

impl GroqClient {
    /// Build the client from already-validated configuration.
    pub fn from_config(config: &GroqdocConfig) -> Result<Self, CompletionError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CompletionError::Http(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model,
            http,
        })
    }

    /// Send the ordered message sequence, returning the first generated
    /// choice's content. One synchronous attempt, one failure path.
    pub fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError> {
        let request = CompletionRequest {
            messages,
            model: self.model,
        };
        let url = format!("{}{}", self.base_url, COMPLETIONS_PATH);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(|e| CompletionError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CompletionError::Status {
                status: status.as_u16(),
            });
        }

        let parsed: CompletionResponse = response
            .json()
            .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CompletionError::MalformedResponse("empty choices".to_string()))?;
        if let Some(reason) = &choice.finish_reason {
            debug!(finish_reason = %reason, "completion finished");
        }
        choice
            .message
            .content
            .ok_or_else(|| {
                CompletionError::MalformedResponse(
                    "missing choices[0].message.content".to_string(),
                )
            })
    }
}
