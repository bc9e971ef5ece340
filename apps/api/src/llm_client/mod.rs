/// LLM Client: the single point of entry for all generative-API calls.
///
/// ARCHITECTURAL RULE: agent operations never talk HTTP themselves.
/// They build a `GenerateContentRequest` and hand it to `LlmClient::execute`.
///
/// Retry policy: rate limiting (429) is retried with exponential backoff,
/// 5 attempts in total. Every other failure is terminal on first sight.
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

pub mod decoder;
pub mod prompts;
pub mod transport;
pub mod wire;

#[cfg(test)]
pub mod testing;

use self::decoder::{decode, DecodeError, ModelOutput};
use self::transport::{HttpTransport, Transport};
use self::wire::{GenerateContentRequest, GenerateContentResponse};

/// Default endpoint. Overridable via `GEMINI_API_URL`.
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-preview-09-2025:generateContent";
pub const MAX_ATTEMPTS: u32 = 5;
const INITIAL_BACKOFF: Duration = Duration::from_millis(1000);
const HTTP_TOO_MANY_REQUESTS: u16 = 429;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Rate limited on all {attempts} attempts")]
    RateLimitExhausted { attempts: u32, body: String },

    #[error("API returned a non-JSON success body")]
    MalformedResponse { body: String },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// The generative-API client shared by every agent operation.
/// Cheap to clone; holds no per-call state.
#[derive(Clone)]
pub struct LlmClient {
    transport: Arc<dyn Transport>,
}

impl LlmClient {
    pub fn new(api_url: String, api_key: String) -> Result<Self, LlmError> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new(
            api_url, api_key,
        )?)))
    }

    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Sends the request and returns the first candidate's raw text, or
    /// `None` when the success body carries no text.
    ///
    /// Backoff between rate-limited attempts: 1s, 2s, 4s, 8s.
    pub async fn send(&self, request: &GenerateContentRequest) -> Result<Option<String>, LlmError> {
        let mut delay = INITIAL_BACKOFF;
        let mut last_body = String::new();

        for attempt in 1..=MAX_ATTEMPTS {
            if attempt > 1 {
                warn!(
                    "LLM API rate limited on attempt {}, retrying after {}ms...",
                    attempt - 1,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
                delay *= 2;
            }

            let response = self.transport.send(request).await?;

            if (200..300).contains(&response.status) {
                let envelope: GenerateContentResponse = serde_json::from_str(&response.body)
                    .map_err(|_| LlmError::MalformedResponse {
                        body: response.body.clone(),
                    })?;
                debug!("LLM call succeeded on attempt {attempt}");
                return Ok(envelope.first_text().map(str::to_string));
            }

            if response.status != HTTP_TOO_MANY_REQUESTS {
                warn!("LLM API returned {}: {}", response.status, response.body);
                return Err(LlmError::Api {
                    status: response.status,
                    body: response.body,
                });
            }

            last_body = response.body;
        }

        warn!("LLM API still rate limited after {MAX_ATTEMPTS} attempts");
        Err(LlmError::RateLimitExhausted {
            attempts: MAX_ATTEMPTS,
            body: last_body,
        })
    }

    /// Sends the request and decodes the reply. Decode failures are terminal;
    /// they are not retried at the network level.
    pub async fn execute(
        &self,
        request: &GenerateContentRequest,
        expects_structured: bool,
    ) -> Result<ModelOutput, LlmError> {
        let raw = self.send(request).await?;
        Ok(decode(raw.as_deref(), expects_structured)?)
    }
}
