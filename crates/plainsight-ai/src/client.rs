//! HTTP client for the local completion endpoint.
//!
//! The endpoint takes `{"prompt": "..."}` and answers `{"result": "..."}`.
//! One attempt per call: no retry, no backoff, no timeout beyond reqwest's
//! defaults.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Default endpoint when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/gemini";

#[derive(Error, Debug)]
pub enum InvokeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("response envelope is not {{\"result\": string}}: {0}")]
    Envelope(String),
}

/// Anything that can turn a prompt into the model's raw text reply.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, InvokeError>;
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    prompt: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    result: String,
}

/// [`CompletionClient`] backed by a single HTTP endpoint.
pub struct HttpCompletionClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCompletionClient {
    /// Create a client posting to `endpoint`, e.g.
    /// `http://localhost:3000/api/gemini`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String, InvokeError> {
        info!(endpoint = %self.endpoint, prompt_len = prompt.len(), "requesting completion");
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&CompletionRequest { prompt })
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(InvokeError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        let envelope: CompletionResponse =
            serde_json::from_str(&body).map_err(|e| InvokeError::Envelope(e.to_string()))?;
        debug!(result_len = envelope.result.len(), "completion received");
        Ok(envelope.result)
    }
}
