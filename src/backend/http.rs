//! HTTP generation backend.
//!
//! POSTs the rendered prompt, model, and temperature to a configured
//! endpoint and reads the rewritten text from the reply's `paraphrased`
//! field. Single attempt per call, bounded by an explicit timeout.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::backend::GenerationBackend;
use crate::config::LlmConfig;
use crate::errors::BackendError;
use crate::prompt::RenderedPrompt;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Request body sent to the generation endpoint.
#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    model: &'a str,
    temperature: f64,
    prompt: &'a str,
}

/// Reply body expected from the generation endpoint.
#[derive(Debug, Deserialize)]
struct GenerationResponse {
    #[serde(default)]
    paraphrased: Option<String>,
}

/// Backend talking to a network-reachable generation service.
#[derive(Debug, Clone)]
pub struct HttpGenerationBackend {
    endpoint: String,
    model: String,
    temperature: f64,
    timeout: Duration,
}

impl HttpGenerationBackend {
    /// Create a backend from the generation settings.
    pub fn new(config: &LlmConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn post(&self, prompt: &RenderedPrompt) -> Result<Option<String>, BackendError> {
        let body = GenerationRequest {
            model: &self.model,
            temperature: self.temperature,
            prompt: prompt.as_str(),
        };

        let client = reqwest::Client::builder().timeout(self.timeout).build()?;
        let response = client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status { status, body });
        }

        let reply: GenerationResponse =
            response
                .json()
                .await
                .map_err(|e| BackendError::Malformed {
                    message: e.to_string(),
                })?;

        Ok(normalize_reply(reply.paraphrased))
    }
}

/// Trim the reply and map empty or absent text to `None`.
fn normalize_reply(reply: Option<String>) -> Option<String> {
    reply
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

#[async_trait]
impl GenerationBackend for HttpGenerationBackend {
    fn backend_name(&self) -> &str {
        "HttpGenerationBackend"
    }

    async fn agenerate(&self, prompt: &RenderedPrompt) -> Result<Option<String>, anyhow::Error> {
        log::debug!(
            "HttpGenerationBackend.agenerate: endpoint={}, model={}, prompt_len={}",
            self.endpoint,
            self.model,
            prompt.as_str().len(),
        );
        Ok(self.post(prompt).await?)
    }
}
