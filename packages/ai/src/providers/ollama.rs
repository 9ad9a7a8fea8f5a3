//! Ollama provider implementation.
//!
//! Talks to a local Ollama daemon via its `/api/generate` endpoint with
//! streaming disabled. This is the backend the service was originally
//! deployed against.

use serde::{Deserialize, Serialize};

use super::LlmProvider;
use crate::AiError;

/// Default Ollama daemon address.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:11434";

/// Default generation model.
pub const DEFAULT_MODEL: &str = "llama3.1";

/// Ollama API provider.
pub struct OllamaProvider {
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl OllamaProvider {
    /// Creates a new Ollama provider.
    #[must_use]
    pub fn new(base_url: String, model: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            model,
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Deserialize)]
struct OllamaErrorBody {
    error: String,
}

#[async_trait::async_trait]
impl LlmProvider for OllamaProvider {
    async fn complete(&self, prompt: &str) -> Result<String, AiError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let resp = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<OllamaErrorBody>(&body)
                .map_or_else(|_| format!("HTTP {status}: {body}"), |e| e.error);
            return Err(AiError::Provider { message });
        }

        let response: GenerateResponse = serde_json::from_str(&body)?;
        Ok(response.response)
    }
}
