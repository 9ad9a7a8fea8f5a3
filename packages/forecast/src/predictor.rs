//! Prediction capability and its HTTP implementation.
//!
//! The regression models live behind an inference server; this module
//! reaches them through the narrow [`Predictor`] contract so the rest of
//! the system never sees model loading, framework, or transport details.
//! Tests satisfy the same trait with deterministic stubs.

use serde::{Deserialize, Serialize};

use crate::ForecastError;

/// Default inference server address when `INFERENCE_BASE_URL` is unset.
const DEFAULT_INFERENCE_BASE_URL: &str = "http://127.0.0.1:8500";

/// The prediction capability: one fixed-width input row in, one
/// fixed-width output row out.
///
/// Implementations are expected to be pure from the caller's perspective
/// but are not guaranteed safe for concurrent invocation; callers that
/// need ordering (the range expander) invoke sequentially. Failures are
/// opaque and are never retried here.
#[async_trait::async_trait]
pub trait Predictor: Send + Sync {
    /// Runs the model on a single feature row.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError`] if the capability fails.
    async fn predict(&self, features: &[f32]) -> Result<Vec<f32>, ForecastError>;
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: Vec<&'a [f32]>,
}

#[derive(Deserialize)]
struct InferenceResponse {
    outputs: Vec<Vec<f32>>,
}

#[derive(Deserialize)]
struct InferenceErrorBody {
    error: String,
}

/// Predictor backed by an HTTP model inference server.
///
/// Sends the single-row batch as JSON to `{base_url}/predict/{model}` and
/// expects the matching single-row batch back.
pub struct HttpPredictor {
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl HttpPredictor {
    /// Creates a predictor for a named model on an inference server.
    #[must_use]
    pub fn new(base_url: String, model: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            model,
            client: reqwest::Client::new(),
        }
    }

    /// Creates a predictor from `INFERENCE_BASE_URL`, falling back to the
    /// local default.
    #[must_use]
    pub fn from_env(model: &str) -> Self {
        let base_url = std::env::var("INFERENCE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_INFERENCE_BASE_URL.to_string());
        log::info!("Using inference server at {base_url} for model '{model}'");
        Self::new(base_url, model.to_owned())
    }
}

#[async_trait::async_trait]
impl Predictor for HttpPredictor {
    async fn predict(&self, features: &[f32]) -> Result<Vec<f32>, ForecastError> {
        let url = format!("{}/predict/{}", self.base_url, self.model);
        let request = InferenceRequest {
            inputs: vec![features],
        };

        let resp = self.client.post(&url).json(&request).send().await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<InferenceErrorBody>(&body)
                .map_or_else(|_| format!("HTTP {status}: {body}"), |e| e.error);
            return Err(ForecastError::Upstream { message });
        }

        let response: InferenceResponse =
            serde_json::from_str(&body).map_err(|e| ForecastError::Upstream {
                message: format!("malformed inference response: {e}"),
            })?;

        response
            .outputs
            .into_iter()
            .next()
            .ok_or_else(|| ForecastError::Upstream {
                message: format!("empty output batch from model '{}'", self.model),
            })
    }
}
