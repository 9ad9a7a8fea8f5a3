#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! LLM provider abstraction and remediation explanations.
//!
//! Supports Ollama (the default local backend) and any `OpenAI`-compatible
//! server via a common trait. The only generation task in the prediction
//! path is [`explain_industries`]: when a station prediction comes back
//! with a low AQI, the LLM is asked for exactly four remediation actions
//! and four responsible industries. The RAG chatbot reuses the same
//! provider trait for its answers.

pub mod providers;

use thiserror::Error;

pub use providers::{LlmProvider, create_provider_from_env};

/// Predictions at or above this AQI skip the generated explanation and get
/// the fixed acceptable-limits message instead.
pub const EXPLANATION_AQI_THRESHOLD: f64 = 100.0;

/// Fixed response used when the AQI does not warrant an explanation.
pub const ACCEPTABLE_LIMITS_MESSAGE: &str = "Air quality is within acceptable limits.";

/// Errors that can occur during AI operations.
#[derive(Debug, Error)]
pub enum AiError {
    /// HTTP request to the LLM provider failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Provider-specific error.
    #[error("Provider error: {message}")]
    Provider {
        /// Description of what went wrong.
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config {
        /// Description.
        message: String,
    },
}

/// Builds the remediation prompt for a set of pollutant concentrations.
///
/// The wording demands exactly four remediation actions and four
/// responsible industries with no surrounding prose, so the response can
/// be forwarded to clients verbatim.
#[must_use]
pub fn build_explanation_prompt(molecules: &[i32]) -> String {
    format!(
        "Given the following pollutant molecule values: {molecules:?}, list the industries \
         (for example the steel industry) most likely responsible for these values and ways \
         to reduce them. Answer with exactly 8 points and nothing else: 4 ways to reduce \
         them and 4 responsible industries. No extra words or formatting."
    )
}

/// Generates the industry/remediation explanation for a low-AQI station
/// prediction.
///
/// Callers are expected to check [`EXPLANATION_AQI_THRESHOLD`] first; this
/// function always invokes the provider.
///
/// # Errors
///
/// Returns [`AiError`] if the provider call fails. Generation failures are
/// never retried here.
pub async fn explain_industries(
    provider: &dyn LlmProvider,
    molecules: &[i32],
) -> Result<String, AiError> {
    let prompt = build_explanation_prompt(molecules);
    log::debug!("Requesting remediation explanation for molecules {molecules:?}");
    provider.complete(&prompt).await
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedProvider(&'static str);

    #[async_trait::async_trait]
    impl LlmProvider for CannedProvider {
        async fn complete(&self, _prompt: &str) -> Result<String, AiError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn prompt_includes_every_molecule_value() {
        let molecules: Vec<i32> = (1..=12).collect();
        let prompt = build_explanation_prompt(&molecules);
        assert!(prompt.contains("[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]"));
        assert!(prompt.contains("4 ways to reduce"));
        assert!(prompt.contains("4 responsible industries"));
    }

    #[tokio::test]
    async fn explanation_passes_through_provider_output() {
        let provider = CannedProvider("1. steel\n2. cement");
        let answer = explain_industries(&provider, &[1; 12]).await.unwrap();
        assert_eq!(answer, "1. steel\n2. cement");
    }
}
