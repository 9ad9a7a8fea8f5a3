//! LLM provider abstraction and implementations.
//!
//! Supports Ollama and any `OpenAI`-compatible server via a common trait.

pub mod ollama;
pub mod openai;

use crate::AiError;

/// Trait for LLM providers.
///
/// Single-turn completion is all the prediction path needs; the chatbot
/// builds its multi-turn context into the prompt itself.
#[async_trait::async_trait]
pub trait LlmProvider: Send + Sync {
    /// Sends a prompt and returns the generated text.
    ///
    /// # Errors
    ///
    /// Returns [`AiError`] if the request fails.
    async fn complete(&self, prompt: &str) -> Result<String, AiError>;
}

/// Creates an LLM provider based on environment variables.
///
/// If `AI_PROVIDER` is explicitly set, uses that provider. Otherwise
/// auto-detects from available configuration:
///
/// 1. `OPENAI_API_KEY` set -> `OpenAI`-compatible API
/// 2. anything else -> Ollama (local, no credentials needed)
///
/// # Errors
///
/// Returns [`AiError::Config`] if the explicitly requested provider is
/// unknown or missing its credentials.
pub fn create_provider_from_env() -> Result<Box<dyn LlmProvider>, AiError> {
    let provider = std::env::var("AI_PROVIDER").unwrap_or_else(|_| detect_provider());

    match provider.to_lowercase().as_str() {
        "ollama" => {
            let base_url = std::env::var("OLLAMA_BASE_URL")
                .unwrap_or_else(|_| ollama::DEFAULT_BASE_URL.to_string());
            let model =
                std::env::var("AI_MODEL").unwrap_or_else(|_| ollama::DEFAULT_MODEL.to_string());
            Ok(Box::new(ollama::OllamaProvider::new(base_url, model)))
        }
        "openai" | "gpt" => {
            let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| AiError::Config {
                message: "OPENAI_API_KEY environment variable not set".to_string(),
            })?;
            let model = std::env::var("AI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string());
            Ok(Box::new(openai::OpenAiProvider::new(api_key, model)))
        }
        other => Err(AiError::Config {
            message: format!("Unknown AI provider: {other}. Use 'ollama' or 'openai'."),
        }),
    }
}

/// Auto-detects which provider to use based on available configuration.
///
/// Returns a provider name string that matches the arms in
/// [`create_provider_from_env`].
fn detect_provider() -> String {
    if std::env::var("OPENAI_API_KEY").is_ok() {
        log::info!("Auto-detected AI provider: OpenAI (OPENAI_API_KEY found)");
        return "openai".to_string();
    }

    log::info!("No AI credentials detected; defaulting to local Ollama");
    "ollama".to_string()
}
