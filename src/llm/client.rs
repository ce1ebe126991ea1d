use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::ollama::OllamaClient;
use crate::{QuizgenError, Result};

/// A single synchronous inference call: one prompt in, the raw response
/// body text out. No retries, no caching.
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Build an inference provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Box<dyn InferenceProvider>> {
    match settings.ollama.provider.to_lowercase().as_str() {
        "ollama" => Ok(Box::new(OllamaClient::from_settings(settings)?)),
        other => Err(QuizgenError::Config(format!(
            "Unsupported ollama.provider '{}'. Supported providers: ollama",
            other
        ))),
    }
}
