use std::sync::Mutex;

use async_trait::async_trait;

use quizgen::llm::InferenceProvider;
use quizgen::{QuizgenError, Result};

/// Inference provider that replays a canned reply and records the prompts
/// it was given. Stands in for the Ollama server in pipeline tests.
pub struct StubProvider {
    reply: std::result::Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl StubProvider {
    pub fn replying(body: &str) -> Self {
        Self {
            reply: Ok(body.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn unavailable(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    #[allow(dead_code)]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompt log poisoned").clone()
    }
}

#[async_trait]
impl InferenceProvider for StubProvider {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts
            .lock()
            .expect("prompt log poisoned")
            .push(prompt.to_string());

        match &self.reply {
            Ok(body) => Ok(body.clone()),
            Err(message) => Err(QuizgenError::InferenceUnavailable(message.clone())),
        }
    }
}
