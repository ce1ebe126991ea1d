//! LLM module for quizgen
//!
//! Builds question-generation prompts and issues inference calls to a
//! locally hosted Ollama server.

mod client;
mod ollama;
mod prompts;

pub use client::{build_provider, InferenceProvider};
pub use ollama::OllamaClient;
pub use prompts::build_question_prompt;

use serde::{Deserialize, Serialize};

/// Response format requested from the model.
///
/// `Json` asks Ollama to constrain decoding to valid JSON; the envelope's
/// `response` field is then itself a JSON-encoded string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    #[default]
    Json,
    Text,
}
