//! quizgen - A lightweight backend relay that turns topics and uploaded
//! documents into exam-style questions using a local Ollama server
//!
//! The interesting part lives in [`normalize`]: Ollama wraps the model's
//! output in a JSON envelope, and the model's own output is a second JSON
//! document nested inside that envelope as text. Everything downstream of
//! the model is best-effort and degrades to an empty question set instead
//! of failing.

pub mod config;
pub mod llm;
pub mod normalize;
pub mod server;
pub mod source;

use thiserror::Error;

/// Main error type for quizgen
#[derive(Error, Debug)]
pub enum QuizgenError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Inference server unavailable: {0}")]
    InferenceUnavailable(String),

    #[error("Source extraction error: {0}")]
    SourceExtraction(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, QuizgenError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "quizgen";
