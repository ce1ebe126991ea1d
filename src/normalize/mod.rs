//! Response normalization for Ollama replies
//!
//! Ollama wraps model output in a JSON envelope whose `response` field is
//! the model's own text. In JSON mode that text is a second, independent
//! JSON document (double-encoded JSON is the documented contract), so
//! normalization is an explicit two-stage decode: envelope first, inner
//! document second, with a safe fallback at each stage.
//!
//! Nothing in this module returns an error. An uncooperative model is an
//! expected, frequent case; every parse or validation failure degrades to
//! the canonical empty result instead of surfacing to the caller.

mod envelope;
mod stream;

pub use envelope::normalize_envelope;
pub use stream::concat_stream_fragments;

use serde::{Deserialize, Serialize};

/// The fallback value returned whenever any stage of parsing or
/// validation fails.
pub const EMPTY_QUESTION_SET: &str = r#"{"questions":[]}"#;

/// Which shape the normalizer produces, selected by deployment
/// configuration. Callers must not assume schema uniformity across modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// Single JSON envelope; output is canonical question-set JSON.
    Json,
    /// Legacy newline-delimited fragments; output is `{"response": ...}`.
    Stream,
}

/// A normalized reply, tagged by the mode that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    /// Canonical `{"questions": [...]}` JSON, or the empty fallback.
    Questions(String),
    /// Legacy `{"response": "<concatenated fragments>"}` JSON.
    Concatenated(String),
}

impl Normalized {
    /// The JSON body handed back to the caller.
    pub fn into_body(self) -> String {
        match self {
            Self::Questions(body) => body,
            Self::Concatenated(body) => body,
        }
    }
}

/// Normalize a raw inference reply according to the operating mode.
pub fn normalize(body: &str, mode: ResponseMode) -> Normalized {
    match mode {
        ResponseMode::Json => Normalized::Questions(normalize_envelope(body)),
        ResponseMode::Stream => Normalized::Concatenated(concat_stream_fragments(body)),
    }
}

/// Canonical output contract: exactly 3 questions on success, 0 on any
/// failure, never a partial or malformed list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSet {
    pub questions: Vec<Question>,
}

/// A single exam-style question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub number: u32,
    pub topic: String,
    pub text: String,
}
