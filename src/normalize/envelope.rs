//! Non-streaming JSON mode: envelope in, canonical question-set JSON out.

use serde::Deserialize;
use serde_json::Value;

use super::EMPTY_QUESTION_SET;

/// Outer reply from the inference server. Extra fields (`done`, timing
/// counters, context) are irrelevant here and ignored.
#[derive(Debug, Deserialize)]
struct InferenceEnvelope {
    response: String,
}

/// Extract, repair, validate, and re-serialize the model's question set.
///
/// Stages, each falling back to [`EMPTY_QUESTION_SET`] on failure:
/// 1. decode the envelope and take its `response` text,
/// 2. strip code fences the model wrapped around its output despite
///    instructions not to,
/// 3. decode that text as a second JSON document,
/// 4. check it is an object with a `questions` array.
///
/// The surviving value is re-serialized so the caller always gets
/// syntactically valid, canonically formatted JSON no matter how the
/// model spaced or ordered its output.
pub fn normalize_envelope(body: &str) -> String {
    if body.trim().is_empty() {
        return EMPTY_QUESTION_SET.to_string();
    }

    let envelope: InferenceEnvelope = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(_) => return EMPTY_QUESTION_SET.to_string(),
    };

    let inner = strip_code_fences(&envelope.response);

    let value: Value = match serde_json::from_str(inner) {
        Ok(value) => value,
        Err(_) => return EMPTY_QUESTION_SET.to_string(),
    };

    if !value.get("questions").map_or(false, Value::is_array) {
        return EMPTY_QUESTION_SET.to_string();
    }

    serde_json::to_string(&value).unwrap_or_else(|_| EMPTY_QUESTION_SET.to_string())
}

/// Strip a leading code-fence marker (optionally tagged `json`) and a
/// trailing one, if present.
fn strip_code_fences(s: &str) -> &str {
    let s = s.trim();
    let s = s
        .strip_prefix("```json")
        .or_else(|| s.strip_prefix("```"))
        .unwrap_or(s);
    let s = s.strip_suffix("```").unwrap_or(s);
    s.trim()
}
