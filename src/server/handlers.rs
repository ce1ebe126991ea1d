//! Request handlers: accept topic/file input, run the generation
//! pipeline, hand back raw JSON bodies.

use std::sync::Arc;

use axum::extract::{Multipart, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::warn;

use crate::config::Settings;
use crate::llm::{build_question_prompt, InferenceProvider};
use crate::normalize::normalize;
use crate::server::{ApiError, AppState};
use crate::source::extract_pdf_text;

/// Body returned when an uploaded document cannot be read.
pub const PDF_FAILURE_BODY: &str = r#"{"questions":[],"error":"Failed to read PDF"}"#;

#[derive(Debug, Deserialize)]
pub struct GenerateParams {
    pub topic: String,
}

/// Run the full generation pipeline: prompt, one inference call,
/// normalization.
///
/// Malformed model output degrades to the empty question set inside the
/// normalizer; the only error that propagates is an unreachable
/// inference server.
pub async fn generate_question_set(
    provider: &dyn InferenceProvider,
    settings: &Settings,
    topic: &str,
    source_text: Option<&str>,
) -> crate::Result<String> {
    let prompt = build_question_prompt(
        topic,
        source_text,
        settings.generation.max_source_chars,
    );

    let raw = provider.generate(&prompt).await?;

    Ok(normalize(&raw, settings.ollama.response_mode()).into_body())
}

/// Generate questions from an uploaded PDF's text.
///
/// An unreadable document degrades to [`PDF_FAILURE_BODY`] without
/// touching the inference server; only transport errors from a readable
/// document's generation call propagate.
pub async fn generate_from_uploaded_pdf(
    provider: &dyn InferenceProvider,
    settings: &Settings,
    topic: &str,
    file: &[u8],
) -> crate::Result<String> {
    let source_text = match extract_pdf_text(file) {
        Ok(text) => text,
        Err(e) => {
            warn!("PDF extraction failed: {}", e);
            return Ok(PDF_FAILURE_BODY.to_string());
        }
    };

    generate_question_set(provider, settings, topic, Some(&source_text)).await
}

/// `GET /api/ai/generate?topic=...`
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GenerateParams>,
) -> Result<Response, ApiError> {
    let topic = params.topic.trim();
    if topic.is_empty() {
        return Err(ApiError::BadRequest("topic must not be empty".to_string()));
    }

    let body =
        generate_question_set(state.provider.as_ref(), &state.settings, topic, None).await?;

    Ok(json_body(body))
}

/// `POST /api/ai/generateFromPdf` (multipart: `file`, `topic`)
pub async fn generate_from_pdf(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut topic: Option<String> = None;
    let mut file: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("invalid multipart body: {}", e)))?
    {
        let name = field.name().map(|n| n.to_string());
        match name.as_deref() {
            Some("topic") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("invalid topic field: {}", e)))?;
                topic = Some(text);
            }
            Some("file") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("invalid file field: {}", e)))?;
                file = Some(bytes.to_vec());
            }
            _ => {}
        }
    }

    let topic = topic
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::BadRequest("topic must not be empty".to_string()))?;

    let file = file.ok_or_else(|| ApiError::BadRequest("file field is required".to_string()))?;

    let body =
        generate_from_uploaded_pdf(state.provider.as_ref(), &state.settings, &topic, &file)
            .await?;

    Ok(json_body(body))
}

/// The pipeline produces already-serialized JSON; send it through as-is.
fn json_body(body: String) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_failure_body_is_valid_json() {
        let value: serde_json::Value = serde_json::from_str(PDF_FAILURE_BODY).unwrap();
        assert_eq!(value["questions"], serde_json::json!([]));
        assert_eq!(value["error"], "Failed to read PDF");
    }
}
