//! HTTP surface for quizgen
//!
//! Thin axum layer over the generation pipeline. The normalizer swallows
//! model misbehavior, so the only errors that reach HTTP status codes are
//! bad requests and an unreachable inference server.

pub mod handlers;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::config::Settings;
use crate::llm::InferenceProvider;
use crate::QuizgenError;

/// Uploaded PDFs routinely exceed axum's 2 MB default body limit.
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Shared per-process state: one provider, one immutable configuration.
pub struct AppState {
    pub provider: Box<dyn InferenceProvider>,
    pub settings: Settings,
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let ai_router = Router::new()
        .route("/generate", get(handlers::generate))
        .route("/generateFromPdf", post(handlers::generate_from_pdf))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state);

    Router::new()
        .route("/healthz", get(healthz))
        .nest("/api/ai", ai_router)
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Errors surfaced to HTTP callers.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Upstream(String),
    Internal(String),
}

impl From<QuizgenError> for ApiError {
    fn from(err: QuizgenError) -> Self {
        match err {
            QuizgenError::InferenceUnavailable(message) => ApiError::Upstream(message),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Upstream(message) => {
                error!("inference server unavailable: {}", message);
                (
                    StatusCode::BAD_GATEWAY,
                    "Inference server unavailable".to_string(),
                )
            }
            ApiError::Internal(message) => {
                error!("internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}
