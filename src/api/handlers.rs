//! HTTP request handlers

use super::types::{AnswerResponse, ErrorResponse, FallbackResponse, LogQuestionRequest};
use super::AppState;
use crate::question_log::{format_record, LogError, QuestionSink};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use tokio::task::JoinHandle;

pub const INVALID_QUESTION: &str = "Invalid question";
pub const UPSTREAM_FAILURE: &str = "Failed to process question";
pub const FALLBACK_ANSWER: &str =
    "Sorry, I'm having trouble connecting right now. Please try again later.";

/// Create the API router
#[must_use]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/log-question", post(log_question))
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Question submission
// ============================================================

/// Log the question, relay it, and hand back the answer.
///
/// The log write and the relay fail independently. Only the relay decides
/// the status code; a failed log write is reported in diagnostics only.
async fn log_question(
    State(state): State<AppState>,
    payload: Result<Json<LogQuestionRequest>, JsonRejection>,
) -> Result<Json<AnswerResponse>, AppError> {
    let question = validate_question(payload)?;

    let log_write = spawn_log_write(state.question_log.clone(), &question);
    let relay = state.answers.ask(&question).await;
    finish_log_write(log_write).await;

    match relay {
        Ok(answer) => Ok(Json(AnswerResponse::new(answer))),
        Err(e) => {
            tracing::error!(kind = ?e.kind, error = %e, "Failed to get answer");
            Err(AppError::UpstreamFailure)
        }
    }
}

fn validate_question(
    payload: Result<Json<LogQuestionRequest>, JsonRejection>,
) -> Result<String, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected question body");
        AppError::InvalidInput
    })?;

    match request.question {
        Value::String(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        _ => Err(AppError::InvalidInput),
    }
}

fn spawn_log_write(
    sink: Arc<dyn QuestionSink>,
    question: &str,
) -> JoinHandle<Result<(), LogError>> {
    let record = format_record(question, Utc::now());
    tokio::spawn(async move { sink.append(&record).await })
}

async fn finish_log_write(handle: JoinHandle<Result<(), LogError>>) {
    match handle.await {
        Ok(Ok(())) => tracing::debug!("Question logged"),
        Ok(Err(e)) => tracing::error!(error = %e, "Failed to log question"),
        Err(e) => tracing::error!(error = %e, "Question log task did not complete"),
    }
}

// ============================================================
// Version
// ============================================================

async fn get_version() -> &'static str {
    concat!("tigris-chat ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

enum AppError {
    InvalidInput,
    UpstreamFailure,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidInput => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(INVALID_QUESTION)),
            )
                .into_response(),
            AppError::UpstreamFailure => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FallbackResponse {
                    error: UPSTREAM_FAILURE.to_string(),
                    answer: FALLBACK_ANSWER.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
