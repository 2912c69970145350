//! HTTP API for the question endpoint

mod handlers;
#[cfg(test)]
pub mod testing;
mod types;

pub use handlers::{create_router, FALLBACK_ANSWER, INVALID_QUESTION, UPSTREAM_FAILURE};
pub use types::{AnswerResponse, ErrorResponse, FallbackResponse, LogQuestionRequest};

use crate::answer::AnswerService;
use crate::question_log::QuestionSink;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub answers: Arc<dyn AnswerService>,
    pub question_log: Arc<dyn QuestionSink>,
}

impl AppState {
    #[must_use]
    pub fn new(answers: Arc<dyn AnswerService>, question_log: Arc<dyn QuestionSink>) -> Self {
        Self {
            answers,
            question_log,
        }
    }
}
