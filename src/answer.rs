//! Answer service abstraction
//!
//! The answer service is an external collaborator that turns a question
//! into a reply. The endpoint only ever sees it through [`AnswerService`].

mod error;
mod http;

pub use error::{AnswerError, AnswerErrorKind};
pub use http::HttpAnswerService;

use async_trait::async_trait;
use std::sync::Arc;

/// Common interface for answer providers
#[async_trait]
pub trait AnswerService: Send + Sync {
    /// Ask one question. At most one upstream call per invocation.
    ///
    /// # Errors
    ///
    /// An [`AnswerError`] classifying why no answer came back.
    async fn ask(&self, question: &str) -> Result<String, AnswerError>;

    /// Where requests go, for diagnostics
    fn endpoint(&self) -> &str;
}

/// Logging wrapper for answer services
pub struct LoggingService {
    inner: Arc<dyn AnswerService>,
    endpoint: String,
}

impl LoggingService {
    #[must_use]
    pub fn new(inner: Arc<dyn AnswerService>) -> Self {
        let endpoint = inner.endpoint().to_string();
        Self { inner, endpoint }
    }
}

#[async_trait]
impl AnswerService for LoggingService {
    async fn ask(&self, question: &str) -> Result<String, AnswerError> {
        let start = std::time::Instant::now();
        let result = self.inner.ask(question).await;
        let duration = start.elapsed();

        match &result {
            Ok(answer) => {
                tracing::info!(
                    endpoint = %self.endpoint,
                    duration_ms = %duration.as_millis(),
                    question_chars = question.chars().count(),
                    answer_chars = answer.chars().count(),
                    "Answer service request completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    endpoint = %self.endpoint,
                    duration_ms = %duration.as_millis(),
                    kind = ?e.kind,
                    error = %e.message,
                    "Answer service request failed"
                );
            }
        }

        result
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
