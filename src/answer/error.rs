//! Answer service error types

use thiserror::Error;

/// Answer service failure with classification
#[derive(Debug, Error)]
#[error("{message}")]
pub struct AnswerError {
    pub kind: AnswerErrorKind,
    pub message: String,
}

impl AnswerError {
    #[must_use]
    pub fn new(kind: AnswerErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AnswerErrorKind::Network, message)
    }

    #[must_use]
    pub fn server_error(message: impl Into<String>) -> Self {
        Self::new(AnswerErrorKind::ServerError, message)
    }

    #[must_use]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(AnswerErrorKind::InvalidResponse, message)
    }
}

/// Error classification, reported in server diagnostics only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerErrorKind {
    /// Unreachable, connection refused, transport timeout
    Network,
    /// Upstream answered with a non-success status
    ServerError,
    /// Upstream answered 2xx but the body was not `{answer: string}`
    InvalidResponse,
}
