//! API request and response types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/log-question`
///
/// `question` is kept loose so that a missing or non-string value is
/// reported as an invalid question rather than a deserialization error.
#[derive(Debug, Deserialize)]
pub struct LogQuestionRequest {
    #[serde(default)]
    pub question: Value,
}

/// Successful relay
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerResponse {
    pub success: bool,
    pub answer: String,
}

impl AnswerResponse {
    #[must_use]
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            success: true,
            answer: answer.into(),
        }
    }
}

/// Relay failure, shaped so the view can still show `answer` as a reply
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FallbackResponse {
    pub error: String,
    pub answer: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
