//! Blocking client for the question endpoint, used by the terminal view
//!
//! Every outcome becomes text the view can show as an assistant turn:
//! the endpoint's `answer`, or a fallback when there is none.

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

pub const LOG_QUESTION_PATH: &str = "/api/log-question";
pub const CONNECTION_FALLBACK: &str =
    "Sorry, I'm having trouble connecting right now. Please try again later.";
pub const MISSING_ANSWER_FALLBACK: &str = "Sorry, I couldn't get a response right now.";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unreadable reply: {0}")]
    Decode(String),
}

/// Any endpoint reply. Success and the 500 fallback both carry `answer`;
/// the 400 reply does not.
#[derive(Debug, Default, Deserialize)]
pub struct ReplyBody {
    #[serde(default)]
    pub answer: Option<String>,
}

/// Something that turns a question into displayable reply text
pub trait Asker: Send + Sync {
    fn ask(&self, question: &str) -> String;
}

pub struct QuestionClient {
    agent: ureq::Agent,
    endpoint: String,
}

impl QuestionClient {
    #[must_use]
    pub fn new(server_url: &str) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
            endpoint: format!("{}{LOG_QUESTION_PATH}", server_url.trim_end_matches('/')),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post the question and decode whatever comes back, error statuses included
    ///
    /// # Errors
    ///
    /// `Transport` when no HTTP reply arrives, `Decode` when the body is not
    /// JSON of the expected shape.
    pub fn try_ask(&self, question: &str) -> Result<ReplyBody, ClientError> {
        let response = match self
            .agent
            .post(&self.endpoint)
            .send_json(json!({ "question": question }))
        {
            Ok(response) | Err(ureq::Error::Status(_, response)) => response,
            Err(e) => return Err(ClientError::Transport(e.to_string())),
        };

        response
            .into_json::<ReplyBody>()
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

impl Asker for QuestionClient {
    fn ask(&self, question: &str) -> String {
        match self.try_ask(question) {
            Ok(reply) => answer_or_fallback(reply),
            Err(_) => CONNECTION_FALLBACK.to_string(),
        }
    }
}

#[must_use]
pub fn answer_or_fallback(reply: ReplyBody) -> String {
    reply
        .answer
        .filter(|answer| !answer.is_empty())
        .unwrap_or_else(|| MISSING_ANSWER_FALLBACK.to_string())
}
