//! HTTP answer service: `POST {base}/chat` with `{question}` -> `{answer}`

use super::{AnswerError, AnswerService};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    question: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    answer: String,
}

/// Answer service reached over HTTP
///
/// No retries and no timeout beyond the transport defaults.
pub struct HttpAnswerService {
    client: Client,
    chat_url: String,
}

impl HttpAnswerService {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            chat_url: format!("{}/chat", base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl AnswerService for HttpAnswerService {
    async fn ask(&self, question: &str) -> Result<String, AnswerError> {
        let response = self
            .client
            .post(&self.chat_url)
            .json(&ChatRequest { question })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AnswerError::network(format!("Request timeout: {e}"))
                } else if e.is_connect() {
                    AnswerError::network(format!("Connection failed: {e}"))
                } else {
                    AnswerError::network(format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AnswerError::network(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(AnswerError::server_error(format!(
                "Answer service returned {status}: {body}"
            )));
        }

        let parsed: ChatResponse = serde_json::from_str(&body).map_err(|e| {
            AnswerError::invalid_response(format!("Failed to parse response: {e} - body: {body}"))
        })?;

        Ok(parsed.answer)
    }

    fn endpoint(&self) -> &str {
        &self.chat_url
    }
}
