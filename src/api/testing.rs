//! Mock implementations for endpoint tests

use crate::answer::{AnswerError, AnswerService};
use crate::question_log::{LogError, QuestionSink};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

// ============================================================================
// Mock Answer Service
// ============================================================================

/// Answer service that returns queued results in order
pub struct MockAnswerService {
    responses: Mutex<VecDeque<Result<String, AnswerError>>>,
    questions: Mutex<Vec<String>>,
}

impl MockAnswerService {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            questions: Mutex::new(Vec::new()),
        }
    }

    pub fn queue_answer(&self, answer: impl Into<String>) {
        self.responses.lock().unwrap().push_back(Ok(answer.into()));
    }

    pub fn queue_error(&self, error: AnswerError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Every question this service was asked, in order
    pub fn recorded_questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnswerService for MockAnswerService {
    async fn ask(&self, question: &str) -> Result<String, AnswerError> {
        self.questions.lock().unwrap().push(question.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AnswerError::network("No mock answer queued")))
    }

    fn endpoint(&self) -> &str {
        "mock://answers/chat"
    }
}

// ============================================================================
// Question sinks
// ============================================================================

/// In-memory question log
pub struct MemoryQuestionLog {
    records: Mutex<Vec<String>>,
}

impl MemoryQuestionLog {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn records(&self) -> Vec<String> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuestionSink for MemoryQuestionLog {
    async fn append(&self, record: &str) -> Result<(), LogError> {
        self.records.lock().unwrap().push(record.to_string());
        Ok(())
    }
}

/// Question log whose disk is always full
pub struct FailingQuestionLog;

#[async_trait]
impl QuestionSink for FailingQuestionLog {
    async fn append(&self, _record: &str) -> Result<(), LogError> {
        Err(LogError {
            path: "questions.txt".into(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "no space left on device"),
        })
    }
}
