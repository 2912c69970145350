//! Effects produced by state transitions

use super::state::{Speaker, TurnId};

/// Effects to be executed after state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Append a turn to the transcript under the given id
    AppendTurn {
        id: TurnId,
        speaker: Speaker,
        text: String,
    },

    /// Empty the pending input line
    ClearInput,

    /// Send the question to the endpoint
    SendQuestion { question: String },

    /// Start (or restart) the typewriter on this turn
    StartReveal { turn: TurnId },

    /// Input accepts keystrokes again
    EnableInput,

    /// Scroll the transcript to the newest turn
    ScrollToLatest,
}

impl Effect {
    #[must_use]
    pub fn append_user(id: TurnId, text: impl Into<String>) -> Self {
        Effect::AppendTurn {
            id,
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn append_assistant(id: TurnId, text: impl Into<String>) -> Self {
        Effect::AppendTurn {
            id,
            speaker: Speaker::Assistant,
            text: text.into(),
        }
    }
}
