//! Events that can occur in a conversation

use super::state::TurnId;

/// Events that trigger state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// User pressed send with this input
    Submit { text: String },

    /// The endpoint answered. Fallback messages arrive here too.
    AnswerReceived { answer: String },

    /// The typewriter finished showing this turn
    RevealComplete { turn: TurnId },
}
