//! Pure state transition function
//!
//! Idle --submit--> Submitting --answer--> Revealing --reveal done--> Idle

use super::{ConvState, Effect, Event, TurnId};
use thiserror::Error;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: ConvState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    #[must_use]
    pub fn new(state: ConvState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Errors that can occur during transition. Callers treat all of them as
/// a no-op: state and transcript stay as they were.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Still waiting on the previous reply")]
    Busy,
    #[error("Nothing to send")]
    EmptyInput,
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}

/// Pure transition function
///
/// `next_turn` is the id the transcript will hand to the next appended
/// turn, so effects can name the turns they create.
///
/// # Errors
///
/// `Busy` for a submit while a reply is pending or revealing, `EmptyInput`
/// for a blank submit, and `InvalidTransition` for an event the current
/// state does not accept.
pub fn transition(
    state: &ConvState,
    next_turn: TurnId,
    event: Event,
) -> Result<TransitionResult, TransitionError> {
    match (state, event) {
        // Idle + Submit -> Submitting, user turn is shown before the reply arrives
        (ConvState::Idle, Event::Submit { text }) => {
            let question = text.trim();
            if question.is_empty() {
                return Err(TransitionError::EmptyInput);
            }
            Ok(TransitionResult::new(ConvState::Submitting)
                .with_effect(Effect::append_user(next_turn, question))
                .with_effect(Effect::ClearInput)
                .with_effect(Effect::ScrollToLatest)
                .with_effect(Effect::SendQuestion {
                    question: question.to_string(),
                }))
        }

        (ConvState::Submitting | ConvState::Revealing { .. }, Event::Submit { .. }) => {
            Err(TransitionError::Busy)
        }

        // Submitting + Answer -> Revealing the new assistant turn
        (ConvState::Submitting, Event::AnswerReceived { answer }) => {
            Ok(TransitionResult::new(ConvState::Revealing { target: next_turn })
                .with_effect(Effect::append_assistant(next_turn, answer))
                .with_effect(Effect::ScrollToLatest)
                .with_effect(Effect::StartReveal { turn: next_turn }))
        }

        // Revealing + done for the current target -> Idle
        (ConvState::Revealing { target }, Event::RevealComplete { turn }) if *target == turn => {
            Ok(TransitionResult::new(ConvState::Idle).with_effect(Effect::EnableInput))
        }

        (state, event) => Err(TransitionError::InvalidTransition(format!(
            "{event:?} while {}",
            state.name()
        ))),
    }
}
