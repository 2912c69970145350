//! Conversation view state machine
//!
//! Implements the Elm Architecture pattern: [`transition`] is pure, and
//! [`Conversation`] applies the transcript and input effects it produces,
//! handing the rest (network, reveal, scrolling) back to the caller.

mod effect;
pub mod event;
pub mod reveal;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
pub use reveal::{Reveal, REVEAL_CHAR_INTERVAL};
pub use state::{ConvState, Speaker, Transcript, Turn, TurnId};
pub use transition::{transition, TransitionError, TransitionResult};

pub const WELCOME_TEXT: &str = "Greetings, traveler! It seems you wish to know more about my human. Feel free to ask \u{2014} I shall answer to the best of my ability.";

/// Transcript, pending input and view state, kept consistent together
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    state: ConvState,
    transcript: Transcript,
    pending_input: String,
}

impl Conversation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an assistant greeting that is being revealed
    #[must_use]
    pub fn with_greeting(text: impl Into<String>) -> Self {
        let mut transcript = Transcript::new();
        let target = transcript.push(Speaker::Assistant, text);
        Self {
            state: ConvState::Revealing { target },
            transcript,
            pending_input: String::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &ConvState {
        &self.state
    }

    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    #[must_use]
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    #[must_use]
    pub fn awaiting_reply(&self) -> bool {
        self.state.awaiting_reply()
    }

    #[must_use]
    pub fn reveal_target(&self) -> Option<TurnId> {
        self.state.reveal_target()
    }

    /// Input accepts keystrokes only while idle
    #[must_use]
    pub fn input_enabled(&self) -> bool {
        self.state.is_idle()
    }

    pub fn push_input(&mut self, c: char) {
        if self.input_enabled() {
            self.pending_input.push(c);
        }
    }

    pub fn pop_input(&mut self) {
        if self.input_enabled() {
            self.pending_input.pop();
        }
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        if self.input_enabled() {
            self.pending_input = text.into();
        }
    }

    /// Submit whatever is in the input line
    ///
    /// # Errors
    ///
    /// Whatever [`transition`] rejects the submit with.
    pub fn submit(&mut self) -> Result<Vec<Effect>, TransitionError> {
        let text = self.pending_input.clone();
        self.handle(Event::Submit { text })
    }

    /// Run one event through the state machine.
    ///
    /// On error nothing changes. On success the transcript and input effects
    /// are applied here and the remaining effects are returned in order.
    ///
    /// # Errors
    ///
    /// Whatever [`transition`] rejects the event with.
    pub fn handle(&mut self, event: Event) -> Result<Vec<Effect>, TransitionError> {
        let result = transition(&self.state, self.transcript.next_id(), event)?;
        self.state = result.new_state;

        let mut outgoing = Vec::with_capacity(result.effects.len());
        for effect in result.effects {
            match effect {
                Effect::AppendTurn { id, speaker, text } => {
                    let assigned = self.transcript.push(speaker, text);
                    debug_assert_eq!(assigned, id, "turn id drifted from transcript");
                }
                Effect::ClearInput => self.pending_input.clear(),
                other => outgoing.push(other),
            }
        }
        Ok(outgoing)
    }
}
