//! Conversation state types

/// Identifier of a turn, assigned in increasing order as turns are appended
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TurnId(pub u64);

/// Who authored a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Speaker {
    User,
    Assistant,
}

/// One message in the conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    id: TurnId,
    speaker: Speaker,
    text: String,
}

impl Turn {
    #[must_use]
    pub fn id(&self) -> TurnId {
        self.id
    }

    #[must_use]
    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Append-only ordered sequence of turns
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
    next_id: u64,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier the next appended turn will receive
    #[must_use]
    pub fn next_id(&self) -> TurnId {
        TurnId(self.next_id)
    }

    pub fn push(&mut self, speaker: Speaker, text: impl Into<String>) -> TurnId {
        let id = self.next_id();
        self.turns.push(Turn {
            id,
            speaker,
            text: text.into(),
        });
        self.next_id += 1;
        id
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub fn get(&self, id: TurnId) -> Option<&Turn> {
        // Ids are dense and ordered, so the position is usually the id itself
        let guess = usize::try_from(id.0).ok();
        guess
            .and_then(|i| self.turns.get(i))
            .filter(|turn| turn.id == id)
            .or_else(|| self.turns.iter().find(|turn| turn.id == id))
    }

    #[must_use]
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

/// Where the view is in the submit/reveal cycle
///
/// Only `Idle` accepts input. `Revealing` names the single turn currently
/// being typed out, which is always the most recent assistant turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConvState {
    #[default]
    Idle,
    Submitting,
    Revealing {
        target: TurnId,
    },
}

impl ConvState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, ConvState::Idle)
    }

    /// True while a request is outstanding or a reveal is running
    #[must_use]
    pub fn awaiting_reply(&self) -> bool {
        !self.is_idle()
    }

    #[must_use]
    pub fn reveal_target(&self) -> Option<TurnId> {
        match self {
            ConvState::Revealing { target } => Some(*target),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            ConvState::Idle => "idle",
            ConvState::Submitting => "submitting",
            ConvState::Revealing { .. } => "revealing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_assigns_monotonic_ids() {
        let mut transcript = Transcript::new();
        assert!(transcript.is_empty());
        let a = transcript.push(Speaker::Assistant, "welcome");
        let b = transcript.push(Speaker::User, "hi");
        let c = transcript.push(Speaker::Assistant, "hello");

        assert_eq!((a, b, c), (TurnId(0), TurnId(1), TurnId(2)));
        assert_eq!(transcript.next_id(), TurnId(3));
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.get(b).map(Turn::text), Some("hi"));
        assert_eq!(transcript.last().map(Turn::speaker), Some(Speaker::Assistant));
        assert!(transcript.get(TurnId(9)).is_none());
    }

    #[test]
    fn test_state_flags() {
        assert!(ConvState::Idle.is_idle());
        assert!(!ConvState::Idle.awaiting_reply());
        assert!(ConvState::Submitting.awaiting_reply());
        let revealing = ConvState::Revealing { target: TurnId(4) };
        assert!(revealing.awaiting_reply());
        assert_eq!(revealing.reveal_target(), Some(TurnId(4)));
        assert_eq!(ConvState::Submitting.reveal_target(), None);
    }
}
