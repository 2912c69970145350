//! Typewriter reveal of assistant turns
//!
//! One turn at a time is the reveal target. Pointing the reveal at a new
//! turn restarts it from empty; pointing it at the current target again is
//! a no-op, so redrawing never replays. Any turn that is not the target is
//! shown in full.

use super::TurnId;
use std::time::Duration;

/// Delay between revealed characters
pub const REVEAL_CHAR_INTERVAL: Duration = Duration::from_millis(60);

#[derive(Debug, Clone)]
pub struct Reveal {
    interval: Duration,
    target: Option<TurnId>,
    /// Characters (not bytes) currently visible
    shown: usize,
    /// Elapsed time not yet converted into characters
    carry: Duration,
    done: bool,
}

impl Default for Reveal {
    fn default() -> Self {
        Self::new()
    }
}

impl Reveal {
    #[must_use]
    pub fn new() -> Self {
        Self::with_interval(REVEAL_CHAR_INTERVAL)
    }

    #[must_use]
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            target: None,
            shown: 0,
            carry: Duration::ZERO,
            done: false,
        }
    }

    #[must_use]
    pub fn target(&self) -> Option<TurnId> {
        self.target
    }

    /// Point the reveal at `turn`, restarting only if it is a different turn
    pub fn start(&mut self, turn: TurnId) {
        if self.target == Some(turn) {
            return;
        }
        self.target = Some(turn);
        self.shown = 0;
        self.carry = Duration::ZERO;
        self.done = false;
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// True while characters of the target are still hidden
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.target.is_some() && !self.done
    }

    /// Advance by `elapsed` against the target's full text.
    ///
    /// Returns true exactly once: on the call that reveals the last character.
    pub fn advance(&mut self, elapsed: Duration, full_text: &str) -> bool {
        if !self.is_running() {
            return false;
        }

        let total = full_text.chars().count();
        if self.interval.is_zero() {
            self.shown = total;
        } else {
            let pending = self.carry + elapsed;
            let interval_nanos = self.interval.as_nanos();
            let steps = pending.as_nanos() / interval_nanos;
            let remainder = pending.as_nanos() % interval_nanos;
            self.carry = Duration::from_nanos(u64::try_from(remainder).unwrap_or(u64::MAX));
            let steps = usize::try_from(steps).unwrap_or(usize::MAX);
            self.shown = self.shown.saturating_add(steps).min(total);
        }

        if self.shown >= total {
            self.done = true;
            return true;
        }
        false
    }

    /// The part of `text` to draw for `turn`
    #[must_use]
    pub fn visible<'a>(&self, turn: TurnId, text: &'a str) -> &'a str {
        if self.target != Some(turn) || self.done {
            return text;
        }
        match text.char_indices().nth(self.shown) {
            Some((end, _)) => text.get(..end).unwrap_or(text),
            None => text,
        }
    }
}
