//! Terminal dialogue box
//!
//! [`ChatApp`] owns the conversation and its reveal, turns keys and ticks
//! into state machine events, and carries out the effects that come back.
//! Questions are asked on a worker thread; replies come back over a channel
//! and are picked up by [`ChatApp::poll_replies`].

pub mod input;
pub mod theme;
pub mod transcript;

use crate::client::Asker;
use crate::conversation::{Conversation, Effect, Event, Reveal, WELCOME_TEXT};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use input::InputWidget;
use ratatui::{
    layout::{Constraint, Layout},
    text::Span,
    widgets::{Block, Borders, Padding},
    Frame,
};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;
use theme::DialogueTheme;
use transcript::TranscriptWidget;

pub const NAME_TAG: &str = " \u{2726} Tigris Umbra ";

/// Lines moved per `PageUp` / `PageDown`
const SCROLL_STEP: usize = 3;

/// Whether the main loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct ChatApp {
    conversation: Conversation,
    reveal: Reveal,
    theme: DialogueTheme,
    asker: Arc<dyn Asker>,
    reply_tx: Sender<String>,
    reply_rx: Receiver<String>,
    offset_from_bottom: usize,
}

impl ChatApp {
    #[must_use]
    pub fn new(asker: Arc<dyn Asker>) -> Self {
        Self::with_reveal(asker, Reveal::new())
    }

    #[must_use]
    pub fn with_reveal(asker: Arc<dyn Asker>, mut reveal: Reveal) -> Self {
        let conversation = Conversation::with_greeting(WELCOME_TEXT);
        if let Some(turn) = conversation.reveal_target() {
            reveal.start(turn);
        }
        let (reply_tx, reply_rx) = mpsc::channel();
        Self {
            conversation,
            reveal,
            theme: DialogueTheme::default(),
            asker,
            reply_tx,
            reply_rx,
            offset_from_bottom: 0,
        }
    }

    #[must_use]
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    #[must_use]
    pub fn reveal(&self) -> &Reveal {
        &self.reveal
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Control {
        match key.code {
            KeyCode::Esc => return Control::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Control::Quit
            }
            KeyCode::Enter => {
                // Rejected submits (blank input, reply pending) are no-ops
                if let Ok(effects) = self.conversation.submit() {
                    self.apply(effects);
                }
            }
            KeyCode::Backspace => self.conversation.pop_input(),
            KeyCode::Char(c) => self.conversation.push_input(c),
            KeyCode::PageUp => {
                self.offset_from_bottom = self.offset_from_bottom.saturating_add(SCROLL_STEP);
            }
            KeyCode::PageDown => {
                self.offset_from_bottom = self.offset_from_bottom.saturating_sub(SCROLL_STEP);
            }
            _ => {}
        }
        Control::Continue
    }

    /// Feed any replies that arrived since the last call into the state machine
    pub fn poll_replies(&mut self) {
        while let Ok(answer) = self.reply_rx.try_recv() {
            match self.conversation.handle(Event::AnswerReceived { answer }) {
                Ok(effects) => self.apply(effects),
                Err(e) => tracing::warn!(error = %e, "Dropped reply"),
            }
        }
    }

    /// Advance the typewriter by `elapsed`
    pub fn on_tick(&mut self, elapsed: Duration) {
        let Some(turn) = self.reveal.target() else {
            return;
        };
        let Some(text) = self.conversation.transcript().get(turn).map(|t| t.text().to_string())
        else {
            return;
        };
        if self.reveal.advance(elapsed, &text) {
            if let Ok(effects) = self.conversation.handle(Event::RevealComplete { turn }) {
                self.apply(effects);
            }
        }
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SendQuestion { question } => self.send(question),
                Effect::StartReveal { turn } => self.reveal.start(turn),
                Effect::ScrollToLatest => self.offset_from_bottom = 0,
                Effect::EnableInput | Effect::AppendTurn { .. } | Effect::ClearInput => {}
            }
        }
    }

    fn send(&self, question: String) {
        let asker = self.asker.clone();
        let reply_tx = self.reply_tx.clone();
        std::thread::spawn(move || {
            let answer = asker.ask(&question);
            if let Err(e) = reply_tx.send(answer) {
                tracing::debug!(error = %e, "Reply arrived after the view closed");
            }
        });
    }

    pub fn draw(&self, frame: &mut Frame) {
        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true))
            .title(Span::styled(NAME_TAG, self.theme.name_tag_style()))
            .padding(Padding::horizontal(1));
        let inner = outer.inner(frame.area());
        frame.render_widget(outer, frame.area());

        let [transcript_area, input_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).areas(inner);

        frame.render_widget(
            TranscriptWidget::new(self.conversation.transcript(), &self.reveal, &self.theme)
                .offset_from_bottom(self.offset_from_bottom),
            transcript_area,
        );
        frame.render_widget(
            InputWidget::new(self.conversation.pending_input(), &self.theme)
                .enabled(self.conversation.input_enabled()),
            input_area,
        );
    }
}
