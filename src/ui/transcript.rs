//! Transcript widget

use crate::conversation::{Reveal, Speaker, Transcript};
use crate::ui::theme::DialogueTheme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

const USER_PREFIX: &str = "> ";
const CURSOR: &str = "\u{258c}";

/// Renders every turn, newest at the bottom
pub struct TranscriptWidget<'a> {
    transcript: &'a Transcript,
    reveal: &'a Reveal,
    theme: &'a DialogueTheme,
    /// Lines scrolled up from the newest one
    offset_from_bottom: usize,
}

impl<'a> TranscriptWidget<'a> {
    #[must_use]
    pub fn new(transcript: &'a Transcript, reveal: &'a Reveal, theme: &'a DialogueTheme) -> Self {
        Self {
            transcript,
            reveal,
            theme,
            offset_from_bottom: 0,
        }
    }

    #[must_use]
    pub fn offset_from_bottom(mut self, offset: usize) -> Self {
        self.offset_from_bottom = offset;
        self
    }

    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for turn in self.transcript.turns() {
            match turn.speaker() {
                Speaker::User => {
                    let text = format!("{USER_PREFIX}{}", turn.text());
                    for (i, row) in wrap_to_width(&text, width).into_iter().enumerate() {
                        let line = match row.strip_prefix(USER_PREFIX) {
                            Some(rest) if i == 0 => Line::from(vec![
                                Span::styled(USER_PREFIX, self.theme.prompt_style()),
                                Span::styled(rest.to_string(), self.theme.user_style()),
                            ]),
                            _ => Line::from(Span::styled(row, self.theme.user_style())),
                        };
                        lines.push(line);
                    }
                }
                Speaker::Assistant => {
                    let mut shown = self.reveal.visible(turn.id(), turn.text()).to_string();
                    if self.reveal.target() == Some(turn.id()) && self.reveal.is_running() {
                        shown.push_str(CURSOR);
                    }
                    for row in wrap_to_width(&shown, width) {
                        lines.push(Line::from(Span::styled(row, self.theme.assistant_style())));
                    }
                }
            }
        }
        lines
    }
}

impl Widget for TranscriptWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines(usize::from(area.width));
        let visible = usize::from(area.height);
        let max_scroll = lines.len().saturating_sub(visible);
        let scroll = max_scroll.saturating_sub(self.offset_from_bottom);

        Paragraph::new(lines)
            .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
            .render(area, buf);
    }
}

/// Hard-wrap `text` into rows at most `width` terminal columns wide.
///
/// Wide characters (CJK, most emoji) take two columns. A character wider
/// than the whole row gets a row of its own. Line breaks in the text are
/// kept, and an empty text still takes one row so a turn that has not
/// started revealing holds its place.
#[must_use]
pub fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let mut row = String::new();
        let mut used = 0;
        for c in line.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width && !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                used = 0;
            }
            row.push(c);
            used += w;
        }
        rows.push(row);
    }
    rows
}
