//! Input line widget

use crate::ui::theme::DialogueTheme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub const PLACEHOLDER: &str = "Ask me anything...";

/// Input field widget, dimmed while a reply is pending
pub struct InputWidget<'a> {
    content: &'a str,
    theme: &'a DialogueTheme,
    enabled: bool,
}

impl<'a> InputWidget<'a> {
    #[must_use]
    pub fn new(content: &'a str, theme: &'a DialogueTheme) -> Self {
        Self {
            content,
            theme,
            enabled: true,
        }
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl Widget for InputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(self.theme.border_style(self.enabled));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![Span::styled("> ", self.theme.user_style())];
        if self.content.is_empty() {
            spans.push(Span::styled(
                PLACEHOLDER,
                Style::default().add_modifier(Modifier::DIM),
            ));
        } else {
            spans.push(Span::styled(self.content, self.theme.user_style()));
        }
        if self.enabled {
            spans.push(Span::styled("_", self.theme.user_style()));
        }

        let mut line = Line::from(spans);
        if !self.enabled {
            line = line.style(Style::default().add_modifier(Modifier::DIM));
        }
        Paragraph::new(line).render(inner, buf);
    }
}
