//! Colors for the dialogue box

use ratatui::style::{Color, Modifier, Style};

/// Gold-on-dark palette of the pixel dialogue box
#[derive(Debug, Clone)]
pub struct DialogueTheme {
    pub gold: Color,
    pub emerald: Color,
    pub muted: Color,
    pub border: Color,
}

impl Default for DialogueTheme {
    fn default() -> Self {
        Self {
            gold: Color::Rgb(255, 215, 0),
            emerald: Color::Rgb(80, 200, 120),
            muted: Color::DarkGray,
            border: Color::Rgb(255, 215, 0),
        }
    }
}

impl DialogueTheme {
    #[must_use]
    pub fn assistant_style(&self) -> Style {
        Style::default().fg(self.gold)
    }

    #[must_use]
    pub fn user_style(&self) -> Style {
        Style::default().fg(self.emerald)
    }

    #[must_use]
    pub fn prompt_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    #[must_use]
    pub fn name_tag_style(&self) -> Style {
        Style::default().fg(self.gold).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn border_style(&self, active: bool) -> Style {
        if active {
            Style::default().fg(self.border)
        } else {
            Style::default().fg(self.muted)
        }
    }
}
