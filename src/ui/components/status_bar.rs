use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Paragraph, Widget},
};

use crate::{ui::state::StatusMessage, util::colors};

const KEY_HINTS: &str = " /: search · tab: switch pane · enter: select · ctrl-c: quit";

pub struct StatusBar<'a> {
    message: Option<&'a StatusMessage>,
}

impl<'a> StatusBar<'a> {
    pub fn new(message: Option<&'a StatusMessage>) -> Self {
        Self { message }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (text, style) = match self.message {
            Some(message) if message.is_error => (
                format!(" {}", message.text),
                Style::default().fg(colors::ERROR),
            ),
            Some(message) => (
                format!(" {}", message.text),
                Style::default().fg(colors::ACCENT),
            ),
            None => (
                KEY_HINTS.to_string(),
                Style::default().fg(colors::NEUTRAL),
            ),
        };

        Paragraph::new(text).style(style).render(area, buf);
    }
}
