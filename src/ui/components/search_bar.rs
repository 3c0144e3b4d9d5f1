use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::util::colors;

pub struct SearchBar<'a> {
    input: &'a str,
    focused: bool,
}

impl<'a> SearchBar<'a> {
    pub fn new(input: &'a str, focused: bool) -> Self {
        Self { input, focused }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title("Search")
            .border_style(border_style);

        // trailing block cursor while the bar has focus
        let text = if self.focused {
            format!("{}█", self.input)
        } else {
            self.input.to_string()
        };

        Paragraph::new(text)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(block)
            .render(area, buf);
    }
}
