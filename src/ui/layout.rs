use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::border,
    widgets::{Block, Borders},
};

use crate::{
    ui::{app::App, components::status_bar::StatusBar},
    util::colors,
};

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);

        let content_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::NEUTRAL))
            .title("soundalike")
            .title_alignment(Alignment::Center);
        let content_area = content_block.inner(chunks[0]);
        f.render_widget(content_block, chunks[0]);

        let app = self.app;
        app.view.render(f, content_area, &app.state);

        f.render_widget(StatusBar::new(app.state.ui.status.as_ref()), chunks[1]);
    }
}
