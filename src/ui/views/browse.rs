use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    event::events::Event,
    model::{RelatedResult, SongResult},
    ui::{
        components::{search_bar::SearchBar, spinner::Spinner},
        context::AppContext,
        state::AppState,
        util::truncate_to_width,
    },
    util::colors,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    SearchBar,
    Results,
    Similar,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::SearchBar => Focus::Results,
            Focus::Results => Focus::Similar,
            Focus::Similar => Focus::SearchBar,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::SearchBar => Focus::Similar,
            Focus::Results => Focus::SearchBar,
            Focus::Similar => Focus::Results,
        }
    }
}

/// The single screen: search input on top, the primary result list and the
/// related-songs sublist side by side underneath.
pub struct BrowseView {
    input: String,
    focus: Focus,
    results_state: ListState,
    similar_state: ListState,
    // inner (borderless) areas from the last frame, for mouse hit-testing
    input_area: Rect,
    results_area: Rect,
    similar_area: Rect,
}

impl Default for BrowseView {
    fn default() -> Self {
        Self {
            input: String::new(),
            focus: Focus::SearchBar,
            results_state: ListState::default(),
            similar_state: ListState::default(),
            input_area: Rect::default(),
            results_area: Rect::default(),
            similar_area: Rect::default(),
        }
    }
}

impl BrowseView {
    pub fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        self.input_area = chunks[0];
        f.render_widget(
            SearchBar::new(&self.input, self.focus == Focus::SearchBar),
            chunks[0],
        );

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);

        self.render_results(f, panes[0], state);
        self.render_similar(f, panes[1], state);
    }

    fn render_results(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        let focused = self.focus == Focus::Results;
        let block = pane_block("Results", focused);
        self.results_area = block.inner(area);

        if state.ui.is_searching && state.data.results.is_empty() {
            f.render_widget(block, area);
            let spinner = Spinner::default()
                .with_style(Style::default().fg(colors::PRIMARY))
                .with_label("Searching...");
            f.render_widget(spinner, self.results_area);
            return;
        }

        clamp_cursor(&mut self.results_state, state.data.results.len());

        let committed = state.data.results.selected();
        let width = self.results_area.width as usize;
        let items: Vec<ListItem> = state
            .data
            .results
            .iter()
            .enumerate()
            .map(|(i, song)| song_row(song, committed == Some(i), width))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(cursor_style(focused))
            .highlight_symbol("> ");

        f.render_stateful_widget(list, area, &mut self.results_state);
    }

    fn render_similar(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        let focused = self.focus == Focus::Similar;
        let title = if state.ui.is_loading_similar {
            "Similar (loading...)"
        } else {
            "Similar"
        };
        let block = pane_block(title, focused);
        self.similar_area = block.inner(area);

        if state.ui.is_loading_similar && state.data.similar.is_empty() {
            f.render_widget(block, area);
            let spinner = Spinner::default()
                .with_style(Style::default().fg(colors::ACCENT))
                .with_label("Fetching similar songs...");
            f.render_widget(spinner, self.similar_area);
            return;
        }

        clamp_cursor(&mut self.similar_state, state.data.similar.len());

        let committed = state.data.similar.selected();
        let width = self.similar_area.width as usize;
        let items: Vec<ListItem> = state
            .data
            .similar
            .iter()
            .enumerate()
            .map(|(i, related)| related_row(related, committed == Some(i), width))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(cursor_style(focused))
            .highlight_symbol("> ");

        f.render_stateful_widget(list, area, &mut self.similar_state);
    }

    pub fn handle_key(&mut self, key: KeyEvent, state: &AppState, ctx: &AppContext) {
        if self.focus == Focus::SearchBar {
            match key.code {
                KeyCode::Enter => {
                    let _ = ctx.event_tx.send(Event::Search(self.input.clone()));
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.input.push(c);
                }
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Esc => self.focus = Focus::Results,
                KeyCode::Tab => self.focus = self.focus.next(),
                KeyCode::BackTab => self.focus = self.focus.prev(),
                _ => {}
            }
            return;
        }

        let len = match self.focus {
            Focus::Results => state.data.results.len(),
            _ => state.data.similar.len(),
        };

        match key.code {
            KeyCode::Char('q') => {
                let _ = ctx.event_tx.send(Event::Quit);
            }
            KeyCode::Char('/') => self.focus = Focus::SearchBar,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, len),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, len),
            KeyCode::Enter => {
                let cursor = self.cursor_state().selected();
                if let Some(index) = cursor {
                    let _ = ctx.event_tx.send(match self.focus {
                        Focus::Results => Event::SongActivated(index),
                        _ => Event::RelatedActivated(index),
                    });
                }
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, state: &AppState, ctx: &AppContext) {
        let position = Position::new(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.input_area.contains(position) {
                    self.focus = Focus::SearchBar;
                } else if self.results_area.contains(position) {
                    self.focus = Focus::Results;
                    let index =
                        self.results_state.offset() + (mouse.row - self.results_area.y) as usize;
                    if index < state.data.results.len() {
                        self.results_state.select(Some(index));
                        let _ = ctx.event_tx.send(Event::SongActivated(index));
                    }
                } else if self.similar_area.contains(position) {
                    self.focus = Focus::Similar;
                    let index =
                        self.similar_state.offset() + (mouse.row - self.similar_area.y) as usize;
                    if index < state.data.similar.len() {
                        self.similar_state.select(Some(index));
                        let _ = ctx.event_tx.send(Event::RelatedActivated(index));
                    }
                }
            }
            MouseEventKind::ScrollDown if self.results_area.contains(position) => {
                self.focus = Focus::Results;
                self.move_cursor(1, state.data.results.len());
            }
            MouseEventKind::ScrollUp if self.results_area.contains(position) => {
                self.focus = Focus::Results;
                self.move_cursor(-1, state.data.results.len());
            }
            MouseEventKind::ScrollDown if self.similar_area.contains(position) => {
                self.focus = Focus::Similar;
                self.move_cursor(1, state.data.similar.len());
            }
            MouseEventKind::ScrollUp if self.similar_area.contains(position) => {
                self.focus = Focus::Similar;
                self.move_cursor(-1, state.data.similar.len());
            }
            _ => {}
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        if self.focus == Focus::SearchBar {
            self.input
                .extend(text.chars().filter(|c| !c.is_control()));
        }
    }

    fn cursor_state(&mut self) -> &mut ListState {
        match self.focus {
            Focus::Similar => &mut self.similar_state,
            _ => &mut self.results_state,
        }
    }

    fn move_cursor(&mut self, delta: isize, len: usize) {
        if len == 0 {
            return;
        }
        let state = self.cursor_state();
        let current = state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        state.select(Some(next));
    }
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Style::default().fg(colors::PRIMARY)
    } else {
        Style::default().fg(colors::NEUTRAL)
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style)
}

fn cursor_style(focused: bool) -> Style {
    if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    }
}

fn clamp_cursor(state: &mut ListState, len: usize) {
    match state.selected() {
        _ if len == 0 => state.select(None),
        None => state.select(Some(0)),
        Some(i) if i >= len => state.select(Some(len - 1)),
        Some(_) => {}
    }
}

// Selected rows carry a colored bar the height of the row; the two panes use
// different bar glyphs and colors.
fn song_row(song: &SongResult, committed: bool, width: usize) -> ListItem<'static> {
    let (bar, style) = if committed {
        (
            Span::styled("▌ ", Style::default().fg(colors::PRIMARY)),
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (Span::raw("  "), Style::default())
    };

    let title = truncate_to_width(&song.title, width.saturating_sub(4));
    ListItem::new(Line::from(vec![bar, Span::styled(title, style)]))
}

fn related_row(related: &RelatedResult, committed: bool, width: usize) -> ListItem<'static> {
    let (bar, style) = if committed {
        (
            Span::styled("▎ ", Style::default().fg(colors::ACCENT)),
            Style::default()
                .fg(colors::ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (Span::raw("  "), Style::default())
    };

    let percent = format!("{:>5.1}%", related.similarity);
    let label = if related.artist.is_empty() {
        related.title.clone()
    } else {
        format!("{} - {}", related.title, related.artist)
    };
    let avail = width.saturating_sub(4 + percent.len() + 1);
    let label = truncate_to_width(&label, avail);
    let padding = avail.saturating_sub(label.width()) + 1;

    ListItem::new(Line::from(vec![
        bar,
        Span::styled(label, style),
        Span::raw(" ".repeat(padding)),
        Span::styled(percent, Style::default().fg(colors::NEUTRAL)),
    ]))
}
