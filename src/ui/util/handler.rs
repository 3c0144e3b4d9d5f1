use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, warn};

use crate::{
    event::events::Event,
    ui::{
        app::App,
        state::StatusMessage,
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<()> {
        if let Some(evt) = tui.next().await {
            Self::handle_terminal_event(app, evt, tui)?;
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt);
        }

        Ok(())
    }

    fn handle_terminal_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<()> {
        match evt {
            TerminalEvent::Tick | TerminalEvent::Resize(_, _) => {}
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
            TerminalEvent::Mouse(mouse) => {
                let App { view, state, ctx, .. } = app;
                view.handle_mouse(mouse, state, ctx);
            }
            TerminalEvent::Paste(text) => app.view.handle_paste(&text),
        }

        Ok(())
    }

    fn handle_key_event(app: &mut App, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            app.should_quit = true;
            return;
        }

        let App { view, state, ctx, .. } = app;
        view.handle_key(key, state, ctx);
    }

    /// Applies an application event to state, spawning fetch tasks for
    /// commands. Fetch failures become status messages; they never stop the
    /// loop.
    pub fn handle_action(app: &mut App, evt: Event) {
        match evt {
            Event::Quit => app.should_quit = true,
            Event::Search(query) => {
                info!("search submitted: {query:?}");
                app.state.ui.is_searching = true;
                app.state.ui.status = None;

                let api = app.ctx.api.clone();
                let tx = app.ctx.event_tx.clone();
                app.task_manager.spawn(
                    "search",
                    tokio::spawn(async move {
                        match api.search(&query).await {
                            Ok(songs) => {
                                let _ = tx.send(Event::SearchLoaded { query, songs });
                            }
                            Err(err) => {
                                let _ = tx.send(Event::SearchFailed {
                                    query,
                                    message: err.to_string(),
                                });
                            }
                        }
                    }),
                );
            }
            Event::SongActivated(index) => {
                // selection commits even if the fetch below fails
                let Some(song_id) = app.state.data.activate_song(index) else {
                    return;
                };
                let request_id = app.state.begin_similar_request();

                let api = app.ctx.api.clone();
                let tx = app.ctx.event_tx.clone();
                app.task_manager.spawn(
                    "similar_fetch",
                    tokio::spawn(async move {
                        match api.similar(song_id).await {
                            Ok(songs) => {
                                let _ = tx.send(Event::SimilarLoaded { request_id, songs });
                            }
                            Err(err) => {
                                let _ = tx.send(Event::SimilarFailed {
                                    request_id,
                                    message: err.to_string(),
                                });
                            }
                        }
                    }),
                );
            }
            Event::RelatedActivated(index) => {
                app.state.data.activate_related(index);
            }
            Event::SearchLoaded { query, songs } => {
                app.state.ui.is_searching = false;
                app.state.ui.status = Some(if songs.is_empty() {
                    StatusMessage::info(format!("\"{query}\" not found in the database"))
                } else {
                    StatusMessage::info(format!("found {} song(s)", songs.len()))
                });
                app.state.data.apply_search(songs);
            }
            Event::SearchFailed { query, message } => {
                warn!("search for {query:?} failed: {message}");
                app.state.ui.is_searching = false;
                app.state.ui.status = Some(StatusMessage::error(format!("search failed: {message}")));
            }
            Event::SimilarLoaded { request_id, songs } => {
                if !app.state.accepts_similar_reply(request_id) {
                    debug!("dropping stale similar reply {request_id}");
                    return;
                }
                app.state.ui.is_loading_similar = false;
                if songs.is_empty() {
                    app.state.ui.status =
                        Some(StatusMessage::info("no similar songs in the database"));
                }
                app.state.data.apply_similar(songs);
            }
            Event::SimilarFailed { request_id, message } => {
                if !app.state.accepts_similar_reply(request_id) {
                    debug!("dropping stale similar failure {request_id}");
                    return;
                }
                warn!("similar fetch failed: {message}");
                app.state.ui.is_loading_similar = false;
                app.state.ui.status =
                    Some(StatusMessage::error(format!("similar fetch failed: {message}")));
            }
        }
    }
}
