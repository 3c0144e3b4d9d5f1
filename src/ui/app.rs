use std::sync::Arc;

use flume::Receiver;
use ratatui::Frame;

use crate::{
    event::events::Event,
    http::{ApiConfig, ApiService},
    ui::{
        context::AppContext,
        layout::AppLayout,
        state::AppState,
        tui::Tui,
        util::handler::EventHandler,
        views::browse::BrowseView,
    },
    util::task::TaskManager,
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub ctx: AppContext,
    pub state: AppState,
    pub view: BrowseView,
    pub task_manager: TaskManager,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();
        let api = Arc::new(ApiService::new(ApiConfig::from_env())?);

        Ok(Self {
            event_rx,
            ctx: AppContext { api, event_tx },
            state: AppState::default(),
            view: BrowseView::default(),
            task_manager: TaskManager::default(),
            has_focus: true,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.task_manager.abort_all();
        tui.exit()?;
        Ok(())
    }

    fn ui(&mut self, frame: &mut Frame) {
        if self.has_focus {
            let area = frame.area();
            AppLayout::new(self).render(frame, area);
        }
    }
}
