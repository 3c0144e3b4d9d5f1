use std::sync::Arc;

use flume::Sender;

use crate::{event::events::Event, http::ApiService};

pub struct AppContext {
    pub api: Arc<ApiService>,
    pub event_tx: Sender<Event>,
}
