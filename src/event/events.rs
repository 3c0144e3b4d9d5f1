use crate::model::{RelatedResult, SongResult};

#[derive(Debug, Clone)]
pub enum Event {
    // Commands
    Quit,
    Search(String),
    SongActivated(usize),
    RelatedActivated(usize),

    // Fetch completions
    SearchLoaded {
        query: String,
        songs: Vec<SongResult>,
    },
    SearchFailed {
        query: String,
        message: String,
    },
    SimilarLoaded {
        request_id: u64,
        songs: Vec<RelatedResult>,
    },
    SimilarFailed {
        request_id: u64,
        message: String,
    },
}
