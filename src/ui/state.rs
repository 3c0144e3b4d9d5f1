use crate::model::{RelatedResult, ResultList, SongResult};

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub data: AppData,
    pub ui: UiState,
}

#[derive(Debug, Clone, Default)]
pub struct AppData {
    pub results: ResultList<SongResult>,
    pub similar: ResultList<RelatedResult>,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub status: Option<StatusMessage>,
    pub is_searching: bool,
    pub is_loading_similar: bool,
    similar_request_seq: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

impl AppData {
    /// A completed search replaces the primary list wholesale; the related
    /// list from the previous selection no longer applies.
    pub fn apply_search(&mut self, songs: Vec<SongResult>) {
        self.results.replace(songs);
        self.similar.clear();
    }

    /// Commits the primary selection and yields the song id a similar fetch
    /// should be issued for. Out-of-bounds rows change nothing.
    pub fn activate_song(&mut self, index: usize) -> Option<i64> {
        let id = self.results.get(index).map(|song| song.id)?;
        self.results.select(index);
        Some(id)
    }

    pub fn apply_similar(&mut self, songs: Vec<RelatedResult>) {
        self.similar.replace(songs);
    }

    pub fn activate_related(&mut self, index: usize) {
        self.similar.select(index);
    }
}

impl AppState {
    /// Issues a fresh similar-fetch id; any earlier in-flight reply becomes
    /// stale.
    pub fn begin_similar_request(&mut self) -> u64 {
        self.ui.similar_request_seq += 1;
        self.ui.is_loading_similar = true;
        self.ui.similar_request_seq
    }

    /// Replies are applied only when they carry the latest issued id.
    pub fn accepts_similar_reply(&self, request_id: u64) -> bool {
        request_id == self.ui.similar_request_seq
    }
}

#[cfg(test)]
mod tests {
    use super::AppState;
    use crate::model::{RelatedResult, SongResult};

    fn search_results() -> Vec<SongResult> {
        vec![
            SongResult::new(9214, "new order - blue monday".to_string()),
            SongResult::new(881, "eiffel 65 - blue".to_string()),
        ]
    }

    fn similar_songs(n: usize) -> Vec<RelatedResult> {
        (0..n)
            .map(|i| RelatedResult {
                id: i as i64,
                index_id: i as i64,
                artist: format!("Artist {i}"),
                title: format!("Title {i}"),
                lyrics: String::new(),
                artist_url: String::new(),
                song_url: String::new(),
                similarity: 90.0 - i as f32,
            })
            .collect()
    }

    #[test]
    fn search_then_activation_fills_the_sublist() {
        let mut state = AppState::default();

        state.data.apply_search(search_results());
        assert_eq!(state.data.results.len(), 2);
        assert_eq!(state.data.results.selected(), None);

        let song_id = state.data.activate_song(0);
        assert_eq!(song_id, Some(9214));
        assert_eq!(state.data.results.selected(), Some(0));

        let request_id = state.begin_similar_request();
        assert!(state.accepts_similar_reply(request_id));

        state.data.apply_similar(similar_songs(3));
        assert_eq!(state.data.similar.len(), 3);
        assert_eq!(state.data.similar.selected(), None);
    }

    #[test]
    fn empty_search_replaces_the_primary_list() {
        let mut state = AppState::default();
        state.data.apply_search(search_results());
        state.data.activate_song(1);
        state.data.apply_similar(similar_songs(2));

        state.data.apply_search(Vec::new());
        assert!(state.data.results.is_empty());
        assert_eq!(state.data.results.selected(), None);
        assert!(state.data.similar.is_empty());
    }

    #[test]
    fn failed_similar_fetch_leaves_selection_committed() {
        let mut state = AppState::default();
        state.data.apply_search(search_results());
        state.data.activate_song(0);
        state.data.apply_similar(similar_songs(3));

        // a later activation whose fetch fails: selection moves, the sublist
        // keeps its previous contents
        let song_id = state.data.activate_song(1);
        assert_eq!(song_id, Some(881));
        state.begin_similar_request();

        assert_eq!(state.data.results.selected(), Some(1));
        assert_eq!(state.data.similar.len(), 3);
    }

    #[test]
    fn activating_out_of_bounds_row_issues_no_fetch() {
        let mut state = AppState::default();
        state.data.apply_search(search_results());

        assert_eq!(state.data.activate_song(2), None);
        assert_eq!(state.data.results.selected(), None);
    }

    #[test]
    fn related_activation_is_selection_only_and_idempotent() {
        let mut state = AppState::default();
        state.data.apply_search(search_results());
        state.data.activate_song(0);
        state.data.apply_similar(similar_songs(3));

        state.data.activate_related(2);
        let before = state.data.clone();
        state.data.activate_related(2);

        assert_eq!(state.data.similar.selected(), Some(2));
        assert_eq!(state.data.similar.len(), before.similar.len());
        assert_eq!(state.data.results.selected(), before.results.selected());
    }

    #[test]
    fn stale_similar_replies_are_rejected() {
        let mut state = AppState::default();
        state.data.apply_search(search_results());

        state.data.activate_song(0);
        let first = state.begin_similar_request();
        state.data.activate_song(0);
        let second = state.begin_similar_request();

        assert!(!state.accepts_similar_reply(first));
        assert!(state.accepts_similar_reply(second));
        assert_ne!(first, second);
    }

    #[test]
    fn reactivating_the_selected_song_issues_a_new_request() {
        let mut state = AppState::default();
        state.data.apply_search(search_results());

        assert_eq!(state.data.activate_song(0), Some(9214));
        let first = state.begin_similar_request();
        assert_eq!(state.data.activate_song(0), Some(9214));
        let second = state.begin_similar_request();

        assert_ne!(first, second);
    }
}
