use crate::http::models::{WireSimilar, WireSong};

#[derive(Debug, Clone, PartialEq)]
pub struct SongResult {
    pub id: i64,
    pub raw_name: String,
    pub artist: String,
    pub title: String,
}

impl SongResult {
    pub fn new(id: i64, raw_name: String) -> Self {
        let (artist, title) = split_artist_title(&raw_name);
        Self {
            id,
            raw_name,
            artist,
            title,
        }
    }
}

impl From<WireSong> for SongResult {
    fn from(wire: WireSong) -> Self {
        Self::new(wire.id, wire.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RelatedResult {
    pub id: i64,
    pub index_id: i64,
    pub artist: String,
    pub title: String,
    pub lyrics: String,
    pub artist_url: String,
    pub song_url: String,
    pub similarity: f32,
}

impl From<WireSimilar> for RelatedResult {
    fn from(wire: WireSimilar) -> Self {
        Self {
            id: wire.id,
            index_id: wire.index_id,
            artist: title_case(wire.artist_name.trim()),
            title: title_case(wire.song_name.trim()),
            lyrics: wire.lyrics,
            artist_url: wire.artist_url,
            song_url: wire.song_url,
            similarity: wire.percentage,
        }
    }
}

/// Splits a raw `"artist - title"` name at the first `-`. A name with no
/// separator yields an empty artist and the whole name as title.
pub fn split_artist_title(raw: &str) -> (String, String) {
    match raw.split_once('-') {
        Some((artist, title)) => (title_case(artist.trim()), title_case(title.trim())),
        None => (String::new(), title_case(raw.trim())),
    }
}

pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for ch in input.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{split_artist_title, title_case, SongResult};

    #[test]
    fn title_case_lowers_then_capitalizes_each_word() {
        assert_eq!(title_case("blue monday"), "Blue Monday");
        assert_eq!(title_case("BLUE MONDAY"), "Blue Monday");
        assert_eq!(title_case("bLuE"), "Blue");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn splits_on_first_separator() {
        let (artist, title) = split_artist_title("new order - blue monday");
        assert_eq!(artist, "New Order");
        assert_eq!(title, "Blue Monday");
    }

    #[test]
    fn multiple_separators_split_at_the_first() {
        let (artist, title) = split_artist_title("AC - DC - Thunderstruck");
        assert_eq!(artist, "Ac");
        assert_eq!(title, "Dc - Thunderstruck");
    }

    #[test]
    fn missing_separator_keeps_whole_name_as_title() {
        let (artist, title) = split_artist_title("Intermezzo");
        assert_eq!(artist, "");
        assert_eq!(title, "Intermezzo");
    }

    #[test]
    fn song_result_derives_fields_once() {
        let song = SongResult::new(9214, " new order - blue monday ".to_string());
        assert_eq!(song.id, 9214);
        assert_eq!(song.raw_name, " new order - blue monday ");
        assert_eq!(song.artist, "New Order");
        assert_eq!(song.title, "Blue Monday");
    }
}
