use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchEnvelope {
    pub error: bool,
    pub response: SearchResponse,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<WireSong>,
}

#[derive(Debug, Deserialize)]
pub struct WireSong {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SimilarityEnvelope {
    pub error: bool,
    pub response: SimilarityResponse,
}

#[derive(Debug, Default, Deserialize)]
pub struct SimilarityResponse {
    #[serde(default)]
    pub similarity_list: Vec<WireSimilar>,
}

#[derive(Debug, Deserialize)]
pub struct WireSimilar {
    #[serde(rename = "ID")]
    pub id: i64,
    pub artist_name: String,
    pub song_name: String,
    #[serde(default)]
    pub lyrics: String,
    #[serde(default)]
    pub artist_url: String,
    #[serde(default)]
    pub song_url: String,
    pub index_id: i64,
    pub percentage: f32,
}

#[cfg(test)]
mod tests {
    use super::{SearchEnvelope, SimilarityEnvelope};

    #[test]
    fn decodes_search_payload() {
        let body = r#"{
            "error": false,
            "response": {
                "results": [
                    {"id": 9214, "name": "new order - blue monday"},
                    {"id": 881, "name": "eiffel 65 - blue"}
                ]
            }
        }"#;

        let envelope: SearchEnvelope = serde_json::from_str(body).unwrap();
        assert!(!envelope.error);
        assert_eq!(envelope.response.results.len(), 2);
        assert_eq!(envelope.response.results[0].id, 9214);
        assert_eq!(envelope.response.results[1].name, "eiffel 65 - blue");
    }

    #[test]
    fn decodes_empty_search_payload() {
        let body = r#"{"error": false, "response": {"results": []}}"#;
        let envelope: SearchEnvelope = serde_json::from_str(body).unwrap();
        assert!(envelope.response.results.is_empty());

        // a response object with the list omitted entirely is still valid
        let body = r#"{"error": false, "response": {}}"#;
        let envelope: SearchEnvelope = serde_json::from_str(body).unwrap();
        assert!(envelope.response.results.is_empty());
    }

    #[test]
    fn decodes_similarity_payload() {
        let body = r#"{
            "error": false,
            "response": {
                "similarity_list": [
                    {
                        "ID": 42,
                        "artist_name": "orgy",
                        "song_name": "blue monday",
                        "lyrics": "how does it feel",
                        "artist_url": "https://example.com/orgy",
                        "song_url": "https://example.com/orgy/blue-monday",
                        "index_id": 7,
                        "percentage": 87.5
                    }
                ]
            }
        }"#;

        let envelope: SimilarityEnvelope = serde_json::from_str(body).unwrap();
        assert!(!envelope.error);
        let similar = &envelope.response.similarity_list[0];
        assert_eq!(similar.id, 42);
        assert_eq!(similar.index_id, 7);
        assert_eq!(similar.artist_name, "orgy");
        assert!((similar.percentage - 87.5).abs() < f32::EPSILON);
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        assert!(serde_json::from_str::<SearchEnvelope>("not json").is_err());
        assert!(serde_json::from_str::<SimilarityEnvelope>(r#"{"error": false}"#).is_err());
    }

    #[test]
    fn error_flag_is_carried_through() {
        let body = r#"{"error": true, "response": {"results": []}}"#;
        let envelope: SearchEnvelope = serde_json::from_str(body).unwrap();
        assert!(envelope.error);
    }
}
