pub mod error;
pub mod models;

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
    http::{
        error::ApiError,
        models::{SearchEnvelope, SimilarityEnvelope},
    },
    model::{RelatedResult, SongResult},
};

pub const DEFAULT_BASE_URL: &str = "https://searchly.asuarez.dev/api/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ApiConfig {
    /// Reads `SEARCHLY_BASE_URL` and `SEARCHLY_TIMEOUT_SECS`, falling back to
    /// the defaults on unset or unparseable values.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("SEARCHLY_BASE_URL") {
            match Url::parse(&base_url) {
                Ok(_) => config.base_url = base_url.trim_end_matches('/').to_string(),
                Err(err) => {
                    warn!("ignoring invalid SEARCHLY_BASE_URL {base_url:?}: {err}");
                }
            }
        }

        if let Ok(secs) = std::env::var("SEARCHLY_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => warn!("ignoring invalid SEARCHLY_TIMEOUT_SECS {secs:?}"),
            }
        }

        config
    }
}

pub struct ApiService {
    client: Client,
    base_url: String,
}

impl ApiService {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        Url::parse(&config.base_url).map_err(|err| ApiError::Config(err.to_string()))?;
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| ApiError::Config(err.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Keyword search. The query is forwarded as-is, even when empty; zero
    /// matches is an `Ok` with an empty list.
    pub async fn search(&self, query: &str) -> Result<Vec<SongResult>, ApiError> {
        debug!("searching for {query:?}");
        let envelope: SearchEnvelope = self
            .get(&format!("{}/song/search", self.base_url), &[("query", query)])
            .await?;
        if envelope.error {
            return Err(ApiError::Api);
        }

        Ok(envelope
            .response
            .results
            .into_iter()
            .map(SongResult::from)
            .collect())
    }

    /// Songs similar to a previously-seen song id.
    pub async fn similar(&self, song_id: i64) -> Result<Vec<RelatedResult>, ApiError> {
        debug!("fetching songs similar to {song_id}");
        let envelope: SimilarityEnvelope = self
            .get(
                &format!("{}/similarity/by_song", self.base_url),
                &[("song_id", &song_id.to_string())],
            )
            .await?;
        if envelope.error {
            return Err(ApiError::Api);
        }

        Ok(envelope
            .response
            .similarity_list
            .into_iter()
            .map(RelatedResult::from)
            .collect())
    }

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let response = self.client.get(url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiConfig, ApiService, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

    #[test]
    fn default_config_points_at_searchly() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn service_rejects_unparseable_base_url() {
        let config = ApiConfig {
            base_url: "not a url".to_string(),
            ..ApiConfig::default()
        };
        assert!(ApiService::new(config).is_err());
    }
}
