//! chess.com public API client.
//!
//! Three read-only resources per player, all JSON over GET:
//! - `{base}/player/{handle}` profile
//! - `{base}/player/{handle}/stats` ratings and records per time class
//! - `{base}/player/{handle}/games` games currently in progress
//!
//! Handles are sent lowercased; the service treats them case-insensitively.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use tokio::time::sleep;
use tracing::{debug, warn};
use url::Url;

use super::settings::ApiConfig;
use crate::domain::{GameRecord, Identity};
use crate::error::{FetchError, Result};
use crate::port::{ChessApi, GamesPayload, ProfilePayload, StatsPayload};

/// HTTP client for the chess.com public API.
pub struct ChessComClient {
    http: HttpClient,
    base_url: Url,
    retry_max_attempts: u32,
    retry_backoff_ms: u64,
}

impl ChessComClient {
    /// Create a client with default HTTP settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(),
            base_url: Url::parse(base_url)?,
            retry_max_attempts: 1,
            retry_backoff_ms: 0,
        })
    }

    /// Create a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL does not parse.
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Ok(Self {
            http,
            base_url,
            retry_max_attempts: config.retry_max_attempts,
            retry_backoff_ms: config.retry_backoff_ms,
        })
    }

    /// `{base}/player/{handle}[/{resource}]`.
    fn player_url(&self, identity: &Identity, resource: Option<&str>) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                FetchError::Transport(format!("base URL cannot be a base: {}", self.base_url))
            })?;
            segments.pop_if_empty().push("player").push(&identity.key());
            if let Some(resource) = resource {
                segments.push(resource);
            }
        }
        Ok(url)
    }

    async fn get_json<T>(&self, url: Url) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        let mut attempt = 0;
        let max_attempts = self.retry_max_attempts.max(1);

        loop {
            attempt += 1;
            let response = match self.http.get(url.clone()).send().await {
                Ok(response) => response,
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                    continue;
                }
            };

            let body = response.error_for_status()?.bytes().await?;
            debug!(url = %url, bytes = body.len(), "read response");
            return Ok(serde_json::from_slice(&body)?);
        }
    }

    fn should_retry(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect()
    }

    async fn backoff(&self, attempt: u32, max_attempts: u32, err: &reqwest::Error) {
        warn!(
            attempt,
            max_attempts,
            error = %err,
            "HTTP request failed, retrying"
        );
        if self.retry_backoff_ms > 0 {
            sleep(Duration::from_millis(self.retry_backoff_ms)).await;
        }
    }
}

#[async_trait]
impl ChessApi for ChessComClient {
    async fn fetch_profile(&self, identity: &Identity) -> Result<ProfilePayload, FetchError> {
        let url = self.player_url(identity, None)?;
        self.get_json(url).await
    }

    async fn fetch_stats(&self, identity: &Identity) -> Result<StatsPayload, FetchError> {
        let url = self.player_url(identity, Some("stats"))?;
        self.get_json(url).await
    }

    async fn fetch_games(&self, identity: &Identity) -> Result<Vec<GameRecord>, FetchError> {
        let url = self.player_url(identity, Some("games"))?;
        let payload: GamesPayload = self.get_json(url).await?;
        Ok(payload.games)
    }
}
