//! Remote chess service port.
//!
//! Three public, read-only resources are consumed per identity: the profile,
//! the stats grouped by time class, and the list of games in progress.
//! Implementations classify every failure (transport, status, decode) as a
//! [`FetchError`] for that one identity.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{GameRecord, Identity, PlayerStatus, StatsSnapshot, TimeClass};
use crate::error::FetchError;

/// Raw player profile as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilePayload {
    /// The API URL this profile was read from.
    #[serde(rename = "@id", default)]
    pub api_id: String,
    pub url: String,
    pub username: String,
    pub player_id: u64,
    #[serde(default)]
    pub title: Option<String>,
    pub status: PlayerStatus,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub joined: Option<i64>,
    #[serde(default)]
    pub last_online: Option<i64>,
    #[serde(default)]
    pub followers: Option<u64>,
    #[serde(default)]
    pub is_streamer: bool,
    #[serde(default)]
    pub twitch_url: Option<String>,
    #[serde(default)]
    pub fide: Option<u32>,
}

/// Raw stats body, one optional sub-object per time class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsPayload {
    #[serde(default)]
    pub chess_daily: Option<StatsSnapshot>,
    #[serde(default)]
    pub chess_rapid: Option<StatsSnapshot>,
    #[serde(default)]
    pub chess_blitz: Option<StatsSnapshot>,
    #[serde(default)]
    pub chess_bullet: Option<StatsSnapshot>,
    #[serde(default)]
    pub fide: Option<u32>,
}

impl StatsPayload {
    /// Stats for one time class, if the player has any.
    #[must_use]
    pub fn for_class(&self, class: TimeClass) -> Option<&StatsSnapshot> {
        match class {
            TimeClass::Daily => self.chess_daily.as_ref(),
            TimeClass::Rapid => self.chess_rapid.as_ref(),
            TimeClass::Blitz => self.chess_blitz.as_ref(),
            TimeClass::Bullet => self.chess_bullet.as_ref(),
        }
    }
}

/// Body of the games-in-progress endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GamesPayload {
    #[serde(default)]
    pub games: Vec<GameRecord>,
}

/// Read-only access to the remote chess service.
#[async_trait]
pub trait ChessApi: Send + Sync {
    /// Fetch an identity's profile.
    async fn fetch_profile(&self, identity: &Identity) -> Result<ProfilePayload, FetchError>;

    /// Fetch an identity's stats across all time classes.
    async fn fetch_stats(&self, identity: &Identity) -> Result<StatsPayload, FetchError>;

    /// Fetch the games an identity is currently playing, either side.
    async fn fetch_games(&self, identity: &Identity) -> Result<Vec<GameRecord>, FetchError>;
}
