//! Player records and rating statistics.
//!
//! Every statistic is optional. Absence means the player has no data for the
//! tracked time class; it is never collapsed to zero here. Defaults used for
//! sorting and display live in [`crate::application::projection`].

use serde::{Deserialize, Serialize};

use super::id::Identity;

/// Account status reported by the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerStatus {
    #[serde(rename = "closed")]
    Closed,
    #[serde(rename = "closed:fair_play_violations")]
    ClosedFairPlay,
    #[serde(rename = "basic")]
    Basic,
    #[serde(rename = "premium")]
    Premium,
    #[serde(rename = "mod")]
    Mod,
    #[serde(rename = "staff")]
    Staff,
    /// Any status outside the documented set.
    #[serde(other)]
    Unknown,
}

impl PlayerStatus {
    /// Whether the account has been closed for any reason.
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Closed | Self::ClosedFairPlay)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::ClosedFairPlay => "closed:fair_play_violations",
            Self::Basic => "basic",
            Self::Premium => "premium",
            Self::Mod => "mod",
            Self::Staff => "staff",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rating pool a stats snapshot belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeClass {
    #[default]
    Daily,
    Rapid,
    Blitz,
    Bullet,
}

impl TimeClass {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Rapid => "rapid",
            Self::Blitz => "blitz",
            Self::Bullet => "bullet",
        }
    }
}

impl std::fmt::Display for TimeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Most recent rating and its Glicko deviation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LastRating {
    /// Timestamp of the last rated game finished.
    pub date: Option<i64>,
    pub rating: Option<i32>,
    /// Glicko "RD", roughly the rating's standard deviation.
    pub rd: Option<i32>,
}

/// Best rating ever reached through a win.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BestRating {
    /// Timestamp of the best-win game.
    pub date: Option<i64>,
    pub rating: Option<i32>,
    /// URL of the best-win game.
    pub game: Option<String>,
}

/// Lifetime results for the time class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameTally {
    pub win: Option<u32>,
    pub loss: Option<u32>,
    pub draw: Option<u32>,
    /// Average seconds per move.
    pub time_per_move: Option<u64>,
    /// Timeout percentage over the last 90 days.
    pub timeout_percent: Option<f64>,
}

/// Rating statistics for one time class, as observed at fetch time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub last: Option<LastRating>,
    pub best: Option<BestRating>,
    pub record: Option<GameTally>,
}

impl StatsSnapshot {
    #[must_use]
    pub fn last_rating(&self) -> Option<i32> {
        self.last.as_ref().and_then(|l| l.rating)
    }

    #[must_use]
    pub fn last_rd(&self) -> Option<i32> {
        self.last.as_ref().and_then(|l| l.rd)
    }

    #[must_use]
    pub fn best_rating(&self) -> Option<i32> {
        self.best.as_ref().and_then(|b| b.rating)
    }

    #[must_use]
    pub fn best_date(&self) -> Option<i64> {
        self.best.as_ref().and_then(|b| b.date)
    }

    #[must_use]
    pub fn best_game(&self) -> Option<&str> {
        self.best.as_ref().and_then(|b| b.game.as_deref())
    }

    #[must_use]
    pub fn wins(&self) -> Option<u32> {
        self.record.as_ref().and_then(|r| r.win)
    }

    #[must_use]
    pub fn losses(&self) -> Option<u32> {
        self.record.as_ref().and_then(|r| r.loss)
    }

    #[must_use]
    pub fn draws(&self) -> Option<u32> {
        self.record.as_ref().and_then(|r| r.draw)
    }

    #[must_use]
    pub fn time_per_move(&self) -> Option<u64> {
        self.record.as_ref().and_then(|r| r.time_per_move)
    }
}

/// A roster member's profile merged with their stats.
///
/// Created fresh from each successful fetch and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub identity: Identity,
    /// Profile page URL (shows the handle in its original case).
    pub url: String,
    /// Stable numeric id; survives handle changes.
    pub player_id: u64,
    pub name: Option<String>,
    pub status: PlayerStatus,
    pub title: Option<String>,
    pub avatar: Option<String>,
    pub location: Option<String>,
    /// API URL of the player's country profile.
    pub country: Option<String>,
    pub joined: Option<i64>,
    pub last_online: Option<i64>,
    pub followers: Option<u64>,
    pub is_streamer: bool,
    pub twitch_url: Option<String>,
    pub fide: Option<u32>,
    /// Omitted when the stats fetch failed or returned nothing for the class.
    pub stats: Option<StatsSnapshot>,
}
