//! View models derived from normalized records.
//!
//! Default policy, applied here and nowhere else:
//!
//! | Field            | Sort key when absent | Display when absent |
//! |------------------|----------------------|---------------------|
//! | last rating      | `0`                  | `-`                 |
//! | rating deviation | n/a                  | `0`                 |
//! | best rating      | `0`                  | `-` (no date/link)  |
//! | win/loss/draw    | `0`                  | `0`                 |
//! | time per move    | n/a                  | `∞` (also for `0`)  |
//!
//! Time per move deliberately does not follow the zero default used by the
//! other record fields.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::domain::duration::{humanize, GAME_LENGTH, MOVE_TIME};
use crate::domain::{GameRecord, Identity, PlayerRecord, Side};

/// Display placeholder for a missing value.
pub const MISSING: &str = "-";

/// Display sentinel for an unknown average move time.
pub const UNBOUNDED: &str = "∞";

/// Average time per move.
///
/// Serializes as `{"secs": <u64 or null>, "display": <text>}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTime {
    Average(Duration),
    /// No data, or a reported average of zero seconds.
    Unbounded,
}

impl MoveTime {
    #[must_use]
    pub fn from_secs(secs: Option<u64>) -> Self {
        match secs {
            Some(s) if s > 0 => Self::Average(Duration::from_secs(s)),
            _ => Self::Unbounded,
        }
    }
}

impl MoveTime {
    #[must_use]
    pub const fn secs(self) -> Option<u64> {
        match self {
            Self::Average(d) => Some(d.as_secs()),
            Self::Unbounded => None,
        }
    }
}

impl Serialize for MoveTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("MoveTime", 2)?;
        state.serialize_field("secs", &self.secs())?;
        state.serialize_field("display", &self.to_string())?;
        state.end()
    }
}

impl fmt::Display for MoveTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Average(d) => f.write_str(&humanize(*d, MOVE_TIME)),
            Self::Unbounded => f.write_str(UNBOUNDED),
        }
    }
}

/// Sortable, display-ready view of one roster member.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub identity: Identity,
    pub profile_url: String,
    pub title: Option<String>,

    pub rating_key: i32,
    pub best_key: i32,
    pub wins_key: u32,
    pub losses_key: u32,
    pub draws_key: u32,

    /// Last rating, or `-`.
    pub rating: String,
    /// Rating deviation, `0` when unknown.
    pub deviation: i32,
    /// Best rating, or `-`.
    pub best_rating: String,
    /// Short date of the best game, only when the stats carry one.
    pub best_date: Option<String>,
    /// Link to the best game, only alongside `best_date`.
    pub best_game: Option<String>,
    pub move_time: MoveTime,
}

impl PlayerView {
    #[must_use]
    pub fn from_record(record: &PlayerRecord) -> Self {
        let stats = record.stats.as_ref();
        let last = stats.and_then(|s| s.last_rating());
        let best = stats.and_then(|s| s.best_rating());
        let best_date = stats.and_then(|s| s.best_date()).and_then(short_date);
        let best_game = best_date
            .as_ref()
            .map(|_| stats.and_then(|s| s.best_game()).unwrap_or_default().to_string());

        Self {
            identity: record.identity.clone(),
            profile_url: record.url.clone(),
            title: record.title.clone(),
            rating_key: last.unwrap_or(0),
            best_key: best.unwrap_or(0),
            wins_key: stats.and_then(|s| s.wins()).unwrap_or(0),
            losses_key: stats.and_then(|s| s.losses()).unwrap_or(0),
            draws_key: stats.and_then(|s| s.draws()).unwrap_or(0),
            rating: display_or_missing(last),
            deviation: stats.and_then(|s| s.last_rd()).unwrap_or(0),
            best_rating: display_or_missing(best),
            best_date,
            best_game,
            move_time: MoveTime::from_secs(stats.and_then(|s| s.time_per_move())),
        }
    }

    /// `"<rating> (+/- <rd>)"`.
    #[must_use]
    pub fn rating_with_deviation(&self) -> String {
        format!("{} (+/- {})", self.rating, self.deviation)
    }
}

fn display_or_missing(value: Option<i32>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}

/// `M/D/YYYY` for a unix timestamp, in UTC.
fn short_date(timestamp: i64) -> Option<String> {
    if timestamp == 0 {
        return None;
    }
    DateTime::<Utc>::from_timestamp(timestamp, 0).map(|dt| dt.format("%-m/%-d/%Y").to_string())
}

/// Column a roster can be sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RosterSort {
    #[default]
    Rating,
    Best,
    Wins,
    Losses,
    Draws,
    Name,
}

impl FromStr for RosterSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rating" => Ok(Self::Rating),
            "best" | "pb" => Ok(Self::Best),
            "wins" | "w" => Ok(Self::Wins),
            "losses" | "l" => Ok(Self::Losses),
            "draws" | "d" => Ok(Self::Draws),
            "name" => Ok(Self::Name),
            other => Err(format!("unknown sort column '{other}'")),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl RosterSort {
    fn compare(self, a: &PlayerView, b: &PlayerView) -> Ordering {
        match self {
            Self::Rating => a.rating_key.cmp(&b.rating_key),
            Self::Best => a.best_key.cmp(&b.best_key),
            Self::Wins => a.wins_key.cmp(&b.wins_key),
            Self::Losses => a.losses_key.cmp(&b.losses_key),
            Self::Draws => a.draws_key.cmp(&b.draws_key),
            Self::Name => a.identity.key().cmp(&b.identity.key()),
        }
    }
}

/// Stable sort; ties keep their existing (roster) order.
pub fn sort_players(views: &mut [PlayerView], sort: RosterSort, order: SortOrder) {
    views.sort_by(|a, b| match order {
        SortOrder::Ascending => sort.compare(a, b),
        SortOrder::Descending => sort.compare(b, a),
    });
}

/// Project roster slots, dropping absent players, sorted by rating descending.
#[must_use]
pub fn project_roster(slots: &[Option<PlayerRecord>]) -> Vec<PlayerView> {
    let mut views: Vec<PlayerView> = slots
        .iter()
        .flatten()
        .map(PlayerView::from_record)
        .collect();
    sort_players(&mut views, RosterSort::default(), SortOrder::default());
    views
}

/// Display-ready view of one game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameView {
    pub url: String,
    pub white: String,
    pub black: String,
    pub turn: Side,
    /// Handle of the player to move.
    pub to_move: String,
    pub draw_offer: Option<Side>,
    /// Wall-clock time since the game started; `None` without a start time.
    pub elapsed: Option<Duration>,
}

impl GameView {
    /// Project `game` as seen at `now`. Elapsed time is never cached.
    #[must_use]
    pub fn project(game: &GameRecord, now: DateTime<Utc>) -> Self {
        let elapsed = game.start_time.map(|start| {
            let millis = now.timestamp_millis().saturating_sub(start.saturating_mul(1000));
            Duration::from_millis(u64::try_from(millis).unwrap_or(0))
        });

        Self {
            url: game.url.to_string(),
            white: game.player_handle(Side::White),
            black: game.player_handle(Side::Black),
            turn: game.turn,
            to_move: game.to_move(),
            draw_offer: game.draw_offer,
            elapsed,
        }
    }

    /// Humanized game length, or `-` without a start time.
    #[must_use]
    pub fn length(&self) -> String {
        self.elapsed
            .map_or_else(|| MISSING.to_string(), |d| humanize(d, GAME_LENGTH))
    }
}

/// Project every game at the same instant.
#[must_use]
pub fn project_games(games: &[GameRecord], now: DateTime<Utc>) -> Vec<GameView> {
    games.iter().map(|g| GameView::project(g, now)).collect()
}
