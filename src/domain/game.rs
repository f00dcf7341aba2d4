//! In-progress game records.

use serde::{Deserialize, Serialize};

use super::id::{handle_from_url, GameUrl};

/// A side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::White => write!(f, "white"),
            Self::Black => write!(f, "black"),
        }
    }
}

/// A daily game as reported in a participant's in-progress list.
///
/// The URL is the game's global identity. A newer copy of the same game
/// replaces an older one wholesale; fields are never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Profile URL of the white player.
    pub white: String,
    /// Profile URL of the black player.
    pub black: String,
    pub url: GameUrl,
    #[serde(default)]
    pub fen: String,
    #[serde(default)]
    pub pgn: String,
    pub turn: Side,
    /// Deadline for the next move; `0` while the player to move is on vacation.
    #[serde(default)]
    pub move_by: i64,
    #[serde(default)]
    pub draw_offer: Option<Side>,
    #[serde(default)]
    pub last_activity: i64,
    #[serde(default)]
    pub start_time: Option<i64>,
    #[serde(default)]
    pub time_control: String,
    #[serde(default)]
    pub time_class: String,
    #[serde(default)]
    pub rules: String,
    #[serde(default)]
    pub tournament: Option<String>,
    #[serde(default, rename = "match")]
    pub team_match: Option<String>,
}

impl GameRecord {
    /// Profile URL of the player on `side`.
    #[must_use]
    pub fn player_url(&self, side: Side) -> &str {
        match side {
            Side::White => &self.white,
            Side::Black => &self.black,
        }
    }

    /// Handle of the player on `side`, taken from their profile URL.
    #[must_use]
    pub fn player_handle(&self, side: Side) -> String {
        let url = self.player_url(side);
        handle_from_url(url).unwrap_or_else(|| url.to_string())
    }

    /// Handle of the player whose move it is.
    #[must_use]
    pub fn to_move(&self) -> String {
        self.player_handle(self.turn)
    }
}
