//! Service-agnostic domain types: identities, players, games.

pub mod duration;
pub mod error;
pub mod game;
pub mod id;
pub mod player;
pub mod roster;

pub use error::DomainError;
pub use game::{GameRecord, Side};
pub use id::{GameUrl, Identity};
pub use player::{
    BestRating, GameTally, LastRating, PlayerRecord, PlayerStatus, StatsSnapshot, TimeClass,
};
pub use roster::Roster;
