//! Lesschess - leaderboard and live games for a roster of chess.com players.
//!
//! A fixed roster of player handles is tracked against the chess.com public
//! API. For every member the crate fetches a profile, per-time-class stats and
//! the games currently in progress, caches each for a short window, and
//! serves two views: a ranked roster and the games the members are playing
//! against each other.
//!
//! # Architecture
//!
//! - [`domain`] - Roster, identities, player and game records
//! - [`port`] - `ChessApi` (outbound) and `TrackerQueries` (inbound) traits
//! - [`application`] - Fetch orchestrator with its snapshot cache,
//!   normalization, game merging, view projection and the `Tracker`
//! - [`adapter`] - chess.com HTTP client and the CLI
//! - [`infrastructure`] - Configuration, logging and wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use lesschess::infrastructure::bootstrap::build_tracker;
//! use lesschess::infrastructure::config::settings::Config;
//! use lesschess::port::TrackerQueries;
//!
//! # async fn demo() -> lesschess::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let tracker = build_tracker(&config)?;
//! for game in tracker.games().await {
//!     println!("{}", game.url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
