//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   ┌──────────────┐      ┌─────────────────────┐      ┌──────────────┐
//!   │ CLI adapter  │ ───▶ │ Application         │ ───▶ │ chess.com    │
//!   │ (inbound)    │      │ Tracker/Orchestrator│      │ HTTP adapter │
//!   └──────────────┘      └─────────────────────┘      └──────────────┘
//!      TrackerQueries                                     ChessApi
//! ```

pub mod inbound;
pub mod outbound;

pub use inbound::tracker::TrackerQueries;
pub use outbound::chess_api::{ChessApi, GamesPayload, ProfilePayload, StatsPayload};
