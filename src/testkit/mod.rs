//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`api`] - [`ScriptedApi`](api::ScriptedApi), an in-memory
//!   [`ChessApi`](crate::port::ChessApi) with failure injection, latency and
//!   call counting.
//! - [`domain`] - Builders for profiles, stats, games and rosters.

pub mod api;
pub mod domain;
