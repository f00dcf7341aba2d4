//! Outbound adapters (driven side).

pub mod chesscom;
