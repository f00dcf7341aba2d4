//! chess.com public API integration.

pub mod client;
pub mod settings;

pub use client::ChessComClient;
pub use settings::ApiConfig;
