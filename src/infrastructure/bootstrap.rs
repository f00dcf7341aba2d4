//! Composition root: config in, ready-to-query tracker out.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::chesscom::ChessComClient;
use crate::application::{FetchOrchestrator, Tracker};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::ChessApi;

/// Build a tracker backed by the given API.
///
/// # Errors
///
/// Returns an error if the configured roster is invalid.
pub fn build_tracker_with(config: &Config, api: Arc<dyn ChessApi>) -> Result<Tracker> {
    let roster = config.roster()?;
    let orchestrator = FetchOrchestrator::new(api, config.cache_ttl());
    info!(
        players = roster.len(),
        ttl_secs = config.cache.ttl_secs,
        time_class = %config.time_class,
        "tracker ready"
    );
    Ok(Tracker::new(roster, orchestrator, config.time_class))
}

/// Build a tracker backed by the chess.com public API.
///
/// # Errors
///
/// Returns an error if the roster or the API base URL is invalid.
pub fn build_tracker(config: &Config) -> Result<Tracker> {
    let client = ChessComClient::from_config(&config.api)?;
    build_tracker_with(config, Arc::new(client))
}
