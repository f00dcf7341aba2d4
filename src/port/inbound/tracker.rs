//! Query surface exposed to presentation collaborators.

use async_trait::async_trait;

use crate::domain::{GameRecord, Identity, PlayerRecord, Roster};
use crate::error::Result;

/// Side-effect-free, re-invocable views over the tracked roster.
///
/// Each call may trigger remote reads for expired cache entries; calling
/// again after the TTL picks up refreshed data.
#[async_trait]
pub trait TrackerQueries: Send + Sync {
    /// The roster the views are built from.
    fn roster(&self) -> &Roster;

    /// One slot per roster identity, in roster order. A slot is `None` when
    /// the identity's profile could not be fetched and nothing is cached.
    async fn players(&self) -> Vec<Option<PlayerRecord>>;

    /// Deduplicated roster-vs-roster games currently in progress.
    async fn games(&self) -> Vec<GameRecord>;

    /// Unfiltered in-progress games for a single roster member.
    ///
    /// # Errors
    ///
    /// Returns an error if the identity is not on the roster, or if the
    /// fetch failed and nothing is cached.
    async fn games_for(&self, identity: &Identity) -> Result<Vec<GameRecord>>;
}
