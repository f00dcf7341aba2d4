//! Roster and games queries built on the fetch orchestrator.
//!
//! Every query fans out one fetch per identity (and per resource kind) on the
//! calling task and joins them before any normalization or merging runs.
//! A failed identity contributes nothing; its siblings are unaffected.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::join_all;
use tracing::debug;

use super::cache::{Payload, ResourceKind};
use super::games::merge_games;
use super::normalize::normalize;
use super::orchestrator::FetchOrchestrator;
use crate::domain::{GameRecord, Identity, PlayerRecord, Roster, TimeClass};
use crate::error::{Error, Result};
use crate::port::TrackerQueries;

/// Application service answering roster and games queries.
#[derive(Clone)]
pub struct Tracker {
    roster: Roster,
    orchestrator: FetchOrchestrator,
    time_class: TimeClass,
}

impl Tracker {
    #[must_use]
    pub fn new(roster: Roster, orchestrator: FetchOrchestrator, time_class: TimeClass) -> Self {
        Self {
            roster,
            orchestrator,
            time_class,
        }
    }

    /// Profile and stats for one identity, fetched concurrently.
    async fn player(&self, identity: &Identity) -> Option<PlayerRecord> {
        let (profile, stats) = tokio::join!(
            self.orchestrator.fetch(ResourceKind::Profile, identity),
            self.orchestrator.fetch(ResourceKind::Stats, identity),
        );

        let Some(profile) = profile.payload.as_ref().and_then(Payload::as_profile) else {
            debug!(identity = %identity, "no profile available");
            return None;
        };
        let stats = stats.payload.as_ref().and_then(Payload::as_stats);

        Some(normalize(profile, stats.map(Arc::as_ref), self.time_class))
    }
}

#[async_trait]
impl TrackerQueries for Tracker {
    fn roster(&self) -> &Roster {
        &self.roster
    }

    async fn players(&self) -> Vec<Option<PlayerRecord>> {
        let players = join_all(self.roster.iter().map(|id| self.player(id))).await;
        debug!(
            tracked = self.roster.len(),
            available = players.iter().flatten().count(),
            "roster query complete"
        );
        players
    }

    async fn games(&self) -> Vec<GameRecord> {
        let snapshots = join_all(
            self.roster
                .iter()
                .map(|id| self.orchestrator.fetch(ResourceKind::Games, id)),
        )
        .await;

        let lists: Vec<(Identity, Arc<Vec<GameRecord>>)> = snapshots
            .into_iter()
            .filter_map(|snapshot| {
                let games = snapshot.payload.as_ref().and_then(Payload::as_games).cloned()?;
                Some((snapshot.identity, games))
            })
            .collect();

        merge_games(
            &self.roster,
            lists.iter().map(|(id, games)| (id, games.as_slice())),
        )
    }

    async fn games_for(&self, identity: &Identity) -> Result<Vec<GameRecord>> {
        let member = self
            .roster
            .find(identity.as_str())
            .ok_or_else(|| Error::UnknownIdentity(identity.to_string()))?;

        let snapshot = self.orchestrator.fetch(ResourceKind::Games, member).await;
        if let Some(games) = snapshot.payload.as_ref().and_then(Payload::as_games) {
            return Ok(games.to_vec());
        }
        match snapshot.error() {
            Some(err) => Err(err.clone().into()),
            None => Ok(Vec::new()),
        }
    }
}
