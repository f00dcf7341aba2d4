//! Scripted [`ChessApi`] double.
//!
//! Responses are keyed by (resource kind, lowercased handle). Unscripted
//! reads fail with HTTP 404, which is what the real service returns for an
//! unknown player. Every call is counted, including failed ones, so tests can
//! assert how many remote reads actually happened.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::application::cache::ResourceKind;
use crate::domain::{GameRecord, Identity};
use crate::error::FetchError;
use crate::port::{ChessApi, ProfilePayload, StatsPayload};

type Key = (ResourceKind, String);

fn key(kind: ResourceKind, handle: &str) -> Key {
    (kind, handle.to_ascii_lowercase())
}

#[derive(Default)]
struct Script {
    profiles: HashMap<String, ProfilePayload>,
    stats: HashMap<String, StatsPayload>,
    games: HashMap<String, Vec<GameRecord>>,
    failures: HashMap<Key, FetchError>,
    delays: HashMap<Key, Duration>,
    calls: HashMap<Key, usize>,
}

/// In-memory chess service with failure injection and latency.
#[derive(Default)]
pub struct ScriptedApi {
    script: Mutex<Script>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `profile` for its own username.
    pub fn with_profile(self, profile: ProfilePayload) -> Self {
        self.set_profile(profile);
        self
    }

    pub fn with_stats(self, handle: &str, stats: StatsPayload) -> Self {
        self.set_stats(handle, stats);
        self
    }

    pub fn with_games(self, handle: &str, games: Vec<GameRecord>) -> Self {
        self.set_games(handle, games);
        self
    }

    /// Fail every read of `kind` for `handle` with `err`.
    pub fn fail(self, kind: ResourceKind, handle: &str, err: FetchError) -> Self {
        self.set_failure(kind, handle, err);
        self
    }

    /// Delay every read of `kind` for `handle`.
    pub fn with_delay(self, kind: ResourceKind, handle: &str, delay: Duration) -> Self {
        self.script.lock().delays.insert(key(kind, handle), delay);
        self
    }

    pub fn set_profile(&self, profile: ProfilePayload) {
        let handle = profile.username.to_ascii_lowercase();
        self.script.lock().profiles.insert(handle, profile);
    }

    pub fn set_stats(&self, handle: &str, stats: StatsPayload) {
        self.script
            .lock()
            .stats
            .insert(handle.to_ascii_lowercase(), stats);
    }

    pub fn set_games(&self, handle: &str, games: Vec<GameRecord>) {
        self.script
            .lock()
            .games
            .insert(handle.to_ascii_lowercase(), games);
    }

    pub fn set_failure(&self, kind: ResourceKind, handle: &str, err: FetchError) {
        self.script.lock().failures.insert(key(kind, handle), err);
    }

    pub fn clear_failure(&self, kind: ResourceKind, handle: &str) {
        self.script.lock().failures.remove(&key(kind, handle));
    }

    /// Number of reads issued for `kind` and `handle`.
    pub fn calls(&self, kind: ResourceKind, handle: &str) -> usize {
        self.script
            .lock()
            .calls
            .get(&key(kind, handle))
            .copied()
            .unwrap_or(0)
    }

    /// Number of reads issued across all keys.
    pub fn total_calls(&self) -> usize {
        self.script.lock().calls.values().sum()
    }

    /// Record the call and return the scripted delay and failure, if any.
    fn begin(
        &self,
        kind: ResourceKind,
        identity: &Identity,
    ) -> (Option<Duration>, Option<FetchError>) {
        let k = key(kind, identity.as_str());
        let mut script = self.script.lock();
        *script.calls.entry(k.clone()).or_insert(0) += 1;
        (script.delays.get(&k).copied(), script.failures.get(&k).cloned())
    }

    async fn prelude(&self, kind: ResourceKind, identity: &Identity) -> Result<(), FetchError> {
        let (delay, failure) = self.begin(kind, identity);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn not_found() -> FetchError {
    FetchError::Status { status: 404 }
}

#[async_trait]
impl ChessApi for ScriptedApi {
    async fn fetch_profile(&self, identity: &Identity) -> Result<ProfilePayload, FetchError> {
        self.prelude(ResourceKind::Profile, identity).await?;
        self.script
            .lock()
            .profiles
            .get(&identity.key())
            .cloned()
            .ok_or_else(not_found)
    }

    async fn fetch_stats(&self, identity: &Identity) -> Result<StatsPayload, FetchError> {
        self.prelude(ResourceKind::Stats, identity).await?;
        self.script
            .lock()
            .stats
            .get(&identity.key())
            .cloned()
            .ok_or_else(not_found)
    }

    async fn fetch_games(&self, identity: &Identity) -> Result<Vec<GameRecord>, FetchError> {
        self.prelude(ResourceKind::Games, identity).await?;
        self.script
            .lock()
            .games
            .get(&identity.key())
            .cloned()
            .ok_or_else(not_found)
    }
}
