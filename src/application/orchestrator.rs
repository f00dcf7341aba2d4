//! Cache-fronted fetching of remote resources.
//!
//! [`FetchOrchestrator::fetch`] returns cached data while it is fresh and
//! otherwise reads the remote service. Each refresh runs as its own task, so
//! a caller that stops waiting does not cancel it; the result still lands in
//! the cache for the next caller. Refreshes of the same key are serialized
//! through a per-key gate: a caller that queued behind an in-flight refresh
//! takes that refresh's outcome, success or failure, instead of issuing a
//! second read.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, trace, warn};

use super::cache::{CacheEntry, CacheKey, Payload, ResourceKind, SnapshotCache};
use crate::domain::Identity;
use crate::error::FetchError;
use crate::port::ChessApi;

/// Outcome of a single [`FetchOrchestrator::fetch`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotStatus {
    /// Served from cache without a remote read.
    Cached,
    /// A remote read just completed and replaced the cache entry.
    Refreshed,
    /// The remote read failed; any payload is last-known data.
    Failed(FetchError),
}

/// Data for one (resource kind, identity) pair plus how it was obtained.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub kind: ResourceKind,
    pub identity: Identity,
    pub payload: Option<Payload>,
    pub fetched_at: Option<Instant>,
    pub status: SnapshotStatus,
}

impl Snapshot {
    fn from_entry(
        kind: ResourceKind,
        identity: Identity,
        entry: CacheEntry,
        status: SnapshotStatus,
    ) -> Self {
        Self {
            kind,
            identity,
            payload: Some(entry.payload),
            fetched_at: Some(entry.fetched_at),
            status,
        }
    }

    fn failed(
        kind: ResourceKind,
        identity: Identity,
        stale: Option<CacheEntry>,
        err: FetchError,
    ) -> Self {
        let (payload, fetched_at) = match stale {
            Some(entry) => (Some(entry.payload), Some(entry.fetched_at)),
            None => (None, None),
        };
        Self {
            kind,
            identity,
            payload,
            fetched_at,
            status: SnapshotStatus::Failed(err),
        }
    }

    /// True when the latest remote read for this key failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.status, SnapshotStatus::Failed(_))
    }

    /// True when served from cache without touching the network.
    #[must_use]
    pub const fn is_cached(&self) -> bool {
        matches!(self.status, SnapshotStatus::Cached)
    }

    #[must_use]
    pub const fn error(&self) -> Option<&FetchError> {
        match &self.status {
            SnapshotStatus::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Per-key refresh gate.
///
/// The mutex serializes remote reads of one key and holds the error of the
/// last read, `None` after a success. `completed` counts finished reads so a
/// waiter can tell whether one ended while it was queued.
#[derive(Default)]
struct Gate {
    completed: AtomicU64,
    last_error: Mutex<Option<FetchError>>,
}

struct Inner {
    api: Arc<dyn ChessApi>,
    cache: SnapshotCache,
    gates: DashMap<CacheKey, Arc<Gate>>,
}

/// Owns the payload cache and issues remote reads on miss or expiry.
///
/// Cheap to clone; clones share the cache.
#[derive(Clone)]
pub struct FetchOrchestrator {
    inner: Arc<Inner>,
}

impl FetchOrchestrator {
    /// Create an orchestrator with an empty cache.
    #[must_use]
    pub fn new(api: Arc<dyn ChessApi>, ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                api,
                cache: SnapshotCache::new(ttl),
                gates: DashMap::new(),
            }),
        }
    }

    /// Freshness window applied to every resource kind.
    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.inner.cache.ttl()
    }

    /// Return fresh cached data, or read the remote service.
    ///
    /// Never fails: a failed read is reported in [`Snapshot::status`] and
    /// carries the last-known payload, if any.
    pub async fn fetch(&self, kind: ResourceKind, identity: &Identity) -> Snapshot {
        let key = CacheKey::new(kind, identity);

        if let Some(entry) = self.inner.cache.get_fresh(&key, Instant::now()) {
            trace!(key = %key, "cache hit");
            return Snapshot::from_entry(
                kind,
                identity.clone(),
                entry,
                SnapshotStatus::Cached,
            );
        }

        let inner = Arc::clone(&self.inner);
        let task_identity = identity.clone();
        let task_key = key.clone();
        let handle =
            tokio::spawn(async move { inner.refresh(task_key, kind, task_identity).await });

        match handle.await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(key = %key, error = %err, "fetch task did not complete");
                Snapshot::failed(
                    kind,
                    identity.clone(),
                    self.inner.cache.get(&key),
                    FetchError::Transport(format!("fetch task aborted: {err}")),
                )
            }
        }
    }
}

impl Inner {
    async fn refresh(&self, key: CacheKey, kind: ResourceKind, identity: Identity) -> Snapshot {
        let gate = Arc::clone(self.gates.entry(key.clone()).or_default().value());
        let seen = gate.completed.load(Ordering::Acquire);
        let mut last_error = gate.last_error.lock().await;

        // A refresh that finished while we queued is as good as our own.
        if let Some(entry) = self.cache.get_fresh(&key, Instant::now()) {
            trace!(key = %key, "coalesced with in-flight refresh");
            return Snapshot::from_entry(kind, identity, entry, SnapshotStatus::Cached);
        }
        if gate.completed.load(Ordering::Acquire) != seen {
            if let Some(err) = last_error.as_ref() {
                trace!(key = %key, "coalesced with failed in-flight refresh");
                return Snapshot::failed(kind, identity, self.cache.get(&key), err.clone());
            }
        }

        debug!(key = %key, "remote read");
        let snapshot = match self.read_remote(kind, &identity).await {
            Ok(payload) => {
                *last_error = None;
                let entry = self.cache.store(key, payload, Instant::now());
                Snapshot::from_entry(kind, identity, entry, SnapshotStatus::Refreshed)
            }
            Err(err) => {
                warn!(identity = %identity, kind = %kind, error = %err, "fetch failed");
                *last_error = Some(err.clone());
                Snapshot::failed(kind, identity, self.cache.get(&key), err)
            }
        };
        gate.completed.fetch_add(1, Ordering::Release);
        snapshot
    }

    async fn read_remote(
        &self,
        kind: ResourceKind,
        identity: &Identity,
    ) -> Result<Payload, FetchError> {
        let payload = match kind {
            ResourceKind::Profile => {
                Payload::Profile(Arc::new(self.api.fetch_profile(identity).await?))
            }
            ResourceKind::Stats => Payload::Stats(Arc::new(self.api.fetch_stats(identity).await?)),
            ResourceKind::Games => Payload::Games(Arc::new(self.api.fetch_games(identity).await?)),
        };
        Ok(payload)
    }
}
