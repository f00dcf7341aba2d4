//! TTL-aware cache of remote payloads keyed by (resource kind, identity).
//!
//! Entries are never evicted. An expired entry stays servable until a
//! successful refresh overwrites it, so a failed refresh still leaves the
//! last-known data in place.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::time::Instant;

use crate::domain::{GameRecord, Identity};
use crate::port::{ProfilePayload, StatsPayload};

/// Remote resource a cache entry holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Profile,
    Stats,
    Games,
}

impl ResourceKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Stats => "stats",
            Self::Games => "games",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cache key. Identities are compared by their lowercased handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    kind: ResourceKind,
    handle: String,
}

impl CacheKey {
    #[must_use]
    pub fn new(kind: ResourceKind, identity: &Identity) -> Self {
        Self {
            kind,
            handle: identity.key(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        self.kind
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.handle)
    }
}

/// Immutable payload of one resource. Clones share the same allocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Profile(Arc<ProfilePayload>),
    Stats(Arc<StatsPayload>),
    Games(Arc<Vec<GameRecord>>),
}

impl Payload {
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        match self {
            Self::Profile(_) => ResourceKind::Profile,
            Self::Stats(_) => ResourceKind::Stats,
            Self::Games(_) => ResourceKind::Games,
        }
    }

    #[must_use]
    pub fn as_profile(&self) -> Option<&Arc<ProfilePayload>> {
        match self {
            Self::Profile(p) => Some(p),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_stats(&self) -> Option<&Arc<StatsPayload>> {
        match self {
            Self::Stats(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_games(&self) -> Option<&Arc<Vec<GameRecord>>> {
        match self {
            Self::Games(g) => Some(g),
            _ => None,
        }
    }

    /// Whether two payloads are the very same fetched value.
    #[must_use]
    pub fn same_fetch(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Profile(a), Self::Profile(b)) => Arc::ptr_eq(a, b),
            (Self::Stats(a), Self::Stats(b)) => Arc::ptr_eq(a, b),
            (Self::Games(a), Self::Games(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// A cached payload and when it was fetched.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub payload: Payload,
    pub fetched_at: Instant,
}

impl CacheEntry {
    /// Fresh while `now - fetched_at < ttl`.
    #[must_use]
    pub fn is_fresh(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.fetched_at) < ttl
    }
}

/// Thread-safe payload cache.
///
/// Readers get clones, so a read racing a write sees either the old or the
/// new entry, never a mix.
#[derive(Debug)]
pub struct SnapshotCache {
    entries: RwLock<HashMap<CacheKey, CacheEntry>>,
    ttl: Duration,
}

impl SnapshotCache {
    /// Create an empty cache with the given freshness window.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Latest entry for `key`, fresh or not.
    #[must_use]
    pub fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
        self.entries.read().get(key).cloned()
    }

    /// Entry for `key` only if it is still inside the freshness window.
    #[must_use]
    pub fn get_fresh(&self, key: &CacheKey, now: Instant) -> Option<CacheEntry> {
        self.get(key).filter(|entry| entry.is_fresh(self.ttl, now))
    }

    /// Replace the entry for `key`; returns the stored entry.
    pub fn store(&self, key: CacheKey, payload: Payload, fetched_at: Instant) -> CacheEntry {
        let entry = CacheEntry {
            payload,
            fetched_at,
        };
        self.entries.write().insert(key, entry.clone());
        entry
    }

    /// Number of entries in the cache.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
