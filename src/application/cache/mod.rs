//! Runtime caches used by application services.
//!
//! - [`snapshot::SnapshotCache`]: remote payloads with a freshness window

pub mod snapshot;

pub use snapshot::{CacheEntry, CacheKey, Payload, ResourceKind, SnapshotCache};
