//! Application services (use cases).
//!
//! The fetch orchestrator fronts the remote chess service with the snapshot
//! cache; the tracker fans queries out across the roster and hands the
//! results to normalization, merging and projection.

pub mod cache;
pub mod games;
pub mod normalize;
pub mod orchestrator;
pub mod projection;
pub mod tracker;

pub use orchestrator::{FetchOrchestrator, Snapshot, SnapshotStatus};
pub use tracker::Tracker;
