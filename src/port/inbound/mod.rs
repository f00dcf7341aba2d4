//! Inbound (driving) ports consumed by inbound adapters.
//!
//! - [`tracker`]: roster and game queries exposed to presentation layers
//!   such as the CLI

pub mod tracker;
