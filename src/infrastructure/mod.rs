//! Infrastructure layer.
//!
//! Technical concerns that support the application without containing
//! domain logic.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root wiring config to the tracker
//! - [`config`] - Configuration loading and validation

pub mod bootstrap;
pub mod config;
