//! Tracker wiring over the scripted API.

use std::sync::Arc;
use std::time::Duration;

use lesschess::application::{FetchOrchestrator, Tracker};
use lesschess::domain::TimeClass;
use lesschess::port::ChessApi;
use lesschess::testkit::api::ScriptedApi;
use lesschess::testkit::domain::roster;

pub const TTL: Duration = Duration::from_secs(10);

pub fn orchestrator(api: &Arc<ScriptedApi>) -> FetchOrchestrator {
    FetchOrchestrator::new(Arc::clone(api) as Arc<dyn ChessApi>, TTL)
}

pub fn tracker(api: &Arc<ScriptedApi>, handles: &[&str]) -> Tracker {
    Tracker::new(roster(handles), orchestrator(api), TimeClass::Daily)
}
