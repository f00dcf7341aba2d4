//! Handler for the `watch` command.
//!
//! Re-runs both queries on a fixed interval. Each tick goes through the
//! cache, so an interval shorter than the TTL re-renders cached data and
//! only reaches the network once entries expire.

use std::time::Duration;

use chrono::Utc;
use tokio::signal;
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

use crate::adapter::inbound::cli::{games, output, roster};
use crate::application::projection::{project_games, project_roster};
use crate::application::Tracker;
use crate::error::Result;
use crate::port::TrackerQueries;

/// Refresh and print both views until interrupted or `iterations` runs out.
pub async fn execute(
    tracker: &Tracker,
    interval_secs: u64,
    iterations: Option<u32>,
) -> Result<()> {
    let period = Duration::from_secs(interval_secs.max(1));
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    output::header(env!("CARGO_PKG_VERSION"));
    output::hint(&format!(
        "refreshing every {}s, press {} to stop",
        period.as_secs(),
        output::highlight("Ctrl-C")
    ));

    let mut completed = 0u32;
    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }

        refresh(tracker).await;
        completed += 1;
        if iterations.is_some_and(|limit| completed >= limit) {
            break;
        }
    }

    Ok(())
}

async fn refresh(tracker: &Tracker) {
    let (slots, board) = tokio::join!(tracker.players(), tracker.games());
    let now = Utc::now();

    let missing = roster::unavailable(tracker.roster(), &slots);

    if !output::is_json() {
        output::section(&output::muted(now.format("%Y-%m-%d %H:%M:%S UTC")));
    }
    roster::render(&project_roster(&slots), &missing);
    games::render("games", "Games", &project_games(&board, now));
}
