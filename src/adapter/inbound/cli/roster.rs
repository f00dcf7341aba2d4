//! Handler for the `roster` command.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::application::projection::{
    project_roster, sort_players, PlayerView, RosterSort, SortOrder,
};
use crate::application::Tracker;
use crate::domain::{PlayerRecord, Roster};
use crate::error::Result;
use crate::port::TrackerQueries;

#[derive(Tabled)]
struct PlayerRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Player")]
    player: String,
    #[tabled(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Best")]
    best: String,
    #[tabled(rename = "W")]
    wins: u32,
    #[tabled(rename = "L")]
    losses: u32,
    #[tabled(rename = "D")]
    draws: u32,
    #[tabled(rename = "Move time")]
    move_time: String,
}

impl PlayerRow {
    fn new(rank: usize, view: &PlayerView) -> Self {
        let player = match &view.title {
            Some(title) => format!("{title} {}", view.identity),
            None => view.identity.to_string(),
        };
        let best = match &view.best_date {
            Some(date) => format!("{} ({date})", view.best_rating),
            None => view.best_rating.clone(),
        };
        Self {
            rank,
            player,
            rating: view.rating_with_deviation(),
            best,
            wins: view.wins_key,
            losses: view.losses_key,
            draws: view.draws_key,
            move_time: view.move_time.to_string(),
        }
    }
}

/// Fetch, project and print the ranked roster.
pub async fn execute(tracker: &Tracker, sort: RosterSort, ascending: bool) -> Result<()> {
    let slots = tracker.players().await;
    let missing = unavailable(tracker.roster(), &slots);

    let mut views = project_roster(&slots);
    let order = if ascending {
        SortOrder::Ascending
    } else {
        SortOrder::Descending
    };
    sort_players(&mut views, sort, order);

    render(&views, &missing);
    Ok(())
}

/// Roster members with no profile in `slots`, in roster order.
pub fn unavailable(roster: &Roster, slots: &[Option<PlayerRecord>]) -> Vec<String> {
    roster
        .iter()
        .zip(slots)
        .filter(|(_, slot)| slot.is_none())
        .map(|(id, _)| id.to_string())
        .collect()
}

/// Print an already-projected roster.
pub fn render(views: &[PlayerView], missing: &[String]) {
    if output::is_json() {
        output::json_output(&json!({
            "command": "roster",
            "players": views,
            "unavailable": missing,
        }));
        return;
    }

    output::section(&format!("Roster ({} players)", views.len()));
    if views.is_empty() {
        output::note("no player data available");
    } else {
        let rows: Vec<PlayerRow> = views
            .iter()
            .enumerate()
            .map(|(i, view)| PlayerRow::new(i + 1, view))
            .collect();
        output::lines(&Table::new(rows).to_string());
    }

    for identity in missing {
        output::warning(&format!("{identity}: unavailable"));
    }
}
