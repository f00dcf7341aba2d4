//! Handlers for the `games` and `player` commands.

use chrono::Utc;
use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::application::projection::{project_games, GameView};
use crate::application::Tracker;
use crate::domain::Identity;
use crate::error::Result;
use crate::port::TrackerQueries;

#[derive(Tabled)]
struct GameRow {
    #[tabled(rename = "White")]
    white: String,
    #[tabled(rename = "Black")]
    black: String,
    #[tabled(rename = "To move")]
    to_move: String,
    #[tabled(rename = "Draw offer")]
    draw_offer: String,
    #[tabled(rename = "Length")]
    length: String,
    #[tabled(rename = "Link")]
    url: String,
}

impl From<&GameView> for GameRow {
    fn from(view: &GameView) -> Self {
        let draw_offer = match view.draw_offer {
            Some(side) if side == view.turn => format!("{} (to answer)", side),
            Some(side) => side.to_string(),
            None => String::new(),
        };
        Self {
            white: view.white.clone(),
            black: view.black.clone(),
            to_move: view.to_move.clone(),
            draw_offer,
            length: view.length(),
            url: view.url.clone(),
        }
    }
}

/// Print the deduplicated roster-vs-roster games.
pub async fn execute(tracker: &Tracker) -> Result<()> {
    let games = tracker.games().await;
    let views = project_games(&games, Utc::now());
    render("games", "Games", &views);
    Ok(())
}

/// Print every in-progress game of one roster member.
pub async fn execute_player(tracker: &Tracker, identity: &str) -> Result<()> {
    let identity = Identity::from(identity.trim());
    let games = tracker.games_for(&identity).await?;
    let views = project_games(&games, Utc::now());
    render("player", &format!("Games for {identity}"), &views);
    Ok(())
}

/// Print already-projected games.
pub fn render(command: &str, title: &str, views: &[GameView]) {
    if output::is_json() {
        let games: Vec<_> = views
            .iter()
            .map(|view| {
                json!({
                    "url": view.url,
                    "white": view.white,
                    "black": view.black,
                    "turn": view.turn,
                    "to_move": view.to_move,
                    "draw_offer": view.draw_offer,
                    "elapsed_secs": view.elapsed.map(|d| d.as_secs()),
                    "length": view.length(),
                })
            })
            .collect();
        output::json_output(&json!({ "command": command, "games": games }));
        return;
    }

    output::section(&format!("{title} ({})", views.len()));
    if views.is_empty() {
        output::note("no games in progress");
        return;
    }
    let rows: Vec<GameRow> = views.iter().map(GameRow::from).collect();
    output::lines(&Table::new(rows).to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Side;
    use crate::testkit::domain::game;

    #[test]
    fn row_marks_pending_draw_offer() {
        let mut record = game("u1", "alice", "bob");
        record.turn = Side::Black;
        record.draw_offer = Some(Side::Black);
        record.start_time = None;

        let row = GameRow::from(&GameView::project(&record, Utc::now()));
        assert_eq!(row.to_move, "bob");
        assert_eq!(row.draw_offer, "black (to answer)");
        assert_eq!(row.length, "-");
    }
}
