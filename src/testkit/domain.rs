//! Builders for domain primitives used across tests.
//!
//! Factory functions for profiles, stats and games so tests focus on
//! assertions rather than construction boilerplate.

use crate::domain::{
    BestRating, GameRecord, GameTally, GameUrl, Identity, LastRating, PlayerStatus, Roster, Side,
    StatsSnapshot,
};
use crate::port::{ProfilePayload, StatsPayload};

/// API URL of a player's profile, as it appears in game records.
pub fn player_url(handle: &str) -> String {
    format!("https://api.chess.com/pub/player/{handle}")
}

/// Canonical URL for a daily game id.
pub fn game_url(id: &str) -> GameUrl {
    GameUrl::new(format!("https://www.chess.com/game/daily/{id}"))
}

/// Build a roster, panicking on invalid input.
pub fn roster(handles: &[&str]) -> Roster {
    Roster::try_new(handles.iter().copied()).expect("valid test roster")
}

pub fn identity(handle: &str) -> Identity {
    Identity::from(handle)
}

/// A basic-status profile with only the required fields.
pub fn profile(handle: &str, player_id: u64) -> ProfilePayload {
    ProfilePayload {
        api_id: player_url(handle),
        url: format!("https://www.chess.com/member/{handle}"),
        username: handle.to_string(),
        player_id,
        title: None,
        status: PlayerStatus::Basic,
        name: None,
        avatar: None,
        location: None,
        country: None,
        joined: Some(1_500_000_000),
        last_online: Some(1_700_000_000),
        followers: Some(0),
        is_streamer: false,
        twitch_url: None,
        fide: None,
    }
}

/// Full daily stats snapshot.
pub fn snapshot(rating: i32, best: i32, win: u32, loss: u32, draw: u32) -> StatsSnapshot {
    StatsSnapshot {
        last: Some(LastRating {
            date: Some(1_700_000_000),
            rating: Some(rating),
            rd: Some(45),
        }),
        best: Some(BestRating {
            date: Some(1_665_705_600),
            rating: Some(best),
            game: Some("https://www.chess.com/game/daily/999".to_string()),
        }),
        record: Some(GameTally {
            win: Some(win),
            loss: Some(loss),
            draw: Some(draw),
            time_per_move: Some(3_725),
            timeout_percent: Some(0.0),
        }),
    }
}

/// Stats body carrying only a daily snapshot.
pub fn daily_stats(snapshot: StatsSnapshot) -> StatsPayload {
    StatsPayload {
        chess_daily: Some(snapshot),
        ..StatsPayload::default()
    }
}

/// Stats body whose daily rating is `rating`.
pub fn rated(rating: i32) -> StatsPayload {
    daily_stats(snapshot(rating, rating + 50, 10, 5, 1))
}

/// A daily game between two handles, white to move.
pub fn game(id: &str, white: &str, black: &str) -> GameRecord {
    GameRecord {
        white: player_url(white),
        black: player_url(black),
        url: game_url(id),
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".to_string(),
        pgn: String::new(),
        turn: Side::White,
        move_by: 1_700_086_400,
        draw_offer: None,
        last_activity: 1_700_000_000,
        start_time: Some(1_700_000_000),
        time_control: "1/86400".to_string(),
        time_class: "daily".to_string(),
        rules: "chess".to_string(),
        tournament: None,
        team_match: None,
    }
}
