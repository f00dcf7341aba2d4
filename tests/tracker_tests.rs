//! Roster and games queries end to end over the scripted API.

mod support;

use std::sync::Arc;
use std::time::Duration;

use lesschess::application::cache::ResourceKind;
use lesschess::application::projection::project_roster;
use lesschess::domain::Identity;
use lesschess::error::FetchError;
use lesschess::port::TrackerQueries;
use lesschess::testkit::api::ScriptedApi;
use lesschess::testkit::domain::{game, game_url, profile, rated};
use support::tracker::tracker;

fn two_player_api() -> ScriptedApi {
    ScriptedApi::new()
        .with_profile(profile("alice", 1))
        .with_profile(profile("bob", 2))
        .with_stats("alice", rated(1500))
        .with_stats("bob", rated(1700))
}

#[tokio::test(start_paused = true)]
async fn shared_game_is_reported_once() {
    let api = Arc::new(
        two_player_api()
            .with_games("alice", vec![game("u1", "alice", "bob")])
            .with_games("bob", vec![game("u1", "alice", "bob")]),
    );
    let tracker = tracker(&api, &["alice", "bob"]);

    let games = tracker.games().await;
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].url, game_url("u1"));
}

#[tokio::test(start_paused = true)]
async fn games_against_outsiders_are_excluded() {
    let api = Arc::new(
        two_player_api()
            .with_games("alice", vec![game("u2", "alice", "carol")])
            .with_games("bob", vec![]),
    );
    let tracker = tracker(&api, &["alice", "bob"]);

    assert!(tracker.games().await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn failed_stats_keep_profile_and_sort_last() {
    let api = Arc::new(
        two_player_api()
            .with_profile(profile("carol", 3))
            .with_stats("carol", rated(900))
            .fail(ResourceKind::Stats, "bob", FetchError::Status { status: 500 }),
    );
    let tracker = tracker(&api, &["alice", "bob", "carol"]);

    let slots = tracker.players().await;
    let bob = slots[1].as_ref().expect("bob keeps his profile");
    assert_eq!(bob.player_id, 2);
    assert!(bob.stats.is_none());

    let order: Vec<_> = project_roster(&slots)
        .iter()
        .map(|view| view.identity.to_string())
        .collect();
    assert_eq!(order, ["alice", "carol", "bob"]);
}

#[tokio::test(start_paused = true)]
async fn failed_games_fetch_only_drops_that_identity() {
    let api = Arc::new(
        two_player_api()
            .with_profile(profile("carol", 3))
            .with_games("alice", vec![game("u1", "alice", "bob")])
            .with_games("carol", vec![game("u3", "carol", "alice")])
            .fail(ResourceKind::Games, "bob", FetchError::Transport("timeout".into())),
    );
    let tracker = tracker(&api, &["alice", "bob", "carol"]);

    let urls: Vec<_> = tracker.games().await.into_iter().map(|g| g.url).collect();
    assert_eq!(urls, [game_url("u1"), game_url("u3")]);
}

#[tokio::test(start_paused = true)]
async fn missing_profile_leaves_empty_slot() {
    let api = Arc::new(two_player_api());
    let tracker = tracker(&api, &["alice", "bob", "ghost"]);

    let slots = tracker.players().await;
    assert_eq!(slots.len(), 3);
    assert!(slots[2].is_none());
    assert_eq!(project_roster(&slots).len(), 2);
}

#[tokio::test(start_paused = true)]
async fn repeated_queries_inside_ttl_hit_the_cache() {
    let api = Arc::new(two_player_api().with_games("alice", vec![]).with_games("bob", vec![]));
    let tracker = tracker(&api, &["alice", "bob"]);

    tracker.players().await;
    tracker.games().await;
    let first = api.total_calls();
    assert_eq!(first, 6);

    tokio::time::advance(Duration::from_secs(3)).await;
    tracker.players().await;
    tracker.games().await;
    assert_eq!(api.total_calls(), first);

    tokio::time::advance(Duration::from_secs(8)).await;
    tracker.players().await;
    assert_eq!(api.total_calls(), first + 4);
}

#[tokio::test(start_paused = true)]
async fn stale_games_are_served_when_refresh_fails() {
    let api = Arc::new(
        two_player_api()
            .with_games("alice", vec![game("u1", "alice", "bob")])
            .with_games("bob", vec![]),
    );
    let tracker = tracker(&api, &["alice", "bob"]);

    assert_eq!(tracker.games().await.len(), 1);

    tokio::time::advance(Duration::from_secs(30)).await;
    api.set_failure(ResourceKind::Games, "alice", FetchError::Status { status: 502 });
    assert_eq!(tracker.games().await.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn roster_fan_out_runs_concurrently() {
    let api = Arc::new(
        two_player_api()
            .with_delay(ResourceKind::Profile, "alice", Duration::from_secs(2))
            .with_delay(ResourceKind::Profile, "bob", Duration::from_secs(2))
            .with_delay(ResourceKind::Stats, "alice", Duration::from_secs(2))
            .with_delay(ResourceKind::Stats, "bob", Duration::from_secs(2)),
    );
    let tracker = tracker(&api, &["alice", "bob"]);

    let started = tokio::time::Instant::now();
    let slots = tracker.players().await;
    assert!(slots.iter().all(Option::is_some));
    assert!(started.elapsed() < Duration::from_secs(3));
}

#[tokio::test(start_paused = true)]
async fn games_for_accepts_any_case() {
    let api = Arc::new(
        two_player_api().with_games("bob", vec![game("u9", "bob", "stranger")]),
    );
    let tracker = tracker(&api, &["alice", "bob"]);

    let games = tracker.games_for(&Identity::from("BOB")).await.unwrap();
    assert_eq!(games.len(), 1);
}
