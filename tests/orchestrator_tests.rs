//! Cache freshness, coalescing and failure handling of the fetch orchestrator.

mod support;

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use lesschess::application::cache::ResourceKind;
use lesschess::application::SnapshotStatus;
use lesschess::domain::Identity;
use lesschess::error::FetchError;
use lesschess::testkit::api::ScriptedApi;
use lesschess::testkit::domain::{game, profile, rated};
use support::tracker::orchestrator;

#[tokio::test(start_paused = true)]
async fn entry_is_reused_inside_ttl_and_refetched_after() {
    let api = Arc::new(ScriptedApi::new().with_stats("alice", rated(1500)));
    let orch = orchestrator(&api);
    let alice = Identity::from("alice");

    let first = orch.fetch(ResourceKind::Stats, &alice).await;
    assert_eq!(first.status, SnapshotStatus::Refreshed);

    tokio::time::advance(Duration::from_secs(5)).await;
    let second = orch.fetch(ResourceKind::Stats, &alice).await;
    assert_eq!(second.status, SnapshotStatus::Cached);
    assert_eq!(api.calls(ResourceKind::Stats, "alice"), 1);

    tokio::time::advance(Duration::from_secs(6)).await;
    let third = orch.fetch(ResourceKind::Stats, &alice).await;
    assert_eq!(third.status, SnapshotStatus::Refreshed);
    assert_eq!(api.calls(ResourceKind::Stats, "alice"), 2);
}

#[tokio::test(start_paused = true)]
async fn entry_expires_exactly_at_ttl() {
    let api = Arc::new(ScriptedApi::new().with_profile(profile("alice", 1)));
    let orch = orchestrator(&api);
    let alice = Identity::from("alice");

    orch.fetch(ResourceKind::Profile, &alice).await;
    tokio::time::advance(Duration::from_secs(10)).await;
    let snap = orch.fetch(ResourceKind::Profile, &alice).await;
    assert_eq!(snap.status, SnapshotStatus::Refreshed);
}

#[tokio::test(start_paused = true)]
async fn repeated_fetches_inside_ttl_are_identical() {
    let api = Arc::new(ScriptedApi::new().with_games("alice", vec![game("u1", "alice", "bob")]));
    let orch = orchestrator(&api);
    let alice = Identity::from("alice");

    let a = orch.fetch(ResourceKind::Games, &alice).await;
    let b = orch.fetch(ResourceKind::Games, &alice).await;
    let (Some(a), Some(b)) = (a.payload, b.payload) else {
        panic!("expected payloads");
    };
    assert!(a.same_fetch(&b));
}

#[tokio::test(start_paused = true)]
async fn concurrent_fetches_of_one_key_share_a_read() {
    let api = Arc::new(
        ScriptedApi::new()
            .with_profile(profile("alice", 1))
            .with_delay(ResourceKind::Profile, "alice", Duration::from_millis(200)),
    );
    let orch = orchestrator(&api);
    let alice = Identity::from("alice");

    let snaps = join_all((0..5).map(|_| orch.fetch(ResourceKind::Profile, &alice))).await;

    assert_eq!(api.calls(ResourceKind::Profile, "alice"), 1);
    assert!(snaps.iter().all(|s| s.payload.is_some() && !s.is_failed()));
}

#[tokio::test(start_paused = true)]
async fn concurrent_fetches_of_failing_key_share_one_read() {
    let api = Arc::new(
        ScriptedApi::new()
            .fail(ResourceKind::Profile, "alice", FetchError::Status { status: 503 })
            .with_delay(ResourceKind::Profile, "alice", Duration::from_secs(5)),
    );
    let orch = orchestrator(&api);
    let alice = Identity::from("alice");

    let started = tokio::time::Instant::now();
    let snaps = join_all((0..5).map(|_| orch.fetch(ResourceKind::Profile, &alice))).await;

    assert_eq!(api.calls(ResourceKind::Profile, "alice"), 1);
    assert!(started.elapsed() < Duration::from_secs(6));
    assert!(snaps
        .iter()
        .all(|s| s.error() == Some(&FetchError::Status { status: 503 })));

    let retry = orch.fetch(ResourceKind::Profile, &alice).await;
    assert!(retry.is_failed());
    assert_eq!(api.calls(ResourceKind::Profile, "alice"), 2);
}

#[tokio::test(start_paused = true)]
async fn handles_differing_in_case_share_an_entry() {
    let api = Arc::new(ScriptedApi::new().with_profile(profile("alice", 1)));
    let orch = orchestrator(&api);

    orch.fetch(ResourceKind::Profile, &Identity::from("alice")).await;
    let snap = orch.fetch(ResourceKind::Profile, &Identity::from("ALICE")).await;

    assert!(snap.is_cached());
    assert_eq!(api.total_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn failure_of_one_key_leaves_others_alone() {
    let api = Arc::new(
        ScriptedApi::new()
            .with_profile(profile("alice", 1))
            .with_profile(profile("bob", 2))
            .fail(ResourceKind::Profile, "bob", FetchError::Transport("reset".into())),
    );
    let orch = orchestrator(&api);
    let alice = Identity::from("alice");
    let bob = Identity::from("bob");

    let (served, failed) = tokio::join!(
        orch.fetch(ResourceKind::Profile, &alice),
        orch.fetch(ResourceKind::Profile, &bob),
    );

    assert_eq!(served.status, SnapshotStatus::Refreshed);
    assert!(failed.is_failed());
    assert!(failed.payload.is_none());
}

#[tokio::test(start_paused = true)]
async fn failure_is_retried_on_next_call() {
    let api = Arc::new(
        ScriptedApi::new()
            .with_profile(profile("alice", 1))
            .fail(ResourceKind::Profile, "alice", FetchError::Status { status: 503 }),
    );
    let orch = orchestrator(&api);
    let alice = Identity::from("alice");

    assert!(orch.fetch(ResourceKind::Profile, &alice).await.is_failed());

    api.clear_failure(ResourceKind::Profile, "alice");
    let snap = orch.fetch(ResourceKind::Profile, &alice).await;
    assert_eq!(snap.status, SnapshotStatus::Refreshed);
    assert_eq!(api.calls(ResourceKind::Profile, "alice"), 2);
}

#[tokio::test(start_paused = true)]
async fn stale_entry_survives_failed_refresh_and_is_replaced_on_success() {
    let api = Arc::new(ScriptedApi::new().with_stats("alice", rated(1500)));
    let orch = orchestrator(&api);
    let alice = Identity::from("alice");

    orch.fetch(ResourceKind::Stats, &alice).await;
    tokio::time::advance(Duration::from_secs(11)).await;
    api.set_failure(ResourceKind::Stats, "alice", FetchError::Decode("bad".into()));

    let failed = orch.fetch(ResourceKind::Stats, &alice).await;
    let rating = failed
        .payload
        .as_ref()
        .and_then(|p| p.as_stats())
        .and_then(|s| s.chess_daily.as_ref())
        .and_then(|s| s.last_rating());
    assert_eq!(rating, Some(1500));

    api.clear_failure(ResourceKind::Stats, "alice");
    api.set_stats("alice", rated(1600));
    let fresh = orch.fetch(ResourceKind::Stats, &alice).await;
    let rating = fresh
        .payload
        .as_ref()
        .and_then(|p| p.as_stats())
        .and_then(|s| s.chess_daily.as_ref())
        .and_then(|s| s.last_rating());
    assert_eq!(rating, Some(1600));
}

#[tokio::test(start_paused = true)]
async fn abandoned_fetch_still_fills_cache() {
    let api = Arc::new(
        ScriptedApi::new()
            .with_profile(profile("alice", 1))
            .with_delay(ResourceKind::Profile, "alice", Duration::from_millis(500)),
    );
    let orch = orchestrator(&api);
    let alice = Identity::from("alice");

    let abandoned = tokio::time::timeout(
        Duration::from_millis(100),
        orch.fetch(ResourceKind::Profile, &alice),
    )
    .await;
    assert!(abandoned.is_err());

    tokio::time::sleep(Duration::from_secs(1)).await;
    let snap = orch.fetch(ResourceKind::Profile, &alice).await;
    assert!(snap.is_cached());
    assert_eq!(api.calls(ResourceKind::Profile, "alice"), 1);
}
