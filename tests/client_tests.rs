//! chess.com client against an in-process HTTP server.

mod support;

use lesschess::adapter::outbound::chesscom::{ApiConfig, ChessComClient};
use lesschess::domain::{Identity, PlayerStatus, Side, TimeClass};
use lesschess::error::FetchError;
use lesschess::port::ChessApi;
use support::http::StubServer;

const PROFILE: &str = r#"{
    "@id": "https://api.chess.com/pub/player/alice",
    "url": "https://www.chess.com/member/Alice",
    "username": "alice",
    "player_id": 41,
    "title": "WFM",
    "status": "premium",
    "joined": 1500000000,
    "last_online": 1700000000,
    "followers": 12,
    "is_streamer": true,
    "twitch_url": "https://twitch.tv/alice"
}"#;

const STATS: &str = r#"{
    "chess_daily": {
        "last": {"rating": 1512, "date": 1700000000, "rd": 61},
        "best": {"rating": 1620, "date": 1665705600, "game": "https://www.chess.com/game/daily/999"},
        "record": {"win": 12, "loss": 7, "draw": 2, "time_per_move": 3725, "timeout_percent": 0}
    },
    "fide": 0
}"#;

const GAMES: &str = r#"{
    "games": [{
        "white": "https://api.chess.com/pub/player/alice",
        "black": "https://api.chess.com/pub/player/bob",
        "url": "https://www.chess.com/game/daily/123",
        "fen": "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1",
        "pgn": "1. e4",
        "turn": "black",
        "move_by": 1700086400,
        "draw_offer": "white",
        "last_activity": 1700000000,
        "start_time": 1699990000,
        "time_control": "1/86400",
        "time_class": "daily",
        "rules": "chess"
    }]
}"#;

fn client(addr: std::net::SocketAddr) -> ChessComClient {
    let config = ApiConfig {
        base_url: format!("http://{addr}/pub"),
        timeout_ms: 2000,
        connect_timeout_ms: 1000,
        retry_max_attempts: 1,
        retry_backoff_ms: 0,
        ..ApiConfig::default()
    };
    ChessComClient::from_config(&config).expect("valid base url")
}

#[tokio::test]
async fn fetches_profile_stats_and_games() {
    let server = StubServer::new()
        .route("/pub/player/alice", 200, PROFILE)
        .route("/pub/player/alice/stats", 200, STATS)
        .route("/pub/player/alice/games", 200, GAMES);
    let addr = server.clone().start().await;
    let client = client(addr);
    let alice = Identity::from("Alice");

    let profile = client.fetch_profile(&alice).await.unwrap();
    assert_eq!(profile.player_id, 41);
    assert_eq!(profile.status, PlayerStatus::Premium);
    assert!(profile.is_streamer);

    let stats = client.fetch_stats(&alice).await.unwrap();
    let daily = stats.for_class(TimeClass::Daily).expect("daily stats");
    assert_eq!(daily.last_rating(), Some(1512));
    assert_eq!(daily.time_per_move(), Some(3725));

    let games = client.fetch_games(&alice).await.unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].turn, Side::Black);
    assert_eq!(games[0].draw_offer, Some(Side::White));
    assert_eq!(games[0].to_move(), "bob");

    assert_eq!(
        server.hits(),
        [
            "/pub/player/alice",
            "/pub/player/alice/stats",
            "/pub/player/alice/games"
        ]
    );
}

#[tokio::test]
async fn unknown_player_is_status_error() {
    let addr = StubServer::new().start().await;
    let result = client(addr).fetch_profile(&Identity::from("ghost")).await;
    assert!(matches!(result, Err(FetchError::Status { status: 404 })));
}

#[tokio::test]
async fn server_error_is_status_error() {
    let addr = StubServer::new()
        .route("/pub/player/alice/games", 503, "{}")
        .start()
        .await;
    let result = client(addr).fetch_games(&Identity::from("alice")).await;
    assert!(matches!(result, Err(FetchError::Status { status: 503 })));
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let addr = StubServer::new()
        .route("/pub/player/alice", 200, r#"{"username": "alice"}"#)
        .start()
        .await;
    let result = client(addr).fetch_profile(&Identity::from("alice")).await;
    assert!(matches!(result, Err(FetchError::Decode(_))));
}

#[tokio::test]
async fn empty_games_body_is_empty_list() {
    let addr = StubServer::new()
        .route("/pub/player/alice/games", 200, r#"{"games": []}"#)
        .start()
        .await;
    let games = client(addr)
        .fetch_games(&Identity::from("alice"))
        .await
        .unwrap();
    assert!(games.is_empty());
}

#[tokio::test]
async fn refused_connection_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = client(addr).fetch_profile(&Identity::from("alice")).await;
    assert!(matches!(result, Err(FetchError::Transport(_))));
}
