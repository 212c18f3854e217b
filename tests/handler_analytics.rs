mod common;

use axum::Router;
use axum_test::TestServer;
use serde_json::{Value, json};
use shortlink_services::api::routes::analytics_routes;
use shortlink_services::infrastructure::persistence::Schema;
use sqlx::SqlitePool;

async fn setup() -> (TestServer, SqlitePool) {
    let pool = common::memory_pool(Schema::Analytics).await;

    let app: Router = analytics_routes()
        .layer(common::MockConnectInfoLayer)
        .with_state(common::analytics_state(pool.clone()));

    (TestServer::new(app).unwrap(), pool)
}

async fn track(server: &TestServer, code: &str, user_agent: &str) {
    let response = server
        .post("/track")
        .add_header("User-Agent", user_agent)
        .json(&json!({ "short_code": code }))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_track_then_query() {
    let (server, _pool) = setup().await;

    let response = server
        .post("/track")
        .add_header("User-Agent", "curl/8.0")
        .json(&json!({ "short_code": "abc123" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "status": "success", "message": "Click tracked" })
    );

    let response = server.get("/analytics/abc123").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "short_code": "abc123",
            "total_clicks": 1,
            "weekly_clicks": 1,
            "popular_browsers": [{ "browser": "curl/8.0", "count": 1 }]
        })
    );
}

#[tokio::test]
async fn test_track_missing_short_code() {
    let (server, _pool) = setup().await;

    let response = server.post("/track").json(&json!({})).await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "short_code is required" })
    );
}

#[tokio::test]
async fn test_track_defaults_and_client_ip() {
    let (server, pool) = setup().await;

    server
        .post("/track")
        .json(&json!({ "short_code": "abc123" }))
        .await
        .assert_status_ok();

    server
        .post("/track")
        .add_header("User-Agent", "Firefox")
        .add_header("X-Forwarded-For", "198.51.100.4")
        .json(&json!({ "short_code": "abc123" }))
        .await
        .assert_status_ok();

    let rows: Vec<(String, String)> =
        sqlx::query_as("SELECT user_agent, ip_address FROM click_events ORDER BY id")
            .fetch_all(&pool)
            .await
            .unwrap();

    assert_eq!(
        rows,
        vec![
            ("Unknown".to_string(), "127.0.0.1".to_string()),
            ("Firefox".to_string(), "198.51.100.4".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_unknown_code_has_no_clicks() {
    let (server, _pool) = setup().await;

    let response = server.get("/analytics/never1").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["total_clicks"], 0);
    assert_eq!(body["weekly_clicks"], 0);
    assert_eq!(body["popular_browsers"], json!([]));
}

#[tokio::test]
async fn test_popular_browsers_ordering() {
    let (server, _pool) = setup().await;

    // Ties resolve by first appearance: Safari before Chrome.
    for ua in [
        "Safari", "Chrome", "Chrome", "Safari", "Edge", "Opera", "Brave", "Vivaldi", "Lynx",
        "Lynx", "Lynx",
    ] {
        track(&server, "abc123", ua).await;
    }
    track(&server, "other1", "Lynx").await;

    let body = server.get("/analytics/abc123").await.json::<Value>();

    assert_eq!(body["total_clicks"], 11);
    assert!(body["weekly_clicks"].as_i64().unwrap() <= body["total_clicks"].as_i64().unwrap());
    assert_eq!(
        body["popular_browsers"],
        json!([
            { "browser": "Lynx", "count": 3 },
            { "browser": "Safari", "count": 2 },
            { "browser": "Chrome", "count": 2 },
            { "browser": "Edge", "count": 1 },
            { "browser": "Opera", "count": 1 }
        ])
    );
}

#[tokio::test]
async fn test_weekly_clicks_exclude_old_events() {
    let (server, pool) = setup().await;

    track(&server, "abc123", "curl/8.0").await;

    sqlx::query(
        "INSERT INTO click_events (short_code, click_time, user_agent, ip_address) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind("abc123")
    .bind(chrono::Utc::now() - chrono::Duration::days(8))
    .bind("curl/8.0")
    .bind("127.0.0.1")
    .execute(&pool)
    .await
    .unwrap();

    let body = server.get("/analytics/abc123").await.json::<Value>();

    assert_eq!(body["total_clicks"], 2);
    assert_eq!(body["weekly_clicks"], 1);
}
