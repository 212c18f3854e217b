mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::{Value, json};
use shortlink_services::api::handlers::stats_handler;
use shortlink_services::domain::entities::{BrowserCount, ClickSummary};
use shortlink_services::infrastructure::collaborators::{
    AnalyticsClient, DisabledAnalytics, DisabledNotifications,
};
use shortlink_services::infrastructure::persistence::Schema;
use sqlx::SqlitePool;
use std::sync::Arc;

fn server_for(pool: SqlitePool, analytics: Arc<dyn AnalyticsClient>) -> TestServer {
    let state = common::shortener_state(pool, analytics, Arc::new(DisabledNotifications::new()));

    let app = Router::new()
        .route("/stats/{code}", get(stats_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_stats_embeds_analytics() {
    let pool = common::memory_pool(Schema::Shortener).await;
    common::create_test_link(&pool, "abc123", "https://example.com").await;
    sqlx::query("UPDATE links SET click_count = 4 WHERE short_code = 'abc123'")
        .execute(&pool)
        .await
        .unwrap();

    let analytics = Arc::new(common::RecordingAnalytics::with_summary(ClickSummary {
        short_code: "abc123".to_string(),
        total_clicks: 3,
        weekly_clicks: 2,
        popular_browsers: vec![BrowserCount {
            browser: "curl/8.0".to_string(),
            count: 3,
        }],
    }));
    let server = server_for(pool, analytics);

    let response = server.get("/stats/abc123").await;

    response.assert_status_ok();
    let body = response.json::<Value>();

    assert_eq!(body["short_code"], "abc123");
    assert_eq!(body["original_url"], "https://example.com");
    assert_eq!(body["click_count"], 4);
    assert!(body["created_at"].is_string());
    assert_eq!(
        body["analytics"],
        json!({
            "short_code": "abc123",
            "total_clicks": 3,
            "weekly_clicks": 2,
            "popular_browsers": [{ "browser": "curl/8.0", "count": 3 }]
        })
    );
}

#[tokio::test]
async fn test_stats_with_analytics_down() {
    let pool = common::memory_pool(Schema::Shortener).await;
    common::create_test_link(&pool, "abc123", "https://example.com").await;

    let server = server_for(pool, Arc::new(common::FailingCollaborator::default()));

    let response = server.get("/stats/abc123").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["click_count"], 0);
    assert_eq!(body["analytics"], json!({}));
}

#[tokio::test]
async fn test_stats_with_analytics_disabled() {
    let pool = common::memory_pool(Schema::Shortener).await;
    common::create_test_link(&pool, "abc123", "https://example.com").await;

    let server = server_for(pool, Arc::new(DisabledAnalytics::new()));

    let response = server.get("/stats/abc123").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["analytics"], json!({}));
}

#[tokio::test]
async fn test_stats_not_found() {
    let pool = common::memory_pool(Schema::Shortener).await;
    let server = server_for(pool, Arc::new(DisabledAnalytics::new()));

    let response = server.get("/stats/nope42").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Short URL not found" })
    );
}
