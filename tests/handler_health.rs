mod common;

use axum::Router;
use axum_test::TestServer;
use serde_json::{Value, json};
use shortlink_services::api::routes::{analytics_routes, notification_routes, shortener_routes};
use shortlink_services::infrastructure::collaborators::{DisabledAnalytics, DisabledNotifications};
use shortlink_services::infrastructure::persistence::Schema;
use std::sync::Arc;

#[tokio::test]
async fn test_shortener_health_reports_collaborators() {
    let pool = common::memory_pool(Schema::Shortener).await;
    let state = common::shortener_state(
        pool,
        Arc::new(common::FailingCollaborator::default()),
        Arc::new(DisabledNotifications::new()),
    );

    let app: Router = shortener_routes().with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body = response.json::<Value>();

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "url-shortener");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(
        body["checks"],
        json!({
            "database": "healthy",
            "analytics_service": "unhealthy",
            "notification_service": "disabled"
        })
    );
}

#[tokio::test]
async fn test_shortener_health_database_down() {
    let pool = common::memory_pool(Schema::Shortener).await;
    let state = common::shortener_state(
        pool.clone(),
        Arc::new(DisabledAnalytics::new()),
        Arc::new(DisabledNotifications::new()),
    );

    let app: Router = shortener_routes().with_state(state);
    let server = TestServer::new(app).unwrap();

    pool.close().await;

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);
    let body = response.json::<Value>();
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["checks"]["database"], "unhealthy");
}

#[tokio::test]
async fn test_analytics_health() {
    let pool = common::memory_pool(Schema::Analytics).await;
    let app: Router = analytics_routes().with_state(common::analytics_state(pool));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "status": "healthy",
            "service": "analytics-service",
            "version": env!("CARGO_PKG_VERSION"),
            "checks": { "database": "healthy" }
        })
    );
}

#[tokio::test]
async fn test_notification_health() {
    let pool = common::memory_pool(Schema::Notifications).await;
    let app: Router = notification_routes().with_state(common::notification_state(pool));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["service"], "notification-service");
    assert_eq!(body["checks"], json!({ "database": "healthy" }));
}
