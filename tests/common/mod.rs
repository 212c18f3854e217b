#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::ConnectInfo;
use chrono::Utc;
use shortlink_services::domain::entities::ClickSummary;
use shortlink_services::infrastructure::collaborators::{
    AnalyticsClient, ClickNotice, CollaboratorHealth, CreationNotice, DispatchError,
    DispatchResult, NotificationClient,
};
use shortlink_services::infrastructure::persistence::{Schema, run_migrations};
use shortlink_services::state::{AnalyticsState, NotificationState, ShortenerState};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::Layer;

pub const PEER_ADDR: &str = "127.0.0.1:12345";

/// Fresh in-memory database with the schema applied.
///
/// One connection that never expires, since every connection to
/// `:memory:` is a separate database.
pub async fn memory_pool(schema: Schema) -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:").unwrap();

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();

    run_migrations(&pool, schema).await.unwrap();
    pool
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (short_code, original_url, created_at) VALUES (?1, ?2, ?3)")
        .bind(code)
        .bind(url)
        .bind(Utc::now())
        .execute(pool)
        .await
        .unwrap();
}

pub async fn click_count(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT click_count FROM links WHERE short_code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn shortener_state(
    pool: SqlitePool,
    analytics: Arc<dyn AnalyticsClient>,
    notifications: Arc<dyn NotificationClient>,
) -> ShortenerState {
    ShortenerState::new(Arc::new(pool), analytics, notifications, None)
}

pub fn analytics_state(pool: SqlitePool) -> AnalyticsState {
    AnalyticsState::new(Arc::new(pool))
}

pub fn notification_state(pool: SqlitePool) -> NotificationState {
    NotificationState::new(Arc::new(pool))
}

/// Polls `condition` for up to two seconds.
pub async fn eventually(condition: impl Fn() -> bool) -> bool {
    for _ in 0..100 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    condition()
}

/// Analytics client that records every click and serves a fixed summary.
#[derive(Default)]
pub struct RecordingAnalytics {
    pub clicks: Mutex<Vec<ClickNotice>>,
    pub summary: Option<ClickSummary>,
}

impl RecordingAnalytics {
    pub fn with_summary(summary: ClickSummary) -> Self {
        Self {
            clicks: Mutex::new(Vec::new()),
            summary: Some(summary),
        }
    }

    pub fn recorded(&self) -> Vec<ClickNotice> {
        self.clicks.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalyticsClient for RecordingAnalytics {
    async fn track(&self, click: ClickNotice) -> DispatchResult<()> {
        self.clicks.lock().unwrap().push(click);
        Ok(())
    }

    async fn fetch_summary(&self, _short_code: &str) -> DispatchResult<ClickSummary> {
        self.summary
            .clone()
            .ok_or_else(|| DispatchError::Status(404))
    }

    async fn health_check(&self) -> CollaboratorHealth {
        CollaboratorHealth::Healthy
    }
}

/// Notification client that records every notice.
#[derive(Default)]
pub struct RecordingNotifications {
    pub notices: Mutex<Vec<CreationNotice>>,
}

impl RecordingNotifications {
    pub fn recorded(&self) -> Vec<CreationNotice> {
        self.notices.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationClient for RecordingNotifications {
    async fn notify(&self, notice: CreationNotice) -> DispatchResult<()> {
        self.notices.lock().unwrap().push(notice);
        Ok(())
    }

    async fn health_check(&self) -> CollaboratorHealth {
        CollaboratorHealth::Healthy
    }
}

/// Collaborator that is down: every call fails after `delay`.
#[derive(Default)]
pub struct FailingCollaborator {
    pub delay: Duration,
}

impl FailingCollaborator {
    pub fn slow(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl AnalyticsClient for FailingCollaborator {
    async fn track(&self, _click: ClickNotice) -> DispatchResult<()> {
        tokio::time::sleep(self.delay).await;
        Err(DispatchError::Timeout)
    }

    async fn fetch_summary(&self, _short_code: &str) -> DispatchResult<ClickSummary> {
        tokio::time::sleep(self.delay).await;
        Err(DispatchError::Connection("connection refused".to_string()))
    }

    async fn health_check(&self) -> CollaboratorHealth {
        CollaboratorHealth::Unhealthy
    }
}

#[async_trait]
impl NotificationClient for FailingCollaborator {
    async fn notify(&self, _notice: CreationNotice) -> DispatchResult<()> {
        tokio::time::sleep(self.delay).await;
        Err(DispatchError::Status(500))
    }

    async fn health_check(&self) -> CollaboratorHealth {
        CollaboratorHealth::Unhealthy
    }
}

/// Inserts a fixed `ConnectInfo` so handlers that read the peer address
/// work without a real socket.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = PEER_ADDR.parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
