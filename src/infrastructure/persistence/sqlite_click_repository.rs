//! SQLite implementation of the click event log.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::entities::{BrowserCount, ClickEvent, NewClickEvent};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ClickRow {
    id: i64,
    short_code: String,
    click_time: DateTime<Utc>,
    user_agent: String,
    ip_address: String,
}

impl From<ClickRow> for ClickEvent {
    fn from(r: ClickRow) -> Self {
        ClickEvent {
            id: r.id,
            short_code: r.short_code,
            click_time: r.click_time,
            user_agent: r.user_agent,
            ip_address: r.ip_address,
        }
    }
}

#[derive(sqlx::FromRow)]
struct BrowserRow {
    browser: String,
    clicks: i64,
}

/// SQLite repository for the append-only click log.
///
/// Rows are only ever inserted, so the autoincrement `id` doubles as the
/// first-seen order used to break ties between equally popular user agents.
pub struct SqliteClickRepository {
    pool: Arc<SqlitePool>,
    write_lock: Mutex<()>,
}

impl SqliteClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            pool,
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl ClickRepository for SqliteClickRepository {
    async fn record(&self, new_click: NewClickEvent) -> Result<ClickEvent, AppError> {
        let _guard = self.write_lock.lock().await;

        let row = sqlx::query_as::<_, ClickRow>(
            r#"
            INSERT INTO click_events (short_code, click_time, user_agent, ip_address)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, short_code, click_time, user_agent, ip_address
            "#,
        )
        .bind(&new_click.short_code)
        .bind(Utc::now())
        .bind(&new_click.user_agent)
        .bind(&new_click.ip_address)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn count_clicks(
        &self,
        short_code: &str,
        since: Option<DateTime<Utc>>,
    ) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM click_events
            WHERE short_code = ?1
              AND (?2 IS NULL OR click_time > ?2)
            "#,
        )
        .bind(short_code)
        .bind(since)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn top_user_agents(
        &self,
        short_code: &str,
        limit: i64,
    ) -> Result<Vec<BrowserCount>, AppError> {
        let rows = sqlx::query_as::<_, BrowserRow>(
            r#"
            SELECT user_agent AS browser, COUNT(*) AS clicks
            FROM click_events
            WHERE short_code = ?1
            GROUP BY user_agent
            ORDER BY clicks DESC, MIN(id) ASC
            LIMIT ?2
            "#,
        )
        .bind(short_code)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| BrowserCount {
                browser: r.browser,
                count: r.clicks,
            })
            .collect())
    }

    async fn count_all(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM click_events")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
