//! SQLite implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::entities::{NewLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    original_url: String,
    short_code: String,
    created_at: DateTime<Utc>,
    click_count: i64,
}

impl From<LinkRow> for ShortLink {
    fn from(r: LinkRow) -> Self {
        ShortLink::new(r.id, r.original_url, r.short_code, r.created_at, r.click_count)
    }
}

/// SQLite repository for link storage and click counters.
///
/// Inserts and increments are serialized through `write_lock`; reads go
/// straight to the pool. The increment is a single `UPDATE ... RETURNING`
/// statement, so concurrent redirects never lose a click.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
    write_lock: Mutex<()>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            pool,
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<ShortLink, AppError> {
        let _guard = self.write_lock.lock().await;

        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (original_url, short_code, created_at, click_count)
            VALUES (?1, ?2, ?3, 0)
            RETURNING id, original_url, short_code, created_at, click_count
            "#,
        )
        .bind(&new_link.original_url)
        .bind(&new_link.short_code)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, original_url, short_code, created_at, click_count
            FROM links
            WHERE short_code = ?1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortLink::from))
    }

    async fn increment_clicks(&self, short_code: &str) -> Result<Option<i64>, AppError> {
        let _guard = self.write_lock.lock().await;

        let count = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE links
            SET click_count = click_count + 1
            WHERE short_code = ?1
            RETURNING click_count
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<ShortLink>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, original_url, short_code, created_at, click_count
            FROM links
            ORDER BY created_at DESC, id DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ShortLink::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
