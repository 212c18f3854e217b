//! SQLite repository implementations.
//!
//! Each service owns one SQLite data file. Pools are opened with WAL
//! journaling and a busy timeout; every repository additionally serializes
//! its own writes behind a writer lock.
//!
//! # Repositories
//!
//! - [`SqliteLinkRepository`] - Link storage and click counters (shortener)
//! - [`SqliteClickRepository`] - Click log and aggregations (analytics)
//! - [`SqliteNotificationRepository`] - Notification log (notification service)
//!
//! # Migrations
//!
//! Schemas are embedded at compile time from `migrations/<service>` and
//! applied at startup by [`run_migrations`].

pub mod sqlite_click_repository;
pub mod sqlite_link_repository;
pub mod sqlite_notification_repository;

pub use sqlite_click_repository::SqliteClickRepository;
pub use sqlite_link_repository::SqliteLinkRepository;
pub use sqlite_notification_repository::SqliteNotificationRepository;

use sqlx::SqlitePool;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;
use std::time::Duration;

/// Schema of the shortener's `links` table.
pub static SHORTENER_MIGRATOR: Migrator = sqlx::migrate!("./migrations/shortener");

/// Schema of the analytics service's `click_events` table.
pub static ANALYTICS_MIGRATOR: Migrator = sqlx::migrate!("./migrations/analytics");

/// Schema of the notification service's `notifications` table.
pub static NOTIFICATIONS_MIGRATOR: Migrator = sqlx::migrate!("./migrations/notifications");

/// Which service's schema a data file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    Shortener,
    Analytics,
    Notifications,
}

impl Schema {
    fn migrator(self) -> &'static Migrator {
        match self {
            Schema::Shortener => &SHORTENER_MIGRATOR,
            Schema::Analytics => &ANALYTICS_MIGRATOR,
            Schema::Notifications => &NOTIFICATIONS_MIGRATOR,
        }
    }
}

/// Opens a pool on a SQLite data file, creating the file if missing.
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed or the file cannot be opened.
pub async fn connect_sqlite(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    open_pool(database_url, max_connections, true).await
}

/// Opens a pool on a data file that must already exist.
///
/// Used by inspection tools, which must not leave empty data files behind
/// for a mistyped path.
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed or the file does not exist.
pub async fn connect_existing_sqlite(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    open_pool(database_url, max_connections, false).await
}

async fn open_pool(
    database_url: &str,
    max_connections: u32,
    create_if_missing: bool,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(create_if_missing)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Applies the embedded migrations for `schema`.
///
/// # Errors
///
/// Returns an error if a migration fails or the recorded migration history
/// does not match the embedded one.
pub async fn run_migrations(pool: &SqlitePool, schema: Schema) -> Result<(), MigrateError> {
    schema.migrator().run(pool).await
}

/// Runs a trivial query to verify the data file is reachable.
///
/// # Errors
///
/// Returns the underlying SQLx error if the query fails.
pub async fn ping(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
