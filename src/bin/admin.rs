//! CLI administration tool for the shortlink services.
//!
//! Reads the three SQLite data files directly, so it works while the
//! services are stopped.
//!
//! # Usage
//!
//! ```bash
//! # Link and click counts with the newest links
//! cargo run --bin admin -- stats
//!
//! # Check that every data file opens and is migrated
//! cargo run --bin admin -- db check
//!
//! # Recent notifications, optionally for one code
//! cargo run --bin admin -- notifications --short-code aB3xY9
//! ```
//!
//! # Data Files
//!
//! `--shortener-db`, `--analytics-db` and `--notifications-db` default to
//! the services' own `DATABASE_URL` defaults. `stats` and `notifications`
//! only read existing files; `db check` creates and migrates missing ones.

use shortlink_services::application::services::{
    AnalyticsService, LinkService, NotificationService,
};
use shortlink_services::config::ServiceKind;
use shortlink_services::infrastructure::persistence::{
    Schema, SqliteClickRepository, SqliteLinkRepository, SqliteNotificationRepository,
    connect_existing_sqlite, connect_sqlite, run_migrations,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for inspecting the shortlink services.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Shortener data file
    #[arg(long, global = true, default_value = ServiceKind::Shortener.default_database_url())]
    shortener_db: String,

    /// Analytics data file
    #[arg(long, global = true, default_value = ServiceKind::Analytics.default_database_url())]
    analytics_db: String,

    /// Notification data file
    #[arg(long, global = true, default_value = ServiceKind::Notifier.default_database_url())]
    notifications_db: String,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show link and click statistics
    Stats {
        /// Number of recent links to list
        #[arg(short, long, default_value_t = 10)]
        limit: i64,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// List recent notifications
    Notifications {
        /// Only notifications for this short code
        #[arg(short, long)]
        short_code: Option<String>,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Open and migrate every data file
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Stats { limit } => handle_stats(&cli, *limit).await?,
        Commands::Db { action } => handle_db_action(action, &cli).await?,
        Commands::Notifications { short_code } => {
            handle_notifications(&cli, short_code.as_deref()).await?
        }
    }

    Ok(())
}

/// Opens an existing data file for reading.
///
/// Missing files are reported instead of created.
async fn open_existing(url: &str) -> Result<SqlitePool> {
    connect_existing_sqlite(url, 1)
        .await
        .with_context(|| format!("Failed to open {} (does the data file exist?)", url))
}

/// Opens a data file and brings its schema up to date.
async fn open(url: &str, schema: Schema) -> Result<SqlitePool> {
    let pool = connect_sqlite(url, 1)
        .await
        .with_context(|| format!("Failed to open {}", url))?;

    run_migrations(&pool, schema)
        .await
        .with_context(|| format!("Failed to migrate {}", url))?;

    Ok(pool)
}

/// Prints link count, tracked clicks and the newest links.
async fn handle_stats(cli: &Cli, limit: i64) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_pool = open_existing(&cli.shortener_db).await?;
    let links = LinkService::new(Arc::new(SqliteLinkRepository::new(Arc::new(
        links_pool.clone(),
    ))));

    let links_count = links.count().await?;
    println!(
        "  Links:          {}",
        links_count.to_string().bright_green().bold()
    );

    match open_existing(&cli.analytics_db).await {
        Ok(pool) => {
            let analytics =
                AnalyticsService::new(Arc::new(SqliteClickRepository::new(Arc::new(pool.clone()))));
            let tracked = analytics.count_all().await?;
            println!(
                "  Tracked clicks: {}",
                tracked.to_string().bright_green().bold()
            );
            pool.close().await;
        }
        Err(e) => println!("  Tracked clicks: {} ({:#})", "unavailable".yellow(), e),
    }

    let recent = links.list_recent(limit).await?;
    if !recent.is_empty() {
        println!();
        println!("{}", "  Recent links".bright_white().bold());
        for link in recent {
            println!(
                "  {}  {:>6} clicks  {}  {}",
                link.short_code.bright_cyan(),
                link.click_count,
                link.created_at.format("%Y-%m-%d %H:%M:%S"),
                link.original_url
            );
        }
    }

    println!();
    links_pool.close().await;

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: &DbAction, cli: &Cli) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking data files...".bright_blue());

            let mut failed = 0;

            for (label, url, schema) in [
                ("shortener", &cli.shortener_db, Schema::Shortener),
                ("analytics", &cli.analytics_db, Schema::Analytics),
                ("notifications", &cli.notifications_db, Schema::Notifications),
            ] {
                match open(url, schema).await {
                    Ok(pool) => {
                        println!("  {} {:<14} {}", "✅".green(), label, url);
                        pool.close().await;
                    }
                    Err(e) => {
                        failed += 1;
                        println!("  {} {:<14} {} ({:#})", "❌".red(), label, url, e);
                    }
                }
            }

            if failed > 0 {
                anyhow::bail!("{} data file(s) failed the check", failed);
            }

            println!("{}", "✅ All data files OK".green().bold());
        }
    }

    Ok(())
}

/// Lists notifications, newest first.
async fn handle_notifications(cli: &Cli, short_code: Option<&str>) -> Result<()> {
    let pool = open_existing(&cli.notifications_db).await?;
    let service = NotificationService::new(Arc::new(SqliteNotificationRepository::new(Arc::new(
        pool.clone(),
    ))));

    let records = service.list(short_code).await?;

    println!("{}", "📧 Notifications".bright_blue().bold());
    println!();

    if records.is_empty() {
        println!("  {}", "No notifications found".yellow());
    }

    for record in &records {
        println!(
            "  #{:<5} {}  {}  {}  {}",
            record.id,
            record.created_at.format("%Y-%m-%d %H:%M:%S"),
            record.short_code.bright_cyan(),
            record.notification_type.to_string().bright_white(),
            record.original_url
        );
    }

    println!();
    println!("  Total: {}", records.len().to_string().bright_green().bold());
    pool.close().await;

    Ok(())
}
