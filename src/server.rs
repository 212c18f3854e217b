//! HTTP server initialization and runtime setup.
//!
//! Handles logging, database connections, collaborator clients and the Axum
//! server lifecycle for each of the three services.

use crate::config::Config;
use crate::infrastructure::collaborators::{
    AnalyticsClient, DisabledAnalytics, DisabledNotifications, HttpAnalyticsClient,
    HttpNotificationClient, NotificationClient, build_http_client,
};
use crate::infrastructure::persistence::{Schema, connect_sqlite, run_migrations};
use crate::routes::{analytics_router, notification_router, shortener_router};
use crate::state::{AnalyticsState, NotificationState, ShortenerState};

use anyhow::{Context, Result};
use axum::extract::Request;
use axum::{Router, ServiceExt};
use sqlx::SqlitePool;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::normalize_path::NormalizePath;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` (falling back to `log_level`), and
/// `log_format` selects `text` or `json` output.
pub fn init_tracing(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Runs the shortener service.
///
/// Initializes:
/// - SQLite pool and the `links` schema
/// - Analytics and notification clients (or disabled no-ops)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - The HTTP client cannot be built
/// - Server bind fails
pub async fn run_shortener(config: Config) -> Result<()> {
    let pool = open_database(&config, Schema::Shortener).await?;

    let http = build_http_client(config.dispatch_timeout())
        .context("Failed to build HTTP client")?;

    let analytics: Arc<dyn AnalyticsClient> = match &config.analytics_service_url {
        Some(url) => {
            tracing::info!("Analytics dispatch enabled ({})", url);
            Arc::new(HttpAnalyticsClient::new(
                http.clone(),
                url.clone(),
                config.dispatch_timeout(),
                config.analytics_fetch_timeout(),
            ))
        }
        None => Arc::new(DisabledAnalytics::new()),
    };

    let notifications: Arc<dyn NotificationClient> = match &config.notification_service_url {
        Some(url) => {
            tracing::info!("Notification dispatch enabled ({})", url);
            Arc::new(HttpNotificationClient::new(
                http,
                url.clone(),
                config.dispatch_timeout(),
            ))
        }
        None => Arc::new(DisabledNotifications::new()),
    };

    let state = ShortenerState::new(
        Arc::new(pool.clone()),
        analytics,
        notifications,
        config.public_base_url.clone(),
    );

    serve(&config, shortener_router(state), pool).await
}

/// Runs the analytics service.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or the server cannot bind.
pub async fn run_analytics(config: Config) -> Result<()> {
    let pool = open_database(&config, Schema::Analytics).await?;

    let state = AnalyticsState::new(Arc::new(pool.clone()));

    serve(&config, analytics_router(state), pool).await
}

/// Runs the notification service.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or the server cannot bind.
pub async fn run_notifier(config: Config) -> Result<()> {
    let pool = open_database(&config, Schema::Notifications).await?;

    let state = NotificationState::new(Arc::new(pool.clone()));

    serve(&config, notification_router(state), pool).await
}

async fn open_database(config: &Config, schema: Schema) -> Result<SqlitePool> {
    let pool = connect_sqlite(&config.database_url, config.db_max_connections)
        .await
        .with_context(|| format!("Failed to open {}", config.database_url))?;
    tracing::info!("Connected to database");

    run_migrations(&pool, schema)
        .await
        .context("Failed to migrate")?;

    Ok(pool)
}

/// Serves `app` until a shutdown signal, then closes the pool.
async fn serve(config: &Config, app: NormalizePath<Router>, pool: SqlitePool) -> Result<()> {
    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("{} listening on http://{addr}", config.service.name());

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    pool.close().await;
    tracing::info!("{} stopped", config.service.name());

    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
