//! HTTP/JSON clients for the analytics and notification services.

use async_trait::async_trait;
use axum::http::header;
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::service::{
    AnalyticsClient, ClickNotice, CollaboratorHealth, CreationNotice, DispatchError,
    DispatchResult, NotificationClient,
};
use crate::domain::entities::click::UNKNOWN_USER_AGENT;
use crate::domain::entities::{BrowserCount, ClickSummary};
use crate::utils::request_info::X_FORWARDED_FOR;

/// Builds the shared outbound HTTP client.
///
/// `connect_timeout` caps connection setup; each request additionally
/// carries its own overall timeout.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_http_client(connect_timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .connect_timeout(connect_timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}

fn map_reqwest_error(e: reqwest::Error) -> DispatchError {
    if e.is_timeout() {
        DispatchError::Timeout
    } else if let Some(status) = e.status() {
        DispatchError::Status(status.as_u16())
    } else if e.is_decode() {
        DispatchError::Decode(e.to_string())
    } else {
        DispatchError::Connection(e.to_string())
    }
}

/// Sends the request and rejects non-2xx responses.
async fn send(request: RequestBuilder) -> DispatchResult<Response> {
    let response = request.send().await.map_err(map_reqwest_error)?;

    if !response.status().is_success() {
        return Err(DispatchError::Status(response.status().as_u16()));
    }

    Ok(response)
}

async fn probe(client: &Client, url: String, timeout: Duration) -> CollaboratorHealth {
    match send(client.get(url).timeout(timeout)).await {
        Ok(_) => CollaboratorHealth::Healthy,
        Err(e) => {
            debug!("Health probe failed: {}", e);
            CollaboratorHealth::Unhealthy
        }
    }
}

fn visitor_user_agent(click: &ClickNotice) -> &str {
    click
        .user_agent
        .as_deref()
        .map(str::trim)
        .filter(|ua| !ua.is_empty())
        .unwrap_or(UNKNOWN_USER_AGENT)
}

fn join_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}

#[derive(Serialize)]
struct TrackBody<'a> {
    short_code: &'a str,
}

#[derive(Deserialize)]
struct SummaryBody {
    short_code: String,
    total_clicks: i64,
    weekly_clicks: i64,
    #[serde(default)]
    popular_browsers: Vec<BrowserBody>,
}

#[derive(Deserialize)]
struct BrowserBody {
    browser: String,
    count: i64,
}

impl From<SummaryBody> for ClickSummary {
    fn from(body: SummaryBody) -> Self {
        ClickSummary {
            short_code: body.short_code,
            total_clicks: body.total_clicks,
            weekly_clicks: body.weekly_clicks,
            popular_browsers: body
                .popular_browsers
                .into_iter()
                .map(|b| BrowserCount {
                    browser: b.browser,
                    count: b.count,
                })
                .collect(),
        }
    }
}

/// Analytics service client.
///
/// `POST /track` forwards the visitor's `User-Agent` and the visitor's IP in
/// `X-Forwarded-For`, so the analytics service records the visitor rather
/// than the shortener. A visitor without a `User-Agent` is sent as
/// `Unknown`; the client-wide default must never reach the click log.
pub struct HttpAnalyticsClient {
    client: Client,
    base_url: String,
    dispatch_timeout: Duration,
    fetch_timeout: Duration,
}

impl HttpAnalyticsClient {
    /// Creates a client for the analytics service at `base_url`.
    ///
    /// - `dispatch_timeout` bounds `track` and health probes
    /// - `fetch_timeout` bounds `fetch_summary`
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        dispatch_timeout: Duration,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            dispatch_timeout,
            fetch_timeout,
        }
    }
}

#[async_trait]
impl AnalyticsClient for HttpAnalyticsClient {
    async fn track(&self, click: ClickNotice) -> DispatchResult<()> {
        let mut request = self
            .client
            .post(join_url(&self.base_url, "track"))
            .timeout(self.dispatch_timeout)
            .header(header::USER_AGENT, visitor_user_agent(&click))
            .json(&TrackBody {
                short_code: &click.short_code,
            });

        if let Some(ip) = &click.ip_address {
            request = request.header(X_FORWARDED_FOR, ip);
        }

        send(request).await?;
        Ok(())
    }

    async fn fetch_summary(&self, short_code: &str) -> DispatchResult<ClickSummary> {
        let url = join_url(&self.base_url, &format!("analytics/{}", short_code));

        let body: SummaryBody = send(self.client.get(url).timeout(self.fetch_timeout))
            .await?
            .json()
            .await
            .map_err(|e| DispatchError::Decode(e.to_string()))?;

        Ok(body.into())
    }

    async fn health_check(&self) -> CollaboratorHealth {
        probe(
            &self.client,
            join_url(&self.base_url, "health"),
            self.dispatch_timeout,
        )
        .await
    }
}

#[derive(Serialize)]
struct NotifyBody<'a> {
    short_code: &'a str,
    original_url: &'a str,
    #[serde(rename = "type")]
    notification_type: &'a str,
}

/// Notification service client (`POST /notify`).
pub struct HttpNotificationClient {
    client: Client,
    base_url: String,
    dispatch_timeout: Duration,
}

impl HttpNotificationClient {
    /// Creates a client for the notification service at `base_url`.
    pub fn new(client: Client, base_url: impl Into<String>, dispatch_timeout: Duration) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            dispatch_timeout,
        }
    }
}

#[async_trait]
impl NotificationClient for HttpNotificationClient {
    async fn notify(&self, notice: CreationNotice) -> DispatchResult<()> {
        let request = self
            .client
            .post(join_url(&self.base_url, "notify"))
            .timeout(self.dispatch_timeout)
            .json(&NotifyBody {
                short_code: &notice.short_code,
                original_url: &notice.original_url,
                notification_type: notice.notification_type.as_str(),
            });

        send(request).await?;
        Ok(())
    }

    async fn health_check(&self) -> CollaboratorHealth {
        probe(
            &self.client,
            join_url(&self.base_url, "health"),
            self.dispatch_timeout,
        )
        .await
    }
}
