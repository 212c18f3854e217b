//! DTOs for health check endpoints.

use serde::Serialize;

/// Health check response with component status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub checks: HealthChecks,
}

/// Status of each dependency, as `healthy`, `unhealthy` or `disabled`.
///
/// Only the shortener reports its collaborators.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_service: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_service: Option<&'static str>,
}
