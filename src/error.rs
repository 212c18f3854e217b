//! Application error type shared by all three services.
//!
//! Every fallible handler returns [`AppError`], which renders as
//! `{"error": "<message>"}` with the matching status code. Diagnostic
//! details are logged, not returned to the client.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Error body returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    /// Unique constraint hit. Only surfaces inside code generation, which
    /// retries on it; handlers never see it for generated codes.
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn details(&self) -> &Value {
        match self {
            AppError::Validation { details, .. }
            | AppError::NotFound { details, .. }
            | AppError::Conflict { details, .. }
            | AppError::Internal { details, .. } => details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, details = %self.details(), "Request failed");
        } else {
            tracing::debug!(error = %self, details = %self.details(), "Request rejected");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

impl From<validator::ValidationErrors> for AppError {
    /// Uses the fields' custom `message`s when the DTO declares them,
    /// otherwise names the offending fields.
    fn from(errors: validator::ValidationErrors) -> Self {
        let field_errors = errors.field_errors();

        let mut fields: Vec<String> = field_errors.keys().map(|field| field.to_string()).collect();
        fields.sort();

        let mut messages: Vec<String> = field_errors
            .values()
            .flat_map(|errs| errs.iter())
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .collect();
        messages.sort();
        messages.dedup();

        let message = match (messages.as_slice(), fields.as_slice()) {
            ([], []) => "Invalid request".to_string(),
            ([], [field]) => format!("{} is required", field),
            ([], _) => format!("{} are required", fields.join(" and ")),
            (custom, _) => custom.join("; "),
        };

        AppError::bad_request(message, json!({ "fields": fields }))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid JSON body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

/// Maps SQLx errors to application errors.
///
/// Unique violations become [`AppError::Conflict`] so callers can retry with
/// a different key; everything else is an internal database error.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return AppError::conflict(
            "Unique constraint violation",
            json!({ "constraint": db.constraint(), "reason": db.message() }),
        );
    }

    AppError::internal("Database error", json!({ "reason": e.to_string() }))
}
