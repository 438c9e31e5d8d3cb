//! Application Error Types
//!
//! Centralized error handling with Axum integration. Every failure that
//! reaches the HTTP boundary is rendered as an RFC 7807 problem-details body.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Serialize;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Body, query string or path could not be decoded.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Field-level violations reported by request DTO validation.
    #[error("Request validation failed")]
    InvalidFields(Vec<FieldError>),

    /// Business-level input validation (date format, participant bounds).
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Guide #{0} not found")]
    GuideNotFound(i64),

    #[error("Guide #{0} is inactive")]
    GuideInactive(i64),

    #[error("Guide #{guide_id} already booked on {date}")]
    GuideAlreadyBooked { guide_id: i64, date: NaiveDate },

    /// A storage uniqueness constraint rejected the write.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),

    /// No route matched, or the route does not accept the method.
    #[error("{0}")]
    Http(StatusCode),
}

/// Field-level validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// RFC 7807 problem-details body.
///
/// `instance` is left empty by [`AppError::into_response`]; the
/// `problem_details` middleware fills it in with the request path.
#[derive(Debug, Clone, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'static str,
    pub status: u16,
    pub detail: String,
    pub instance: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
    /// Server-side failures are logged once the request path is known.
    #[serde(skip)]
    pub log_cause: Option<String>,
}

pub const PROBLEM_JSON: &str = "application/problem+json";

impl ProblemDetails {
    fn new(status: StatusCode, title: &'static str, detail: impl Into<String>) -> Self {
        Self {
            kind: "about:blank",
            title,
            status: status.as_u16(),
            detail: detail.into(),
            instance: String::new(),
            errors: None,
            log_cause: None,
        }
    }

    fn with_errors(mut self, errors: Vec<FieldError>) -> Self {
        self.errors = Some(errors);
        self
    }

    fn logged(mut self, cause: String) -> Self {
        self.log_cause = Some(cause);
        self
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<AppError> for ProblemDetails {
    fn from(err: AppError) -> Self {
        let detail = err.to_string();
        match err {
            AppError::InvalidFields(errors) => ProblemDetails::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation failed",
                "Request validation failed",
            )
            .with_errors(errors),
            AppError::Validation(msg) => {
                ProblemDetails::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation failed", msg)
            }
            AppError::BadRequest(msg) => {
                ProblemDetails::new(StatusCode::BAD_REQUEST, "Bad request", msg)
            }
            AppError::GuideNotFound(_) => {
                ProblemDetails::new(StatusCode::NOT_FOUND, "Guide not found", detail)
            }
            AppError::GuideInactive(_) => {
                ProblemDetails::new(StatusCode::UNPROCESSABLE_ENTITY, "Guide is inactive", detail)
            }
            AppError::GuideAlreadyBooked { .. } => {
                ProblemDetails::new(StatusCode::CONFLICT, "Guide already booked", detail)
            }
            AppError::Conflict(_) => ProblemDetails::new(
                StatusCode::CONFLICT,
                "Conflict",
                "Request conflicts with existing data",
            ),
            AppError::Database(e) => ProblemDetails::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error",
                e.to_string(),
            )
            .logged(detail),
            AppError::Internal(_) => ProblemDetails::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                "Unexpected error",
            )
            .logged(detail),
            AppError::Http(status) => ProblemDetails::new(
                status,
                "HTTP error",
                status.canonical_reason().unwrap_or("Unknown status"),
            ),
        }
    }
}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut response = (status, Json(self.clone())).into_response();
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(PROBLEM_JSON));
        response.extensions_mut().insert(self);
        response
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        ProblemDetails::from(self).into_response()
    }
}
