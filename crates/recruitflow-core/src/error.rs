//! The unified error type shared by every RecruitFlow crate.
//!
//! Fallible operations return [`AppError`] (usually through the
//! [`AppResult`](crate::result::AppResult) alias) so `?` composes across
//! crate boundaries without per-layer error enums.

use std::fmt;
use thiserror::Error;

/// Category of an [`AppError`].
///
/// The kind decides the HTTP status an error maps to at the API boundary
/// and the wire-level error code; the message carries the detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested resource does not exist.
    NotFound,
    /// The caller could not be authenticated.
    Authentication,
    /// The caller is authenticated but not permitted.
    Authorization,
    /// The input failed validation.
    Validation,
    /// An unexpected internal failure.
    Internal,
    /// The database rejected or failed an operation.
    Database,
    /// A cache operation failed.
    Cache,
    /// Configuration could not be loaded or parsed.
    Configuration,
    /// Data could not be serialized or deserialized.
    Serialization,
}

impl ErrorKind {
    /// Stable machine-readable code for logs and API responses.
    pub fn code(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::Authentication => "AUTHENTICATION",
            Self::Authorization => "AUTHORIZATION",
            Self::Validation => "VALIDATION",
            Self::Internal => "INTERNAL",
            Self::Database => "DATABASE",
            Self::Cache => "CACHE",
            Self::Configuration => "CONFIGURATION",
            Self::Serialization => "SERIALIZATION",
        }
    }

    /// Whether the detail is safe to show to the caller.
    ///
    /// Infrastructure kinds collapse to a generic message at the API
    /// boundary; the full detail stays in the logs.
    fn is_client_facing(self) -> bool {
        matches!(
            self,
            Self::NotFound | Self::Authentication | Self::Authorization | Self::Validation
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Application-wide error: a kind, a message, and an optional cause.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// Error category.
    pub kind: ErrorKind,
    /// Human-readable detail.
    pub message: String,
    /// Underlying cause, when one exists.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Build an error without a cause.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Build an error wrapping an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Authentication failure.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authentication, message)
    }

    /// Authorization failure.
    pub fn authorization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authorization, message)
    }

    /// Input validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Internal failure.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Database failure.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Configuration failure.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }
}

// The boxed source is not Clone; a cloned error keeps kind and message only.
impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

/// JSON body returned for error responses.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        let status = match self.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
            ErrorKind::Authorization => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal
            | ErrorKind::Database
            | ErrorKind::Cache
            | ErrorKind::Configuration
            | ErrorKind::Serialization => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = if self.kind.is_client_facing() {
            ApiErrorResponse {
                error: self.kind.code().to_string(),
                message: self.message,
            }
        } else {
            tracing::error!(kind = %self.kind, error = %self.message, "Internal server error");
            ApiErrorResponse {
                error: "INTERNAL_ERROR".to_string(),
                message: "An internal error occurred".to_string(),
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorKind::Serialization, err.to_string(), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(ErrorKind::Configuration, err.to_string(), err)
    }
}
