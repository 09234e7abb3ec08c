//! Typed error handling for the domain core
//!
//! Every failure a service can surface is one of a small closed set of
//! variants, so transport adapters and tests can match on the specific
//! case instead of string-typed errors.
//!
//! # Example
//!
//! ```rust,ignore
//! match service.get(id).await {
//!     Ok(output) => println!("{:?}", output),
//!     Err(DomainError::NotFound { resource, id }) => {
//!         println!("{} {} is gone", resource, id);
//!     }
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// The error taxonomy exposed by services and stores.
///
/// Errors propagate uninterpreted to the transport boundary; the core
/// performs no retries and substitutes no fallback values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Requested single entity does not exist
    NotFound { resource: &'static str, id: Uuid },

    /// Uniqueness violation on create or update
    Conflict {
        resource: &'static str,
        message: String,
    },

    /// A supplied relation id does not resolve to an existing entity
    /// of the expected type
    InvalidReference { resource: &'static str, id: Uuid },

    /// Supplied password does not meet the policy enforced at the
    /// identity seam
    InvalidPassword(String),

    /// Authentication failed; deliberately carries no detail about
    /// whether the account exists
    InvalidCredentials,

    /// Infrastructure fault (poisoned lock, hasher failure)
    Internal(String),
}

impl DomainError {
    /// Shorthand for a `NotFound` on a given resource type
    pub fn not_found<T: crate::core::entity::StoredEntity>(id: Uuid) -> Self {
        DomainError::NotFound {
            resource: T::resource_name(),
            id,
        }
    }

    /// Shorthand for an `InvalidReference` pointing at a given resource type
    pub fn invalid_reference<T: crate::core::entity::StoredEntity>(id: Uuid) -> Self {
        DomainError::InvalidReference {
            resource: T::resource_name(),
            id,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Conflict { .. } => StatusCode::CONFLICT,
            DomainError::InvalidReference { .. } => StatusCode::BAD_REQUEST,
            DomainError::InvalidPassword(_) => StatusCode::BAD_REQUEST,
            DomainError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the stable error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::NotFound { .. } => "NOT_FOUND",
            DomainError::Conflict { .. } => "CONFLICT",
            DomainError::InvalidReference { .. } => "INVALID_REFERENCE",
            DomainError::InvalidPassword(_) => "INVALID_PASSWORD",
            DomainError::InvalidCredentials => "INVALID_CREDENTIALS",
            DomainError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to a wire-facing response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            DomainError::NotFound { resource, id } => Some(serde_json::json!({
                "resource": resource,
                "id": id.to_string(),
            })),
            DomainError::InvalidReference { resource, id } => Some(serde_json::json!({
                "resource": resource,
                "id": id.to_string(),
            })),
            _ => None,
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound { resource, id } => {
                write!(f, "{} with id '{}' not found", resource, id)
            }
            DomainError::Conflict { resource, message } => {
                write!(f, "conflict on {}: {}", resource, message)
            }
            DomainError::InvalidReference { resource, id } => {
                write!(f, "reference to {} '{}' does not resolve", resource, id)
            }
            DomainError::InvalidPassword(msg) => {
                write!(f, "invalid password: {}", msg)
            }
            DomainError::InvalidCredentials => {
                write!(f, "invalid credentials")
            }
            DomainError::Internal(msg) => {
                write!(f, "internal error: {}", msg)
            }
        }
    }
}

impl std::error::Error for DomainError {}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

/// A specialized Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
