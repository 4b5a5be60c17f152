//! Typed error handling for catalog operations
//!
//! Clients match on the error category rather than parsing strings:
//!
//! ```rust,ignore
//! match store.set_order_status(id, raw_status) {
//!     Ok(order) => render(order),
//!     Err(CatalogError::Validation(e)) => show_field_error(e.field, &e.message),
//!     Err(CatalogError::NotFound(e)) => show_missing(e.resource, e.id),
//!     Err(e) => report(e),
//! }
//! ```

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for all catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Input violates a field constraint; no state was changed
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Operation targeted an id absent from the collection
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Internal failure (lock poisoning); should not happen in normal operation
    #[error("internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Machine-readable error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::Validation(_) => "VALIDATION_ERROR",
            CatalogError::NotFound(_) => "NOT_FOUND",
            CatalogError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to a response object for presentation collaborators
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code(),
            message: self.to_string(),
        }
    }
}

/// Serializable error shape handed to presentation collaborators
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: &'static str,
    /// Human-readable error message
    pub message: String,
}

/// Input violates a field constraint (bad enum value, negative number,
/// out-of-range year). Raised before any mutation is applied.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid value for '{field}': {message}")]
pub struct ValidationError {
    /// The offending input field, in its wire spelling (e.g. "bodyType")
    pub field: &'static str,
    /// What the constraint was and how the value broke it
    pub message: String,
}

impl ValidationError {
    /// Create a validation error for a single field
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Value is not in the closed set of recognized values
    pub fn unknown_value(field: &'static str, value: &str, allowed: &[&str]) -> Self {
        Self {
            field,
            message: format!("'{}' is not one of {:?}", value, allowed),
        }
    }
}

/// Operation targeted an id that is not in the collection
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("{resource} {id} not found")]
pub struct NotFoundError {
    /// Singular resource name ("car" or "order")
    pub resource: &'static str,
    /// The id that failed to resolve
    pub id: Uuid,
}

impl NotFoundError {
    /// Create a not-found error for a resource/id pair
    pub fn new(resource: &'static str, id: Uuid) -> Self {
        Self { resource, id }
    }
}

/// Result alias used throughout the crate
pub type Result<T, E = CatalogError> = std::result::Result<T, E>;
