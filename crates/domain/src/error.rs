//! Common error types used across the workspace.
//!
//! Every failure a caller can observe falls into one of three classes:
//! invalid input, a missing resource, or an unexpected storage failure.
//! Each layer defines its own typed errors and converts via `#[from]`.

use crate::validate::ValidationError;

/// Top-level domain error returned by application services.
#[derive(Debug, thiserror::Error)]
pub enum LightsError {
    /// Client-supplied data failed a validator or required-field check.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// The referenced resource does not exist.
    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed unexpectedly.
    #[error("storage failure")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl LightsError {
    /// Stable machine-checkable category, independent of the display text.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::NotFound(_) => "not_found",
            Self::Storage(_) => "storage_failure",
        }
    }
}

/// A lookup by id matched no row.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Resource kind, e.g. `"Light"`.
    pub entity: &'static str,
    /// The id that was requested.
    pub id: String,
}
