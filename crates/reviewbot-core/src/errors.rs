//! Domain errors.

use thiserror::Error;

/// Domain error.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`reviewbot_ghapi_interface::ApiError`].
    #[error("API error: {source}")]
    ApiError {
        source: reviewbot_ghapi_interface::ApiError,
    },
}

impl From<reviewbot_ghapi_interface::ApiError> for DomainError {
    fn from(e: reviewbot_ghapi_interface::ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
