//! API errors.

use thiserror::Error;

/// API error.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result alias for `ApiError`.
pub type Result<T, E = ApiError> = core::result::Result<T, E>;
