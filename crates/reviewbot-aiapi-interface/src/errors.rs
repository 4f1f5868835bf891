//! AI errors.

use thiserror::Error;

/// AI error.
#[derive(Debug, Error)]
pub enum AiError {
    /// No generation capability is configured.
    #[error("Text generation is not configured")]
    NotConfigured,

    /// The backend answered with an empty generation.
    #[error("Empty response from model")]
    EmptyResponse,

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result alias for `AiError`.
pub type Result<T, E = AiError> = core::result::Result<T, E>;
