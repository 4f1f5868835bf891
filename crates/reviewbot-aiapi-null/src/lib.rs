//! Null driver for text generation.
//!
//! Used when no generation backend is configured: every call reports the
//! capability as absent, which callers translate into a logged no-op.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use reviewbot_aiapi_interface::{AiError, AiService, Result};

/// Null AI service.
#[derive(Clone, Default)]
pub struct NullAiService {
    _private: (),
}

impl NullAiService {
    /// Build a null AI service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait(?Send)]
impl AiService for NullAiService {
    #[tracing::instrument(skip_all)]
    async fn text_generate(&self, _prompt: &str) -> Result<String> {
        Err(AiError::NotConfigured)
    }
}
