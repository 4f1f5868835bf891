use async_trait::async_trait;

use crate::Result;

/// Text generation adapter interface.
///
/// One call is one attempt: retry discipline belongs to the caller.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait(?Send)]
pub trait AiService: Send + Sync {
    /// Submit a prompt and get the generated text back.
    async fn text_generate(&self, prompt: &str) -> Result<String>;
}
