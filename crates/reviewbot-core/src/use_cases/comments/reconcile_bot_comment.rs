use async_trait::async_trait;
use reviewbot_config::Config;
use reviewbot_ghapi_interface::ApiService;
use tracing::info;

use crate::Result;

/// Find-existing-or-create-new logic for the single marked bot comment on a
/// target issue or pull request.
///
/// Behind an interface so a persisted target-to-comment mapping could replace
/// the comment scan without touching the handlers.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait(?Send)]
pub trait ReconcileBotCommentInterface {
    async fn run(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        marker: &str,
        body: &str,
    ) -> Result<u64>;
}

pub struct ReconcileBotComment<'a> {
    pub api_service: &'a dyn ApiService,
    pub config: &'a Config,
}

#[async_trait(?Send)]
impl ReconcileBotCommentInterface for ReconcileBotComment<'_> {
    // No cross-delivery locking: two concurrent reconciliations for one
    // target can both miss the existing comment and both post.
    #[tracing::instrument(skip(self, body))]
    async fn run(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        marker: &str,
        body: &str,
    ) -> Result<u64> {
        let existing = self
            .api_service
            .comments_find_by_marker(owner, name, issue_number, &self.config.name, marker)
            .await?;

        match existing {
            Some(comment) => {
                let comment_id = self
                    .api_service
                    .comments_update(owner, name, comment.id, body)
                    .await?;
                info!(comment_id, message = "Updated existing bot comment");
                Ok(comment_id)
            }
            None => {
                let comment_id = self
                    .api_service
                    .comments_post(owner, name, issue_number, body)
                    .await?;
                info!(comment_id, message = "Posted new bot comment");
                Ok(comment_id)
            }
        }
    }
}
