use reviewbot_aiapi_interface::AiService;
use reviewbot_config::Config;
use reviewbot_ghapi_interface::{types::GhPullRequestEvent, ApiService};
use tracing::{error, info, warn};

use super::PR_REVIEW_MARKER;
use crate::{
    use_cases::{
        ai::{build_pull_request_review_prompt, GenerateText},
        comments::ReconcileBotCommentInterface,
    },
    Result,
};

/// Refresh the review after new commits were pushed, updating the marked
/// comment in place when one exists.
pub struct UpdatePullRequestReview<'a> {
    pub api_service: &'a dyn ApiService,
    pub ai_service: &'a dyn AiService,
    pub config: &'a Config,
    pub reconcile_bot_comment: &'a dyn ReconcileBotCommentInterface,
}

impl UpdatePullRequestReview<'_> {
    #[tracing::instrument(
        skip_all,
        fields(
            pr_number = event.pull_request.number,
            repository_path = %event.repository.path()
        )
    )]
    pub async fn run(&self, event: &GhPullRequestEvent) -> Result<()> {
        let owner = &event.repository.owner.login;
        let name = &event.repository.name;
        let number = event.pull_request.number;

        info!(message = "Handling pull request update");

        let diff = match self.api_service.pulls_get_diff(owner, name, number).await {
            Ok(diff) => diff,
            Err(err) => {
                warn!(error = %err, message = "Could not fetch pull request diff");
                return Ok(());
            }
        };

        let files = match self.api_service.pulls_files_list(owner, name, number).await {
            Ok(files) => files,
            Err(err) => {
                warn!(error = %err, message = "Could not fetch pull request files");
                vec![]
            }
        };

        let prompt = build_pull_request_review_prompt(
            &event.pull_request.title,
            event.pull_request.body.as_deref(),
            &diff,
            &files,
        );
        let review = match (GenerateText {
            ai_service: self.ai_service,
            config: self.config,
        })
        .run(&prompt)
        .await
        {
            Some(review) => review,
            None => {
                error!(message = "Failed to generate pull request review");
                return Ok(());
            }
        };

        let body = format!("{PR_REVIEW_MARKER}\n\n{review}\n\n---\n*Updated: New commits pushed*");
        if let Err(err) = self
            .reconcile_bot_comment
            .run(owner, name, number, PR_REVIEW_MARKER, &body)
            .await
        {
            error!(error = %err, message = "Failed to reconcile pull request review comment");
        }

        Ok(())
    }
}
