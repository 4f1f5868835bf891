use reviewbot_aiapi_interface::AiService;
use reviewbot_config::Config;
use reviewbot_ghapi_interface::types::GhIssueEvent;
use tracing::{error, info};

use super::ISSUE_ANALYSIS_MARKER;
use crate::{
    use_cases::{
        ai::{build_issue_analysis_prompt, GenerateText},
        comments::ReconcileBotCommentInterface,
    },
    Result,
};

/// Refresh the analysis after an issue was edited, updating the marked
/// comment in place when one exists.
pub struct UpdateIssueAnalysis<'a> {
    pub ai_service: &'a dyn AiService,
    pub config: &'a Config,
    pub reconcile_bot_comment: &'a dyn ReconcileBotCommentInterface,
}

impl UpdateIssueAnalysis<'_> {
    #[tracing::instrument(
        skip_all,
        fields(
            issue_number = event.issue.number,
            repository_path = %event.repository.path()
        )
    )]
    pub async fn run(&self, event: &GhIssueEvent) -> Result<()> {
        let owner = &event.repository.owner.login;
        let name = &event.repository.name;
        let number = event.issue.number;

        info!(message = "Handling edited issue");

        let prompt =
            build_issue_analysis_prompt(&event.issue.title, event.issue.body.as_deref());
        let analysis = match (GenerateText {
            ai_service: self.ai_service,
            config: self.config,
        })
        .run(&prompt)
        .await
        {
            Some(analysis) => analysis,
            None => {
                error!(message = "Failed to generate issue analysis");
                return Ok(());
            }
        };

        let body =
            format!("{ISSUE_ANALYSIS_MARKER}\n\n{analysis}\n\n---\n*Updated: Issue was edited*");
        if let Err(err) = self
            .reconcile_bot_comment
            .run(owner, name, number, ISSUE_ANALYSIS_MARKER, &body)
            .await
        {
            error!(error = %err, message = "Failed to reconcile issue analysis comment");
        }

        Ok(())
    }
}
