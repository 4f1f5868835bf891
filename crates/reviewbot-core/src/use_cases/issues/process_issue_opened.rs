use reviewbot_aiapi_interface::AiService;
use reviewbot_config::Config;
use reviewbot_ghapi_interface::{types::GhIssueEvent, ApiService};
use tracing::{error, info};

use super::ISSUE_ANALYSIS_MARKER;
use crate::{
    use_cases::ai::{build_issue_analysis_prompt, GenerateText},
    Result,
};

/// Post a fresh analysis on a newly opened (or reopened) issue.
pub struct ProcessIssueOpened<'a> {
    pub api_service: &'a dyn ApiService,
    pub ai_service: &'a dyn AiService,
    pub config: &'a Config,
}

impl ProcessIssueOpened<'_> {
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

        info!(message = "Handling new issue");

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

        let body = format!("{ISSUE_ANALYSIS_MARKER}\n\n{analysis}");
        match self
            .api_service
            .comments_post(owner, name, number, &body)
            .await
        {
            Ok(comment_id) => info!(comment_id, message = "Posted issue analysis"),
            Err(err) => error!(error = %err, message = "Failed to post issue analysis"),
        }

        Ok(())
    }
}
