use reviewbot_aiapi_interface::AiService;
use reviewbot_config::Config;
use reviewbot_ghapi_interface::{
    types::{GhIssueCommentAction, GhIssueCommentEvent},
    ApiService,
};
use serde_json::Value;
use tracing::{error, info};

use crate::{
    schemas::validate_comment_payload,
    use_cases::ai::{build_comment_reply_prompt, GenerateText},
    Result,
};

pub struct HandleIssueCommentEvent<'a> {
    pub api_service: &'a dyn ApiService,
    pub ai_service: &'a dyn AiService,
    pub config: &'a Config,
}

impl HandleIssueCommentEvent<'_> {
    #[tracing::instrument(skip_all)]
    pub async fn run(&self, payload: &Value) -> Result<()> {
        if let Err(err) = validate_comment_payload(payload) {
            error!(error = %err, message = "Rejecting comment payload");
            return Ok(());
        }

        let event: GhIssueCommentEvent = match serde_json::from_value(payload.clone()) {
            Ok(event) => event,
            Err(err) => {
                error!(error = %err, message = "Could not decode comment payload");
                return Ok(());
            }
        };

        if event.action != GhIssueCommentAction::Created {
            info!(action = ?event.action, message = "Ignoring comment action");
            return Ok(());
        }

        self.process_created(&event).await
    }

    #[tracing::instrument(
        skip_all,
        fields(
            issue_number = event.issue.number,
            repository_path = %event.repository.path(),
            username = %event.comment.user.login
        )
    )]
    async fn process_created(&self, event: &GhIssueCommentEvent) -> Result<()> {
        let commenter = &event.comment.user.login;

        if commenter.to_lowercase() == self.config.name.to_lowercase() {
            info!(message = "Ignoring comment from the bot itself");
            return Ok(());
        }

        let mention = format!("@{}", self.config.name).to_lowercase();
        if !event.comment.body.to_lowercase().contains(&mention) {
            info!(message = "Bot not mentioned in comment, ignoring");
            return Ok(());
        }

        info!(message = "Bot mentioned in comment");

        let owner = &event.repository.owner.login;
        let name = &event.repository.name;
        let issue_number = event.issue.number;

        // PR and issue comments go through the same endpoint; the
        // classification only shapes the reply context.
        let target_kind = if event.issue.pull_request.is_some() {
            "Pull Request"
        } else {
            "Issue"
        };
        let context = format!("{target_kind} #{issue_number}: {}", event.issue.title);

        let prompt = build_comment_reply_prompt(&event.comment.body, &context);
        let response = match (GenerateText {
            ai_service: self.ai_service,
            config: self.config,
        })
        .run(&prompt)
        .await
        {
            Some(response) => response,
            None => {
                error!(message = "Failed to generate comment response");
                return Ok(());
            }
        };

        let body = format!("Hi @{commenter}! 👋\n\n{response}");
        match self
            .api_service
            .comments_post(owner, name, issue_number, &body)
            .await
        {
            Ok(comment_id) => info!(comment_id, message = "Responded to comment"),
            Err(err) => error!(error = %err, message = "Failed to respond to comment"),
        }

        Ok(())
    }
}
