use reviewbot_aiapi_interface::AiService;
use reviewbot_config::Config;
use reviewbot_ghapi_interface::{
    types::{GhIssueAction, GhIssueEvent},
    ApiService,
};
use serde_json::Value;
use tracing::{error, info};

use super::{ProcessIssueOpened, UpdateIssueAnalysis};
use crate::{schemas::validate_issue_payload, use_cases::comments::ReconcileBotComment, Result};

/// Entry point for `issues` webhook deliveries.
pub struct HandleIssueEvent<'a> {
    pub api_service: &'a dyn ApiService,
    pub ai_service: &'a dyn AiService,
    pub config: &'a Config,
}

impl HandleIssueEvent<'_> {
    #[tracing::instrument(skip_all)]
    pub async fn run(&self, payload: &Value) -> Result<()> {
        if let Err(err) = validate_issue_payload(payload) {
            error!(error = %err, message = "Rejecting issue payload");
            return Ok(());
        }

        let event: GhIssueEvent = match serde_json::from_value(payload.clone()) {
            Ok(event) => event,
            Err(err) => {
                error!(error = %err, message = "Could not decode issue payload");
                return Ok(());
            }
        };

        match event.action {
            GhIssueAction::Opened | GhIssueAction::Reopened => {
                ProcessIssueOpened {
                    api_service: self.api_service,
                    ai_service: self.ai_service,
                    config: self.config,
                }
                .run(&event)
                .await
            }
            GhIssueAction::Edited => {
                let reconcile_bot_comment = ReconcileBotComment {
                    api_service: self.api_service,
                    config: self.config,
                };

                UpdateIssueAnalysis {
                    ai_service: self.ai_service,
                    config: self.config,
                    reconcile_bot_comment: &reconcile_bot_comment,
                }
                .run(&event)
                .await
            }
            action => {
                info!(action = ?action, message = "Ignoring issue action");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use reviewbot_aiapi_interface::MockAiService;
    use reviewbot_ghapi_interface::MockApiService;
    use serde_json::json;

    use super::*;

    fn test_config() -> Config {
        let mut config = Config::from_env_no_version();
        config.name = "reviewbot".into();
        config
    }

    fn issue_payload(action: &str) -> Value {
        json!({
            "action": action,
            "issue": {
                "number": 2,
                "title": "Something broke",
                "body": "Crash details",
                "user": { "login": "someone" }
            },
            "repository": {
                "name": "test",
                "owner": { "login": "me" }
            }
        })
    }

    #[tokio::test]
    async fn opened_action_posts_an_analysis() {
        let api_service = {
            let mut svc = MockApiService::new();
            svc.expect_comments_post()
                .once()
                .returning(|_, _, _, _| Ok(5));
            svc
        };
        let ai_service = {
            let mut svc = MockAiService::new();
            svc.expect_text_generate()
                .once()
                .returning(|_| Ok("An analysis.".into()));
            svc
        };
        let config = test_config();

        HandleIssueEvent {
            api_service: &api_service,
            ai_service: &ai_service,
            config: &config,
        }
        .run(&issue_payload("opened"))
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn edited_action_reconciles_the_existing_comment() {
        let api_service = {
            let mut svc = MockApiService::new();
            svc.expect_comments_find_by_marker()
                .once()
                .returning(|_, _, _, _, _| {
                    Ok(Some(reviewbot_ghapi_interface::types::GhIssueComment {
                        id: 5,
                        ..Default::default()
                    }))
                });
            svc.expect_comments_update()
                .once()
                .returning(|_, _, comment_id, _| Ok(comment_id));
            svc
        };
        let ai_service = {
            let mut svc = MockAiService::new();
            svc.expect_text_generate()
                .once()
                .returning(|_| Ok("A refreshed analysis.".into()));
            svc
        };
        let config = test_config();

        HandleIssueEvent {
            api_service: &api_service,
            ai_service: &ai_service,
            config: &config,
        }
        .run(&issue_payload("edited"))
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn closed_action_is_ignored() {
        let api_service = MockApiService::new();
        let ai_service = MockAiService::new();
        let config = test_config();

        HandleIssueEvent {
            api_service: &api_service,
            ai_service: &ai_service,
            config: &config,
        }
        .run(&issue_payload("closed"))
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn invalid_payload_is_rejected_before_any_call() {
        let api_service = MockApiService::new();
        let ai_service = MockAiService::new();
        let config = test_config();

        HandleIssueEvent {
            api_service: &api_service,
            ai_service: &ai_service,
            config: &config,
        }
        .run(&json!({"action": "opened", "issue": {"number": 2}}))
        .await
        .unwrap();
    }
}
