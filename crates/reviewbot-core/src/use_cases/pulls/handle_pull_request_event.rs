use reviewbot_aiapi_interface::AiService;
use reviewbot_config::Config;
use reviewbot_ghapi_interface::{
    types::{GhPullRequestAction, GhPullRequestEvent},
    ApiService,
};
use serde_json::Value;
use tracing::{error, info};

use super::{ProcessPullRequestOpened, UpdatePullRequestReview};
use crate::{
    schemas::validate_pull_request_payload, use_cases::comments::ReconcileBotComment, Result,
};

/// Entry point for `pull_request` webhook deliveries.
pub struct HandlePullRequestEvent<'a> {
    pub api_service: &'a dyn ApiService,
    pub ai_service: &'a dyn AiService,
    pub config: &'a Config,
}

impl HandlePullRequestEvent<'_> {
    #[tracing::instrument(skip_all)]
    pub async fn run(&self, payload: &Value) -> Result<()> {
        if let Err(err) = validate_pull_request_payload(payload) {
            error!(error = %err, message = "Rejecting pull request payload");
            return Ok(());
        }

        let event: GhPullRequestEvent = match serde_json::from_value(payload.clone()) {
            Ok(event) => event,
            Err(err) => {
                error!(error = %err, message = "Could not decode pull request payload");
                return Ok(());
            }
        };

        match event.action {
            // A reopened pull request gets a fresh review, same as a new one.
            GhPullRequestAction::Opened | GhPullRequestAction::Reopened => {
                ProcessPullRequestOpened {
                    api_service: self.api_service,
                    ai_service: self.ai_service,
                    config: self.config,
                }
                .run(&event)
                .await
            }
            GhPullRequestAction::Synchronize => {
                let reconcile_bot_comment = ReconcileBotComment {
                    api_service: self.api_service,
                    config: self.config,
                };

                UpdatePullRequestReview {
                    api_service: self.api_service,
                    ai_service: self.ai_service,
                    config: self.config,
                    reconcile_bot_comment: &reconcile_bot_comment,
                }
                .run(&event)
                .await
            }
            action => {
                info!(action = ?action, message = "Ignoring pull request action");
                Ok(())
            }
        }
    }
}
