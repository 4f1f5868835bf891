//! Issue comment webhook handlers.

use actix_web::HttpResponse;
use reviewbot_core::use_cases::comments::HandleIssueCommentEvent;
use serde_json::Value;

use crate::{errors::Result, server::AppContext, ServerError};

pub(crate) async fn issue_comment_event(ctx: &AppContext, payload: Value) -> Result<HttpResponse> {
    HandleIssueCommentEvent {
        api_service: ctx.api_service.as_ref(),
        ai_service: ctx.ai_service.as_ref(),
        config: &ctx.config,
    }
    .run(&payload)
    .await
    .map_err(|e| ServerError::DomainError { source: e })?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "Comment event processed"
    })))
}
