//! Webhook handlers.

mod comments;
mod issues;
mod ping;
mod pulls;

#[cfg(test)]
mod tests;

use std::convert::TryFrom;

use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use tracing::info;

use crate::{
    constants::GITHUB_EVENT_HEADER, errors::Result, event_type::EventType, server::AppContext,
    utils::convert_payload_to_string, ServerError,
};

#[tracing::instrument(skip_all, fields(event_type = %event_type))]
async fn parse_event(
    ctx: &AppContext,
    event_type: EventType,
    payload: Value,
) -> Result<HttpResponse> {
    match event_type {
        EventType::Ping => Ok(ping::ping_event(ping::parse_ping_event(payload)?)),
        EventType::PullRequest => pulls::pull_request_event(ctx, payload).await,
        EventType::Issues => issues::issue_event(ctx, payload).await,
        EventType::IssueComment => comments::issue_comment_event(ctx, payload).await,
    }
}

fn extract_event_from_request(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(GITHUB_EVENT_HEADER)
        .and_then(|x| x.to_str().ok())
}

#[tracing::instrument(skip_all)]
pub(crate) async fn event_handler(
    req: HttpRequest,
    mut payload: web::Payload,
    ctx: web::Data<AppContext>,
) -> ActixResult<HttpResponse> {
    let body = convert_payload_to_string(&mut payload)
        .await
        .map_err(|_| ServerError::PayloadReadError)?;
    if body.is_empty() {
        return Err(ServerError::EmptyPayload.into());
    }

    let payload: Value =
        serde_json::from_str(&body).map_err(|e| ServerError::InvalidJsonPayload { source: e })?;

    let raw_event_type =
        extract_event_from_request(&req).ok_or(ServerError::MissingEventHeader)?;

    let action = payload
        .get("action")
        .and_then(Value::as_str)
        .unwrap_or("unknown");
    info!(
        event_type = raw_event_type,
        action,
        message = "Received webhook"
    );

    match EventType::try_from(raw_event_type) {
        Ok(event_type) => parse_event(&ctx, event_type, payload)
            .await
            .map_err(Into::into),
        Err(_) => {
            info!(
                event_type = raw_event_type,
                message = "Unsupported event type"
            );
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "status": "Unsupported event type - ignored"
            })))
        }
    }
}

/// Configure webhook handlers.
pub fn configure_webhook_handlers(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(event_handler)));
}
