//! Ping webhook handlers.

use actix_web::HttpResponse;
use reviewbot_ghapi_interface::types::GhPingEvent;
use serde_json::Value;
use tracing::info;

use crate::{errors::Result, event_type::EventType, ServerError};

pub(crate) fn parse_ping_event(payload: Value) -> Result<GhPingEvent> {
    serde_json::from_value(payload).map_err(|e| ServerError::EventParseError {
        event_type: EventType::Ping,
        source: e,
    })
}

pub(crate) fn ping_event(event: GhPingEvent) -> HttpResponse {
    let zen = event
        .zen
        .unwrap_or_else(|| "No zen message".to_string());

    if let Some(repository) = event.repository {
        info!(
            zen = %zen,
            repository_path = %repository.path(),
            message = "Webhook ping received from repository"
        );
    } else {
        info!(zen = %zen, message = "Webhook ping received");
    }

    HttpResponse::Ok().json(serde_json::json!({
        "status": "pong",
        "zen": zen
    }))
}
