//! Server errors.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::event_type::EventType;

/// Server error.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid request")]
    PayloadReadError,

    #[error("Empty request body")]
    EmptyPayload,

    #[error("Invalid JSON")]
    InvalidJsonPayload { source: serde_json::Error },

    #[error("Missing event type header")]
    MissingEventHeader,

    #[error("Missing signature header")]
    MissingWebhookSignature,

    #[error("Invalid signature")]
    InvalidWebhookSignature,

    #[error("Error while parsing webhook event for type {event_type},\n  caused by: {source}")]
    EventParseError {
        event_type: EventType,
        source: serde_json::Error,
    },

    #[error("I/O error,\n  caused by: {source}")]
    IoError { source: std::io::Error },

    #[error("Domain error,\n  caused by: {source}")]
    DomainError { source: reviewbot_core::DomainError },
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::PayloadReadError
            | ServerError::EmptyPayload
            | ServerError::InvalidJsonPayload { .. }
            | ServerError::MissingEventHeader
            | ServerError::EventParseError { .. } => StatusCode::BAD_REQUEST,
            ServerError::MissingWebhookSignature | ServerError::InvalidWebhookSignature => {
                StatusCode::FORBIDDEN
            }
            ServerError::IoError { .. } | ServerError::DomainError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}

/// Result alias for `ServerError`.
pub type Result<T> = core::result::Result<T, ServerError>;
