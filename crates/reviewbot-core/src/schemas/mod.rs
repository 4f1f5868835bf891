//! Webhook payload schemas.
//!
//! One versioned, embedded schema document per event kind, compiled once.
//! Validation runs before any payload field is trusted by a handler.

use jsonschema::Validator;
use lazy_static::lazy_static;
use serde_json::Value;
use thiserror::Error;

const PULL_REQUEST_EVENT_SCHEMA: &str = include_str!("pull_request_event-1.json");
const ISSUE_EVENT_SCHEMA: &str = include_str!("issue_event-1.json");
const ISSUE_COMMENT_EVENT_SCHEMA: &str = include_str!("issue_comment_event-1.json");

/// Schema validation error.
#[derive(Debug, Error)]
#[error("Invalid {kind} payload: {message}")]
pub struct SchemaError {
    /// Event kind the payload was validated as.
    pub kind: &'static str,
    /// Diagnostic, including the failing instance path.
    pub message: String,
}

lazy_static! {
    static ref PULL_REQUEST_EVENT_VALIDATOR: Validator = compile(PULL_REQUEST_EVENT_SCHEMA);
    static ref ISSUE_EVENT_VALIDATOR: Validator = compile(ISSUE_EVENT_SCHEMA);
    static ref ISSUE_COMMENT_EVENT_VALIDATOR: Validator = compile(ISSUE_COMMENT_EVENT_SCHEMA);
}

fn compile(document: &str) -> Validator {
    let schema: Value =
        serde_json::from_str(document).expect("embedded schema document is valid JSON");
    jsonschema::validator_for(&schema).expect("embedded schema document is a valid JSON Schema")
}

fn validate(validator: &Validator, kind: &'static str, payload: &Value) -> Result<(), SchemaError> {
    match validator.iter_errors(payload).next() {
        Some(error) => Err(SchemaError {
            kind,
            message: error.to_string(),
        }),
        None => Ok(()),
    }
}

/// Validate a pull request webhook payload.
pub fn validate_pull_request_payload(payload: &Value) -> Result<(), SchemaError> {
    validate(&PULL_REQUEST_EVENT_VALIDATOR, "pull_request", payload)
}

/// Validate an issue webhook payload.
pub fn validate_issue_payload(payload: &Value) -> Result<(), SchemaError> {
    validate(&ISSUE_EVENT_VALIDATOR, "issues", payload)
}

/// Validate an issue comment webhook payload.
pub fn validate_comment_payload(payload: &Value) -> Result<(), SchemaError> {
    validate(&ISSUE_COMMENT_EVENT_VALIDATOR, "issue_comment", payload)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn pull_request_payload() -> Value {
        json!({
            "action": "opened",
            "pull_request": {
                "number": 1,
                "title": "Add feature",
                "body": "Some description",
                "user": { "login": "someone" }
            },
            "repository": {
                "name": "test",
                "owner": { "login": "me" }
            }
        })
    }

    #[test]
    fn complete_pull_request_payload_passes() {
        validate_pull_request_payload(&pull_request_payload()).unwrap();
    }

    #[test]
    fn pull_request_payload_without_repository_owner_fails() {
        let mut payload = pull_request_payload();
        payload["repository"]
            .as_object_mut()
            .unwrap()
            .remove("owner");

        let err = validate_pull_request_payload(&payload).unwrap_err();
        assert_eq!(err.kind, "pull_request");
    }

    #[test]
    fn pull_request_payload_with_empty_login_fails() {
        let mut payload = pull_request_payload();
        payload["pull_request"]["user"]["login"] = json!("");

        assert!(validate_pull_request_payload(&payload).is_err());
    }

    #[test]
    fn pull_request_payload_with_string_number_fails() {
        let mut payload = pull_request_payload();
        payload["pull_request"]["number"] = json!("1");

        assert!(validate_pull_request_payload(&payload).is_err());
    }

    #[test]
    fn null_pull_request_body_is_accepted() {
        let mut payload = pull_request_payload();
        payload["pull_request"]["body"] = json!(null);

        validate_pull_request_payload(&payload).unwrap();
    }

    #[test]
    fn complete_issue_payload_passes() {
        validate_issue_payload(&json!({
            "action": "opened",
            "issue": {
                "number": 2,
                "title": "Something broke",
                "body": "Details",
                "user": { "login": "someone" }
            },
            "repository": {
                "name": "test",
                "owner": { "login": "me" }
            }
        }))
        .unwrap();
    }

    #[test]
    fn issue_payload_without_issue_fails() {
        let err = validate_issue_payload(&json!({
            "action": "opened",
            "repository": { "name": "test", "owner": { "login": "me" } }
        }))
        .unwrap_err();

        assert_eq!(err.kind, "issues");
    }

    #[test]
    fn complete_comment_payload_passes() {
        validate_comment_payload(&json!({
            "action": "created",
            "comment": {
                "id": 3,
                "body": "@reviewbot what do you think?",
                "user": { "login": "someone" }
            },
            "issue": {
                "number": 2,
                "title": "Something broke",
                "user": { "login": "someone" }
            },
            "repository": {
                "name": "test",
                "owner": { "login": "me" }
            }
        }))
        .unwrap();
    }

    #[test]
    fn comment_payload_without_comment_user_fails() {
        assert!(validate_comment_payload(&json!({
            "action": "created",
            "comment": { "id": 3, "body": "hello" },
            "issue": {
                "number": 2,
                "title": "Something broke",
                "user": { "login": "someone" }
            },
            "repository": {
                "name": "test",
                "owner": { "login": "me" }
            }
        }))
        .is_err());
    }
}
