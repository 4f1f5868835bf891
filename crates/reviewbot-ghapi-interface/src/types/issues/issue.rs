use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use time::OffsetDateTime;

use super::GhIssueState;
use crate::types::common::GhUser;

/// Link to the pull request behind an issue.
///
/// Present on issue payloads only when the issue actually is a pull request.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhPullRequestLink {
    /// API URL of the pull request.
    #[serde(default)]
    pub url: String,
}

/// GitHub Issue.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, SmartDefault)]
pub struct GhIssue {
    /// Number.
    pub number: u64,
    /// Title.
    pub title: String,
    /// User.
    pub user: GhUser,
    /// State.
    #[serde(default)]
    pub state: GhIssueState,
    /// Created at.
    #[default(OffsetDateTime::now_utc())]
    #[serde(default = "OffsetDateTime::now_utc", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Updated at.
    #[default(OffsetDateTime::now_utc())]
    #[serde(default = "OffsetDateTime::now_utc", with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    /// Body.
    pub body: Option<String>,
    /// Pull request link, when the issue is a pull request.
    #[serde(default)]
    pub pull_request: Option<GhPullRequestLink>,
}
