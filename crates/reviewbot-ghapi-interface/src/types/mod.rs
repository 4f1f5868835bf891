//! GitHub wire types.

mod common;
mod issues;
mod ping;
mod pulls;

pub use common::{GhRepository, GhUser};
pub use issues::{
    GhIssue, GhIssueAction, GhIssueComment, GhIssueCommentAction, GhIssueCommentEvent,
    GhIssueEvent, GhIssueState, GhPullRequestLink,
};
pub use ping::GhPingEvent;
pub use pulls::{
    GhPullRequest, GhPullRequestAction, GhPullRequestEvent, GhPullRequestFile, GhPullRequestState,
};
