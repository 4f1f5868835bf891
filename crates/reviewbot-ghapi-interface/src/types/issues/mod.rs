mod issue;
mod issue_action;
mod issue_comment;
mod issue_comment_action;
mod issue_comment_event;
mod issue_event;
mod issue_state;

pub use issue::{GhIssue, GhPullRequestLink};
pub use issue_action::GhIssueAction;
pub use issue_comment::GhIssueComment;
pub use issue_comment_action::GhIssueCommentAction;
pub use issue_comment_event::GhIssueCommentEvent;
pub use issue_event::GhIssueEvent;
pub use issue_state::GhIssueState;
