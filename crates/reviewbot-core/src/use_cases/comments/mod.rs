//! Comment use cases.

mod handle_issue_comment_event;
mod reconcile_bot_comment;

pub use handle_issue_comment_event::HandleIssueCommentEvent;
pub use reconcile_bot_comment::{ReconcileBotComment, ReconcileBotCommentInterface};
#[cfg(any(test, feature = "testkit"))]
pub use reconcile_bot_comment::MockReconcileBotCommentInterface;
