//! Pull request use cases.

mod handle_pull_request_event;
mod process_pull_request_opened;
mod update_pull_request_review;

pub use handle_pull_request_event::HandlePullRequestEvent;
pub use process_pull_request_opened::ProcessPullRequestOpened;
pub use update_pull_request_review::UpdatePullRequestReview;

/// Marker identifying the bot review comment on a pull request.
pub const PR_REVIEW_MARKER: &str = "🤖 **Automated Code Review**";
