mod pull_request;
mod pull_request_action;
mod pull_request_event;
mod pull_request_file;
mod pull_request_state;

pub use pull_request::GhPullRequest;
pub use pull_request_action::GhPullRequestAction;
pub use pull_request_event::GhPullRequestEvent;
pub use pull_request_file::GhPullRequestFile;
pub use pull_request_state::GhPullRequestState;
