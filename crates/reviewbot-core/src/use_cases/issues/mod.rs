//! Issue use cases.

mod handle_issue_event;
mod process_issue_opened;
mod update_issue_analysis;

pub use handle_issue_event::HandleIssueEvent;
pub use process_issue_opened::ProcessIssueOpened;
pub use update_issue_analysis::UpdateIssueAnalysis;

/// Marker identifying the bot analysis comment on an issue.
pub const ISSUE_ANALYSIS_MARKER: &str = "🤖 **Issue Analysis**";
