use serde::{Deserialize, Serialize};

/// GitHub Issue action.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhIssueAction {
    /// Opened.
    #[default]
    Opened,
    /// Edited.
    Edited,
    /// Deleted.
    Deleted,
    /// Pinned.
    Pinned,
    /// Unpinned.
    Unpinned,
    /// Closed.
    Closed,
    /// Reopened.
    Reopened,
    /// Assigned.
    Assigned,
    /// Unassigned.
    Unassigned,
    /// Labeled.
    Labeled,
    /// Unlabeled.
    Unlabeled,
    /// Locked.
    Locked,
    /// Unlocked.
    Unlocked,
    /// Transferred.
    Transferred,
    /// Milestoned.
    Milestoned,
    /// Demilestoned.
    Demilestoned,
}
