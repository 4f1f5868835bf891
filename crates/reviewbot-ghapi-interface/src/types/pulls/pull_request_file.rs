use serde::{Deserialize, Serialize};

/// GitHub Pull request changed file.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhPullRequestFile {
    /// File path.
    pub filename: String,
    /// Change status (added, modified, removed, ...).
    #[serde(default)]
    pub status: String,
    /// Added lines.
    #[serde(default)]
    pub additions: u64,
    /// Removed lines.
    #[serde(default)]
    pub deletions: u64,
    /// Total changed lines.
    #[serde(default)]
    pub changes: u64,
}
