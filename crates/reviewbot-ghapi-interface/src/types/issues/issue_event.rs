use serde::{Deserialize, Serialize};

use super::{GhIssue, GhIssueAction};
use crate::types::common::{GhRepository, GhUser};

/// GitHub Issue event.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct GhIssueEvent {
    /// Action.
    pub action: GhIssueAction,
    /// Issue.
    pub issue: GhIssue,
    /// Repository.
    pub repository: GhRepository,
    /// Sender.
    #[serde(default)]
    pub sender: GhUser,
}
