use serde::Deserialize;

use crate::types::common::{GhRepository, GhUser};

/// GitHub Ping event.
///
/// Every field is optional: a ping only needs to be acknowledged, whatever
/// its body looks like.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GhPingEvent {
    /// Zen text.
    pub zen: Option<String>,
    /// Hook ID.
    pub hook_id: Option<u64>,
    /// Repository.
    pub repository: Option<GhRepository>,
    /// Sender.
    pub sender: Option<GhUser>,
}
