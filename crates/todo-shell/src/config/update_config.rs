use serde::{Deserialize, Serialize};

/// Self-update feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateConfig {
    /// URL of the JSON release manifest. Update checks fail when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed_url: Option<String>,
}
