//! Shared wire types.

use serde::{Deserialize, Serialize};

/// Reference to another resource by id path, used in place of an embedded
/// definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl SubResource {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }
}

/// Server-reported provisioning states.
///
/// These are informal values, not a closed set; the service may report
/// states not listed here and no client-side transition rules apply.
pub mod provisioning_state {
    pub const SUCCEEDED: &str = "Succeeded";
    pub const UPDATING: &str = "Updating";
    pub const DELETING: &str = "Deleting";
    pub const FAILED: &str = "Failed";
}
