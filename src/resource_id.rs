//! Resource id parsing.
//!
//! Resource Manager identifies everything by a path of the form
//! `/subscriptions/{sub}/resourceGroups/{rg}/providers/{namespace}/{type}/{name}`,
//! optionally followed by one child `{type}/{name}` pair. Sub-resource
//! references carry these paths instead of embedded definitions.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Parsed Resource Manager id path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceId {
    pub subscription_id: String,
    pub resource_group: String,
    pub provider_namespace: String,
    pub resource_type: String,
    pub name: String,
    /// Child type segment, present together with `child_name`.
    pub child_type: Option<String>,
    pub child_name: Option<String>,
}

impl ResourceId {
    /// Parse an id path. Path keywords are matched case-insensitively;
    /// every segment must be non-empty.
    pub fn parse(id: &str) -> Result<Self> {
        let malformed = || Error::MalformedResourceId(id.to_string());

        let segments: Vec<&str> = id.split('/').filter(|s| !s.is_empty()).collect();
        if segments.len() != 8 && segments.len() != 10 {
            return Err(malformed());
        }
        if !segments[0].eq_ignore_ascii_case("subscriptions")
            || !segments[2].eq_ignore_ascii_case("resourceGroups")
            || !segments[4].eq_ignore_ascii_case("providers")
        {
            return Err(malformed());
        }

        let (child_type, child_name) = if segments.len() == 10 {
            (
                Some(segments[8].to_string()),
                Some(segments[9].to_string()),
            )
        } else {
            (None, None)
        };

        Ok(Self {
            subscription_id: segments[1].to_string(),
            resource_group: segments[3].to_string(),
            provider_namespace: segments[5].to_string(),
            resource_type: segments[6].to_string(),
            name: segments[7].to_string(),
            child_type,
            child_name,
        })
    }

    /// Whether this id addresses a child resource.
    pub fn is_child(&self) -> bool {
        self.child_type.is_some()
    }
}

impl FromStr for ResourceId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/subscriptions/{}/resourceGroups/{}/providers/{}/{}/{}",
            self.subscription_id,
            self.resource_group,
            self.provider_namespace,
            self.resource_type,
            self.name
        )?;
        if let (Some(child_type), Some(child_name)) = (&self.child_type, &self.child_name) {
            write!(f, "/{}/{}", child_type, child_name)?;
        }
        Ok(())
    }
}

/// Extract the short name from a resource id path
/// e.g., "/subscriptions/s/resourceGroups/g/providers/Microsoft.Network/subnets/default" -> "default"
pub fn short_name(id: &str) -> &str {
    id.rsplit('/').next().unwrap_or(id)
}
