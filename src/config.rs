//! Client configuration.
//!
//! Request options for [`crate::NetworkClient`], plus discovery of the
//! default subscription from the environment and the Azure CLI profile.

use serde::Deserialize;
use std::path::PathBuf;

/// Resource Manager endpoint for the public cloud.
pub const DEFAULT_ENDPOINT: &str = "https://management.azure.com";

/// API version sent with every request unless overridden.
pub const DEFAULT_API_VERSION: &str = "2016-12-01";

/// Default seconds between long-running-operation polls when the server
/// omits Retry-After.
pub const DEFAULT_LONG_RUNNING_RETRY_AFTER: u64 = 30;

/// Request options for a [`crate::NetworkClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Resource Manager endpoint, without a trailing slash.
    pub endpoint: String,
    /// `api-version` query parameter value.
    pub api_version: String,
    /// `accept-language` header value.
    pub accept_language: Option<String>,
    /// Extra product token appended to the User-Agent header.
    pub user_agent_suffix: Option<String>,
    /// Fallback poll interval (seconds) for long-running operations.
    pub long_running_retry_after: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            accept_language: Some("en-US".to_string()),
            user_agent_suffix: None,
            long_running_retry_after: DEFAULT_LONG_RUNNING_RETRY_AFTER,
        }
    }
}

impl ClientOptions {
    /// Full User-Agent header value.
    pub(crate) fn user_agent(&self) -> String {
        match &self.user_agent_suffix {
            Some(suffix) => format!("aznet/{} {}", crate::VERSION, suffix),
            None => format!("aznet/{}", crate::VERSION),
        }
    }
}

/// Get the Azure CLI configuration directory
pub fn azure_config_dir() -> Option<PathBuf> {
    // Check AZURE_CONFIG_DIR environment variable first
    if let Ok(path) = std::env::var("AZURE_CONFIG_DIR") {
        return Some(PathBuf::from(path));
    }

    // Default to ~/.azure
    dirs::home_dir().map(|p| p.join(".azure"))
}

/// Validate a subscription id (UUID shape).
fn validate_subscription_id(subscription: &str) -> bool {
    let bytes = subscription.as_bytes();
    if bytes.len() != 36 {
        return false;
    }

    for (i, b) in bytes.iter().enumerate() {
        match i {
            8 | 13 | 18 | 23 => {
                if *b != b'-' {
                    return false;
                }
            }
            _ => {
                if !b.is_ascii_hexdigit() {
                    return false;
                }
            }
        }
    }
    true
}

#[derive(Deserialize)]
struct AzureProfile {
    #[serde(default)]
    subscriptions: Vec<ProfileSubscription>,
}

#[derive(Deserialize)]
struct ProfileSubscription {
    #[serde(default)]
    id: String,
    #[serde(rename = "isDefault", default)]
    is_default: bool,
}

/// Read the default subscription from the environment or the Azure CLI
/// profile. Validates the id format before returning.
pub fn default_subscription() -> Option<String> {
    // Check environment variable first
    if let Ok(subscription) = std::env::var("AZURE_SUBSCRIPTION_ID") {
        if validate_subscription_id(&subscription) {
            return Some(subscription);
        }
        tracing::warn!("Invalid subscription id format in AZURE_SUBSCRIPTION_ID");
    }

    // Try to read from the Azure CLI profile
    let profile_path = azure_config_dir()?.join("azureProfile.json");
    let content = std::fs::read_to_string(&profile_path).ok()?;

    // The CLI writes the profile with a UTF-8 BOM
    let content = content.trim_start_matches('\u{feff}');

    let profile: AzureProfile = serde_json::from_str(content).ok()?;
    profile
        .subscriptions
        .iter()
        .find(|s| s.is_default)
        .or_else(|| profile.subscriptions.first())
        .map(|s| s.id.clone())
        .filter(|id| validate_subscription_id(id))
}

/// Get the effective subscription (explicit > env > CLI profile).
pub fn effective_subscription(explicit: Option<&str>) -> Option<String> {
    explicit
        .map(|s| s.to_string())
        .or_else(default_subscription)
}
