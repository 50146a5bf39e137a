//! Error types for Resource Manager operations.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error envelope returned by the Resource Manager API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CloudError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<CloudErrorBody>,
}

impl CloudError {
    /// Server-reported error code, if any.
    pub fn code(&self) -> Option<&str> {
        self.error.as_ref().and_then(|e| e.code.as_deref())
    }

    /// Server-reported error message, if any.
    pub fn message(&self) -> Option<&str> {
        self.error.as_ref().and_then(|e| e.message.as_deref())
    }
}

/// Body of a Resource Manager error response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<CloudErrorBody>,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Required parameter is empty: {0}")]
    InvalidArgument(&'static str),

    #[error("Malformed resource id: {0}")]
    MalformedResourceId(String),

    #[error("Failed to acquire access token: {0}")]
    Token(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API request failed: {status}")]
    Api {
        status: StatusCode,
        /// Decoded error body, when the server sent a valid envelope.
        error: Option<CloudError>,
    },

    #[error("Failed to decode response body: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl Error {
    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for a 404 API error.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
