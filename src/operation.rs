//! Long-running operation handoff.
//!
//! Deletes and some updates are accepted by the service and finished in the
//! background. The client returns the initial response only; polling until a
//! terminal state is the caller's (or an external poller's) job.

use reqwest::header::{HeaderMap, LOCATION, RETRY_AFTER};
use reqwest::StatusCode;

/// Header carrying the operation status URL.
const AZURE_ASYNC_OPERATION: &str = "azure-asyncoperation";

/// Initial response of a long-running operation.
#[derive(Debug, Clone)]
pub struct Accepted {
    /// Status code of the initial response (202 while in progress,
    /// 200/204 when the service finished synchronously).
    pub status: StatusCode,
    /// `Azure-AsyncOperation` status URL, if the service sent one.
    pub async_operation_url: Option<String>,
    /// `Location` URL for polling the resource itself, if sent.
    pub location: Option<String>,
    /// Server-requested poll delay in seconds.
    pub retry_after: Option<u64>,
}

impl Accepted {
    pub(crate) fn from_response(status: StatusCode, headers: &HeaderMap) -> Self {
        let header_str = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(|s| s.to_string())
        };

        let retry_after = headers
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<u64>().ok());

        Self {
            status,
            async_operation_url: header_str(AZURE_ASYNC_OPERATION),
            location: header_str(LOCATION.as_str()),
            retry_after,
        }
    }

    /// True when no further polling is needed.
    pub fn is_done(&self) -> bool {
        self.status != StatusCode::ACCEPTED
    }

    /// Poll delay in seconds, falling back to the given default.
    pub fn retry_after_or(&self, default_secs: u64) -> u64 {
        self.retry_after.unwrap_or(default_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn accepted_parses_polling_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "azure-asyncoperation",
            HeaderValue::from_static("https://management.azure.com/operations/1"),
        );
        headers.insert(LOCATION, HeaderValue::from_static("https://example/poll"));
        headers.insert(RETRY_AFTER, HeaderValue::from_static("15"));

        let accepted = Accepted::from_response(StatusCode::ACCEPTED, &headers);
        assert!(!accepted.is_done());
        assert_eq!(
            accepted.async_operation_url.as_deref(),
            Some("https://management.azure.com/operations/1")
        );
        assert_eq!(accepted.location.as_deref(), Some("https://example/poll"));
        assert_eq!(accepted.retry_after_or(30), 15);
    }

    #[test]
    fn accepted_without_headers_is_done_on_204() {
        let accepted = Accepted::from_response(StatusCode::NO_CONTENT, &HeaderMap::new());
        assert!(accepted.is_done());
        assert!(accepted.async_operation_url.is_none());
        assert_eq!(accepted.retry_after_or(30), 30);
    }
}
