//! HTTP utilities for Resource Manager REST calls.

use crate::error::{CloudError, Error, Result};
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and masks non-printable characters
pub(crate) fn sanitize_for_log(body: &str) -> String {
    let printable: String = body
        .chars()
        .filter(|c| c.is_ascii_graphic() || *c == ' ')
        .take(MAX_LOG_BODY_LENGTH)
        .collect();

    if printable.len() < body.len() {
        format!("{}... [truncated, {} bytes total]", printable, body.len())
    } else {
        printable
    }
}

/// Raw response captured before status-code registration.
#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

/// HTTP client wrapper for Resource Manager API calls
#[derive(Clone)]
pub struct ArmHttpClient {
    client: Client,
}

impl ArmHttpClient {
    /// Create a new HTTP client
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(Error::Request)?;

        Ok(Self { client })
    }

    /// Make a GET request to a Resource Manager API
    pub async fn get(&self, url: &str, token: &str, headers: HeaderMap) -> Result<ApiResponse> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .headers(headers)
            .send()
            .await
            .map_err(Error::Request)?;

        Self::capture(response).await
    }

    /// Make a PUT request with a JSON body to a Resource Manager API
    pub async fn put(
        &self,
        url: &str,
        token: &str,
        headers: HeaderMap,
        body: String,
    ) -> Result<ApiResponse> {
        tracing::debug!("PUT {}", url);

        let response = self
            .client
            .put(url)
            .bearer_auth(token)
            .headers(headers)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(Error::Request)?;

        Self::capture(response).await
    }

    /// Make a DELETE request to a Resource Manager API
    pub async fn delete(&self, url: &str, token: &str, headers: HeaderMap) -> Result<ApiResponse> {
        tracing::debug!("DELETE {}", url);

        let response = self
            .client
            .delete(url)
            .bearer_auth(token)
            .headers(headers)
            .send()
            .await
            .map_err(Error::Request)?;

        Self::capture(response).await
    }

    async fn capture(response: reqwest::Response) -> Result<ApiResponse> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await.map_err(Error::Request)?;

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}

/// Check a response status against the operation's registered codes.
///
/// An unregistered status becomes [`Error::Api`], carrying the decoded error
/// envelope when the server sent one.
pub fn registered(response: ApiResponse, expected: &[StatusCode]) -> Result<ApiResponse> {
    if expected.contains(&response.status) {
        return Ok(response);
    }

    // Security: Only log sanitized/truncated error body to avoid leaking sensitive data
    tracing::error!(
        "API error: {} - {}",
        response.status,
        sanitize_for_log(&response.body)
    );

    let error = serde_json::from_str::<CloudError>(&response.body)
        .ok()
        .filter(|e| e.error.is_some());

    Err(Error::Api {
        status: response.status,
        error,
    })
}

/// Decode a registered response body as JSON.
pub fn json<T: DeserializeOwned>(response: &ApiResponse) -> Result<T> {
    serde_json::from_str(&response.body).map_err(Error::Deserialize)
}
