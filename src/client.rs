//! Network client.
//!
//! Main client for the Network resource provider, combining authentication,
//! configuration, and HTTP functionality.

use crate::auth::TokenCredential;
use crate::config::ClientOptions;
use crate::error::{Error, Result};
use crate::http::{self, ApiResponse, ArmHttpClient};
use crate::operation::Accepted;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// Provider namespace under which every URL is built.
pub const PROVIDER_NAMESPACE: &str = "Microsoft.Network";

const CLIENT_REQUEST_ID: &str = "x-ms-client-request-id";

/// Reject an empty required parameter before any network call.
pub(crate) fn require<'a>(name: &'static str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(Error::InvalidArgument(name));
    }
    Ok(value)
}

/// Main Network provider client
#[derive(Clone)]
pub struct NetworkClient {
    credential: Arc<dyn TokenCredential>,
    http: ArmHttpClient,
    pub subscription_id: String,
    pub options: ClientOptions,
}

impl NetworkClient {
    /// Create a new client with default options.
    pub fn new(subscription_id: &str, credential: Arc<dyn TokenCredential>) -> Result<Self> {
        Self::with_options(subscription_id, credential, ClientOptions::default())
    }

    /// Create a new client with explicit options.
    pub fn with_options(
        subscription_id: &str,
        credential: Arc<dyn TokenCredential>,
        options: ClientOptions,
    ) -> Result<Self> {
        require("subscription_id", subscription_id)?;
        if url::Url::parse(&options.endpoint).is_err() {
            return Err(Error::InvalidArgument("endpoint"));
        }
        let http = ArmHttpClient::new(&options.user_agent())?;

        Ok(Self {
            credential,
            http,
            subscription_id: subscription_id.to_string(),
            options,
        })
    }

    /// Get the current access token
    pub async fn token(&self) -> Result<String> {
        self.credential.token().await
    }

    // =========================================================================
    // URL builders
    // =========================================================================

    fn endpoint(&self) -> &str {
        self.options.endpoint.trim_end_matches('/')
    }

    fn with_api_version(&self, path: String) -> String {
        format!(
            "{}?api-version={}",
            path,
            urlencoding::encode(&self.options.api_version)
        )
    }

    fn group_prefix(&self, resource_group: &str) -> String {
        format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/{}",
            self.endpoint(),
            urlencoding::encode(&self.subscription_id),
            urlencoding::encode(resource_group),
            PROVIDER_NAMESPACE
        )
    }

    /// Build a resource-group collection URL, e.g. `.../virtualNetworks`
    pub fn collection_url(&self, resource_group: &str, resource_type: &str) -> String {
        self.with_api_version(format!(
            "{}/{}",
            self.group_prefix(resource_group),
            resource_type
        ))
    }

    /// Build a single-resource URL, e.g. `.../virtualNetworks/{name}`
    pub fn resource_url(&self, resource_group: &str, resource_type: &str, name: &str) -> String {
        self.with_api_version(format!(
            "{}/{}/{}",
            self.group_prefix(resource_group),
            resource_type,
            urlencoding::encode(name)
        ))
    }

    /// Build a child collection URL, e.g. `.../virtualNetworks/{name}/subnets`
    pub fn child_collection_url(
        &self,
        resource_group: &str,
        resource_type: &str,
        name: &str,
        child_type: &str,
    ) -> String {
        self.with_api_version(format!(
            "{}/{}/{}/{}",
            self.group_prefix(resource_group),
            resource_type,
            urlencoding::encode(name),
            child_type
        ))
    }

    /// Build a child resource URL, e.g. `.../virtualNetworks/{name}/subnets/{child}`
    pub fn child_url(
        &self,
        resource_group: &str,
        resource_type: &str,
        name: &str,
        child_type: &str,
        child_name: &str,
    ) -> String {
        self.with_api_version(format!(
            "{}/{}/{}/{}/{}",
            self.group_prefix(resource_group),
            resource_type,
            urlencoding::encode(name),
            child_type,
            urlencoding::encode(child_name)
        ))
    }

    /// Build a subscription-wide collection URL, e.g.
    /// `/subscriptions/{sub}/providers/Microsoft.Network/virtualNetworks`
    pub fn subscription_collection_url(&self, resource_type: &str) -> String {
        self.with_api_version(format!(
            "{}/subscriptions/{}/providers/{}/{}",
            self.endpoint(),
            urlencoding::encode(&self.subscription_id),
            PROVIDER_NAMESPACE,
            resource_type
        ))
    }

    // =========================================================================
    // Typed request helpers
    // =========================================================================

    fn request_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if let Ok(id) = HeaderValue::from_str(&Uuid::new_v4().to_string()) {
            headers.insert(CLIENT_REQUEST_ID, id);
        }
        if let Some(language) = &self.options.accept_language {
            if let Ok(value) = HeaderValue::from_str(language) {
                headers.insert(ACCEPT_LANGUAGE, value);
            }
        }

        headers
    }

    /// GET a URL and decode the body, checking the status against the
    /// operation's registered codes.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        expected: &[StatusCode],
    ) -> Result<T> {
        let token = self.token().await?;
        let response = self.http.get(url, &token, self.request_headers()).await?;
        let response = http::registered(response, expected)?;
        http::json(&response)
    }

    /// PUT a JSON body and decode the response.
    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
        expected: &[StatusCode],
    ) -> Result<T> {
        let token = self.token().await?;
        let payload = serde_json::to_string(body).map_err(Error::Deserialize)?;
        let response = self
            .http
            .put(url, &token, self.request_headers(), payload)
            .await?;
        let response = http::registered(response, expected)?;
        http::json(&response)
    }

    /// DELETE a URL, returning the long-running-operation handoff record.
    pub(crate) async fn delete(&self, url: &str, expected: &[StatusCode]) -> Result<Accepted> {
        let token = self.token().await?;
        let response = self
            .http
            .delete(url, &token, self.request_headers())
            .await?;
        let ApiResponse {
            status, headers, ..
        } = http::registered(response, expected)?;
        Ok(Accepted::from_response(status, &headers))
    }
}
