//! Azure Active Directory authentication.
//!
//! Tokens for the Resource Manager endpoint come through the
//! [`TokenCredential`] seam: a service-principal client-credentials flow,
//! or a pre-acquired static token.

use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// OAuth2 scope for the Resource Manager endpoint.
pub const DEFAULT_SCOPE: &str = "https://management.azure.com/.default";

/// Authority issuing tokens for the public cloud.
pub const DEFAULT_AUTHORITY: &str = "https://login.microsoftonline.com";

/// Token expiry buffer - refresh tokens this much before they actually expire
/// This prevents using tokens that are about to expire during a request
const TOKEN_EXPIRY_BUFFER: Duration = Duration::from_secs(60);

/// Default token TTL if the server does not report one (conservative: 30 minutes)
const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(30 * 60);

/// Source of bearer tokens for Resource Manager requests.
#[async_trait]
pub trait TokenCredential: Send + Sync {
    /// Get an access token for API calls.
    async fn token(&self) -> Result<String>;
}

#[derive(Clone)]
struct CachedToken {
    token: String,
    /// When this token expires (with buffer applied)
    expires_at: Instant,
}

impl CachedToken {
    fn is_valid(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

/// Service-principal credential using the OAuth2 client-credentials flow,
/// with token caching.
pub struct ClientSecretCredential {
    tenant_id: String,
    client_id: String,
    client_secret: String,
    authority: String,
    scope: String,
    http: reqwest::Client,
    token_cache: Arc<RwLock<Option<CachedToken>>>,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

impl ClientSecretCredential {
    /// Create a credential for the given service principal.
    pub fn new(tenant_id: &str, client_id: &str, client_secret: &str) -> Result<Self> {
        if tenant_id.is_empty() || client_id.is_empty() || client_secret.is_empty() {
            return Err(Error::Token(
                "tenant id, client id, and client secret are all required".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .build()
            .map_err(Error::Request)?;

        Ok(Self {
            tenant_id: tenant_id.to_string(),
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            authority: DEFAULT_AUTHORITY.to_string(),
            scope: DEFAULT_SCOPE.to_string(),
            http,
            token_cache: Arc::new(RwLock::new(None)),
        })
    }

    /// Create a credential from the standard `AZURE_TENANT_ID`,
    /// `AZURE_CLIENT_ID`, and `AZURE_CLIENT_SECRET` environment variables.
    pub fn from_env() -> Result<Self> {
        let tenant_id = std::env::var("AZURE_TENANT_ID")
            .map_err(|_| Error::Token("AZURE_TENANT_ID is not set".to_string()))?;
        let client_id = std::env::var("AZURE_CLIENT_ID")
            .map_err(|_| Error::Token("AZURE_CLIENT_ID is not set".to_string()))?;
        let client_secret = std::env::var("AZURE_CLIENT_SECRET")
            .map_err(|_| Error::Token("AZURE_CLIENT_SECRET is not set".to_string()))?;
        Self::new(&tenant_id, &client_id, &client_secret)
    }

    /// Override the token authority (sovereign clouds, test servers).
    pub fn with_authority(mut self, authority: &str) -> Self {
        self.authority = authority.trim_end_matches('/').to_string();
        self
    }

    /// Override the token scope.
    pub fn with_scope(mut self, scope: &str) -> Self {
        self.scope = scope.to_string();
        self
    }

    /// Force refresh the token.
    pub async fn refresh(&self) -> Result<String> {
        {
            let mut cache = self.token_cache.write().await;
            *cache = None;
        }
        self.token().await
    }

    async fn request_token(&self) -> Result<TokenResponse> {
        let token_url = format!("{}/{}/oauth2/v2.0/token", self.authority, self.tenant_id);

        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("scope", self.scope.as_str()),
        ];

        let response = self
            .http
            .post(&token_url)
            .form(&form)
            .send()
            .await
            .map_err(Error::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Token(format!("token endpoint returned {}", status)));
        }

        response
            .json::<TokenResponse>()
            .await
            .map_err(|e| Error::Token(format!("invalid token response: {}", e)))
    }
}

#[async_trait]
impl TokenCredential for ClientSecretCredential {
    /// Get an access token, serving from the cache while it is still valid.
    async fn token(&self) -> Result<String> {
        {
            let cache = self.token_cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.is_valid() {
                    return Ok(cached.token.clone());
                }
                tracing::debug!("Cached token expired, fetching new token");
            }
        }

        let response = self.request_token().await?;

        let ttl = response
            .expires_in
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TOKEN_TTL);
        let expires_at = Instant::now() + ttl.saturating_sub(TOKEN_EXPIRY_BUFFER);

        {
            let mut cache = self.token_cache.write().await;
            *cache = Some(CachedToken {
                token: response.access_token.clone(),
                expires_at,
            });
        }

        tracing::debug!(
            "New token cached, expires in ~{} minutes",
            ttl.saturating_sub(TOKEN_EXPIRY_BUFFER).as_secs() / 60
        );

        Ok(response.access_token)
    }
}

/// Fixed-token credential, for tests or tokens brokered elsewhere.
pub struct StaticTokenCredential {
    token: String,
}

impl StaticTokenCredential {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenCredential for StaticTokenCredential {
    async fn token(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}
