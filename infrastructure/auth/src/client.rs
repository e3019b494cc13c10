use std::time::Duration;

use business::domain::auth::errors::AuthError;
use reqwest::{Client, RequestBuilder};
use url::Url;

/// Shared HTTP client configuration for the auth provider.
pub struct AuthClient {
    pub client: Client,
    pub base_url: Url,
    pub anon_key: String,
}

impl AuthClient {
    pub fn new(base_url: &str, anon_key: String, timeout: Duration) -> Result<Self, AuthError> {
        // Url::join drops the last path segment unless it ends with a slash.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| AuthError::Provider(format!("invalid auth url: {}", e)))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            anon_key,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, AuthError> {
        self.base_url
            .join(path)
            .map_err(|e| AuthError::Provider(format!("invalid auth endpoint: {}", e)))
    }

    pub fn token_url(&self) -> Result<Url, AuthError> {
        let mut url = self.endpoint("auth/v1/token")?;
        url.query_pairs_mut().append_pair("grant_type", "password");
        Ok(url)
    }

    pub fn signup_url(&self) -> Result<Url, AuthError> {
        self.endpoint("auth/v1/signup")
    }

    pub fn logout_url(&self) -> Result<Url, AuthError> {
        self.endpoint("auth/v1/logout")
    }

    pub fn user_url(&self) -> Result<Url, AuthError> {
        self.endpoint("auth/v1/user")
    }

    pub fn post(&self, url: Url) -> RequestBuilder {
        self.client.post(url).header("apikey", &self.anon_key)
    }

    pub fn get(&self, url: Url) -> RequestBuilder {
        self.client.get(url).header("apikey", &self.anon_key)
    }

    pub fn bearer(token: &str) -> String {
        format!("Bearer {}", token)
    }
}
