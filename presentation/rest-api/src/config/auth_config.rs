use std::env;
use std::time::Duration;

use anyhow::Context;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the hosted auth provider.
pub struct AuthConfig {
    pub url: String,
    pub anon_key: String,
    /// HS256 secret the provider signs access tokens with.
    pub jwt_secret: String,
    pub timeout: Duration,
}

impl AuthConfig {
    /// Environment variables:
    /// - AUTH_URL (required)
    /// - AUTH_ANON_KEY (required)
    /// - AUTH_JWT_SECRET (required)
    /// - AUTH_TIMEOUT_SECS (default: 10)
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            url: required("AUTH_URL")?,
            anon_key: required("AUTH_ANON_KEY")?,
            jwt_secret: required("AUTH_JWT_SECRET")?,
            timeout: parse_timeout(env::var("AUTH_TIMEOUT_SECS").ok())?,
        })
    }
}

fn required(name: &str) -> anyhow::Result<String> {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .with_context(|| format!("{} must be set", name))
}

fn parse_timeout(raw: Option<String>) -> anyhow::Result<Duration> {
    let secs = match raw {
        Some(value) => value
            .trim()
            .parse::<u64>()
            .with_context(|| format!("AUTH_TIMEOUT_SECS must be whole seconds, got {:?}", value))?,
        None => DEFAULT_TIMEOUT_SECS,
    };
    Ok(Duration::from_secs(secs))
}
