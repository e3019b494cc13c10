use std::env;
use std::time::Duration;

use anyhow::{Context, ensure};

const DEFAULT_IDLE_TTL_SECS: u64 = 60 * 60;
const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;

/// Lifetime of carts nobody touches.
#[derive(Debug, Clone)]
pub struct CartConfig {
    pub idle_ttl: Duration,
    pub sweep_interval: Duration,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            idle_ttl: Duration::from_secs(DEFAULT_IDLE_TTL_SECS),
            sweep_interval: Duration::from_secs(DEFAULT_SWEEP_INTERVAL_SECS),
        }
    }
}

impl CartConfig {
    /// Environment variables:
    /// - CART_IDLE_TTL_SECS (default: 3600)
    /// - CART_SWEEP_INTERVAL_SECS (default: 60)
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            idle_ttl: parse_secs(
                "CART_IDLE_TTL_SECS",
                env::var("CART_IDLE_TTL_SECS").ok(),
                DEFAULT_IDLE_TTL_SECS,
            )?,
            sweep_interval: parse_secs(
                "CART_SWEEP_INTERVAL_SECS",
                env::var("CART_SWEEP_INTERVAL_SECS").ok(),
                DEFAULT_SWEEP_INTERVAL_SECS,
            )?,
        })
    }
}

fn parse_secs(name: &str, raw: Option<String>, default: u64) -> anyhow::Result<Duration> {
    let secs = match raw {
        Some(value) => value
            .trim()
            .parse::<u64>()
            .with_context(|| format!("{} must be whole seconds, got {:?}", name, value))?,
        None => default,
    };
    ensure!(secs > 0, "{} must be greater than zero", name);
    Ok(Duration::from_secs(secs))
}
