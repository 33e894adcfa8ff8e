//! Environment-based configuration

use std::env;
use std::time::Duration;

use crate::error::DashboardError;
use crate::Result;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
const DEFAULT_SYMBOL: &str = "AAPL";
const DEFAULT_POLL_SECS: u64 = 30;

/// Runtime configuration for the dashboard client.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub base_url: String,
    pub symbol: String,
    pub poll_interval: Duration,
}

impl DashboardConfig {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let base_url =
            env::var("DASHBOARD_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let symbol = env::var("DASHBOARD_SYMBOL").unwrap_or_else(|_| DEFAULT_SYMBOL.to_string());

        let poll_secs = match env::var("DASHBOARD_POLL_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|e| {
                DashboardError::ConfigError(format!("Invalid DASHBOARD_POLL_SECS '{}': {}", raw, e))
            })?,
            Err(_) => DEFAULT_POLL_SECS,
        };

        Ok(Self {
            base_url,
            symbol,
            poll_interval: Duration::from_secs(poll_secs),
        })
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            symbol: DEFAULT_SYMBOL.to_string(),
            poll_interval: Duration::from_secs(DEFAULT_POLL_SECS),
        }
    }
}
