//! Configuration management for the dashboard worker

use crate::error::{DashboardError, Result};
use worker::Env;

const DEFAULT_ORDERS_ENDPOINT: &str = "https://new-plant-1.onrender.com/orders";

/// Dashboard configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Environment (production, staging, development)
    pub environment: String,

    /// Log level
    pub log_level: String,

    /// Upstream orders API (GET, returns a JSON array of orders)
    pub orders_endpoint: String,

    /// Prefix for monetary values
    pub currency_symbol: String,

    /// Page timings
    pub loading_delay_ms: u64,          // Simulated loading screen
    pub counter_duration_ms: u64,       // Stat counter animation length
    pub notification_duration_ms: u64,  // Time a toast stays on screen

    /// List sizes
    pub recent_orders_limit: usize,
    pub top_products_limit: usize,

    /// Where logout navigates to
    pub logout_redirect: String,

    /// Viewports at or below this width use the mobile sidebar
    pub mobile_breakpoint_px: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Load configuration from Cloudflare environment variables
    pub fn from_env(env: &Env) -> Result<Self> {
        let config = Self::from_lookup(|key| env.var(key).ok().map(|v| v.to_string()));
        config.validate()?;
        Ok(config)
    }

    /// Build configuration from any key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "production".to_string()),

            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),

            orders_endpoint: lookup("ORDERS_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_ORDERS_ENDPOINT.to_string()),

            currency_symbol: lookup("CURRENCY_SYMBOL").unwrap_or_else(|| "₹".to_string()),

            loading_delay_ms: lookup("LOADING_DELAY_MS")
                .map(|v| v.parse().unwrap_or(2500))
                .unwrap_or(2500),

            counter_duration_ms: lookup("COUNTER_DURATION_MS")
                .map(|v| v.parse().unwrap_or(2000))
                .unwrap_or(2000),

            notification_duration_ms: lookup("NOTIFICATION_DURATION_MS")
                .map(|v| v.parse().unwrap_or(3000))
                .unwrap_or(3000),

            recent_orders_limit: lookup("RECENT_ORDERS_LIMIT")
                .map(|v| v.parse().unwrap_or(3))
                .unwrap_or(3),

            top_products_limit: lookup("TOP_PRODUCTS_LIMIT")
                .map(|v| v.parse().unwrap_or(3))
                .unwrap_or(3),

            logout_redirect: lookup("LOGOUT_REDIRECT").unwrap_or_else(|| "index.html".to_string()),

            mobile_breakpoint_px: lookup("MOBILE_BREAKPOINT_PX")
                .map(|v| v.parse().unwrap_or(768))
                .unwrap_or(768),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.orders_endpoint.starts_with("http://") || self.orders_endpoint.starts_with("https://")) {
            return Err(DashboardError::Config(format!(
                "orders_endpoint must be an http(s) URL, got {}",
                self.orders_endpoint
            )));
        }
        if self.counter_duration_ms == 0 {
            return Err(DashboardError::Config("counter_duration_ms must be positive".into()));
        }
        if self.notification_duration_ms == 0 {
            return Err(DashboardError::Config("notification_duration_ms must be positive".into()));
        }
        if self.recent_orders_limit == 0 || self.top_products_limit == 0 {
            return Err(DashboardError::Config("list limits must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.orders_endpoint, DEFAULT_ORDERS_ENDPOINT);
        assert_eq!(config.loading_delay_ms, 2500);
        assert_eq!(config.recent_orders_limit, 3);
        assert_eq!(config.top_products_limit, 3);
        assert_eq!(config.logout_redirect, "index.html");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_overrides_and_bad_numbers() {
        let vars: HashMap<&str, &str> = [
            ("ORDERS_ENDPOINT", "http://localhost:8080/orders"),
            ("TOP_PRODUCTS_LIMIT", "5"),
            ("LOADING_DELAY_MS", "soon"),
        ]
        .into_iter()
        .collect();
        let config = Config::from_lookup(|k| vars.get(k).map(|v| (*v).to_string()));

        assert_eq!(config.orders_endpoint, "http://localhost:8080/orders");
        assert_eq!(config.top_products_limit, 5);
        assert_eq!(config.loading_delay_ms, 2500);
    }

    #[test]
    fn test_config_validation() {
        let config = Config {
            orders_endpoint: "ftp://example.com".into(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(DashboardError::Config(_))));

        let config = Config {
            top_products_limit: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
