//! Configuration Module
//!
//! Handles loading and managing cache configuration from environment variables.

use std::env;

use crate::cache::DEFAULT_TTL_MINUTES;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default TTL in minutes for entries set without an explicit TTL
    pub default_ttl_minutes: f64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PATH_CACHE_DEFAULT_TTL_MIN` - Default TTL in minutes (default: 5)
    ///
    /// Values that fail to parse, or that are not finite and positive, fall
    /// back to the default.
    pub fn from_env() -> Self {
        Self {
            default_ttl_minutes: env::var("PATH_CACHE_DEFAULT_TTL_MIN")
                .ok()
                .and_then(|v| v.parse::<f64>().ok())
                .filter(|v| v.is_finite() && *v > 0.0)
                .unwrap_or(DEFAULT_TTL_MINUTES),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl_minutes: DEFAULT_TTL_MINUTES,
        }
    }
}
