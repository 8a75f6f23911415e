#[cfg(test)]
mod tests;

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{RagError, Result};

/// Default interval between freshness polls in development mode.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;
/// Default time-to-live for cached search results.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;
/// Default upper bound on cached search entries.
pub const DEFAULT_CACHE_CAPACITY: usize = 100;

/// Runtime configuration for the retrieval engine.
///
/// The development-mode gate controls whether the periodic freshness poller
/// may run at all; outside development mode a manual refresh is the only
/// rebuild trigger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    /// Enables the periodic freshness poller.
    pub dev_mode: bool,
    /// Seconds between freshness polls.
    pub poll_interval_secs: u64,
    /// Seconds a cached search result stays valid.
    pub cache_ttl_secs: u64,
    /// Maximum number of cached search entries kept after an eviction sweep.
    pub cache_capacity: usize,
}

impl Default for EngineConfig {
    #[inline]
    fn default() -> Self {
        Self {
            dev_mode: false,
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl EngineConfig {
    /// Load configuration from the process environment.
    ///
    /// `MIMIR_ENV=development` enables the poller; `MIMIR_POLL_INTERVAL_SECS`,
    /// `MIMIR_CACHE_TTL_SECS`, and `MIMIR_CACHE_CAPACITY` override the
    /// defaults. Unset variables fall back to `Default`.
    #[inline]
    pub fn from_env() -> Result<Self> {
        let mut config = Self {
            dev_mode: env::var("MIMIR_ENV").is_ok_and(|v| v == "development"),
            ..Self::default()
        };

        if let Ok(raw) = env::var("MIMIR_POLL_INTERVAL_SECS") {
            config.poll_interval_secs = parse_var("MIMIR_POLL_INTERVAL_SECS", &raw)?;
        }
        if let Ok(raw) = env::var("MIMIR_CACHE_TTL_SECS") {
            config.cache_ttl_secs = parse_var("MIMIR_CACHE_TTL_SECS", &raw)?;
        }
        if let Ok(raw) = env::var("MIMIR_CACHE_CAPACITY") {
            config.cache_capacity = parse_var("MIMIR_CACHE_CAPACITY", &raw)?;
        }

        config.validate()?;
        Ok(config)
    }

    #[inline]
    pub fn validate(&self) -> Result<()> {
        if self.poll_interval_secs == 0 {
            return Err(RagError::Config(
                "poll interval must be at least 1 second".to_string(),
            ));
        }
        if self.cache_ttl_secs == 0 {
            return Err(RagError::Config(
                "cache TTL must be at least 1 second".to_string(),
            ));
        }
        if self.cache_capacity == 0 {
            return Err(RagError::Config(
                "cache capacity must be at least 1 entry".to_string(),
            ));
        }
        Ok(())
    }

    #[inline]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    #[inline]
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| RagError::Config(format!("invalid value for {}: {}", name, raw)))
}
