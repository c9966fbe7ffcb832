//! Session configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Lifetime and capacity of in-memory design sessions
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Seconds a session may sit untouched before it is discarded
    #[serde(default = "default_idle_ttl")]
    pub idle_ttl_secs: u64,

    /// Maximum number of live sessions
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,

    /// Seconds between idle sweeps
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,
}

impl SessionConfig {
    pub fn idle_ttl(&self) -> Duration {
        Duration::from_secs(self.idle_ttl_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }

    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.idle_ttl_secs == 0 {
            return Err(ValidationError::InvalidSessionTtl);
        }
        if self.max_sessions == 0 {
            return Err(ValidationError::InvalidSessionLimit);
        }
        if self.sweep_interval_secs == 0 || self.sweep_interval_secs > self.idle_ttl_secs {
            return Err(ValidationError::InvalidSweepInterval);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_ttl_secs: default_idle_ttl(),
            max_sessions: default_max_sessions(),
            sweep_interval_secs: default_sweep_interval(),
        }
    }
}

fn default_idle_ttl() -> u64 {
    3600
}

fn default_max_sessions() -> usize {
    10_000
}

fn default_sweep_interval() -> u64 {
    60
}
