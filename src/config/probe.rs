//! Reachability probe settings

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Probe settings as read from the `[probe]` section.
///
/// The host has no default; it must come from the file, the environment
/// or the command line before a probe can run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    pub port: u16,
    /// Per-attempt connect timeout, fractional seconds allowed
    pub timeout_seconds: f64,
    /// Attempts made in addition to the first one
    pub retries: u32,
    /// Fixed pause between a failed attempt and the next one
    pub retry_interval_seconds: f64,
    /// Label used in the failure message ("<subject> health check failed ...")
    pub subject: String,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            host: None,
            port: 22,
            timeout_seconds: 5.0,
            retries: 2,
            retry_interval_seconds: 1.0,
            subject: "VPN".to_string(),
        }
    }
}

impl ProbeSettings {
    /// Per-attempt timeout. Must be non-zero and representable as a `Duration`.
    pub fn timeout(&self) -> Result<Duration, ConfigError> {
        match Duration::try_from_secs_f64(self.timeout_seconds) {
            Ok(timeout) if !timeout.is_zero() => Ok(timeout),
            _ => Err(ConfigError::invalid(
                "probe.timeout_seconds",
                format!(
                    "timeout must be a positive number of seconds, got {}",
                    self.timeout_seconds
                ),
            )),
        }
    }

    /// Pause between failed attempts. Zero is allowed.
    pub fn retry_interval(&self) -> Result<Duration, ConfigError> {
        Duration::try_from_secs_f64(self.retry_interval_seconds).map_err(|_| {
            ConfigError::invalid(
                "probe.retry_interval_seconds",
                format!(
                    "interval must be a non-negative number of seconds, got {}",
                    self.retry_interval_seconds
                ),
            )
        })
    }
}
