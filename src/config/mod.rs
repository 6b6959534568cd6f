//! Configuration module for hcae
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`HCAE_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use hcae::config::HcaeConfig;
//!
//! // Load defaults
//! let config = HcaeConfig::default();
//! assert_eq!(config.probe.port, 22);
//!
//! // Parse from TOML
//! let toml = r#"
//! [probe]
//! host = "10.100.0.2"
//! port = 2222
//! "#;
//! let config: HcaeConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.probe.port, 2222);
//! ```

pub mod alert;
pub mod error;
pub mod inventory;
pub mod logging;
pub mod probe;

pub use alert::AlertConfig;
pub use error::ConfigError;
pub use inventory::{InventoryConfig, InventoryHost};
pub use logging::{LogFormat, LoggingConfig};
pub use probe::ProbeSettings;

use crate::probe::ProbeConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializes tests that read or write `HCAE_*` variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Unified configuration for every hcae command.
///
/// # Example
///
/// ```rust
/// use hcae::config::HcaeConfig;
///
/// let config = HcaeConfig::default();
/// assert_eq!(config.probe.retries, 2);
/// assert_eq!(config.alert.timeout_seconds, 5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HcaeConfig {
    /// Reachability probe settings
    pub probe: ProbeSettings,
    /// Alert dispatch settings
    pub alert: AlertConfig,
    /// Inventory generation settings
    pub inventory: InventoryConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl HcaeConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Load from `path` when the file exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(Some(path))
        } else {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supports HCAE_* environment variables for common settings.
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        // Probe settings
        if let Ok(host) = std::env::var("HCAE_HOST") {
            self.probe.host = Some(host);
        }
        if let Ok(port) = std::env::var("HCAE_PORT") {
            if let Ok(p) = port.parse() {
                self.probe.port = p;
            }
        }
        if let Ok(timeout) = std::env::var("HCAE_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                self.probe.timeout_seconds = t;
            }
        }
        if let Ok(retries) = std::env::var("HCAE_RETRIES") {
            if let Ok(r) = retries.parse() {
                self.probe.retries = r;
            }
        }

        // Alerting
        if let Ok(webhook) = std::env::var("HCAE_WEBHOOK") {
            self.alert.webhook_url = Some(webhook);
        }

        // Logging settings
        if let Ok(level) = std::env::var("HCAE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("HCAE_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        self
    }

    /// Validate configuration
    ///
    /// The probe host is not checked here since only `check` needs it;
    /// see [`HcaeConfig::probe_config`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_probe()?;
        self.validate_inventory()
    }

    /// Validate the `[probe]` and `[alert]` sections.
    pub fn validate_probe(&self) -> Result<(), ConfigError> {
        if self.probe.port == 0 {
            return Err(ConfigError::invalid("probe.port", "port must be non-zero"));
        }
        self.probe.timeout()?;
        self.probe.retry_interval()?;
        if self.alert.timeout_seconds == 0 {
            return Err(ConfigError::invalid(
                "alert.timeout_seconds",
                "timeout must be non-zero",
            ));
        }
        Ok(())
    }

    /// Validate the `[inventory]` section, the only one `hcae inventory` reads
    /// besides logging.
    pub fn validate_inventory(&self) -> Result<(), ConfigError> {
        if self.inventory.group.trim().is_empty() {
            return Err(ConfigError::invalid("inventory.group", "group cannot be empty"));
        }
        for (i, host) in self.inventory.hosts.iter().enumerate() {
            if host.name.trim().is_empty() {
                return Err(ConfigError::invalid(
                    &format!("inventory.hosts[{}].name", i),
                    "name cannot be empty",
                ));
            }
            if host.output.trim().is_empty() {
                return Err(ConfigError::invalid(
                    &format!("inventory.hosts[{}].output", i),
                    "output cannot be empty",
                ));
            }
        }
        Ok(())
    }

    /// Validate and freeze the probe section into a [`ProbeConfig`].
    pub fn probe_config(&self) -> Result<ProbeConfig, ConfigError> {
        self.validate()?;

        let host = self
            .probe
            .host
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ConfigError::MissingField("probe.host".to_string()))?;

        Ok(ProbeConfig {
            host: host.to_string(),
            port: self.probe.port,
            timeout: self.probe.timeout()?,
            max_retries: self.probe.retries,
            webhook_url: self.alert.webhook().map(str::to_string),
            subject: self.probe.subject.clone(),
        })
    }
}
