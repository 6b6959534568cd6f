//! Alert dispatch configuration

use serde::{Deserialize, Serialize};

/// Alert configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Webhook receiving `{"text": ...}` POSTs. Unset or empty means local-only alerts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    /// Timeout for the webhook POST, independent of the probe timeout
    pub timeout_seconds: u64,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout_seconds: 5,
        }
    }
}

impl AlertConfig {
    /// The webhook URL if one is configured and non-blank.
    pub fn webhook(&self) -> Option<&str> {
        self.webhook_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}
