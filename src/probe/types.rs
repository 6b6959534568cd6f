//! Probe inputs and results.

use super::error::ProbeError;
use crate::alert::AlertDelivery;
use std::time::Duration;

/// Everything needed to probe one target. Built once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeConfig {
    /// Host name or IP address; resolution is left to the network stack
    pub host: String,
    pub port: u16,
    /// Bound on each individual connect attempt
    pub timeout: Duration,
    /// Attempts in addition to the first one
    pub max_retries: u32,
    /// Webhook for the exhaustion alert, if any
    pub webhook_url: Option<String>,
    /// Label used in the failure message
    pub subject: String,
}

impl ProbeConfig {
    /// Probe config with the default timeout (5s), retries (2) and subject ("VPN").
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            timeout: Duration::from_secs(5),
            max_retries: 2,
            webhook_url: None,
            subject: "VPN".to_string(),
        }
    }

    /// The attempt budget: `max_retries + 1`.
    pub fn total_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    pub fn target(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Message used for the alert once the attempt budget is spent.
    pub fn failure_message(&self) -> String {
        format!(
            "{} health check failed to reach {} after {} attempts",
            self.subject,
            self.target(),
            self.total_attempts()
        )
    }
}

/// Outcome of a single connection attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct AttemptResult {
    /// Zero-based index of this attempt
    pub attempt_index: u32,
    pub total_attempts: u32,
    pub succeeded: bool,
    /// Failure cause, for logging only
    pub error: Option<ProbeError>,
}

impl AttemptResult {
    /// One-based attempt number, as shown to operators.
    pub fn attempt_number(&self) -> u32 {
        self.attempt_index + 1
    }
}

/// Terminal result of a probe run.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Some attempt connected
    Success,
    /// Every attempt failed; the alert has already been dispatched
    Failure {
        message: String,
        alert: AlertDelivery,
    },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Process exit status for this outcome: 0 on success, 2 on exhaustion.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::Failure { .. } => 2,
        }
    }
}
