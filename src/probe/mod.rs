//! Reachability probing with retry and exhaustion alerting.
//!
//! A probe makes up to `max_retries + 1` TCP connection attempts against a
//! single target, pausing a fixed interval between failed attempts. The first
//! successful connect ends the run. If every attempt fails, one alert is
//! dispatched and the run ends in [`Outcome::Failure`].

mod connector;
mod error;
mod types;

#[cfg(test)]
mod tests;

pub use connector::{Connector, TcpConnector};
pub use error::ProbeError;
pub use types::{AttemptResult, Outcome, ProbeConfig};

use crate::alert::{Alerter, WebhookAlerter};
use std::sync::Arc;
use std::time::Duration;

/// Pause between a failed attempt and the next one.
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(1);

/// Runs reachability probes.
pub struct Prober {
    /// Opens the connection for each attempt
    connector: Arc<dyn Connector>,
    /// Receives the single exhaustion alert
    alerter: Arc<dyn Alerter>,
    retry_interval: Duration,
}

impl Default for Prober {
    fn default() -> Self {
        Self::new()
    }
}

impl Prober {
    /// Create a prober using real TCP connects and the webhook alerter.
    pub fn new() -> Self {
        Self::with_parts(Arc::new(TcpConnector), Arc::new(WebhookAlerter::default()))
    }

    /// Create a prober with custom connector and alerter (for testing).
    pub fn with_parts(connector: Arc<dyn Connector>, alerter: Arc<dyn Alerter>) -> Self {
        Self {
            connector,
            alerter,
            retry_interval: DEFAULT_RETRY_INTERVAL,
        }
    }

    /// Override the pause between failed attempts.
    pub fn with_retry_interval(mut self, interval: Duration) -> Self {
        self.retry_interval = interval;
        self
    }

    pub fn retry_interval(&self) -> Duration {
        self.retry_interval
    }

    /// Probe the target described by `config`.
    pub async fn probe(&self, config: &ProbeConfig) -> Outcome {
        self.probe_with(config, |_| {}).await
    }

    /// Probe the target, handing every attempt result to `report` as it happens.
    pub async fn probe_with<F>(&self, config: &ProbeConfig, mut report: F) -> Outcome
    where
        F: FnMut(&AttemptResult),
    {
        let total_attempts = config.total_attempts();

        for attempt_index in 0..total_attempts {
            let result = self
                .connector
                .connect(&config.host, config.port, config.timeout)
                .await;

            let attempt = AttemptResult {
                attempt_index,
                total_attempts,
                succeeded: result.is_ok(),
                error: result.err(),
            };

            match &attempt.error {
                None => tracing::info!(
                    host = %config.host,
                    port = config.port,
                    attempt = attempt.attempt_number(),
                    total_attempts,
                    "Probe attempt succeeded"
                ),
                Some(error) => tracing::warn!(
                    host = %config.host,
                    port = config.port,
                    attempt = attempt.attempt_number(),
                    total_attempts,
                    error = %error,
                    "Probe attempt failed"
                ),
            }
            report(&attempt);

            if attempt.succeeded {
                return Outcome::Success;
            }

            // No pause once the budget is spent.
            if attempt.attempt_number() < total_attempts {
                tokio::time::sleep(self.retry_interval).await;
            }
        }

        let message = config.failure_message();
        tracing::error!(
            host = %config.host,
            port = config.port,
            total_attempts,
            "Reachability attempts exhausted, dispatching alert"
        );
        let alert = self
            .alerter
            .alert(config.webhook_url.as_deref(), &message)
            .await;

        Outcome::Failure { message, alert }
    }
}
