//! Best-effort alert dispatch.
//!
//! Alerts go to a webhook as `{"text": "<message>"}` when one is configured,
//! otherwise to the local log only. Dispatch never fails toward the caller:
//! every problem is logged and folded into an [`AlertDelivery`] value.

mod error;

pub use error::AlertError;

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

/// Timeout for the webhook POST.
pub const DEFAULT_WEBHOOK_TIMEOUT: Duration = Duration::from_secs(5);

/// What happened to an alert. Informational only.
#[derive(Debug, Clone, PartialEq)]
pub enum AlertDelivery {
    /// No webhook configured; the alert went to the local log
    Local,
    /// Webhook accepted the alert with a 2xx status
    Delivered { status: u16 },
    /// Webhook dispatch failed; the failure has been logged and swallowed
    Failed(AlertError),
}

/// Receives the exhaustion alert.
#[async_trait]
pub trait Alerter: Send + Sync {
    /// Dispatch `message`. Must not fail; problems are reported in the return value.
    async fn alert(&self, webhook_url: Option<&str>, message: &str) -> AlertDelivery;
}

/// Webhook wire payload.
#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    text: &'a str,
}

/// Alerter posting to an HTTP webhook.
#[derive(Debug, Clone)]
pub struct WebhookAlerter {
    client: reqwest::Client,
    timeout: Duration,
}

impl Default for WebhookAlerter {
    fn default() -> Self {
        Self::new(DEFAULT_WEBHOOK_TIMEOUT)
    }
}

impl WebhookAlerter {
    /// Create an alerter whose POSTs are bounded by `timeout`.
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to build webhook client, using defaults");
                reqwest::Client::new()
            });

        Self { client, timeout }
    }

    /// Create an alerter with custom HTTP client (for testing).
    pub fn with_client(client: reqwest::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// POST the alert and map the response to a status code or error.
    async fn post(&self, url: &str, message: &str) -> Result<u16, AlertError> {
        let response = self
            .client
            .post(url)
            .json(&WebhookPayload { text: message })
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AlertError::HttpError(status.as_u16()));
        }
        Ok(status.as_u16())
    }

    fn classify_error(&self, e: reqwest::Error) -> AlertError {
        if e.is_timeout() {
            AlertError::Timeout(self.timeout.as_secs_f64())
        } else {
            AlertError::RequestFailed(e.to_string())
        }
    }
}

#[async_trait]
impl Alerter for WebhookAlerter {
    async fn alert(&self, webhook_url: Option<&str>, message: &str) -> AlertDelivery {
        let Some(url) = webhook_url.map(str::trim).filter(|u| !u.is_empty()) else {
            tracing::error!(alert = %message, "ALERT");
            return AlertDelivery::Local;
        };

        match self.post(url, message).await {
            Ok(status) => {
                tracing::info!(status, "Sent alert to webhook");
                AlertDelivery::Delivered { status }
            }
            Err(error) => {
                tracing::error!(
                    error = %error,
                    alert = %message,
                    "Failed to send webhook alert"
                );
                AlertDelivery::Failed(error)
            }
        }
    }
}

/// Dispatch one alert with a default [`WebhookAlerter`].
pub async fn send_alert(webhook_url: Option<&str>, message: &str) -> AlertDelivery {
    WebhookAlerter::default().alert(webhook_url, message).await
}
