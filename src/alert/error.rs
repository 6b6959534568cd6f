//! Error types for alert dispatch.

use thiserror::Error;

/// Reasons a webhook alert was not delivered.
///
/// These never leave the alert module as errors; they are logged and
/// reported through [`super::AlertDelivery::Failed`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlertError {
    /// Webhook did not answer within the alert timeout
    #[error("webhook timeout after {0}s")]
    Timeout(f64),

    /// Could not reach the webhook (connection, DNS, TLS, bad URL)
    #[error("webhook request failed: {0}")]
    RequestFailed(String),

    /// Webhook answered with a non-2xx status
    #[error("webhook returned HTTP {0}")]
    HttpError(u16),
}
