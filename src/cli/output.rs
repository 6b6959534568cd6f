//! Output formatting helpers for CLI commands

use crate::alert::AlertDelivery;
use crate::probe::{AttemptResult, Outcome, ProbeConfig};
use colored::Colorize;

/// `Attempt 1/3: connect to 10.100.0.2:22 -> true`
pub fn format_attempt(config: &ProbeConfig, attempt: &AttemptResult) -> String {
    format!(
        "Attempt {}/{}: connect to {} -> {}",
        attempt.attempt_number(),
        attempt.total_attempts,
        config.target(),
        attempt.succeeded
    )
}

/// Line describing where the exhaustion alert went.
pub fn format_alert(message: &str, delivery: &AlertDelivery) -> String {
    match delivery {
        AlertDelivery::Local => format!("{} {}", "ALERT:".red().bold(), message),
        AlertDelivery::Delivered { .. } => "Sent alert to webhook".to_string(),
        AlertDelivery::Failed(error) => {
            format!("{} {}", "Failed to send webhook alert:".yellow(), error)
        }
    }
}

/// Final status line.
pub fn format_status(config: &ProbeConfig, outcome: &Outcome) -> String {
    let line = format!("{} health check", config.subject);
    match outcome {
        Outcome::Success => format!("{} {}", line, "OK".green()),
        Outcome::Failure { .. } => format!("{} {}", line, "FAILED".red()),
    }
}
