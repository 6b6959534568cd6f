//! Check command implementation

use crate::alert::WebhookAlerter;
use crate::cli::output::{format_alert, format_attempt, format_status};
use crate::cli::CheckArgs;
use crate::config::{ConfigError, HcaeConfig};
use crate::probe::{Outcome, Prober, TcpConnector};
use std::sync::Arc;
use std::time::Duration;

/// Load configuration with CLI overrides
pub fn load_config_with_overrides(args: &CheckArgs) -> Result<HcaeConfig, ConfigError> {
    let mut config = HcaeConfig::load_or_default(&args.config)?.with_env_overrides();

    // CLI overrides (highest priority)
    if let Some(ref host) = args.host {
        config.probe.host = Some(host.clone());
    }
    if let Some(port) = args.port {
        config.probe.port = port;
    }
    if let Some(timeout) = args.timeout {
        config.probe.timeout_seconds = timeout;
    }
    if let Some(retries) = args.retries {
        config.probe.retries = retries;
    }
    if let Some(ref webhook) = args.webhook {
        config.alert.webhook_url = Some(webhook.clone());
    }
    if let Some(ref subject) = args.subject {
        config.probe.subject = subject.clone();
    }
    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }

    Ok(config)
}

/// Build the prober described by `config`.
pub fn build_prober(config: &HcaeConfig) -> Result<Prober, ConfigError> {
    let alerter = WebhookAlerter::new(Duration::from_secs(config.alert.timeout_seconds));
    Ok(Prober::with_parts(Arc::new(TcpConnector), Arc::new(alerter))
        .with_retry_interval(config.probe.retry_interval()?))
}

/// Handle `hcae check`
///
/// Prints one line per attempt, the alert disposition on failure, and a
/// final status line. The returned outcome decides the exit code.
pub async fn handle_check(args: &CheckArgs) -> Result<Outcome, Box<dyn std::error::Error>> {
    let config = load_config_with_overrides(args)?;
    if let Err(e) = crate::logging::init_tracing(&config.logging) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let probe_config = config.probe_config()?;
    let prober = build_prober(&config)?;

    let outcome = prober
        .probe_with(&probe_config, |attempt| {
            println!("{}", format_attempt(&probe_config, attempt));
        })
        .await;

    if let Outcome::Failure { message, alert } = &outcome {
        println!("{}", format_alert(message, alert));
    }
    println!("{}", format_status(&probe_config, &outcome));

    Ok(outcome)
}
