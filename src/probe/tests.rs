//! Unit tests for the probe module.

use super::*;
use crate::alert::AlertDelivery;
use async_trait::async_trait;
use proptest::prelude::*;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

/// Connector that fails until a chosen attempt, then succeeds.
struct ScriptedConnector {
    /// Zero-based attempt that connects; `None` fails forever
    succeed_at: Option<u32>,
    calls: AtomicU32,
}

impl ScriptedConnector {
    fn failing() -> Arc<Self> {
        Arc::new(Self {
            succeed_at: None,
            calls: AtomicU32::new(0),
        })
    }

    fn succeeding_at(index: u32) -> Arc<Self> {
        Arc::new(Self {
            succeed_at: Some(index),
            calls: AtomicU32::new(0),
        })
    }

    fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Connector for ScriptedConnector {
    async fn connect(&self, _host: &str, _port: u16, _timeout: Duration) -> Result<(), ProbeError> {
        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        match self.succeed_at {
            Some(target) if index >= target => Ok(()),
            _ => Err(ProbeError::Refused("scripted".to_string())),
        }
    }
}

/// Alerter that records every dispatch.
#[derive(Default)]
struct RecordingAlerter {
    alerts: Mutex<Vec<(Option<String>, String)>>,
}

impl RecordingAlerter {
    fn alerts(&self) -> Vec<(Option<String>, String)> {
        self.alerts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Alerter for RecordingAlerter {
    async fn alert(&self, webhook_url: Option<&str>, message: &str) -> AlertDelivery {
        self.alerts
            .lock()
            .unwrap()
            .push((webhook_url.map(str::to_string), message.to_string()));
        AlertDelivery::Local
    }
}

fn config(retries: u32) -> ProbeConfig {
    ProbeConfig {
        max_retries: retries,
        ..ProbeConfig::new("127.0.0.1", 22022)
    }
}

fn prober(connector: Arc<ScriptedConnector>, alerter: Arc<RecordingAlerter>) -> Prober {
    Prober::with_parts(connector, alerter)
}

// ============================================================================
// Config and message formatting
// ============================================================================

#[test]
fn test_default_retry_interval_is_one_second() {
    assert_eq!(DEFAULT_RETRY_INTERVAL, Duration::from_secs(1));
    assert_eq!(Prober::new().retry_interval(), Duration::from_secs(1));
}

#[test]
fn test_probe_config_defaults() {
    let config = ProbeConfig::new("10.100.0.2", 22);
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.max_retries, 2);
    assert_eq!(config.total_attempts(), 3);
    assert!(config.webhook_url.is_none());
}

#[test]
fn test_failure_message_format() {
    let config = config(0);
    assert_eq!(
        config.failure_message(),
        "VPN health check failed to reach 127.0.0.1:22022 after 1 attempts"
    );
}

#[test]
fn test_failure_message_uses_subject() {
    let config = ProbeConfig {
        subject: "Bastion".to_string(),
        ..ProbeConfig::new("bastion.internal", 2222)
    };
    assert_eq!(
        config.failure_message(),
        "Bastion health check failed to reach bastion.internal:2222 after 3 attempts"
    );
}

#[test]
fn test_outcome_exit_codes() {
    assert_eq!(Outcome::Success.exit_code(), 0);
    let failure = Outcome::Failure {
        message: "down".to_string(),
        alert: AlertDelivery::Local,
    };
    assert_eq!(failure.exit_code(), 2);
    assert!(!failure.is_success());
}

// ============================================================================
// Retry loop
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_first_attempt_success_stops() {
    let connector = ScriptedConnector::succeeding_at(0);
    let alerter = Arc::new(RecordingAlerter::default());
    let prober = prober(connector.clone(), alerter.clone());

    let start = tokio::time::Instant::now();
    let outcome = prober.probe(&config(2)).await;

    assert_eq!(outcome, Outcome::Success);
    assert_eq!(connector.calls(), 1);
    assert!(alerter.alerts().is_empty());
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_success_on_later_attempt_stops_early() {
    let connector = ScriptedConnector::succeeding_at(1);
    let alerter = Arc::new(RecordingAlerter::default());
    let prober = prober(connector.clone(), alerter.clone());

    let mut reported = Vec::new();
    let outcome = prober
        .probe_with(&config(4), |attempt| {
            reported.push((attempt.attempt_index, attempt.succeeded))
        })
        .await;

    assert!(outcome.is_success());
    assert_eq!(connector.calls(), 2);
    assert_eq!(reported, vec![(0, false), (1, true)]);
    assert!(alerter.alerts().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_exhaustion_alerts_once() {
    let connector = ScriptedConnector::failing();
    let alerter = Arc::new(RecordingAlerter::default());
    let prober = prober(connector.clone(), alerter.clone());

    let outcome = prober.probe(&config(2)).await;

    assert_eq!(connector.calls(), 3);
    let alerts = alerter.alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(
        alerts[0].1,
        "VPN health check failed to reach 127.0.0.1:22022 after 3 attempts"
    );
    match outcome {
        Outcome::Failure { message, alert } => {
            assert_eq!(message, alerts[0].1);
            assert_eq!(alert, AlertDelivery::Local);
        }
        Outcome::Success => panic!("Expected failure"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_zero_retries_single_attempt() {
    let connector = ScriptedConnector::failing();
    let alerter = Arc::new(RecordingAlerter::default());
    let prober = prober(connector.clone(), alerter.clone());

    let outcome = prober.probe(&config(0)).await;

    assert_eq!(connector.calls(), 1);
    assert_eq!(outcome.exit_code(), 2);
    assert!(alerter.alerts()[0].1.ends_with("after 1 attempts"));
}

#[tokio::test(start_paused = true)]
async fn test_webhook_url_is_passed_to_alerter() {
    let connector = ScriptedConnector::failing();
    let alerter = Arc::new(RecordingAlerter::default());
    let prober = prober(connector, alerter.clone());

    let config = ProbeConfig {
        webhook_url: Some("https://hooks.example.com/T000".to_string()),
        ..config(0)
    };
    prober.probe(&config).await;

    assert_eq!(
        alerter.alerts()[0].0.as_deref(),
        Some("https://hooks.example.com/T000")
    );
}

#[tokio::test(start_paused = true)]
async fn test_fixed_interval_between_failures() {
    let connector = ScriptedConnector::failing();
    let alerter = Arc::new(RecordingAlerter::default());
    let prober = prober(connector, alerter);

    let start = tokio::time::Instant::now();
    prober.probe(&config(2)).await;

    // Two pauses between three attempts, none after the last one.
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_secs(2));
    assert!(elapsed < Duration::from_secs(3));
}

#[tokio::test(start_paused = true)]
async fn test_custom_retry_interval() {
    let connector = ScriptedConnector::failing();
    let alerter = Arc::new(RecordingAlerter::default());
    let prober = prober(connector, alerter).with_retry_interval(Duration::from_millis(250));

    let start = tokio::time::Instant::now();
    prober.probe(&config(4)).await;

    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_secs(1));
    assert!(elapsed < Duration::from_millis(1250));
}

#[tokio::test(start_paused = true)]
async fn test_attempt_reports_carry_totals_and_errors() {
    let connector = ScriptedConnector::failing();
    let alerter = Arc::new(RecordingAlerter::default());
    let prober = prober(connector, alerter);

    let mut reported = Vec::new();
    prober
        .probe_with(&config(1), |attempt| reported.push(attempt.clone()))
        .await;

    assert_eq!(reported.len(), 2);
    assert_eq!(reported[1].attempt_number(), 2);
    assert_eq!(reported[1].total_attempts, 2);
    assert!(matches!(reported[0].error, Some(ProbeError::Refused(_))));
}

#[tokio::test(start_paused = true)]
async fn test_repeated_runs_are_independent() {
    let alerter = Arc::new(RecordingAlerter::default());

    for _ in 0..2 {
        let connector = ScriptedConnector::succeeding_at(0);
        let prober = prober(connector.clone(), alerter.clone());
        assert_eq!(prober.probe(&config(2)).await, Outcome::Success);
        assert_eq!(connector.calls(), 1);
    }
    assert!(alerter.alerts().is_empty());
}

// ============================================================================
// Attempt budget properties
// ============================================================================

fn run_paused<F: std::future::Future>(fut: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .unwrap()
        .block_on(fut)
}

proptest! {
    #[test]
    fn prop_attempts_never_exceed_budget(retries in 0u32..12, succeed_at in proptest::option::of(0u32..16)) {
        let connector = match succeed_at {
            Some(k) => ScriptedConnector::succeeding_at(k),
            None => ScriptedConnector::failing(),
        };
        let alerter = Arc::new(RecordingAlerter::default());
        let prober = prober(connector.clone(), alerter.clone());

        let outcome = run_paused(prober.probe(&config(retries)));

        let budget = retries + 1;
        prop_assert!(connector.calls() <= budget);
        match succeed_at {
            Some(k) if k < budget => {
                prop_assert_eq!(outcome, Outcome::Success);
                prop_assert_eq!(connector.calls(), k + 1);
                prop_assert!(alerter.alerts().is_empty());
            }
            _ => {
                prop_assert_eq!(outcome.exit_code(), 2);
                prop_assert_eq!(connector.calls(), budget);
                let alerts = alerter.alerts();
                prop_assert_eq!(alerts.len(), 1);
                let expected = format!("after {} attempts", budget);
                prop_assert!(alerts[0].1.contains(&expected));
            }
        }
    }
}
