//! Shared test utilities for hcae integration tests.
//!
//! Provides the CLI command builder and TCP endpoint helpers used
//! across test files.

#![allow(dead_code)]

use assert_cmd::Command;
use std::net::TcpListener;

// =============================================================================
// CLI
// =============================================================================

/// Environment variables that would otherwise leak into the command under test.
const HCAE_ENV: [&str; 8] = [
    "HCAE_HOST",
    "HCAE_PORT",
    "HCAE_TIMEOUT",
    "HCAE_RETRIES",
    "HCAE_WEBHOOK",
    "HCAE_LOG_LEVEL",
    "HCAE_LOG_FORMAT",
    "HCAE_TERRAFORM_BIN",
];

/// Get the hcae binary with a clean environment and colours disabled.
pub fn hcae_cmd() -> Command {
    let mut cmd = Command::cargo_bin("hcae").unwrap();
    for var in HCAE_ENV {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .env("CLICOLOR", "0");
    cmd
}

// =============================================================================
// TCP endpoints
// =============================================================================

/// Bind a listener on an ephemeral loopback port.
///
/// Connections complete in the kernel backlog, so nothing needs to accept them.
pub fn listening_port() -> (TcpListener, u16) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    (listener, port)
}

/// A loopback port with nothing listening on it.
pub fn closed_port() -> u16 {
    let (listener, port) = listening_port();
    drop(listener);
    port
}
