//! Error types for reachability probing.

use thiserror::Error;

/// Why a single connection attempt failed.
///
/// The prober only acts on success vs failure; the variants exist so
/// attempt logs can say what went wrong.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProbeError {
    /// Connect did not complete within the attempt timeout
    #[error("connect timeout after {0}s")]
    Timeout(f64),

    /// Peer actively refused the connection
    #[error("connection refused: {0}")]
    Refused(String),

    /// Host name could not be resolved
    #[error("DNS resolution failed: {0}")]
    DnsError(String),

    /// Any other network-level failure (unreachable, reset, ...)
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
}

impl ProbeError {
    /// Classify an I/O error returned by a connect call.
    pub fn from_io(err: &std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::ConnectionRefused => ProbeError::Refused(err.to_string()),
            _ => ProbeError::ConnectionFailed(err.to_string()),
        }
    }
}
