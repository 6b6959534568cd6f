//! TCP connect-and-close connector.

use super::error::ProbeError;
use async_trait::async_trait;
use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpStream;

/// Opens (and immediately closes) a connection to a target.
///
/// Implementations must bound the whole attempt, name resolution
/// included, by `timeout`.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, host: &str, port: u16, timeout: Duration) -> Result<(), ProbeError>;
}

/// Plain TCP reachability: resolve, connect, close. No bytes are exchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpConnector;

impl TcpConnector {
    async fn resolve(host: &str, port: u16) -> Result<Vec<SocketAddr>, ProbeError> {
        let addrs: Vec<SocketAddr> = tokio::net::lookup_host((host, port))
            .await
            .map_err(|e| ProbeError::DnsError(e.to_string()))?
            .collect();

        if addrs.is_empty() {
            return Err(ProbeError::DnsError(format!("no addresses for {}", host)));
        }
        Ok(addrs)
    }

    async fn connect_once(host: &str, port: u16) -> Result<(), ProbeError> {
        let addrs = Self::resolve(host, port).await?;
        let stream = TcpStream::connect(&addrs[..])
            .await
            .map_err(|e| ProbeError::from_io(&e))?;
        drop(stream);
        Ok(())
    }
}

/// Run `attempt`, giving up with [`ProbeError::Timeout`] once `timeout` elapses.
async fn bounded<F>(timeout: Duration, attempt: F) -> Result<(), ProbeError>
where
    F: Future<Output = Result<(), ProbeError>>,
{
    match tokio::time::timeout(timeout, attempt).await {
        Ok(result) => result,
        Err(_) => Err(ProbeError::Timeout(timeout.as_secs_f64())),
    }
}

#[async_trait]
impl Connector for TcpConnector {
    async fn connect(&self, host: &str, port: u16, timeout: Duration) -> Result<(), ProbeError> {
        bounded(timeout, Self::connect_once(host, port)).await
    }
}
