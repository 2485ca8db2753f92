//! Hostname resolution capability.
//!
//! # Responsibilities
//! - Abstract "look up a hostname" so the probe can be tested with stubs
//! - Provide the default implementation over the OS resolver

use std::io;
use std::net::IpAddr;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while resolving a hostname.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("lookup failed: {0}")]
    Lookup(#[from] io::Error),

    #[error("no addresses found for {0}")]
    NoAddresses(String),
}

/// Anything that can resolve a hostname to addresses.
///
/// Cancellation is by dropping the returned future; implementations must
/// not rely on being polled to completion.
#[async_trait]
pub trait HostResolver: Send + Sync {
    async fn lookup_host(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError>;
}

/// Resolver backed by the operating system (`getaddrinfo`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

#[async_trait]
impl HostResolver for SystemResolver {
    async fn lookup_host(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError> {
        // Port is required by the socket-address API and ignored by DNS.
        let addrs: Vec<IpAddr> = tokio::net::lookup_host((host, 0))
            .await?
            .map(|sa| sa.ip())
            .collect();

        if addrs.is_empty() {
            return Err(ResolveError::NoAddresses(host.to_string()));
        }
        Ok(addrs)
    }
}

#[async_trait]
impl<R: HostResolver + ?Sized> HostResolver for std::sync::Arc<R> {
    async fn lookup_host(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError> {
        (**self).lookup_host(host).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_system_resolver_localhost() {
        let addrs = SystemResolver.lookup_host("localhost").await.unwrap();
        assert!(addrs.iter().any(|ip| ip.is_loopback()));
    }

    #[tokio::test]
    async fn test_system_resolver_ip_literal() {
        let addrs = SystemResolver.lookup_host("127.0.0.1").await.unwrap();
        assert_eq!(addrs, vec![IpAddr::from([127, 0, 0, 1])]);
    }

    #[test]
    fn test_error_display() {
        let err = ResolveError::NoAddresses("x.example".into());
        assert_eq!(err.to_string(), "no addresses found for x.example");
    }
}
