//! Stub resolvers shared by the integration tests.

use std::net::IpAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use hostkit::connectivity::{HostResolver, ResolveError};

/// How a [`StubResolver`] answers.
#[allow(dead_code)]
pub enum Behavior {
    Answer(Vec<IpAddr>),
    Fail,
    /// Never completes.
    Hang,
    /// Answers after a delay.
    Slow(Duration, Vec<IpAddr>),
}

/// A resolver that counts how many lookups it served.
pub struct StubResolver {
    behavior: Behavior,
    calls: AtomicU32,
}

#[allow(dead_code)]
impl StubResolver {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: AtomicU32::new(0),
        }
    }

    pub fn answering() -> Self {
        Self::new(Behavior::Answer(vec![IpAddr::from([192, 0, 2, 1])]))
    }

    pub fn failing() -> Self {
        Self::new(Behavior::Fail)
    }

    pub fn hanging() -> Self {
        Self::new(Behavior::Hang)
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HostResolver for StubResolver {
    async fn lookup_host(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            Behavior::Answer(addrs) => Ok(addrs.clone()),
            Behavior::Fail => Err(ResolveError::NoAddresses(host.to_string())),
            Behavior::Hang => std::future::pending().await,
            Behavior::Slow(delay, addrs) => {
                tokio::time::sleep(*delay).await;
                Ok(addrs.clone())
            }
        }
    }
}
