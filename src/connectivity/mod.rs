//! Internet connectivity detection.
//!
//! # Data Flow
//! ```text
//! is_active() (first call)
//!     → random label under the probe domain
//!     → resolver.rs lookup, bounded by the probe timeout
//!     → ProbeOutcome (error / timeout / addresses)
//!     → memoized bool
//!
//! is_active() (later calls)
//!     → memoized bool, no network activity
//! ```
//!
//! # Design Decisions
//! - A successful DNS answer is taken as proof of connectivity. This only
//!   shows that a resolver is reachable, not that arbitrary hosts are.
//! - The random label defeats cached answers
//! - The result is never refreshed within a probe's lifetime
//! - Errors and timeouts collapse to `false`; nothing is returned to callers

pub mod probe;
pub mod resolver;

use std::sync::OnceLock;

pub use probe::{ConnectivityProbe, ConsoleTarget, ProbeOutcome, ProbeSettings};
pub use resolver::{HostResolver, ResolveError, SystemResolver};

/// Process-wide probe over the system resolver.
pub fn global_probe() -> &'static ConnectivityProbe<SystemResolver> {
    static PROBE: OnceLock<ConnectivityProbe<SystemResolver>> = OnceLock::new();
    PROBE.get_or_init(|| ConnectivityProbe::new(SystemResolver))
}

/// Check connectivity once per process using the system resolver.
pub async fn is_internet_active() -> bool {
    global_probe().is_active().await
}
