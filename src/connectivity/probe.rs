//! Memoized connectivity probe.
//!
//! # Responsibilities
//! - Resolve a random, uncacheable hostname once, under a deadline
//! - Remember the answer for the lifetime of the probe
//! - Report an inactive connection on the console
//!
//! # Design Decisions
//! - Check-and-set goes through `tokio::sync::OnceCell`, so concurrent first
//!   callers wait on a single lookup instead of racing
//! - The deadline is the only cancellation; the lookup future is dropped on expiry.
//!   Callers that give up early leave the lookup running to completion.

use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::OnceCell;
use tokio::time;

use crate::config::HostkitConfig;
use crate::connectivity::resolver::HostResolver;
use crate::environment::{debug_enabled, EnvFlag};
use crate::random::random_string;

/// Domain whose random subdomains are resolved by default.
pub const DEFAULT_DOMAIN: &str = "ddev.site";

/// Length of the random label placed in front of the domain.
pub const DEFAULT_LABEL_LEN: usize = 10;

/// Deadline for the single lookup.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(500);

/// Notice printed when no connection was detected.
pub const INACTIVE_NOTICE: &str = "Internet connection not detected";

/// Where the probe writes its user-facing lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    /// Keeps stdout free for machine-readable output.
    Stderr,
}

impl ConsoleTarget {
    fn emit(self, line: &str) {
        match self {
            ConsoleTarget::Stdout => println!("{}", line),
            ConsoleTarget::Stderr => eprintln!("{}", line),
        }
    }
}

/// Tunables for a [`ConnectivityProbe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSettings {
    pub domain: String,
    pub label_len: usize,
    pub timeout: Duration,
    /// Print the full outcome line after the lookup.
    pub debug: bool,
    pub console: ConsoleTarget,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
            label_len: DEFAULT_LABEL_LEN,
            timeout: DEFAULT_TIMEOUT,
            debug: debug_enabled(),
            console: ConsoleTarget::default(),
        }
    }
}

/// The debug switch is read from the configured variable at conversion time.
impl From<&HostkitConfig> for ProbeSettings {
    fn from(config: &HostkitConfig) -> Self {
        Self {
            domain: config.probe.domain.clone(),
            label_len: config.probe.label_len,
            timeout: Duration::from_millis(config.probe.timeout_ms),
            debug: EnvFlag::new(&config.environment.debug_var).is_set(),
            console: ConsoleTarget::default(),
        }
    }
}

/// What a single lookup observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeOutcome {
    /// Hostname that was resolved.
    pub host: String,
    pub addrs: Vec<IpAddr>,
    /// Resolver error, if any.
    pub error: Option<String>,
    /// True when the deadline expired before the resolver answered.
    pub timed_out: bool,
    pub active: bool,
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let addrs: Vec<String> = self.addrs.iter().map(|a| a.to_string()).collect();
        write!(
            f,
            "connectivity DEBUG: err={} timed_out={} addrs=[{}] active={} host={}",
            self.error.as_deref().unwrap_or("<nil>"),
            self.timed_out,
            addrs.join(" "),
            self.active,
            self.host,
        )
    }
}

struct ProbeState<R> {
    resolver: R,
    settings: ProbeSettings,
    outcome: OnceCell<ProbeOutcome>,
}

/// Checks once whether a DNS resolver is reachable and remembers the answer.
pub struct ConnectivityProbe<R> {
    state: Arc<ProbeState<R>>,
}

impl<R: HostResolver + 'static> ConnectivityProbe<R> {
    pub fn new(resolver: R) -> Self {
        Self::with_settings(resolver, ProbeSettings::default())
    }

    pub fn with_settings(resolver: R, settings: ProbeSettings) -> Self {
        Self {
            state: Arc::new(ProbeState {
                resolver,
                settings,
                outcome: OnceCell::new(),
            }),
        }
    }

    /// Memoized result, or `None` if the check has not completed yet.
    pub fn cached(&self) -> Option<bool> {
        self.state.outcome.get().map(|o| o.active)
    }

    /// Details of the lookup that produced the memoized result.
    pub fn last_outcome(&self) -> Option<&ProbeOutcome> {
        self.state.outcome.get()
    }

    /// Whether the network appears usable.
    ///
    /// The first call performs one lookup; every later call returns the
    /// same answer without touching the network. The lookup runs on its own
    /// task, so dropping the caller's future does not abandon it.
    pub async fn is_active(&self) -> bool {
        if let Some(outcome) = self.state.outcome.get() {
            tracing::trace!(active = outcome.active, "Connectivity result served from memo");
            return outcome.active;
        }

        let state = self.state.clone();
        let task = tokio::spawn(async move {
            state.outcome.get_or_init(|| state.check()).await.active
        });

        match task.await {
            Ok(active) => active,
            Err(e) => {
                tracing::error!(error = %e, "Connectivity check task failed");
                false
            }
        }
    }
}

impl<R: HostResolver> ProbeState<R> {
    async fn check(&self) -> ProbeOutcome {
        let host = format!(
            "{}.{}",
            random_string(self.settings.label_len),
            self.settings.domain
        );

        tracing::debug!(
            host = %host,
            timeout_ms = self.settings.timeout.as_millis() as u64,
            "Probing connectivity"
        );

        let lookup = self.resolver.lookup_host(&host);
        let (addrs, error, timed_out) = match time::timeout(self.settings.timeout, lookup).await {
            Ok(Ok(addrs)) => (addrs, None, false),
            Ok(Err(e)) => (Vec::new(), Some(e.to_string()), false),
            Err(_) => (Vec::new(), None, true),
        };
        let active = error.is_none() && !timed_out;

        let outcome = ProbeOutcome {
            host,
            addrs,
            error,
            timed_out,
            active,
        };

        if self.settings.debug {
            self.settings.console.emit(&outcome.to_string());
        }

        if active {
            tracing::info!(host = %outcome.host, addrs = outcome.addrs.len(), "Connectivity detected");
        } else {
            tracing::warn!(
                host = %outcome.host,
                error = outcome.error.as_deref().unwrap_or(""),
                timed_out = outcome.timed_out,
                "Connectivity check failed"
            );
            self.settings.console.emit(INACTIVE_NOTICE);
        }

        outcome
    }
}
