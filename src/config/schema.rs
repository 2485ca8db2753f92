//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::connectivity::probe::{DEFAULT_DOMAIN, DEFAULT_LABEL_LEN, DEFAULT_TIMEOUT};
use crate::environment::{DEBUG_VAR, DOCKER_TOOLBOX_VAR};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HostkitConfig {
    /// Connectivity probe settings.
    pub probe: ProbeConfig,

    /// Environment variable names.
    pub environment: EnvironmentConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Connectivity probe configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProbeConfig {
    /// Parent domain for the random hostname.
    pub domain: String,

    /// Length of the random label.
    pub label_len: usize,

    /// Lookup deadline in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
            label_len: DEFAULT_LABEL_LEN,
            timeout_ms: DEFAULT_TIMEOUT.as_millis() as u64,
        }
    }
}

/// Names of the environment variables consulted at runtime.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Variable whose presence marks a Docker Toolbox host.
    pub flavor_var: String,

    /// Variable enabling verbose probe diagnostics.
    pub debug_var: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            flavor_var: DOCKER_TOOLBOX_VAR.to_string(),
            debug_var: DEBUG_VAR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}
