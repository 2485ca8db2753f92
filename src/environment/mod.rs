//! Environment-driven runtime detection.
//!
//! # Responsibilities
//! - Detect the Docker Toolbox flavor of the container runtime
//! - Detect the debug verbosity switch used by the connectivity probe
//!
//! # Design Decisions
//! - A variable counts as set only when it holds a non-empty value
//! - Detection is evaluated against the environment at call time, never cached

use std::env;

/// Set by the Docker Toolbox installer on hosts running the legacy VM-backed runtime.
pub const DOCKER_TOOLBOX_VAR: &str = "DOCKER_TOOLBOX_INSTALL_PATH";

/// Enables verbose diagnostics.
pub const DEBUG_VAR: &str = "DDEV_DEBUG";

/// A named environment variable treated as a boolean switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFlag {
    name: String,
}

impl EnvFlag {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True if the variable is set to a non-empty value in the process environment.
    pub fn is_set(&self) -> bool {
        self.is_set_in(|key| env::var_os(key).map(|v| v.to_string_lossy().into_owned()))
    }

    /// Evaluate the flag against an arbitrary lookup.
    pub fn is_set_in<F>(&self, lookup: F) -> bool
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(&self.name).is_some_and(|value| !value.is_empty())
    }
}

/// Reports whether the running Docker is Docker Toolbox.
pub fn is_docker_toolbox() -> bool {
    EnvFlag::new(DOCKER_TOOLBOX_VAR).is_set()
}

/// Reports whether verbose debug output was requested.
pub fn debug_enabled() -> bool {
    EnvFlag::new(DEBUG_VAR).is_set()
}
