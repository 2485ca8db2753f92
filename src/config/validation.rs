//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeout > 0, label fits a DNS label)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: HostkitConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::HostkitConfig;

/// Longest label DNS allows.
pub const MAX_LABEL_LEN: usize = 63;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("probe.domain must not be empty")]
    EmptyDomain,

    #[error("probe.domain '{0}' must not start or end with '.'")]
    MalformedDomain(String),

    #[error("probe.label_len must be between 1 and {max}, got {0}", max = MAX_LABEL_LEN)]
    LabelLength(usize),

    #[error("probe.timeout_ms must be greater than zero")]
    ZeroTimeout,

    #[error("environment.{0} must not be empty")]
    EmptyVariable(&'static str),
}

pub fn validate_config(config: &HostkitConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let domain = &config.probe.domain;
    if domain.is_empty() {
        errors.push(ValidationError::EmptyDomain);
    } else if domain.starts_with('.') || domain.ends_with('.') {
        errors.push(ValidationError::MalformedDomain(domain.clone()));
    }

    if !(1..=MAX_LABEL_LEN).contains(&config.probe.label_len) {
        errors.push(ValidationError::LabelLength(config.probe.label_len));
    }

    if config.probe.timeout_ms == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.environment.flavor_var.is_empty() {
        errors.push(ValidationError::EmptyVariable("flavor_var"));
    }
    if config.environment.debug_var.is_empty() {
        errors.push(ValidationError::EmptyVariable("debug_var"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
