//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All modules produce:
//!     → tracing events (probe start, outcome, memo hits)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr)
//! ```
//!
//! # Design Decisions
//! - Structured fields rather than formatted messages
//! - Logs go to stderr; stdout carries user-facing output only

pub mod logging;
