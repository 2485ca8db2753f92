//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → HostkitConfig (validated, immutable)
//!     → ProbeSettings / EnvFlag / log level
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so an empty file is a valid config
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::EnvironmentConfig;
pub use schema::HostkitConfig;
pub use schema::ObservabilityConfig;
pub use schema::ProbeConfig;
