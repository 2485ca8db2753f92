//! Host utilities: string membership, runtime flavor detection,
//! connectivity probing and random strings.

pub mod config;
pub mod connectivity;
pub mod environment;
pub mod observability;
pub mod random;
pub mod search;

pub use config::HostkitConfig;
pub use connectivity::{is_internet_active, ConnectivityProbe, HostResolver, SystemResolver};
pub use environment::{debug_enabled, is_docker_toolbox};
pub use random::random_string;
pub use search::contains_string;
