//! `hostkit` command line.
//!
//! ```text
//! hostkit contains <candidate> [items...]
//! hostkit toolbox
//! hostkit online [--json]
//! hostkit random [--length N]
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use hostkit::config::{load_config, HostkitConfig};
use hostkit::connectivity::{ConnectivityProbe, ConsoleTarget, ProbeSettings, SystemResolver};
use hostkit::environment::EnvFlag;
use hostkit::observability::logging::init_logging;
use hostkit::random::random_string;
use hostkit::search::contains_string;

#[derive(Parser)]
#[command(name = "hostkit")]
#[command(about = "Small host environment checks", long_about = None)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a string is one of the given items
    Contains {
        candidate: String,
        items: Vec<String>,
    },
    /// Report whether the Docker Toolbox flavor is detected
    Toolbox,
    /// Probe for a working internet connection
    Online {
        /// Print the full probe outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a random lowercase string
    Random {
        #[arg(short, long, default_value_t = 10)]
        length: usize,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => HostkitConfig::default(),
    };

    init_logging(&config.observability.log_level);
    tracing::debug!(config = ?cli.config, "Configuration loaded");

    match cli.command {
        Commands::Contains { candidate, items } => {
            println!("{}", contains_string(&items, &candidate));
        }
        Commands::Toolbox => {
            let flag = EnvFlag::new(&config.environment.flavor_var);
            println!("{}", flag.is_set());
        }
        Commands::Online { json } => {
            let mut settings = ProbeSettings::from(&config);
            if json {
                settings.console = ConsoleTarget::Stderr;
            }
            let probe = ConnectivityProbe::with_settings(SystemResolver, settings);
            let active = probe.is_active().await;
            match probe.last_outcome() {
                Some(outcome) if json => println!("{}", serde_json::to_string_pretty(outcome)?),
                _ => println!("{}", active),
            }
        }
        Commands::Random { length } => {
            println!("{}", random_string(length));
        }
    }

    Ok(())
}
