//! Backend selector demo.
//!
//! Routes a batch of synthetic requests through the configured selection
//! policy and prints where each one went.
//!
//! ```text
//!   config file (optional)      CLI overrides
//!          │                         │
//!          ▼                         ▼
//!   ┌──────────────┐        ┌────────────────┐
//!   │ config::read │───────▶│ SelectorConfig │
//!   └──────────────┘        └───────┬────────┘
//!                                   ▼
//!                           ┌────────────────┐
//!      request 1..=N ──────▶│    Selector    │──────▶ "Request i: Routed to <server>"
//!                           └────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use backend_selector::config::{read_config, validate_config, ConfigError, Policy, SelectorConfig};
use backend_selector::observability::logging;
use backend_selector::Selector;

#[derive(Parser)]
#[command(name = "backend-selector")]
#[command(about = "Route synthetic requests across a server pool", long_about = None)]
struct Cli {
    /// TOML configuration file. Built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of synthetic requests to route.
    #[arg(short = 'n', long)]
    requests: Option<usize>,

    /// Selection policy.
    #[arg(short, long, value_enum)]
    policy: Option<Policy>,

    /// Seed for the weighted policy's generator.
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => SelectorConfig::default(),
    };
    if let Some(requests) = cli.requests {
        config.requests = requests;
    }
    if let Some(policy) = cli.policy {
        config.policy = policy;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    // Installed before validation so its warnings are not lost.
    logging::init(&config.observability.log_level);

    if let Some(path) = &cli.config {
        tracing::debug!(path = %path.display(), "Configuration file read");
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::info!(
        policy = %config.policy,
        servers = config.servers.len(),
        requests = config.requests,
        "Configuration loaded"
    );

    let selector = Selector::from_config(&config)?;
    for request in 1..=config.requests {
        let server = selector.next_server()?;
        println!("Request {request}: Routed to {server}");
    }

    tracing::info!("Done");
    Ok(())
}
