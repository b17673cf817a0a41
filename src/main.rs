//! rbac-server - RBAC service with a cached permit check
//!
//! Loads configuration, initialises logging and serves the REST API.

use clap::Parser;
use rbac_rs::config::{Config, LogConfig};
use rbac_rs::server;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "rbac-server", version, about = "Role-based access control service")]
struct Cli {
    /// YAML configuration file; environment variables alone are used when absent
    #[arg(short, long, env = "RBAC_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listening port
    #[arg(short, long)]
    port: Option<u16>,
}

fn init_logging(log: &LogConfig) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn load_config(cli: &Cli) -> rbac_rs::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::from_env()?,
    };

    if let Some(port) = cli.port {
        config.rbac.server.port = port;
    }
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match load_config(&cli).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(config.log());

    match server::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display keeps the message readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
