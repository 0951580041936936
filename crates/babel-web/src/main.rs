//! babel - Main Entry Point

use anyhow::{Context, Result};
use babel_common::init_logging;
use babel_config::{ConfigLoader, ConfigSource};
use clap::Parser;
use tracing::info;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Log filter, overrides the configured level
    #[arg(short, long)]
    log_level: Option<String>,

    /// Address to listen on, overrides the configured bind address
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let source = match args.config {
        Some(path) => ConfigSource::File(path.into()),
        None => ConfigLoader::locate(),
    };
    let mut config = ConfigLoader::load_from(&source)?;

    if let Some(bind) = args.bind {
        config.server.bind_address = bind;
    }

    init_logging(&config.logging.to_logging_config(args.log_level.as_deref()))?;

    match &source {
        ConfigSource::File(path) => info!("Loaded configuration from {}", path.display()),
        ConfigSource::Defaults => info!("No configuration file found, using defaults"),
    }
    info!("Starting babel on {}", config.server.bind_address);

    babel_web::start_server(&config)
        .await
        .context("server terminated with an error")?;

    info!("babel has shut down");
    Ok(())
}
