mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use regsim_core::AppConfig;

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config_str = std::fs::read_to_string(&cli.config).unwrap_or_else(|_| {
        warn!(path = %cli.config, "config file not found, using defaults");
        include_str!("../config/default.toml").to_string()
    });
    let config: AppConfig = toml::from_str(&config_str)?;

    match cli.command {
        Commands::Submit { data, count } => commands::run_submit(data, count).await,
        Commands::Routes => commands::run_routes(config),
        Commands::Resolve { path } => commands::run_resolve(config, path),
    }
}
