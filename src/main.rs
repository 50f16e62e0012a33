use clap::Parser;
use eyre::{Context, Result};
use log::info;

mod cli;
mod commands;
mod config;

use cli::{Cli, Commands, OutputFormat};
use config::{Config, FilterLevel};

fn setup_logging(log_level: &FilterLevel) {
    // RUST_LOG env var takes precedence, otherwise use config log_level
    let mut builder = env_logger::Builder::new();

    if std::env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    } else {
        builder.filter_level(log_level.as_filter());
    }

    // stdout carries the formatted request lines
    builder.target(env_logger::Target::Stderr).init();

    info!(
        "Log level: {} (from {})",
        log_level.as_filter(),
        if std::env::var("RUST_LOG").is_ok() { "RUST_LOG env" } else { "config" }
    );
}

fn run(cli: Cli, config: Config) -> Result<()> {
    let overrides = commands::overrides(&config, &cli.bind);

    match cli.command {
        Commands::Replay { file } => {
            let plugin = commands::build_plugin(overrides);
            commands::replay::run(file.as_deref(), &plugin)
        }
        Commands::Events { format } => commands::events::run(OutputFormat::resolve(format), &overrides),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration (before logging, so log messages in Config::load are silent)
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(&config.log_level);

    cli.color.unwrap_or(config.color).apply();

    info!("Starting gqlog with config from: {:?}", cli.config);

    run(cli, config).context("Command failed")?;

    Ok(())
}
