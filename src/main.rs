use clap::Parser;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

mod catalog;
mod cli;
mod commands;
mod config;
mod display;
mod filter;
mod group;
mod outfit;
mod session;

use cli::{Cli, Commands, OutputFormat};
use config::{Config, LogLevel};

fn setup_logging(log_level: &LogLevel, verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wardrobe")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("wardrobe.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG env var takes precedence, otherwise use config log_level
    let mut builder = env_logger::Builder::new();

    if std::env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    } else if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    } else {
        builder.filter_level(log_level.to_level_filter());
    }

    builder.target(env_logger::Target::Pipe(target)).init();

    info!("Logging initialized, writing to: {}", log_file.display());
    info!(
        "Log level: {} (from {})",
        log_level.as_filter(),
        if std::env::var("RUST_LOG").is_ok() { "RUST_LOG env" } else { "config" }
    );
    Ok(())
}

fn run(cli: Cli, config: Config) -> Result<()> {
    let catalog_override = cli.catalog.as_deref();

    match cli.command {
        Commands::Items { filters, format } => {
            let catalog = commands::load_catalog(catalog_override, &config)?;
            commands::items::run(catalog, filters.into(), OutputFormat::resolve(format), &config)
        }
        Commands::Locations { format } => {
            let catalog = commands::load_catalog(catalog_override, &config)?;
            commands::locations::run(catalog, OutputFormat::resolve(format))
        }
        Commands::Picker {
            category,
            filters,
            format,
        } => {
            let catalog = commands::load_catalog(catalog_override, &config)?;
            commands::picker::run(catalog, category, filters.into(), OutputFormat::resolve(format), &config)
        }
        Commands::Outfit {
            filters,
            outfit_type,
            picks,
            without,
            blank,
            seed,
            format,
        } => {
            let catalog = commands::load_catalog(catalog_override, &config)?;
            let request = commands::outfit::OutfitRequest {
                filters: filters.into(),
                outfit_type,
                picks,
                without,
                blank,
                seed,
            };
            commands::outfit::run(catalog, request, OutputFormat::resolve(format))
        }
        Commands::Drop { category, payload } => {
            let catalog = commands::load_catalog(catalog_override, &config)?;
            commands::drop::run(catalog, category, payload.as_deref())
        }
        Commands::Config { action } => commands::config::run(action, &config),
        Commands::Completions { shell } => commands::completions::run(shell),
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments first
    let cli = Cli::parse();

    // Load configuration (before logging, so log messages in Config::load are silent)
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(&config.log_level, cli.verbose).context("Failed to setup logging")?;

    if !config.display.color {
        colored::control::set_override(false);
    }

    info!("Starting wardrobe with config from: {:?}", cli.config);

    run(cli, config).context("Command failed")?;

    Ok(())
}
