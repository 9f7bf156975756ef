use colored::*;
use eyre::Result;

use crate::cli::{ConfigAction, OutputFormat};
use crate::config::Config;

pub fn run(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Show { format } => show(OutputFormat::resolve(format), config),
        ConfigAction::Get { key } => get(&key, config),
    }
}

fn show(format: OutputFormat, config: &Config) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(config)?);
        }
        OutputFormat::Text => {
            println!("{}", "Wardrobe Configuration".bold());
            println!();
            println!("  catalog: {}", config.catalog);
            println!("  log_level: {}", config.log_level.as_filter());
            println!();
            println!("{}:", "display".cyan());
            println!("  columns: {}", config.display.columns);
            println!("  color: {}", config.display.color);
        }
    }

    Ok(())
}

fn lookup(key: &str, config: &Config) -> Option<String> {
    match key {
        "catalog" => Some(config.catalog.clone()),
        "log_level" | "log-level" => Some(config.log_level.as_filter().to_string()),
        "display.columns" => Some(config.display.columns.to_string()),
        "display.color" => Some(config.display.color.to_string()),
        _ => None,
    }
}

fn get(key: &str, config: &Config) -> Result<()> {
    match lookup(key, config) {
        Some(v) => println!("{}", v),
        None => eyre::bail!("Unknown config key: {}", key),
    }
    Ok(())
}
