use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Log verbosity used when RUST_LOG is not set
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }

    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}

/// Main wardrobe configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Catalog location: a path (~ and $VARS expanded) or an http(s) URL
    pub catalog: String,
    pub log_level: LogLevel,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Grid columns for text output; 0 sizes to the terminal
    pub columns: usize,
    /// Colorize text output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: Self::wardrobe_dir().join("items.json").display().to_string(),
            log_level: LogLevel::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { columns: 0, color: true }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        if let Ok(env_path) = std::env::var("WARDROBE_CONFIG") {
            let path = PathBuf::from(env_path);
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from WARDROBE_CONFIG: {}", e);
                    }
                }
            }
        }

        if let Ok(dir) = std::env::var("WARDROBE_DIR") {
            let path = PathBuf::from(dir).join("wardrobe.yaml");
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from WARDROBE_DIR: {}", e);
                    }
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let path = config_dir.join("wardrobe").join("wardrobe.yaml");
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", path.display(), e);
                    }
                }
            }
        }

        // Try ./wardrobe.yaml (for development)
        let local_config = PathBuf::from("wardrobe.yaml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load local config: {}", e);
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Directory holding wardrobe.yaml and the default catalog
    pub fn wardrobe_dir() -> PathBuf {
        std::env::var("WARDROBE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("wardrobe"))
    }

    /// Expand a path that may contain ~ or env vars
    pub fn expand_path(path: &Path) -> PathBuf {
        let path_str = path.to_string_lossy();
        let expanded = shellexpand::full(&path_str).unwrap_or_else(|_| path_str.clone());
        PathBuf::from(expanded.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.catalog.ends_with("items.json"));
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.display.columns, 0);
        assert!(config.display.color);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("catalog: https://example.com/items.json\n").unwrap();
        assert_eq!(config.catalog, "https://example.com/items.json");
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.display.color);
    }

    #[test]
    fn test_log_level_parse() {
        let config: Config = serde_yaml::from_str("log_level: debug\ndisplay:\n  columns: 3\n").unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.log_level.to_level_filter(), log::LevelFilter::Debug);
        assert_eq!(config.display.columns, 3);
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.yaml");
        fs::write(&path, "catalog: /srv/items.json\nlog_level: warn\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.catalog, "/srv/items.json");
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_load_explicit_missing_path_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.yaml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_expand_path_no_expansion() {
        let path = PathBuf::from("/usr/local/share/items.json");
        assert_eq!(Config::expand_path(&path), path);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/items.json");
        let expanded = Config::expand_path(&path);
        assert!(!expanded.to_string_lossy().contains('~'));
        assert!(expanded.to_string_lossy().ends_with("items.json"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = Config::default();
        let yaml_str = serde_yaml::to_string(&config).expect("Failed to serialize");
        let parsed: Config = serde_yaml::from_str(&yaml_str).expect("Failed to deserialize");
        assert_eq!(parsed.catalog, config.catalog);
        assert_eq!(parsed.log_level, config.log_level);
    }
}
