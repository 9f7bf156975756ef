use eyre::{Context, Result};

use crate::catalog::{Catalog, CatalogSource};
use crate::config::Config;

pub mod completions;
pub mod config;
pub mod drop;
pub mod items;
pub mod locations;
pub mod outfit;
pub mod picker;

/// Resolve the catalog source (CLI flag over config) and load it
pub fn load_catalog(catalog_override: Option<&str>, config: &Config) -> Result<Catalog> {
    let source = CatalogSource::parse(catalog_override.unwrap_or(config.catalog.as_str()));
    source
        .load()
        .with_context(|| format!("Failed to load catalog from {}", source))
}
