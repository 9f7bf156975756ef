//! The clothing catalog
//!
//! A catalog is a static JSON array of item records, read once from a local
//! file or fetched from a URL. It is never written back.

use serde::Serialize;

pub mod item;
pub mod loader;

pub use item::{Category, Item};
pub use loader::CatalogSource;

/// Every item in the wardrobe, in source order
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    #[cfg(test)]
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Parse a catalog document (a JSON array of items)
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        let items: Vec<Item> = serde_json::from_str(content)?;
        Ok(Self { items })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn distinct_locations(&self) -> Vec<String> {
        distinct_locations(&self.items)
    }
}

/// Each location once, in order of first appearance
pub fn distinct_locations(items: &[Item]) -> Vec<String> {
    let mut locations: Vec<String> = Vec::new();
    for item in items {
        if !locations.contains(&item.location) {
            locations.push(item.location.clone());
        }
    }
    locations
}
