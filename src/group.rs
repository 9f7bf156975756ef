//! Per-category item pools

use indexmap::IndexMap;
use serde::Serialize;

use crate::catalog::{Category, Item};

/// Items bucketed by category. Every category is present, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryPools {
    pools: IndexMap<Category, Vec<Item>>,
}

impl Default for CategoryPools {
    fn default() -> Self {
        Self {
            pools: Category::ALL.iter().map(|c| (*c, Vec::new())).collect(),
        }
    }
}

impl CategoryPools {
    pub fn get(&self, category: Category) -> &[Item] {
        self.pools.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self, category: Category) -> bool {
        self.get(category).is_empty()
    }

    /// Buckets in canonical category order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Item])> {
        self.pools.iter().map(|(c, items)| (*c, items.as_slice()))
    }

    pub fn total(&self) -> usize {
        self.pools.values().map(Vec::len).sum()
    }

    /// All items, bucket by bucket
    #[cfg(test)]
    pub fn flatten(&self) -> Vec<Item> {
        self.pools.values().flatten().cloned().collect()
    }
}

/// Partition items by category, keeping input order inside each bucket
pub fn group_by_category(items: &[Item]) -> CategoryPools {
    let mut grouped = CategoryPools::default();
    for item in items {
        grouped.pools.entry(item.category).or_default().push(item.clone());
    }
    grouped
}
