//! Attribute filters over catalog items

use serde::{Deserialize, Serialize};

use crate::catalog::Item;

/// Optional predicates narrowing the catalog. Empty values are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Filters {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub seasons: Vec<String>,
}

impl Filters {
    /// True when at least one predicate would restrict the result
    pub fn is_active(&self) -> bool {
        supplied(&self.item_type).is_some()
            || supplied(&self.thickness).is_some()
            || supplied(&self.length).is_some()
            || supplied(&self.location).is_some()
            || !self.seasons.is_empty()
    }

    #[cfg(test)]
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, item: &Item) -> bool {
        if let Some(t) = supplied(&self.item_type)
            && item.item_type != t
        {
            return false;
        }
        if let Some(t) = supplied(&self.thickness)
            && item.thickness != t
        {
            return false;
        }
        if let Some(l) = supplied(&self.length)
            && item.length != l
        {
            return false;
        }
        if let Some(l) = supplied(&self.location)
            && item.location != l
        {
            return false;
        }
        self.seasons.is_empty() || item.in_any_season(&self.seasons)
    }
}

fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Items passing every supplied filter, in their original order
pub fn apply_filters(items: &[Item], filters: &Filters) -> Vec<Item> {
    items.iter().filter(|item| filters.matches(item)).cloned().collect()
}
