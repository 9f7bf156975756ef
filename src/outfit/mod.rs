//! Outfit selection state
//!
//! An outfit assigns at most one item to each category. A dress and the
//! top/bottom pair are alternatives: [`Outfit::assign`] is the only way to
//! add an item and it always clears the opposite side.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::{Category, Item};

pub mod drop;
pub mod generate;

pub use generate::{generate_dress_outfit, generate_random_outfit, generate_top_bottom_outfit};

/// Which kind of outfit the user is building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutfitType {
    /// A dress plus accessories
    Dress,
    /// Separate top and bottom plus accessories
    TopBottom,
}

impl OutfitType {
    /// Whether slots of this category belong to this outfit type
    pub fn allows(&self, category: Category) -> bool {
        match self {
            OutfitType::Dress => !category.is_separate(),
            OutfitType::TopBottom => category != Category::Dress,
        }
    }
}

impl std::fmt::Display for OutfitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutfitType::Dress => write!(f, "dress"),
            OutfitType::TopBottom => write!(f, "top-bottom"),
        }
    }
}

/// Partial mapping from category to the chosen item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Outfit {
    slots: BTreeMap<Category, Item>,
}

impl Outfit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `item` in `category`, clearing whichever side it excludes
    pub fn assign(&mut self, category: Category, item: Item) {
        if category == Category::Dress {
            self.slots.remove(&Category::Top);
            self.slots.remove(&Category::Bottom);
        } else if category.is_separate() {
            self.slots.remove(&Category::Dress);
        }
        self.slots.insert(category, item);
    }

    pub fn remove(&mut self, category: Category) -> Option<Item> {
        self.slots.remove(&category)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn get(&self, category: Category) -> Option<&Item> {
        self.slots.get(&category)
    }

    pub fn contains(&self, category: Category) -> bool {
        self.slots.contains_key(&category)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Filled slots in canonical category order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &Item)> {
        self.slots.iter().map(|(c, item)| (*c, item))
    }

    /// True when a dress is combined with a top or bottom, which `assign` never allows
    #[cfg(test)]
    pub fn is_conflicting(&self) -> bool {
        self.contains(Category::Dress) && (self.contains(Category::Top) || self.contains(Category::Bottom))
    }
}
