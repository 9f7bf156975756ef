//! Interactive wardrobe state
//!
//! Holds the loaded catalog together with everything a front end mutates in
//! response to user intents: filters, the item picker, the chosen outfit type
//! and the current outfit.

use eyre::{Result, eyre};
use rand::Rng;

use crate::catalog::{Catalog, Category, Item};
use crate::filter::{Filters, apply_filters};
use crate::group::{CategoryPools, group_by_category};
use crate::outfit::drop::accept_drop;
use crate::outfit::generate::pool_for;
use crate::outfit::{Outfit, OutfitType, generate_dress_outfit, generate_random_outfit, generate_top_bottom_outfit};

pub struct Session {
    catalog: Catalog,
    all_pools: CategoryPools,
    pub filters: Filters,
    outfit: Outfit,
    outfit_type: Option<OutfitType>,
    picker: Option<Category>,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        let all_pools = group_by_category(catalog.items());
        Self {
            catalog,
            all_pools,
            filters: Filters::default(),
            outfit: Outfit::new(),
            outfit_type: None,
            picker: None,
        }
    }

    /// Start with an unconstrained random outfit, as on first load
    pub fn with_initial_outfit<R: Rng + ?Sized>(catalog: Catalog, rng: &mut R) -> Self {
        let mut session = Self::new(catalog);
        session.outfit = generate_random_outfit(&session.all_pools, None, rng);
        session
    }

    pub fn outfit(&self) -> &Outfit {
        &self.outfit
    }

    pub fn outfit_type(&self) -> Option<OutfitType> {
        self.outfit_type
    }

    pub fn filtered_items(&self) -> Vec<Item> {
        apply_filters(self.catalog.items(), &self.filters)
    }

    pub fn filtered_pools(&self) -> CategoryPools {
        group_by_category(&self.filtered_items())
    }

    pub fn all_pools(&self) -> &CategoryPools {
        &self.all_pools
    }

    pub fn distinct_locations(&self) -> Vec<String> {
        self.catalog.distinct_locations()
    }

    pub fn has_active_filters(&self) -> bool {
        self.filters.is_active()
    }

    #[cfg(test)]
    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    pub fn open_picker(&mut self, category: Category) {
        self.picker = Some(category);
    }

    pub fn close_picker(&mut self) {
        self.picker = None;
    }

    #[cfg(test)]
    pub fn picker(&self) -> Option<Category> {
        self.picker
    }

    /// Items offered by the open picker: filtered items of its category, or all of them
    pub fn picker_items(&self) -> Vec<Item> {
        match self.picker {
            Some(category) => {
                let filtered = self.filtered_pools();
                pool_for(category, &self.all_pools, Some(&filtered)).to_vec()
            }
            None => Vec::new(),
        }
    }

    /// Assign an item to a slot and close the picker
    pub fn pick_item(&mut self, category: Category, item: Item) {
        if item.category != category {
            log::warn!(
                "Refusing to put {} item '{}' into the {} slot",
                item.category,
                item.id,
                category
            );
            return;
        }
        log::info!("Picked '{}' for {}", item.name, category);
        self.outfit.assign(category, item);
        self.close_picker();
    }

    /// Pick a catalog item by id into its own category
    pub fn pick_by_id(&mut self, id: &str) -> Result<()> {
        let item = self
            .catalog
            .find(id)
            .cloned()
            .ok_or_else(|| eyre!("No item with id '{}' in the catalog", id))?;
        self.pick_item(item.category, item);
        Ok(())
    }

    /// Apply a drag payload to a slot. Returns whether the outfit changed.
    pub fn drop_item(&mut self, slot: Category, payload: &str) -> bool {
        match accept_drop(slot, payload) {
            Some(item) => {
                self.pick_item(slot, item);
                true
            }
            None => false,
        }
    }

    /// Replace the outfit using the generator for the current outfit type
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let filtered = self.filtered_pools();
        let filtered = if self.filters.is_active() { Some(&filtered) } else { None };

        self.outfit = match self.outfit_type {
            Some(OutfitType::Dress) => generate_dress_outfit(&self.all_pools, filtered, rng),
            Some(OutfitType::TopBottom) => generate_top_bottom_outfit(&self.all_pools, filtered, rng),
            None => generate_random_outfit(&self.all_pools, filtered, rng),
        };
        log::info!("Randomized outfit with {} items", self.outfit.len());
    }

    pub fn select_outfit_type(&mut self, outfit_type: OutfitType) {
        self.outfit_type = Some(outfit_type);
        self.outfit.clear();
    }

    #[cfg(test)]
    pub fn change_type(&mut self) {
        self.outfit_type = None;
        self.outfit.clear();
    }

    pub fn clear_outfit(&mut self) {
        self.outfit.clear();
    }

    /// Empty a single slot
    pub fn remove_item(&mut self, category: Category) -> Option<Item> {
        let removed = self.outfit.remove(category);
        if let Some(item) = &removed {
            log::debug!("Removed '{}' from {}", item.id, category);
        }
        removed
    }

    /// Slots a front end should render for the current type and selection.
    /// A filled slot is always shown, even when the type would hide it.
    pub fn visible_slots(&self) -> Vec<Category> {
        let Some(outfit_type) = self.outfit_type else {
            return Vec::new();
        };

        let selected: Vec<Category> = self.outfit.iter().map(|(category, _)| category).collect();
        let has_dress = selected.contains(&Category::Dress);
        let has_separates = selected.iter().any(|c| c.is_separate());

        Category::ALL
            .into_iter()
            .filter(|c| {
                selected.contains(c)
                    || (outfit_type.allows(*c)
                        && !(*c == Category::Dress && has_separates)
                        && !(c.is_separate() && has_dress))
            })
            .collect()
    }
}
