//! Random outfit generation
//!
//! Every generator walks categories in canonical order and, for each one,
//! draws uniformly from the filtered pool when it has items and from the full
//! pool otherwise. A category with no items in either pool is left out.

use rand::Rng;
use rand::seq::SliceRandom;

use super::Outfit;
use crate::catalog::{Category, Item};
use crate::group::CategoryPools;

/// Filtered pool when it has items, else the full pool
pub fn pool_for<'a>(category: Category, all: &'a CategoryPools, filtered: Option<&'a CategoryPools>) -> &'a [Item] {
    match filtered.map(|pools| pools.get(category)) {
        Some(pool) if !pool.is_empty() => pool,
        _ => all.get(category),
    }
}

fn fill<R: Rng + ?Sized>(
    categories: impl Iterator<Item = Category>,
    all: &CategoryPools,
    filtered: Option<&CategoryPools>,
    rng: &mut R,
) -> Outfit {
    let mut outfit = Outfit::new();
    for category in categories {
        match pool_for(category, all, filtered).choose(rng) {
            Some(item) => outfit.assign(category, item.clone()),
            None => log::debug!("No {} items available, leaving slot empty", category),
        }
    }
    outfit
}

/// Decide between a dress and a top/bottom pair, then fill every slot
pub fn generate_random_outfit<R: Rng + ?Sized>(
    all: &CategoryPools,
    filtered: Option<&CategoryPools>,
    rng: &mut R,
) -> Outfit {
    let has_dress = !pool_for(Category::Dress, all, filtered).is_empty();
    let has_top = !pool_for(Category::Top, all, filtered).is_empty();
    let has_bottom = !pool_for(Category::Bottom, all, filtered).is_empty();

    let use_dress = if has_dress && (!has_bottom || !has_top) {
        true
    } else if has_dress {
        rng.gen_bool(0.5)
    } else {
        false
    };

    log::debug!(
        "Generating {} outfit (dress={}, top={}, bottom={})",
        if use_dress { "dress" } else { "top-bottom" },
        has_dress,
        has_top,
        has_bottom
    );

    if use_dress {
        generate_dress_outfit(all, filtered, rng)
    } else {
        generate_top_bottom_outfit(all, filtered, rng)
    }
}

/// Every slot except top and bottom
pub fn generate_dress_outfit<R: Rng + ?Sized>(
    all: &CategoryPools,
    filtered: Option<&CategoryPools>,
    rng: &mut R,
) -> Outfit {
    let categories = Category::ALL.into_iter().filter(|c| !c.is_separate());
    fill(categories, all, filtered, rng)
}

/// Every slot except dress
pub fn generate_top_bottom_outfit<R: Rng + ?Sized>(
    all: &CategoryPools,
    filtered: Option<&CategoryPools>,
    rng: &mut R,
) -> Outfit {
    let categories = Category::ALL.into_iter().filter(|c| *c != Category::Dress);
    fill(categories, all, filtered, rng)
}
