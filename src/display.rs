//! Text rendering of item cards and outfit slots

use colored::*;
use terminal_size::{Width, terminal_size};

use crate::catalog::{Category, Item};
use crate::config::DisplayConfig;

/// Width of one grid cell, including the gutter
const CELL_WIDTH: usize = 28;
const MAX_COLUMNS: usize = 4;

/// Number of grid columns for the current terminal
pub fn grid_columns(config: &DisplayConfig) -> usize {
    if config.columns > 0 {
        return config.columns;
    }
    match terminal_size() {
        Some((Width(w), _)) => (w as usize / CELL_WIDTH).clamp(1, MAX_COLUMNS),
        None => 2,
    }
}

/// Secondary line of an item card
pub fn card_caption(item: &Item, show_category: bool) -> String {
    if show_category {
        format!("{} • {} • {}", item.category.label(), item.thickness, item.length)
    } else {
        format!("{} • {}", item.thickness, item.length)
    }
}

/// Print items as rows of cards: name, then caption, then id
pub fn print_grid(items: &[Item], columns: usize, show_category: bool) {
    let width = CELL_WIDTH - 2;
    for row in items.chunks(columns.max(1)) {
        let names: Vec<String> = row
            .iter()
            .map(|i| format!("{:<width$}", fit(&i.name, width)).bold().to_string())
            .collect();
        let captions: Vec<String> = row
            .iter()
            .map(|i| format!("{:<width$}", fit(&card_caption(i, show_category), width)).dimmed().to_string())
            .collect();
        let ids: Vec<String> = row
            .iter()
            .map(|i| format!("{:<width$}", fit(&format!("#{}", i.id), width)).cyan().to_string())
            .collect();

        println!("  {}", names.join("  "));
        println!("  {}", captions.join("  "));
        println!("  {}", ids.join("  "));
        println!();
    }
}

/// One outfit slot line, filled or empty
pub fn print_slot(category: Category, item: Option<&Item>) {
    match item {
        Some(item) => println!(
            "  {:10} {} {}",
            category.label().cyan(),
            item.name.bold(),
            format!("#{}", item.id).dimmed()
        ),
        None => println!("  {:10} {}", category.label().cyan(), empty_slot(category).dimmed()),
    }
}

/// Placeholder line for a slot nothing was chosen for
fn empty_slot(category: Category) -> String {
    format!("Drop {} here [{}]", category.label(), category.placeholder())
}

/// Truncate to `max` characters, adding an ellipsis when cut
fn fit(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
