use colored::*;
use eyre::Result;
use serde::Serialize;

use crate::catalog::{Catalog, Category, Item};
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display;
use crate::filter::Filters;
use crate::session::Session;

#[derive(Serialize)]
struct PickerReport {
    category: Category,
    /// True when no item matched the filters and the whole category is offered
    fallback: bool,
    /// Items of this category in the whole wardrobe
    in_wardrobe: usize,
    items: Vec<Item>,
}

pub fn run(catalog: Catalog, category: Category, filters: Filters, format: OutputFormat, config: &Config) -> Result<()> {
    let mut session = Session::new(catalog);
    session.filters = filters;
    session.open_picker(category);

    let items = session.picker_items();
    let fallback = session.has_active_filters() && session.filtered_pools().is_empty(category);
    let report = PickerReport {
        category,
        fallback,
        in_wardrobe: session.all_pools().get(category).len(),
        items,
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&report)?),
        OutputFormat::Text => {
            println!(
                "{} {}",
                format!("{} Change", category.label()).bold(),
                format!("({} of {})", report.items.len(), report.in_wardrobe).dimmed()
            );
            if report.fallback {
                println!("  {}", "No items match the filters; showing the whole category".yellow());
            }
            println!();
            if report.items.is_empty() {
                println!("  {}", format!("(no {} items in the wardrobe)", category).dimmed());
            } else {
                display::print_grid(&report.items, display::grid_columns(&config.display), false);
                println!(
                    "  {} wardrobe outfit --pick <ID>",
                    "pick one with:".dimmed()
                );
            }
        }
    }

    Ok(())
}
