use colored::*;
use eyre::Result;
use indexmap::IndexMap;
use serde::Serialize;

use crate::catalog::item::{LENGTH_OPTIONS, SEASON_OPTIONS, THICKNESS_OPTIONS, TYPE_OPTIONS};
use crate::catalog::{Catalog, Category, Item};
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display;
use crate::filter::Filters;
use crate::session::Session;

#[derive(Serialize)]
struct ItemsReport<'a> {
    count: usize,
    by_category: IndexMap<Category, usize>,
    filters: &'a Filters,
    items: Vec<Item>,
}

impl<'a> ItemsReport<'a> {
    fn new(session: &'a Session, items: Vec<Item>) -> Self {
        let pools = session.filtered_pools();
        Self {
            count: pools.total(),
            by_category: pools.iter().map(|(category, bucket)| (category, bucket.len())).collect(),
            filters: &session.filters,
            items,
        }
    }
}

pub fn run(catalog: Catalog, filters: Filters, format: OutputFormat, config: &Config) -> Result<()> {
    let mut session = Session::new(catalog);
    session.filters = filters;
    let items = session.filtered_items();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ItemsReport::new(&session, items))?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&ItemsReport::new(&session, items))?),
        OutputFormat::Text => print_text(&session, config),
    }

    Ok(())
}

fn print_text(session: &Session, config: &Config) {
    let grouped = session.filtered_pools();
    println!("{} {}", "All Wardrobe".bold(), format!("({} results)", grouped.total()).dimmed());
    if session.has_active_filters() {
        println!("  filters: {}", describe(&session.filters).yellow());
    }
    println!();

    if grouped.total() == 0 {
        println!("  {}", "No results found. Try widening the filters.".dimmed());
        print_known_values();
        return;
    }

    let columns = display::grid_columns(&config.display);
    for category in Category::GRID_ORDER {
        let bucket = grouped.get(category);
        if bucket.is_empty() {
            continue;
        }
        println!("{} {}", category.label().cyan().bold(), format!("({})", bucket.len()).dimmed());
        display::print_grid(bucket, columns, false);
    }
}

fn print_known_values() {
    println!();
    for (name, values) in [
        ("type", TYPE_OPTIONS),
        ("thickness", THICKNESS_OPTIONS),
        ("length", LENGTH_OPTIONS),
        ("season", SEASON_OPTIONS),
    ] {
        println!("  {:10} {}", name.cyan(), values.join(", ").dimmed());
    }
}

fn describe(filters: &Filters) -> String {
    let mut parts = Vec::new();
    for (name, value) in [
        ("type", &filters.item_type),
        ("thickness", &filters.thickness),
        ("length", &filters.length),
        ("location", &filters.location),
    ] {
        if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
            parts.push(format!("{}={}", name, v));
        }
    }
    if !filters.seasons.is_empty() {
        parts.push(format!("season={}", filters.seasons.join("|")));
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::catalog::fixtures::{full_wardrobe, located};

    #[test]
    fn test_report_counts_per_category() {
        let mut items = full_wardrobe();
        items.push(located("t9", Category::Top, "suitcase"));
        let mut session = Session::new(Catalog::new(items));
        session.filters.item_type = Some("top".to_string());
        let filtered = session.filtered_items();
        let report = ItemsReport::new(&session, filtered);

        assert_eq!(report.count, 3);
        assert_eq!(report.items.len(), 3);
        assert_eq!(report.by_category[&Category::Top], 3);
        assert_eq!(report.by_category[&Category::Dress], 0);
        assert_eq!(report.by_category.len(), Category::ALL.len());
        assert_eq!(report.by_category.values().sum::<usize>(), report.count);
    }

    #[test]
    fn test_describe_filters() {
        let filters = Filters {
            thickness: Some("thin".to_string()),
            location: Some(String::new()),
            seasons: vec!["summer".to_string(), "spring".to_string()],
            ..Default::default()
        };
        assert_eq!(describe(&filters), "thickness=thin, season=summer|spring");
    }
}
