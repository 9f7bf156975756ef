use colored::*;
use eyre::Result;

use crate::catalog::Catalog;
use crate::cli::OutputFormat;
use crate::session::Session;

pub fn run(catalog: Catalog, format: OutputFormat) -> Result<()> {
    let session = Session::new(catalog);
    let locations = session.distinct_locations();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&locations)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&locations)?),
        OutputFormat::Text => {
            println!("{}", "Locations:".bold());
            println!();
            if locations.is_empty() {
                println!("  {}", "(none)".dimmed());
            }
            for location in &locations {
                let count = session
                    .all_pools()
                    .iter()
                    .flat_map(|(_, bucket)| bucket)
                    .filter(|i| &i.location == location)
                    .count();
                println!("  {:20} ({} items)", location.cyan(), count);
            }
        }
    }

    Ok(())
}
