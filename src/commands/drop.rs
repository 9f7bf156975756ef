use eyre::{Context, Result};
use std::io::{self, Read};

use crate::catalog::{Catalog, Category};
use crate::display;
use crate::session::Session;

/// Print the accepted item; ignored payloads print nothing and still succeed
pub fn run(catalog: Catalog, category: Category, payload: Option<&str>) -> Result<()> {
    // Read payload from stdin if not provided
    let payload = match payload {
        Some(p) => p.to_string(),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read payload from stdin")?;
            buffer
        }
    };

    let mut session = Session::new(catalog);
    if session.drop_item(category, &payload) {
        let item = session.outfit().get(category);
        if let Some(item) = item {
            log::info!("Accepted '{}' into {} slot", item.id, category);
        }
        display::print_slot(category, item);
    }

    Ok(())
}
