//! Outfit generation command
//!
//! Randomizes an outfit from the (optionally filtered) catalog, then applies
//! explicit picks and removals on top, exactly as a user would click items
//! after hitting the random button.

use chrono::{DateTime, Local};
use colored::*;
use eyre::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::catalog::{Catalog, Category};
use crate::cli::OutputFormat;
use crate::display;
use crate::filter::Filters;
use crate::outfit::{Outfit, OutfitType};
use crate::session::Session;

pub struct OutfitRequest {
    pub filters: Filters,
    pub outfit_type: Option<OutfitType>,
    pub picks: Vec<String>,
    pub without: Vec<Category>,
    pub blank: bool,
    pub seed: Option<u64>,
}

#[derive(Serialize)]
struct OutfitReport<'a> {
    outfit_type: Option<OutfitType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    generated_at: DateTime<Local>,
    outfit: &'a Outfit,
}

pub fn run(catalog: Catalog, request: OutfitRequest, format: OutputFormat) -> Result<()> {
    let session = build(catalog, &request)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report(&session, &request))?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&report(&session, &request))?),
        OutputFormat::Text => print_text(&session),
    }

    Ok(())
}

fn build(catalog: Catalog, request: &OutfitRequest) -> Result<Session> {
    let mut rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Untyped and unfiltered is the first-load state: a fresh random outfit
    let mut session = if request.outfit_type.is_none() && !request.filters.is_active() && !request.blank {
        Session::with_initial_outfit(catalog, &mut rng)
    } else {
        let mut session = Session::new(catalog);
        session.filters = request.filters.clone();
        if let Some(outfit_type) = request.outfit_type {
            session.select_outfit_type(outfit_type);
        }
        if request.blank {
            session.clear_outfit();
        } else {
            session.randomize(&mut rng);
        }
        session
    };

    for id in &request.picks {
        session.pick_by_id(id)?;
    }
    for category in &request.without {
        session.remove_item(*category);
    }

    Ok(session)
}

fn report<'a>(session: &'a Session, request: &OutfitRequest) -> OutfitReport<'a> {
    OutfitReport {
        outfit_type: session.outfit_type(),
        seed: request.seed,
        generated_at: Local::now(),
        outfit: session.outfit(),
    }
}

/// Slots to print: the session's layout when a type is chosen, otherwise
/// every slot the current selection leaves open. Filled slots always show.
fn slots(session: &Session) -> Vec<Category> {
    if session.outfit_type().is_some() {
        return session.visible_slots();
    }
    let outfit = session.outfit();
    let has_dress = outfit.contains(Category::Dress);
    Category::ALL
        .into_iter()
        .filter(|c| {
            let open = if has_dress { !c.is_separate() } else { *c != Category::Dress };
            open || outfit.contains(*c)
        })
        .collect()
}

fn print_text(session: &Session) {
    let title = match session.outfit_type() {
        Some(kind) => format!("Today's Outfit ({})", kind),
        None => "Today's Outfit".to_string(),
    };
    println!("{}", title.bold());
    println!();

    for category in slots(session) {
        display::print_slot(category, session.outfit().get(category));
    }

    if session.outfit().is_empty() {
        println!();
        println!("  {}", "The wardrobe is empty.".dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::full_wardrobe;

    fn request(outfit_type: Option<OutfitType>, picks: &[&str]) -> OutfitRequest {
        OutfitRequest {
            filters: Filters::default(),
            outfit_type,
            picks: picks.iter().map(|p| p.to_string()).collect(),
            without: Vec::new(),
            blank: false,
            seed: Some(17),
        }
    }

    #[test]
    fn test_picks_override_randomized_slots() {
        let session = build(Catalog::new(full_wardrobe()), &request(Some(OutfitType::Dress), &["t2"])).unwrap();
        let outfit = session.outfit();
        assert_eq!(outfit.get(Category::Top).map(|i| i.id.as_str()), Some("t2"));
        assert!(!outfit.contains(Category::Dress));
        assert!(!outfit.is_conflicting());
    }

    #[test]
    fn test_unknown_pick_fails() {
        assert!(build(Catalog::new(full_wardrobe()), &request(None, &["nope"])).is_err());
    }

    #[test]
    fn test_seeded_build_is_reproducible() {
        let a = build(Catalog::new(full_wardrobe()), &request(None, &[])).unwrap();
        let b = build(Catalog::new(full_wardrobe()), &request(None, &[])).unwrap();
        assert_eq!(a.outfit(), b.outfit());
    }

    #[test]
    fn test_slots_without_type_follow_selection() {
        let session = build(Catalog::new(full_wardrobe()), &request(None, &["d1"])).unwrap();
        let shown = slots(&session);
        assert!(shown.contains(&Category::Dress));
        assert!(!shown.contains(&Category::Top));
        assert!(!shown.contains(&Category::Bottom));
    }

    #[test]
    fn test_picked_top_is_printed_under_dress_kind() {
        let session = build(Catalog::new(full_wardrobe()), &request(Some(OutfitType::Dress), &["t2"])).unwrap();
        let shown = slots(&session);
        assert!(shown.contains(&Category::Top));
        assert!(!shown.contains(&Category::Dress));
        for (category, _) in session.outfit().iter() {
            assert!(shown.contains(&category), "{} is selected but not shown", category);
        }
    }

    #[test]
    fn test_unseeded_untyped_build_starts_filled() {
        let mut req = request(None, &[]);
        req.seed = None;
        let session = build(Catalog::new(full_wardrobe()), &req).unwrap();
        assert!(!session.outfit().is_empty());
        assert!(!session.outfit().is_conflicting());
    }

    #[test]
    fn test_blank_build_only_holds_picks() {
        let mut req = request(Some(OutfitType::TopBottom), &["s1"]);
        req.blank = true;
        let session = build(Catalog::new(full_wardrobe()), &req).unwrap();
        assert_eq!(session.outfit().len(), 1);
        assert!(session.outfit().contains(Category::Shoes));
        assert_eq!(session.outfit_type(), Some(OutfitType::TopBottom));
    }

    #[test]
    fn test_without_empties_slots_after_picks() {
        let mut req = request(Some(OutfitType::TopBottom), &["g1"]);
        req.without = vec![Category::Bag, Category::Shoes];
        let session = build(Catalog::new(full_wardrobe()), &req).unwrap();
        assert!(!session.outfit().contains(Category::Bag));
        assert!(!session.outfit().contains(Category::Shoes));
        assert!(session.outfit().contains(Category::Top));
    }
}
