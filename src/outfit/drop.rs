//! Drag-and-drop payloads
//!
//! A dragged item travels as its JSON record. A slot accepts a payload only
//! when it parses and its category matches the slot; anything else is
//! ignored without surfacing an error.

use crate::catalog::{Category, Item};

/// Serialize an item the way a drag source hands it over
#[cfg(test)]
pub fn encode_payload(item: &Item) -> serde_json::Result<String> {
    serde_json::to_string(item)
}

/// The dropped item, if `slot` accepts this payload
pub fn accept_drop(slot: Category, payload: &str) -> Option<Item> {
    if payload.trim().is_empty() {
        log::warn!("No JSON data found in drop payload for {} slot", slot);
        return None;
    }

    let item: Item = match serde_json::from_str(payload) {
        Ok(item) => item,
        Err(e) => {
            log::warn!("Ignoring malformed drop payload for {} slot: {}", slot, e);
            return None;
        }
    };

    if item.category != slot {
        log::debug!(
            "Ignoring drop of {} item '{}' onto {} slot",
            item.category,
            item.id,
            slot
        );
        return None;
    }

    Some(item)
}
