//! Restock list entries and quantity merging.
//!
//! The restock list holds at most one entry per normalized product name. Adding a
//! name that is already on the list sums the quantities instead of creating a
//! second entry, and [`merge_or_insert`] is the only place a quantity changes.

use crate::core::{normalize::same_product, parse_leading_int};
use serde::{Deserialize, Serialize};

/// One line of the restock (shopping) list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestockEntry {
    /// Locally assigned identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Quantity as text; always a non-negative integer once merged
    pub quantity: String,
    /// Section copied at creation time; never overwritten by later merges
    #[serde(default)]
    pub section: String,
}

impl RestockEntry {
    /// Numeric value of the stored quantity
    #[must_use]
    pub fn quantity_value(&self) -> u64 {
        coerce_quantity(&self.quantity)
    }
}

/// Coerces free-form quantity text into a non-negative integer.
///
/// Non-numeric and negative input become 0.
#[must_use]
pub fn coerce_quantity(text: &str) -> u64 {
    parse_leading_int(text)
        .and_then(|value| u64::try_from(value).ok())
        .unwrap_or(0)
}

/// Adds `quantity_delta` of `name` to the list.
///
/// If an entry with the same normalized name exists, its quantity becomes the
/// sum of both coerced quantities and its section is left as it was when the
/// entry was created. Otherwise a new entry is placed at the head of the list,
/// using `section` or `default_section` when `section` is blank.
#[must_use]
pub fn merge_or_insert(
    list: &[RestockEntry],
    name: &str,
    quantity_delta: &str,
    section: &str,
    default_section: &str,
    id: i64,
) -> Vec<RestockEntry> {
    let delta = coerce_quantity(quantity_delta);

    if let Some(index) = list.iter().position(|entry| same_product(&entry.name, name)) {
        let mut merged = list.to_vec();
        let existing = &mut merged[index];
        existing.quantity = existing.quantity_value().saturating_add(delta).to_string();
        return merged;
    }

    let section = if section.trim().is_empty() {
        default_section
    } else {
        section
    };

    let mut inserted = Vec::with_capacity(list.len() + 1);
    inserted.push(RestockEntry {
        id,
        name: name.to_string(),
        quantity: delta.to_string(),
        section: section.to_string(),
    });
    inserted.extend_from_slice(list);
    inserted
}

/// Returns the list without the entry with `id`.
#[must_use]
pub fn remove_entry(list: &[RestockEntry], id: i64) -> Vec<RestockEntry> {
    list.iter().filter(|entry| entry.id != id).cloned().collect()
}
