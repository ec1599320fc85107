//! Catalog products and section lookup.
//!
//! The catalog is the reference list of known products with their default
//! storage section. Restock entries copy a section out of it by value, so later
//! catalog edits never reach entries that already exist.

use crate::core::normalize::same_product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A known product and the section it is normally stored in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier
    pub id: i64,
    /// Display name as entered
    pub name: String,
    /// Storage section (e.g. "Fridge")
    pub section: String,
}

/// Finds the catalog product whose name normalizes to the same value as `name`.
#[must_use]
pub fn find_product<'a>(catalog: &'a [Product], name: &str) -> Option<&'a Product> {
    catalog.iter().find(|product| same_product(&product.name, name))
}

/// Returns the catalog section for `name`, or `default_section` when the product is unknown.
#[must_use]
pub fn resolve_section(catalog: &[Product], name: &str, default_section: &str) -> String {
    find_product(catalog, name).map_or_else(
        || default_section.to_string(),
        |product| product.section.clone(),
    )
}

/// Orders the catalog for display.
///
/// Products sort by the position of their section in `sections` (unknown
/// sections last), then by case-insensitive name.
#[must_use]
pub fn sort_for_display<'a>(catalog: &'a [Product], sections: &[String]) -> Vec<&'a Product> {
    let section_rank = |section: &str| {
        sections
            .iter()
            .position(|known| known == section)
            .unwrap_or(usize::MAX)
    };

    let mut sorted: Vec<&Product> = catalog.iter().collect();
    sorted.sort_by(|a, b| {
        section_rank(&a.section)
            .cmp(&section_rank(&b.section))
            .then_with(|| compare_names(&a.name, &b.name))
    });
    sorted
}

/// Case-insensitive name comparison with the raw name as a tiebreak.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
