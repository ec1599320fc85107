//! Stock-take entries, unit totals and duplicate checks.
//!
//! A stock-take entry records what is on hand for one product at one bar:
//! intact containers, whole crates of `crate_size` containers, and how full the
//! currently open container is. Entries are never edited after creation, so all
//! input coercion happens once, in [`StockTakeEntry::from_draft`].

use crate::core::{
    normalize::same_product,
    parse_leading_float, parse_leading_int,
    similarity::{SimilarityConfig, find_similar},
};
use serde::{Deserialize, Deserializer, Serialize};

/// Containers per crate when none (or a non-positive value) is given.
pub const DEFAULT_CRATE_SIZE: u32 = 24;

/// One counted product at one bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockTakeEntry {
    /// Locally assigned identifier
    pub id: i64,
    /// Bar location
    pub bar: String,
    /// Display name
    pub name: String,
    /// Intact containers
    pub full: u32,
    /// Whole crates
    pub crates: u32,
    /// Containers per crate
    pub crate_size: u32,
    /// Fullness of the open container, 0.0-1.0 with one decimal
    #[serde(deserialize_with = "deserialize_usage")]
    pub usage: f64,
}

/// Raw form input for a new stock-take entry, before coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockTakeDraft {
    /// Bar location
    pub bar: String,
    /// Product name as typed
    pub name: String,
    /// Intact containers as typed
    pub full: String,
    /// Crates as typed
    pub crates: String,
    /// Containers per crate as typed
    pub crate_size: String,
    /// Open container fullness as typed
    pub usage: String,
}

impl StockTakeEntry {
    /// Builds an entry from raw input, coercing every numeric field.
    ///
    /// `name` is the already-validated display name; the draft's own `name` is ignored.
    #[must_use]
    pub fn from_draft(
        id: i64,
        draft: &StockTakeDraft,
        name: String,
        default_crate_size: u32,
    ) -> Self {
        Self {
            id,
            bar: draft.bar.clone(),
            name,
            full: coerce_count(&draft.full),
            crates: coerce_count(&draft.crates),
            crate_size: coerce_crate_size(&draft.crate_size, default_crate_size),
            usage: clamp_usage(&draft.usage),
        }
    }
}

/// Result of checking whether a new stock-take entry may be added.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Admission<'a> {
    /// Nothing conflicts
    Clear,
    /// Same product already counted at the same bar; the add must be refused
    Duplicate(&'a StockTakeEntry),
    /// A similarly spelled product exists somewhere in the list; ask before adding
    Similar(&'a StockTakeEntry),
}

/// Coerces a container or crate count; negative and non-numeric input become 0.
#[must_use]
pub fn coerce_count(text: &str) -> u32 {
    parse_leading_int(text)
        .map_or(0, |value| u32::try_from(value.max(0)).unwrap_or(u32::MAX))
}

/// Coerces a crate size; missing, non-numeric and non-positive input fall back to `default`.
#[must_use]
pub fn coerce_crate_size(text: &str, default: u32) -> u32 {
    match parse_leading_int(text) {
        Some(value) if value > 0 => u32::try_from(value).unwrap_or(u32::MAX),
        _ => default,
    }
}

/// Parses and clamps open-container usage into [0.0, 1.0] with one decimal.
///
/// Only the leading number is read (`"0.5 open"` is 0.5); non-numeric input
/// becomes 0.0.
#[must_use]
pub fn clamp_usage(text: &str) -> f64 {
    parse_leading_float(text).map_or(0.0, clamp_usage_value)
}

fn clamp_usage_value(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    round_one_decimal(value.clamp(0.0, 1.0))
}

/// Total units on hand: full + crates × crate size + open usage, to one decimal.
///
/// Assumes `usage` was clamped when the entry was created.
#[must_use]
pub fn compute_total_units(entry: &StockTakeEntry) -> f64 {
    let containers = u64::from(entry.full) + u64::from(entry.crates) * u64::from(entry.crate_size);
    // Counts stay far below 2^53, so the conversion is exact.
    #[allow(clippy::cast_precision_loss)]
    let containers = containers as f64;
    round_one_decimal(containers + entry.usage)
}

/// Renders a unit total with exactly one decimal place.
#[must_use]
pub fn format_units(units: f64) -> String {
    format!("{units:.1}")
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Checks a prospective entry against the current list.
///
/// Exact duplicates are only those at the same bar. The fuzzy check runs over
/// the whole list so spelling stays consistent across bars.
#[must_use]
pub fn assess_addition<'a>(
    list: &'a [StockTakeEntry],
    name: &str,
    bar: &str,
    config: &SimilarityConfig,
) -> Admission<'a> {
    if let Some(existing) = list
        .iter()
        .find(|entry| entry.bar == bar && same_product(&entry.name, name))
    {
        return Admission::Duplicate(existing);
    }

    find_similar(list, name, |entry| entry.name.as_str(), config)
        .map_or(Admission::Clear, Admission::Similar)
}

/// Returns the list without the entry with `id`.
#[must_use]
pub fn remove_entry(list: &[StockTakeEntry], id: i64) -> Vec<StockTakeEntry> {
    list.iter().filter(|entry| entry.id != id).cloned().collect()
}

/// Accepts usage stored either as a number or as numeric text (`"0.5"`),
/// clamping both the same way new entries are.
fn deserialize_usage<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Usage {
        Number(f64),
        Text(String),
    }

    Ok(match Usage::deserialize(deserializer)? {
        Usage::Number(value) => clamp_usage_value(value),
        Usage::Text(text) => clamp_usage(&text),
    })
}
