//! Fuzzy name matching used to warn about near-duplicate spellings.
//!
//! The matcher is advisory: it only ever produces a yes/no answer that callers
//! turn into a confirmation prompt. Exact normalized matches count as similar,
//! but [`find_similar`] skips them because exact matches are handled by the
//! duplicate checks instead.

use crate::core::normalize::{normalize, same_product};
use serde::Deserialize;
use strsim::{levenshtein, normalized_levenshtein};

/// Tunable thresholds for [`is_similar`], read from the `[similarity]` config table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Names shorter than this (in characters) must match exactly
    pub min_length: usize,
    /// Largest Levenshtein distance still considered a near-duplicate
    pub max_edit_distance: usize,
    /// Smallest normalized Levenshtein similarity (0.0-1.0) still considered a near-duplicate
    pub min_ratio: f64,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            min_length: 4,
            max_edit_distance: 2,
            min_ratio: 0.8,
        }
    }
}

/// Decides whether two product names are probably the same product.
///
/// Names are normalized first. Identical normalized names are always similar.
/// Otherwise both names must be at least `min_length` characters long, the
/// edit distance must be within `max_edit_distance`, and the normalized
/// similarity must reach `min_ratio`. The ratio keeps short names from matching
/// on a couple of swapped letters (`Coke` / `Cola`).
#[must_use]
pub fn is_similar(a: &str, b: &str, config: &SimilarityConfig) -> bool {
    let a = normalize(a);
    let b = normalize(b);

    if a == b {
        return true;
    }
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if a.char_len() < config.min_length || b.char_len() < config.min_length {
        return false;
    }

    levenshtein(a.as_str(), b.as_str()) <= config.max_edit_distance
        && normalized_levenshtein(a.as_str(), b.as_str()) >= config.min_ratio
}

/// Finds the first item whose name is similar to `name` without being an exact match.
pub fn find_similar<'a, T, F>(
    items: &'a [T],
    name: &str,
    key: F,
    config: &SimilarityConfig,
) -> Option<&'a T>
where
    F: Fn(&T) -> &str,
{
    items.iter().find(|item| {
        let candidate = key(item);
        !same_product(candidate, name) && is_similar(candidate, name, config)
    })
}
