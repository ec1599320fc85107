//! Product name canonicalization.
//!
//! Two names refer to the same product if and only if their normalized forms are
//! equal. The display form a user typed is kept separately and never altered
//! beyond trimming.

use std::fmt;

/// Case- and whitespace-folded form of a product name used for equality checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedName(String);

impl NormalizedName {
    /// Borrow the normalized text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the original name was empty or whitespace only
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of characters (not bytes) in the normalized name
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalizes a product name for comparison: trims surrounding whitespace and lower-cases.
#[must_use]
pub fn normalize(name: &str) -> NormalizedName {
    NormalizedName(name.trim().to_lowercase())
}

/// Returns true when both names normalize to the same product.
#[must_use]
pub fn same_product(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// Returns the trimmed display form of a user-entered name, or `None` if it is blank.
#[must_use]
pub fn clean_display_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
