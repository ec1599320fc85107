//! Inventory configuration loading from config.toml
//!
//! The storage sections and bar locations are fixed per venue and live in
//! configuration rather than in the database. The same file carries the
//! near-duplicate thresholds and an optional list of catalog products to seed
//! on first run. Every field has a default, so a missing file is not an error.

use crate::core::{similarity::SimilarityConfig, stock_take::DEFAULT_CRATE_SIZE};
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Sections and bars
    pub inventory: Locations,
    /// Near-duplicate name thresholds
    pub similarity: SimilarityConfig,
    /// Catalog products to create if they are missing
    pub catalog: Vec<CatalogSeed>,
}

/// The ordered category sets used for defaults and grouping.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Locations {
    /// Storage sections for restock items; the first one is the default
    pub sections: Vec<String>,
    /// Bar locations for stock takes
    pub bars: Vec<String>,
    /// Containers per crate when a stock-take entry does not say
    pub default_crate_size: u32,
}

impl Default for Locations {
    fn default() -> Self {
        Self {
            sections: vec![
                "Fridge".to_string(),
                "Keg Room".to_string(),
                "Water Room".to_string(),
            ],
            bars: vec![
                "Main Bar".to_string(),
                "Upstairs Bar".to_string(),
                "Outside Bar".to_string(),
            ],
            default_crate_size: DEFAULT_CRATE_SIZE,
        }
    }
}

/// A catalog product to seed
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogSeed {
    /// Product name
    pub name: String,
    /// Section; the default section when omitted
    #[serde(default)]
    pub section: Option<String>,
}

impl InventoryConfig {
    /// The section used when a product is not in the catalog
    #[must_use]
    pub fn default_section(&self) -> &str {
        self.inventory.sections.first().map_or("", String::as_str)
    }

    /// True if `section` is one of the configured sections
    #[must_use]
    pub fn is_section(&self, section: &str) -> bool {
        self.inventory.sections.iter().any(|known| known == section)
    }

    /// True if `bar` is one of the configured bars
    #[must_use]
    pub fn is_bar(&self, bar: &str) -> bool {
        self.inventory.bars.iter().any(|known| known == bar)
    }

    /// Checks the invariants the rest of the crate relies on.
    ///
    /// # Errors
    /// Returns `Error::Config` if there are no sections, no bars, or a zero crate size.
    pub fn validate(&self) -> Result<()> {
        if self.inventory.sections.is_empty() {
            return Err(Error::Config {
                message: "At least one section must be configured".to_string(),
            });
        }
        if self.inventory.bars.is_empty() {
            return Err(Error::Config {
                message: "At least one bar must be configured".to_string(),
            });
        }
        if self.inventory.default_crate_size == 0 {
            return Err(Error::Config {
                message: "default_crate_size must be positive".to_string(),
            });
        }
        Ok(())
    }
}

/// Loads inventory configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - The resulting configuration fails [`InventoryConfig::validate`]
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<InventoryConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    parse_config(&contents)
}

/// Parses and validates configuration from TOML text
///
/// # Errors
/// Returns `Error::Config` for invalid TOML or invalid values.
pub fn parse_config(contents: &str) -> Result<InventoryConfig> {
    let config: InventoryConfig = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;
    config.validate()?;
    Ok(config)
}

/// Loads the config file named by `STOCK_BUDDY_CONFIG` (default `./config.toml`).
///
/// A missing file yields the built-in defaults.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_default_config() -> Result<InventoryConfig> {
    let path = std::env::var("STOCK_BUDDY_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
    if Path::new(&path).exists() {
        load_config(&path)
    } else {
        info!("No config file at {}, using defaults", path);
        Ok(InventoryConfig::default())
    }
}
