//! Unified error types for `StockBuddy`.
//!
//! Every fallible operation in the crate returns [`Result`]. Numeric coercion of
//! user input never produces an error; only validation, duplicate detection and
//! store failures do.

use poise::serenity_prelude as serenity;
use thiserror::Error;

/// All errors that can occur in the application.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or is invalid
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description
        message: String,
    },

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O failure (config file reads)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Required environment variable missing
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// A persisted list could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A product name was empty after trimming
    #[error("Product name cannot be empty")]
    EmptyName,

    /// A section or bar that is not part of the configured set
    #[error("Unknown section or bar '{value}'")]
    UnknownCategory {
        /// The rejected value
        value: String,
    },

    /// The same product is already counted at the same bar
    #[error("'{name}' is already listed for {bar}")]
    DuplicateEntry {
        /// Display name of the existing entry
        name: String,
        /// Bar of the existing entry
        bar: String,
    },

    /// A catalog product with the same normalized name exists
    #[error("Product '{name}' is already in the catalog")]
    AlreadyInCatalog {
        /// Display name of the existing product
        name: String,
    },

    /// Catalog product lookup failed
    #[error("Product not found: {name}")]
    ProductNotFound {
        /// Name or id that was looked up
        name: String,
    },

    /// Restock or stock-take entry lookup failed
    #[error("Entry not found: {id}")]
    EntryNotFound {
        /// Local id that was looked up
        id: i64,
    },

    /// Serenity/Poise framework error
    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<serenity::Error>),
}

impl From<serenity::Error> for Error {
    fn from(value: serenity::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
