//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Catalog management commands
pub mod catalog;

/// General utility commands
pub mod general;

/// Restock list commands
pub mod restock;

/// Stock-take commands
pub mod stock_take;

// Export commands
pub use catalog::*;
pub use general::*;
pub use restock::*;
pub use stock_take::*;

use crate::{bot::BotData, errors::Error};

/// Every top-level command the bot registers.
#[must_use]
pub fn all() -> Vec<poise::Command<BotData, Error>> {
    vec![
        general::ping(),
        general::help(),
        restock::restock(),
        catalog::catalog(),
        stock_take::stocktake(),
    ]
}
