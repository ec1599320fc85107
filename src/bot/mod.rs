//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for `StockBuddy`, including all
//! slash commands, autocomplete handlers, message formatting and the framework
//! bootstrap.

/// Discord command implementations (restock, catalog, stock take, general)
pub mod commands;
/// Plain-text rendering of lists for Discord messages
pub mod display;
/// Poise framework setup and error handling
pub mod framework;
/// Discord interaction handlers (autocomplete)
pub mod handlers;

use crate::session::Session;
use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;

/// Shared data available to all bot commands.
///
/// There is a single session for the venue; commands take the lock for the
/// whole of their work so list updates apply in invocation order.
pub struct BotData {
    /// Inventory session over the database
    pub session: Mutex<Session<DatabaseConnection>>,
}

impl BotData {
    /// Creates a new `BotData` wrapping the loaded session.
    #[must_use]
    pub fn new(session: Session<DatabaseConnection>) -> Self {
        Self {
            session: Mutex::new(session),
        }
    }
}

/// Poise context used by every command
pub type Context<'a> = poise::Context<'a, BotData, crate::errors::Error>;

pub use commands::*;
pub use handlers::*;
