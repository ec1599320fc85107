/// Database configuration and connection management
pub mod database;

/// Inventory configuration loading from config.toml
pub mod inventory;
