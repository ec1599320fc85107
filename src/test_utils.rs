//! Shared test utilities for `StockBuddy`.
//!
//! This module provides an in-memory database setup, a session built on top of
//! it, and an in-memory store whose catalog calls can be made to fail.

use crate::{
    config::inventory::InventoryConfig,
    core::{catalog::Product, stock_take::StockTakeDraft},
    errors::{Error, Result},
    session::Session,
    store::{CatalogStore, ListStore},
};
use sea_orm::{DatabaseConnection, DbErr};
use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a session over a fresh in-memory database with the default configuration.
pub async fn setup_test_session() -> Result<Session<DatabaseConnection>> {
    let db = setup_test_db().await?;
    Session::load(db, InventoryConfig::default()).await
}

/// Builds a stock-take draft with only the bar and name filled in.
///
/// # Defaults
/// * `full`, `crates`, `usage`: empty (coerce to 0)
/// * `crate_size`: empty (coerces to the configured default)
#[must_use]
pub fn draft(bar: &str, name: &str) -> StockTakeDraft {
    StockTakeDraft {
        bar: bar.to_string(),
        name: name.to_string(),
        ..StockTakeDraft::default()
    }
}

/// In-memory store for exercising failure paths.
///
/// Lists are kept in a map. Catalog creates, catalog deletes and list saves
/// succeed unless the matching `fail_*` flag is set.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Stored catalog products
    pub products: Mutex<Vec<Product>>,
    /// Stored lists by key
    pub lists: Mutex<HashMap<String, String>>,
    /// Make `create` fail
    pub fail_create: bool,
    /// Make `delete` fail
    pub fail_delete: bool,
    /// Make list `save` fail
    pub fail_save: bool,
}

impl MemoryStore {
    /// A store whose catalog writes always fail
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail_create: true,
            fail_delete: true,
            ..Self::default()
        }
    }

    /// A store pre-filled with catalog products
    #[must_use]
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
            ..Self::default()
        }
    }
}

fn unreachable_store() -> Error {
    Error::Database(DbErr::Custom("store unreachable".to_string()))
}

impl CatalogStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Product>> {
        Ok(self
            .products
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    async fn create(&self, name: &str, section: &str) -> Result<Product> {
        if self.fail_create {
            return Err(unreachable_store());
        }
        let mut products = self.products.lock().unwrap_or_else(PoisonError::into_inner);
        let id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let product = Product {
            id,
            name: name.to_string(),
            section: section.to_string(),
        };
        products.push(product.clone());
        Ok(product)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        if self.fail_delete {
            return Err(unreachable_store());
        }
        let mut products = self.products.lock().unwrap_or_else(PoisonError::into_inner);
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(Error::ProductNotFound {
                name: id.to_string(),
            });
        }
        Ok(())
    }
}

impl ListStore for MemoryStore {
    async fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .lists
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    async fn save(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_save {
            return Err(unreachable_store());
        }
        self.lists
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
