//! Keyed storage for serialized local lists.
//!
//! Each list is stored whole, as a JSON array, under one fixed key. Entry order
//! in the array is the list order.

use crate::{entities::list_store, errors::Result};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde::{Serialize, de::DeserializeOwned};
use std::future::Future;
use tracing::{debug, instrument, warn};

/// Key holding the restock list.
pub const RESTOCK_LIST_KEY: &str = "restock-list";
/// Key holding the current stock-take snapshot.
pub const STOCK_TAKE_KEY: &str = "stock-take-inventory";

/// Key-value store for serialized lists.
pub trait ListStore {
    /// Reads the value stored under `key`, if any.
    fn load(&self, key: &str) -> impl Future<Output = Result<Option<String>>> + Send;

    /// Writes `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> impl Future<Output = Result<()>> + Send;
}

impl ListStore for DatabaseConnection {
    #[instrument(skip(self))]
    async fn load(&self, key: &str) -> Result<Option<String>> {
        let row = list_store::Entity::find()
            .filter(list_store::Column::Key.eq(key))
            .one(self)
            .await?;
        Ok(row.map(|row| row.value))
    }

    #[instrument(skip(self, value))]
    async fn save(&self, key: &str, value: &str) -> Result<()> {
        let now = chrono::Utc::now().naive_utc();
        let existing = list_store::Entity::find()
            .filter(list_store::Column::Key.eq(key))
            .one(self)
            .await?;

        if let Some(row) = existing {
            let mut row: list_store::ActiveModel = row.into();
            row.value = Set(value.to_string());
            row.updated_at = Set(now);
            row.update(self).await?;
        } else {
            list_store::ActiveModel {
                key: Set(key.to_string()),
                value: Set(value.to_string()),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(self)
            .await?;
        }

        debug!("Saved list {} ({} bytes)", key, value.len());
        Ok(())
    }
}

/// Loads and decodes the list under `key`.
///
/// A missing key is an empty list. A stored value that no longer decodes is
/// logged and also treated as an empty list.
pub async fn load_list<S, T>(store: &S, key: &str) -> Result<Vec<T>>
where
    S: ListStore + Sync,
    T: DeserializeOwned,
{
    let Some(raw) = store.load(key).await? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&raw) {
        Ok(list) => Ok(list),
        Err(e) => {
            warn!("Discarding unreadable list {}: {}", key, e);
            Ok(Vec::new())
        }
    }
}

/// Encodes `list` and writes it under `key`.
pub async fn save_list<S, T>(store: &S, key: &str, list: &[T]) -> Result<()>
where
    S: ListStore + Sync,
    T: Serialize + Sync,
{
    let encoded = serde_json::to_string(list)?;
    store.save(key, &encoded).await
}
