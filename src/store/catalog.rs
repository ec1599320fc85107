//! Catalog product storage.

use crate::{
    core::catalog::Product,
    entities::{product, Product as ProductEntity},
    errors::{Error, Result},
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use std::future::Future;
use tracing::{info, instrument};

/// Authoritative store of catalog products.
pub trait CatalogStore {
    /// All products in creation order.
    fn list(&self) -> impl Future<Output = Result<Vec<Product>>> + Send;

    /// Persists a new product and returns it with its assigned id.
    fn create(&self, name: &str, section: &str) -> impl Future<Output = Result<Product>> + Send;

    /// Removes a product.
    ///
    /// Fails with `Error::ProductNotFound` if no product has this id.
    fn delete(&self, id: i64) -> impl Future<Output = Result<()>> + Send;
}

impl CatalogStore for DatabaseConnection {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Product>> {
        let products = ProductEntity::find()
            .order_by_asc(product::Column::Id)
            .all(self)
            .await?;
        Ok(products.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, name: &str, section: &str) -> Result<Product> {
        let model = product::ActiveModel {
            name: Set(name.to_string()),
            section: Set(section.to_string()),
            created_at: Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self)
        .await?;

        info!("Created catalog product {} ({})", model.name, model.id);
        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<()> {
        let result = ProductEntity::delete_by_id(id).exec(self).await?;
        if result.rows_affected == 0 {
            return Err(Error::ProductNotFound {
                name: id.to_string(),
            });
        }
        info!("Deleted catalog product {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_create_assigns_ids() -> Result<()> {
        let db = setup_test_db().await?;

        let first = db.create("Heineken", "Fridge").await?;
        let second = db.create("Guinness", "Keg Room").await?;

        assert_ne!(first.id, second.id);
        assert_eq!(first.name, "Heineken");
        assert_eq!(second.section, "Keg Room");
        Ok(())
    }

    #[tokio::test]
    async fn test_list_returns_creation_order() -> Result<()> {
        let db = setup_test_db().await?;
        db.create("Water", "Water Room").await?;
        db.create("Amstel", "Keg Room").await?;

        let names: Vec<String> = db.list().await?.into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Water", "Amstel"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_removes_product() -> Result<()> {
        let db = setup_test_db().await?;
        let product = db.create("Heineken", "Fridge").await?;

        db.delete(product.id).await?;

        assert!(db.list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_product() -> Result<()> {
        let db = setup_test_db().await?;

        let result = db.delete(999).await;
        assert!(matches!(result, Err(Error::ProductNotFound { name: _ })));
        Ok(())
    }
}
