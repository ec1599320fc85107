//! Product entity - Represents a catalog product and its default storage section.
//!
//! Catalog products are created and removed explicitly and never edited in place.
//! Restock entries copy the section out of here when they are first created.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Catalog product database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the product as entered (e.g., "Heineken")
    pub name: String,
    /// Storage section the product normally lives in (e.g., "Fridge")
    pub section: String,
    /// When the product was added to the catalog
    pub created_at: DateTime,
}

/// Products have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::core::catalog::Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            section: model.section,
        }
    }
}
