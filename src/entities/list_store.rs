//! List store entity - Key-value rows holding serialized local lists.
//!
//! Each row holds one whole list (restock list or stock-take snapshot) encoded as
//! JSON under a fixed key.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// List store database model - one serialized list per key
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "list_store")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// List key (e.g., `"restock-list"`)
    #[sea_orm(unique)]
    pub key: String,
    /// Serialized list contents
    #[sea_orm(column_type = "Text")]
    pub value: String,
    /// When this list was last written
    pub updated_at: DateTime,
}

/// `ListStore` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
