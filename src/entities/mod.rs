//! Entity module - Contains all SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod list_store;
pub mod product;

// Re-export specific types to avoid conflicts
pub use list_store::{Column as ListStoreColumn, Entity as ListStore, Model as ListStoreModel};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
