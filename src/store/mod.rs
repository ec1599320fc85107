//! Storage seams used by the session.
//!
//! The reconciliation core never talks to storage directly. The session goes
//! through these two traits, which are implemented for a `SeaORM` connection and
//! can be swapped for any store that can list, create and delete products and
//! read and write a serialized list by key.

/// Catalog product storage
pub mod catalog;
/// Keyed storage for serialized local lists
pub mod lists;

pub use catalog::CatalogStore;
pub use lists::{ListStore, RESTOCK_LIST_KEY, STOCK_TAKE_KEY, load_list, save_list};
