//! Session state - the catalog, restock list and stock take for one venue.
//!
//! A [`Session`] owns the in-memory copies of all three collections and the
//! store they persist to. Each operation hands the relevant collection to a pure
//! function in [`crate::core`], keeps the result, and writes the changed list
//! back to the store. Catalog writes are applied locally first and rolled back
//! if the store rejects them.

use crate::{
    config::inventory::{CatalogSeed, InventoryConfig},
    core::{
        catalog::{self, Product},
        grouping::{Group, group_by},
        next_local_id,
        normalize::{clean_display_name, same_product},
        restock::{self, RestockEntry},
        stock_take::{self, Admission, StockTakeDraft, StockTakeEntry},
    },
    errors::{Error, Result},
    store::{CatalogStore, ListStore, RESTOCK_LIST_KEY, STOCK_TAKE_KEY, load_list, save_list},
};
use tracing::{debug, info, instrument, warn};

/// Id carried by a catalog product that has been added locally but not yet confirmed by the store.
pub const PENDING_PRODUCT_ID: i64 = 0;

/// What happened to a stock-take addition that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum StockTakeOutcome {
    /// The entry was recorded
    Added(StockTakeEntry),
    /// A similarly named entry exists and the caller chose not to proceed
    Declined {
        /// The existing entry that triggered the warning
        similar: StockTakeEntry,
    },
}

/// Session-scoped inventory state backed by a store.
#[derive(Debug)]
pub struct Session<S> {
    store: S,
    config: InventoryConfig,
    catalog: Vec<Product>,
    restock: Vec<RestockEntry>,
    stock_take: Vec<StockTakeEntry>,
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

impl<S> Session<S>
where
    S: CatalogStore + ListStore + Sync,
{
    /// Loads the catalog and both local lists from `store`.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read.
    #[instrument(skip_all)]
    pub async fn load(store: S, config: InventoryConfig) -> Result<Self> {
        let catalog = store.list().await?;
        let restock = load_list(&store, RESTOCK_LIST_KEY).await?;
        let stock_take = load_list(&store, STOCK_TAKE_KEY).await?;
        info!(
            "Loaded session: {} catalog products, {} restock entries, {} stock-take entries",
            catalog.len(),
            restock.len(),
            stock_take.len()
        );

        Ok(Self {
            store,
            config,
            catalog,
            restock,
            stock_take,
        })
    }

    /// The active configuration
    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    /// The backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Catalog products in creation order
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    /// Restock entries, most recently added first
    pub fn restock(&self) -> &[RestockEntry] {
        &self.restock
    }

    /// Stock-take entries in the order they were recorded
    pub fn stock_take(&self) -> &[StockTakeEntry] {
        &self.stock_take
    }

    // ---------------------------------------------------------------
    // Restock list
    // ---------------------------------------------------------------

    /// Adds `quantity` of `name` to the restock list.
    ///
    /// The section comes from the catalog when the product is known and is the
    /// default section otherwise. An existing entry for the same product has its
    /// quantity increased and keeps its section.
    ///
    /// # Errors
    /// Returns `Error::EmptyName` for a blank name, or a store error if saving fails.
    #[instrument(skip(self))]
    pub async fn add_restock(&mut self, name: &str, quantity: &str) -> Result<RestockEntry> {
        let name = clean_display_name(name).ok_or(Error::EmptyName)?;
        let section =
            catalog::resolve_section(&self.catalog, &name, self.config.default_section());
        self.merge_into_restock(&name, quantity, &section).await
    }

    /// Adds one unit of a catalog product to the restock list using its catalog section.
    ///
    /// # Errors
    /// Returns `Error::ProductNotFound` if `product_id` is not in the catalog.
    #[instrument(skip(self))]
    pub async fn quick_add(&mut self, product_id: i64) -> Result<RestockEntry> {
        let product = self
            .catalog
            .iter()
            .find(|product| product.id == product_id)
            .cloned()
            .ok_or_else(|| Error::ProductNotFound {
                name: product_id.to_string(),
            })?;
        self.merge_into_restock(&product.name, "1", &product.section)
            .await
    }

    async fn merge_into_restock(
        &mut self,
        name: &str,
        quantity: &str,
        section: &str,
    ) -> Result<RestockEntry> {
        let id = next_local_id(self.restock.iter().map(|entry| entry.id), now_millis());
        self.restock = restock::merge_or_insert(
            &self.restock,
            name,
            quantity,
            section,
            self.config.default_section(),
            id,
        );

        let entry = self
            .restock
            .iter()
            .find(|entry| same_product(&entry.name, name))
            .cloned()
            .ok_or_else(|| Error::ProductNotFound {
                name: name.to_string(),
            })?;
        info!(
            "Restock {} now at {} ({})",
            entry.name, entry.quantity, entry.section
        );

        self.persist_restock().await?;
        Ok(entry)
    }

    /// Finds the restock entry for `name`, ignoring case and outer whitespace
    pub fn find_restock(&self, name: &str) -> Option<&RestockEntry> {
        self.restock
            .iter()
            .find(|entry| same_product(&entry.name, name))
    }

    /// Removes one restock entry.
    ///
    /// # Errors
    /// Returns `Error::EntryNotFound` if no entry has this id.
    #[instrument(skip(self))]
    pub async fn remove_restock(&mut self, id: i64) -> Result<RestockEntry> {
        let removed = self
            .restock
            .iter()
            .find(|entry| entry.id == id)
            .cloned()
            .ok_or(Error::EntryNotFound { id })?;
        self.restock = restock::remove_entry(&self.restock, id);
        info!("Removed {} from restock list", removed.name);
        self.persist_restock().await?;
        Ok(removed)
    }

    /// Empties the restock list and returns how many entries were removed.
    ///
    /// # Errors
    /// Returns a store error if saving fails.
    #[instrument(skip(self))]
    pub async fn clear_restock(&mut self) -> Result<usize> {
        let cleared = self.restock.len();
        self.restock.clear();
        info!("Cleared {} restock entries", cleared);
        self.persist_restock().await?;
        Ok(cleared)
    }

    /// Restock entries grouped by configured section, with legacy entries without a
    /// section treated as the default section.
    pub fn restock_by_section(&self) -> Vec<Group<'_, RestockEntry>> {
        let default_section = self.config.default_section();
        group_by(&self.restock, &self.config.inventory.sections, |entry| {
            if entry.section.is_empty() {
                default_section
            } else {
                entry.section.as_str()
            }
        })
    }

    async fn persist_restock(&self) -> Result<()> {
        save_list(&self.store, RESTOCK_LIST_KEY, &self.restock).await
    }

    // ---------------------------------------------------------------
    // Stock take
    // ---------------------------------------------------------------

    /// Records a stock-take entry.
    ///
    /// An entry for the same product at the same bar is refused outright. If a
    /// similarly spelled product is already listed anywhere, `confirm` is asked
    /// whether to go ahead; declining leaves the list unchanged.
    ///
    /// # Errors
    /// - `Error::EmptyName` for a blank name
    /// - `Error::UnknownCategory` for a bar that is not configured
    /// - `Error::DuplicateEntry` when the product is already counted at this bar
    /// - a store error if saving fails
    #[instrument(skip(self, confirm))]
    pub async fn add_stock_take<F>(
        &mut self,
        draft: &StockTakeDraft,
        confirm: F,
    ) -> Result<StockTakeOutcome>
    where
        F: FnOnce(&StockTakeEntry) -> bool,
    {
        let name = clean_display_name(&draft.name).ok_or(Error::EmptyName)?;
        if !self.config.is_bar(&draft.bar) {
            return Err(Error::UnknownCategory {
                value: draft.bar.clone(),
            });
        }

        match stock_take::assess_addition(
            &self.stock_take,
            &name,
            &draft.bar,
            &self.config.similarity,
        ) {
            Admission::Duplicate(existing) => {
                warn!("{} is already counted at {}", existing.name, existing.bar);
                return Err(Error::DuplicateEntry {
                    name: existing.name.clone(),
                    bar: existing.bar.clone(),
                });
            }
            Admission::Similar(existing) => {
                if !confirm(existing) {
                    debug!("Declined {} (similar to {})", name, existing.name);
                    return Ok(StockTakeOutcome::Declined {
                        similar: existing.clone(),
                    });
                }
                info!("Adding {} despite similar {}", name, existing.name);
            }
            Admission::Clear => {}
        }

        let id = next_local_id(self.stock_take.iter().map(|entry| entry.id), now_millis());
        let entry = StockTakeEntry::from_draft(
            id,
            draft,
            name,
            self.config.inventory.default_crate_size,
        );
        info!(
            "Counted {} at {}: {} units",
            entry.name,
            entry.bar,
            stock_take::format_units(stock_take::compute_total_units(&entry))
        );
        self.stock_take.push(entry.clone());
        self.persist_stock_take().await?;
        Ok(StockTakeOutcome::Added(entry))
    }

    /// Finds the stock-take entry for `name` at `bar`
    pub fn find_stock_take(&self, name: &str, bar: &str) -> Option<&StockTakeEntry> {
        self.stock_take
            .iter()
            .find(|entry| entry.bar == bar && same_product(&entry.name, name))
    }

    /// Removes one stock-take entry.
    ///
    /// # Errors
    /// Returns `Error::EntryNotFound` if no entry has this id.
    #[instrument(skip(self))]
    pub async fn remove_stock_take(&mut self, id: i64) -> Result<StockTakeEntry> {
        let removed = self
            .stock_take
            .iter()
            .find(|entry| entry.id == id)
            .cloned()
            .ok_or(Error::EntryNotFound { id })?;
        self.stock_take = stock_take::remove_entry(&self.stock_take, id);
        info!("Removed {} at {} from stock take", removed.name, removed.bar);
        self.persist_stock_take().await?;
        Ok(removed)
    }

    /// Empties the stock take and returns how many entries were removed.
    ///
    /// # Errors
    /// Returns a store error if saving fails.
    #[instrument(skip(self))]
    pub async fn clear_stock_take(&mut self) -> Result<usize> {
        let cleared = self.stock_take.len();
        self.stock_take.clear();
        info!("Cleared {} stock-take entries", cleared);
        self.persist_stock_take().await?;
        Ok(cleared)
    }

    /// Stock-take entries grouped by configured bar
    pub fn stock_take_by_bar(&self) -> Vec<Group<'_, StockTakeEntry>> {
        group_by(&self.stock_take, &self.config.inventory.bars, |entry| {
            entry.bar.as_str()
        })
    }

    async fn persist_stock_take(&self) -> Result<()> {
        save_list(&self.store, STOCK_TAKE_KEY, &self.stock_take).await
    }

    // ---------------------------------------------------------------
    // Catalog
    // ---------------------------------------------------------------

    /// Adds a product to the catalog.
    ///
    /// The product appears in the local catalog straight away with
    /// [`PENDING_PRODUCT_ID`]; once the store confirms it, the stored product
    /// replaces it. If the store fails, the local entry is removed again.
    ///
    /// # Errors
    /// - `Error::EmptyName` for a blank name
    /// - `Error::UnknownCategory` for a section that is not configured
    /// - `Error::AlreadyInCatalog` when a product with the same name exists
    /// - the store's error if it rejects the product
    #[instrument(skip(self))]
    pub async fn add_to_catalog(&mut self, name: &str, section: Option<&str>) -> Result<Product> {
        let name = clean_display_name(name).ok_or(Error::EmptyName)?;
        let section = match section.map(str::trim) {
            None | Some("") => self.config.default_section().to_string(),
            Some(section) if self.config.is_section(section) => section.to_string(),
            Some(section) => {
                return Err(Error::UnknownCategory {
                    value: section.to_string(),
                });
            }
        };
        if let Some(existing) = catalog::find_product(&self.catalog, &name) {
            return Err(Error::AlreadyInCatalog {
                name: existing.name.clone(),
            });
        }

        self.catalog.push(Product {
            id: PENDING_PRODUCT_ID,
            name: name.clone(),
            section: section.clone(),
        });

        let is_pending = |product: &Product| {
            product.id == PENDING_PRODUCT_ID && same_product(&product.name, &name)
        };

        match self.store.create(&name, &section).await {
            Ok(saved) => {
                if let Some(slot) = self.catalog.iter_mut().find(|product| is_pending(product)) {
                    *slot = saved.clone();
                }
                info!("Added {} to catalog under {}", saved.name, saved.section);
                Ok(saved)
            }
            Err(e) => {
                self.catalog.retain(|product| !is_pending(product));
                warn!("Catalog rejected {}: {}", name, e);
                Err(e)
            }
        }
    }

    /// Removes a product from the catalog.
    ///
    /// The product disappears locally first and is put back in its old position
    /// if the store fails to delete it. Restock entries that copied its section
    /// are not affected.
    ///
    /// # Errors
    /// Returns `Error::ProductNotFound` if the product is not in the local catalog,
    /// or the store's error if the delete fails.
    #[instrument(skip(self))]
    pub async fn remove_from_catalog(&mut self, id: i64) -> Result<Product> {
        let index = self
            .catalog
            .iter()
            .position(|product| product.id == id)
            .ok_or_else(|| Error::ProductNotFound {
                name: id.to_string(),
            })?;
        let removed = self.catalog.remove(index);

        if let Err(e) = self.store.delete(id).await {
            warn!("Catalog delete of {} failed: {}", removed.name, e);
            let at = index.min(self.catalog.len());
            self.catalog.insert(at, removed);
            return Err(e);
        }

        info!("Removed {} from catalog", removed.name);
        Ok(removed)
    }

    /// Replaces the local catalog with the store's current contents.
    ///
    /// # Errors
    /// Returns the store's error; the local catalog is unchanged in that case.
    #[instrument(skip(self))]
    pub async fn refresh_catalog(&mut self) -> Result<()> {
        self.catalog = self.store.list().await?;
        debug!("Catalog refreshed: {} products", self.catalog.len());
        Ok(())
    }

    /// Creates the configured seed products that are not in the catalog yet.
    ///
    /// Returns the number of products created.
    ///
    /// # Errors
    /// Returns the first error from [`Session::add_to_catalog`] other than an
    /// already-present product.
    #[instrument(skip_all)]
    pub async fn seed_catalog(&mut self, seeds: &[CatalogSeed]) -> Result<usize> {
        let mut created = 0;
        for seed in seeds {
            match self.add_to_catalog(&seed.name, seed.section.as_deref()).await {
                Ok(_) => created += 1,
                Err(Error::AlreadyInCatalog { name }) => {
                    debug!("Seed {} already in catalog", name);
                }
                Err(e) => return Err(e),
            }
        }
        if created > 0 {
            info!("Seeded {} catalog products", created);
        }
        Ok(created)
    }

    /// Catalog products ordered by section, then name
    pub fn catalog_for_display(&self) -> Vec<&Product> {
        catalog::sort_for_display(&self.catalog, &self.config.inventory.sections)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    #![allow(clippy::panic)]
    use super::*;
    use crate::core::grouping::OTHER_GROUP;
    use crate::test_utils::{MemoryStore, draft, setup_test_db, setup_test_session};

    #[tokio::test]
    async fn test_quick_add_twice_merges_into_one_entry() -> Result<()> {
        let mut session = setup_test_session().await?;
        let heineken = session.add_to_catalog("Heineken", Some("Fridge")).await?;

        session.quick_add(heineken.id).await?;
        session.quick_add(heineken.id).await?;

        assert_eq!(session.restock().len(), 1);
        let entry = &session.restock()[0];
        assert_eq!(entry.name, "Heineken");
        assert_eq!(entry.quantity, "2");
        assert_eq!(entry.section, "Fridge");
        Ok(())
    }

    #[tokio::test]
    async fn test_add_restock_resolves_section_from_catalog() -> Result<()> {
        let mut session = setup_test_session().await?;
        session.add_to_catalog("Guinness", Some("Keg Room")).await?;

        let known = session.add_restock(" guinness ", "2").await?;
        let unknown = session.add_restock("Crisps", "5").await?;

        assert_eq!(known.section, "Keg Room");
        assert_eq!(known.name, "guinness");
        assert_eq!(unknown.section, "Fridge");
        assert_eq!(session.restock()[0].name, "Crisps");
        Ok(())
    }

    #[tokio::test]
    async fn test_add_restock_sums_quantities() -> Result<()> {
        let mut session = setup_test_session().await?;

        session.add_restock("Coke", "3").await?;
        session.add_restock("COKE", "4").await?;
        let entry = session.add_restock("coke", "not a number").await?;

        assert_eq!(session.restock().len(), 1);
        assert_eq!(entry.quantity, "7");
        Ok(())
    }

    #[tokio::test]
    async fn test_add_restock_rejects_empty_name() -> Result<()> {
        let mut session = setup_test_session().await?;

        let result = session.add_restock("   ", "1").await;
        assert!(matches!(result, Err(Error::EmptyName)));
        assert!(session.restock().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_catalog_section_change_does_not_touch_existing_entries() -> Result<()> {
        let mut session = setup_test_session().await?;
        let product = session.add_to_catalog("Bulmers", Some("Fridge")).await?;
        session.quick_add(product.id).await?;

        session.remove_from_catalog(product.id).await?;
        session.add_to_catalog("Bulmers", Some("Keg Room")).await?;
        let entry = session.add_restock("Bulmers", "1").await?;

        assert_eq!(entry.section, "Fridge");
        assert_eq!(entry.quantity, "2");
        Ok(())
    }

    #[tokio::test]
    async fn test_lists_persist_across_sessions() -> Result<()> {
        let db = setup_test_db().await?;
        let mut session = Session::load(db, InventoryConfig::default()).await?;
        session.add_restock("Coke", "2").await?;
        session
            .add_stock_take(&draft("Main Bar", "Jameson"), |_| false)
            .await?;

        let reloaded = Session::load(session.store().clone(), InventoryConfig::default()).await?;
        assert_eq!(reloaded.restock(), session.restock());
        assert_eq!(reloaded.stock_take(), session.stock_take());
        Ok(())
    }

    #[tokio::test]
    async fn test_remove_and_clear_restock() -> Result<()> {
        let mut session = setup_test_session().await?;
        let coke = session.add_restock("Coke", "1").await?;
        session.add_restock("Water", "6").await?;

        let removed = session.remove_restock(coke.id).await?;
        assert_eq!(removed.name, "Coke");
        assert!(session.find_restock("coke").is_none());

        let missing = session.remove_restock(coke.id).await;
        assert!(matches!(missing, Err(Error::EntryNotFound { .. })));

        assert_eq!(session.clear_restock().await?, 1);
        assert!(session.restock().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_stock_take_blocks_exact_duplicate() -> Result<()> {
        let mut session = setup_test_session().await?;
        session
            .add_stock_take(&draft("Main Bar", "Jameson"), |_| true)
            .await?;

        let result = session
            .add_stock_take(&draft("Main Bar", "Jameson"), |_| true)
            .await;

        assert!(matches!(result, Err(Error::DuplicateEntry { .. })));
        assert_eq!(session.stock_take().len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_stock_take_same_product_other_bar_is_allowed() -> Result<()> {
        let mut session = setup_test_session().await?;
        session
            .add_stock_take(&draft("Main Bar", "Jameson"), |_| false)
            .await?;

        let outcome = session
            .add_stock_take(&draft("Outside Bar", "jameson"), |_| false)
            .await?;

        assert!(matches!(outcome, StockTakeOutcome::Added(_)));
        assert_eq!(session.stock_take().len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_stock_take_similar_name_declined() -> Result<()> {
        let mut session = setup_test_session().await?;
        session
            .add_stock_take(&draft("Main Bar", "Smirnoff"), |_| true)
            .await?;

        let mut asked_about = None;
        let outcome = session
            .add_stock_take(&draft("Main Bar", "Smirnof"), |similar| {
                asked_about = Some(similar.name.clone());
                false
            })
            .await?;

        assert_eq!(asked_about.as_deref(), Some("Smirnoff"));
        assert!(matches!(outcome, StockTakeOutcome::Declined { .. }));
        assert_eq!(session.stock_take().len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_stock_take_similar_name_confirmed() -> Result<()> {
        let mut session = setup_test_session().await?;
        session
            .add_stock_take(&draft("Main Bar", "Smirnoff"), |_| true)
            .await?;

        let outcome = session
            .add_stock_take(&draft("Main Bar", "Smirnof"), |_| true)
            .await?;

        assert!(matches!(outcome, StockTakeOutcome::Added(_)));
        let names: Vec<&str> = session.stock_take().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Smirnoff", "Smirnof"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_stock_take_coerces_and_totals() -> Result<()> {
        let mut session = setup_test_session().await?;
        let input = StockTakeDraft {
            full: "2".to_string(),
            crates: "1".to_string(),
            crate_size: String::new(),
            usage: "1.5".to_string(),
            ..draft("Upstairs Bar", "Peroni")
        };

        let StockTakeOutcome::Added(entry) = session.add_stock_take(&input, |_| true).await? else {
            panic!("expected entry to be added");
        };

        assert_eq!(entry.crate_size, 24);
        assert_eq!(entry.usage, 1.0);
        assert_eq!(stock_take::compute_total_units(&entry), 27.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_stock_take_validation() -> Result<()> {
        let mut session = setup_test_session().await?;

        let empty = session.add_stock_take(&draft("Main Bar", " "), |_| true).await;
        assert!(matches!(empty, Err(Error::EmptyName)));

        let bad_bar = session.add_stock_take(&draft("Cellar", "Gin"), |_| true).await;
        assert!(matches!(bad_bar, Err(Error::UnknownCategory { .. })));
        assert!(session.stock_take().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_remove_and_clear_stock_take() -> Result<()> {
        let mut session = setup_test_session().await?;
        session.add_stock_take(&draft("Main Bar", "Gin"), |_| true).await?;
        session.add_stock_take(&draft("Main Bar", "Rum"), |_| true).await?;

        let gin = session.find_stock_take("gin", "Main Bar").unwrap().id;
        session.remove_stock_take(gin).await?;
        assert!(session.find_stock_take("gin", "Main Bar").is_none());

        assert_eq!(session.clear_stock_take().await?, 1);
        assert!(session.stock_take().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_add_to_catalog_validation() -> Result<()> {
        let mut session = setup_test_session().await?;
        session.add_to_catalog("Heineken", None).await?;

        let duplicate = session.add_to_catalog("  HEINEKEN ", Some("Keg Room")).await;
        assert!(matches!(duplicate, Err(Error::AlreadyInCatalog { .. })));

        let bad_section = session.add_to_catalog("Gin", Some("Attic")).await;
        assert!(matches!(bad_section, Err(Error::UnknownCategory { .. })));

        let empty = session.add_to_catalog("", None).await;
        assert!(matches!(empty, Err(Error::EmptyName)));

        assert_eq!(session.catalog().len(), 1);
        assert_eq!(session.catalog()[0].section, "Fridge");
        Ok(())
    }

    #[tokio::test]
    async fn test_add_to_catalog_confirms_store_id() -> Result<()> {
        let mut session = setup_test_session().await?;

        let saved = session.add_to_catalog("Heineken", Some("Fridge")).await?;

        assert_ne!(saved.id, PENDING_PRODUCT_ID);
        assert_eq!(session.catalog(), &[saved]);
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_catalog_create_reverts() -> Result<()> {
        let mut session = Session::load(MemoryStore::failing(), InventoryConfig::default()).await?;

        let result = session.add_to_catalog("Heineken", Some("Fridge")).await;

        assert!(matches!(result, Err(Error::Database(_))));
        assert!(session.catalog().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_catalog_delete_restores_position() -> Result<()> {
        let products = vec![
            Product {
                id: 1,
                name: "Coke".to_string(),
                section: "Fridge".to_string(),
            },
            Product {
                id: 2,
                name: "Guinness".to_string(),
                section: "Keg Room".to_string(),
            },
            Product {
                id: 3,
                name: "Water".to_string(),
                section: "Water Room".to_string(),
            },
        ];
        let store = MemoryStore {
            fail_delete: true,
            ..MemoryStore::with_products(products.clone())
        };
        let mut session = Session::load(store, InventoryConfig::default()).await?;

        let result = session.remove_from_catalog(2).await;

        assert!(result.is_err());
        assert_eq!(session.catalog(), products.as_slice());
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_restock_save_keeps_change_in_memory() -> Result<()> {
        let store = MemoryStore {
            fail_save: true,
            ..MemoryStore::default()
        };
        let mut session = Session::load(store, InventoryConfig::default()).await?;

        let result = session.add_restock("Coke", "3").await;

        assert!(matches!(result, Err(Error::Database(_))));
        assert_eq!(session.restock().len(), 1);
        assert_eq!(session.restock()[0].name, "Coke");
        assert_eq!(session.restock()[0].quantity, "3");
        assert!(session.store().lists.lock().unwrap().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_stock_take_save_keeps_change_in_memory() -> Result<()> {
        let store = MemoryStore {
            fail_save: true,
            ..MemoryStore::default()
        };
        let mut session = Session::load(store, InventoryConfig::default()).await?;
        let input = StockTakeDraft {
            full: "2".to_string(),
            ..draft("Main Bar", "Jameson")
        };

        let result = session.add_stock_take(&input, |_| true).await;

        assert!(matches!(result, Err(Error::Database(_))));
        assert_eq!(session.stock_take().len(), 1);
        assert_eq!(session.stock_take()[0].name, "Jameson");
        assert_eq!(session.stock_take()[0].full, 2);
        assert!(session.store().lists.lock().unwrap().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_remove_from_catalog_unknown_id() -> Result<()> {
        let mut session = setup_test_session().await?;
        let result = session.remove_from_catalog(42).await;
        assert!(matches!(result, Err(Error::ProductNotFound { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_seed_catalog_skips_existing() -> Result<()> {
        let mut session = setup_test_session().await?;
        session.add_to_catalog("Heineken", None).await?;
        let seeds = vec![
            CatalogSeed {
                name: "heineken".to_string(),
                section: None,
            },
            CatalogSeed {
                name: "Guinness".to_string(),
                section: Some("Keg Room".to_string()),
            },
        ];

        assert_eq!(session.seed_catalog(&seeds).await?, 1);
        assert_eq!(session.seed_catalog(&seeds).await?, 0);
        assert_eq!(session.catalog().len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_refresh_catalog_reads_store() -> Result<()> {
        let mut session = setup_test_session().await?;
        session.store().create("Amstel", "Keg Room").await?;
        assert!(session.catalog().is_empty());

        session.refresh_catalog().await?;
        assert_eq!(session.catalog().len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_restock_grouping_routes_legacy_sections() -> Result<()> {
        let store = MemoryStore::default();
        let legacy = r#"[
            {"id":3,"name":"Ale","quantity":"1","section":"Cellar"},
            {"id":2,"name":"Coke","quantity":"2"},
            {"id":1,"name":"Water","quantity":"6","section":"Water Room"}
        ]"#;
        store.save(RESTOCK_LIST_KEY, legacy).await?;
        let session = Session::load(store, InventoryConfig::default()).await?;

        let groups = session.restock_by_section();
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Fridge", "Keg Room", "Water Room", OTHER_GROUP]);
        assert_eq!(groups[0].items[0].name, "Coke");
        assert_eq!(groups[3].items[0].name, "Ale");
        Ok(())
    }

    #[tokio::test]
    async fn test_catalog_for_display_sorted() -> Result<()> {
        let mut session = setup_test_session().await?;
        session.add_to_catalog("Water", Some("Water Room")).await?;
        session.add_to_catalog("corona", Some("Fridge")).await?;
        session.add_to_catalog("Amstel", Some("Fridge")).await?;

        let names: Vec<&str> = session
            .catalog_for_display()
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Amstel", "corona", "Water"]);
        Ok(())
    }
}
