//! Inventory state container.

use chrono::Utc;
use tracing::{info, instrument};

use jade_shopping_core::{InventoryItemId, StockStatus};

use crate::error::AppError;
use crate::gateway::InventorySource;
use crate::models::{InventoryFilter, InventoryItem, stock_status};
use crate::query::Page;

use super::{ListState, ListView};

/// State container for the inventory screen.
///
/// Stock writes go through [`Self::commit_stock`], which checks the item's
/// version counter: two writers working from the same read cannot both land,
/// the second gets a conflict instead of silently losing the first's update.
pub struct InventoryStore<G> {
    gateway: G,
    state: ListState<InventoryItem, InventoryFilter>,
}

impl<G> InventoryStore<G> {
    /// Create an empty store backed by the given source.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: ListState::default(),
        }
    }

    /// Replace the active filter.
    pub fn set_filter(&mut self, filter: InventoryFilter) {
        self.state.set_filter(filter);
    }

    /// The filtered, paginated view for rendering.
    #[must_use]
    pub fn view(&self, page: Page) -> ListView<InventoryItem> {
        self.state.view(page)
    }

    /// Look up an item by ID.
    #[must_use]
    pub fn find(&self, id: InventoryItemId) -> Option<&InventoryItem> {
        self.state.records().iter().find(|i| i.id == id)
    }

    /// Number of items currently reading low or out of stock.
    #[must_use]
    pub fn attention_count(&self) -> usize {
        self.state
            .records()
            .iter()
            .filter(|i| stock_status(i) != StockStatus::Normal)
            .count()
    }

    /// Write a new on-hand quantity, guarded by the version the caller read.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown item and
    /// [`AppError::Conflict`] when `expected_version` no longer matches,
    /// meaning another write landed since the caller's read.
    pub fn commit_stock(
        &mut self,
        id: InventoryItemId,
        expected_version: u64,
        new_stock: u32,
    ) -> Result<(), AppError> {
        let item = self
            .state
            .records_mut()
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| AppError::NotFound(format!("inventory item {id}")))?;

        if item.version != expected_version {
            return Err(AppError::Conflict(format!(
                "stock for {} changed since it was read (version {} != {})",
                item.sku, item.version, expected_version
            )));
        }

        info!(
            sku = %item.sku,
            from = item.current_stock,
            to = new_stock,
            "stock committed"
        );
        item.current_stock = new_stock;
        item.version += 1;
        item.updated_at = Utc::now();
        Ok(())
    }

    /// Update thresholds on an item.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown item.
    pub fn set_thresholds(
        &mut self,
        id: InventoryItemId,
        min_stock_threshold: u32,
        reorder_point: u32,
    ) -> Result<(), AppError> {
        let item = self
            .state
            .records_mut()
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| AppError::NotFound(format!("inventory item {id}")))?;
        item.min_stock_threshold = min_stock_threshold;
        item.reorder_point = reorder_point;
        item.updated_at = Utc::now();
        Ok(())
    }
}

impl<G: InventorySource> InventoryStore<G> {
    /// Fetch the inventory list from the source.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Gateway`] when the source fails; the prior
    /// collection is kept and the failure is recorded in the list state.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<(), AppError> {
        self.state.begin_load();
        match self.gateway.fetch_inventory().await {
            Ok(records) => {
                info!(count = records.len(), "inventory refreshed");
                self.state.complete(records);
                Ok(())
            }
            Err(e) => {
                self.state.fail(e.to_string());
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::gateway::fixtures::Fixtures;

    async fn loaded_store() -> InventoryStore<Fixtures> {
        let mut store = InventoryStore::new(Fixtures);
        store.refresh().await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_commit_stock_bumps_version() {
        let mut store = loaded_store().await;
        let item = store.view(Page::first()).page.items[0].clone();

        store.commit_stock(item.id, item.version, 99).unwrap();
        let after = store.find(item.id).unwrap();
        assert_eq!(after.current_stock, 99);
        assert_eq!(after.version, item.version + 1);
    }

    #[tokio::test]
    async fn test_stale_commit_is_rejected() {
        let mut store = loaded_store().await;
        let item = store.view(Page::first()).page.items[0].clone();

        store.commit_stock(item.id, item.version, 99).unwrap();
        let err = store.commit_stock(item.id, item.version, 50).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        // First write survives.
        assert_eq!(store.find(item.id).unwrap().current_stock, 99);
    }

    #[tokio::test]
    async fn test_attention_count_tracks_derived_status() {
        let store = loaded_store().await;
        // Fixtures ship one low-stock item and one out-of-stock item.
        assert_eq!(store.attention_count(), 2);
    }
}
