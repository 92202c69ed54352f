//! Order state container.
//!
//! Orders are served by the external order service, which filters
//! server-side; this container passes the active filter through on refresh
//! and only paginates locally.

use tracing::{info, instrument};

use jade_shopping_core::OrderId;

use crate::error::AppError;
use crate::gateway::OrderService;
use crate::models::{Order, OrderFilter};
use crate::query::page::paginate;
use crate::query::Page;

use super::{ListView, LoadState};

/// State container for the orders screen.
pub struct OrderStore<G> {
    gateway: G,
    records: Vec<Order>,
    filter: OrderFilter,
    load: LoadState,
}

impl<G> OrderStore<G> {
    /// Create an empty store backed by the given order service.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            records: Vec::new(),
            filter: OrderFilter::default(),
            load: LoadState::Idle,
        }
    }

    /// Replace the active filter. Takes effect on the next refresh, since
    /// the order service applies it server-side.
    pub fn set_filter(&mut self, filter: OrderFilter) {
        self.filter = filter;
    }

    /// Paginated view of the last fetch.
    #[must_use]
    pub fn view(&self, page: Page) -> ListView<Order> {
        ListView {
            page: paginate(&self.records, page),
            load: self.load.clone(),
        }
    }
}

impl<G: OrderService> OrderStore<G> {
    /// Fetch orders matching the active filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Gateway`] when the order service fails.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<(), AppError> {
        self.load = LoadState::Loading;
        match self.gateway.get_orders(&self.filter).await {
            Ok(records) => {
                info!(count = records.len(), "orders refreshed");
                self.records = records;
                self.load = LoadState::Loaded;
                Ok(())
            }
            Err(e) => {
                self.load = LoadState::Failed(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Fetch a single order by ID, bypassing the list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Gateway`] when the order service fails and
    /// [`AppError::NotFound`] for an unknown order.
    pub async fn fetch_order(&self, id: OrderId) -> Result<Order, AppError> {
        self.gateway
            .get_order_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("order {id}")))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::gateway::fixtures::Fixtures;
    use crate::query::TextSearch;
    use jade_shopping_core::FinancialStatus;

    #[tokio::test]
    async fn test_filter_is_applied_by_the_service() {
        let mut store = OrderStore::new(Fixtures);
        store.set_filter(OrderFilter {
            financial_status: Some(FinancialStatus::Paid),
            ..OrderFilter::default()
        });
        store.refresh().await.unwrap();

        let view = store.view(Page::first());
        assert_eq!(view.page.total, 2);
        assert!(view
            .page
            .items
            .iter()
            .all(|o| o.financial_status == FinancialStatus::Paid));
    }

    #[tokio::test]
    async fn test_search_by_customer() {
        let mut store = OrderStore::new(Fixtures);
        store.set_filter(OrderFilter {
            search: TextSearch::new("sofia"),
            ..OrderFilter::default()
        });
        store.refresh().await.unwrap();
        assert_eq!(store.view(Page::first()).page.total, 1);
    }

    #[tokio::test]
    async fn test_fetch_order_returns_listed_order() {
        let mut store = OrderStore::new(Fixtures);
        store.refresh().await.unwrap();
        let listed = store.view(Page::first()).page.items[0].clone();

        let order = store.fetch_order(listed.id).await.unwrap();
        assert_eq!(order.id, listed.id);
        assert_eq!(order.order_number, listed.order_number);
    }

    #[tokio::test]
    async fn test_fetch_unknown_order_is_not_found() {
        let store = OrderStore::new(Fixtures);
        let err = store.fetch_order(OrderId::generate()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
