//! Shipment state container.

use tracing::{info, instrument};

use jade_shopping_core::{ShipmentId, ShipmentStatus};

use crate::error::AppError;
use crate::gateway::ShipmentSource;
use crate::models::{Shipment, ShipmentFilter, TrackingEvent};
use crate::query::Page;

use super::{ListState, ListView};

/// State container for the shipping screen.
pub struct ShipmentStore<G> {
    gateway: G,
    state: ListState<Shipment, ShipmentFilter>,
}

impl<G> ShipmentStore<G> {
    /// Create an empty store backed by the given source.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: ListState::default(),
        }
    }

    /// Replace the active filter.
    pub fn set_filter(&mut self, filter: ShipmentFilter) {
        self.state.set_filter(filter);
    }

    /// The filtered, paginated view for rendering.
    #[must_use]
    pub fn view(&self, page: Page) -> ListView<Shipment> {
        self.state.view(page)
    }

    /// Look up a shipment by ID.
    #[must_use]
    pub fn find(&self, id: ShipmentId) -> Option<&Shipment> {
        self.state.records().iter().find(|s| s.id == id)
    }

    /// Append a tracking event to a shipment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the shipment is unknown.
    pub fn record_event(&mut self, id: ShipmentId, event: TrackingEvent) -> Result<(), AppError> {
        let shipment = self
            .state
            .records_mut()
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound(format!("shipment {id}")))?;
        shipment.record_event(event);
        Ok(())
    }

    /// Set the delivery status.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when moving a delivered shipment back
    /// to an earlier status, and [`AppError::NotFound`] if it is unknown.
    pub fn set_status(&mut self, id: ShipmentId, status: ShipmentStatus) -> Result<(), AppError> {
        let shipment = self
            .state
            .records_mut()
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound(format!("shipment {id}")))?;

        if shipment.status == ShipmentStatus::Delivered && status != ShipmentStatus::Delivered {
            return Err(AppError::Conflict(
                "delivered shipments cannot regress".to_string(),
            ));
        }
        info!(shipment = %id, ?status, "shipment status updated");
        shipment.status = status;
        shipment.updated_at = chrono::Utc::now();
        Ok(())
    }
}

impl<G: ShipmentSource> ShipmentStore<G> {
    /// Fetch the shipment list from the source.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Gateway`] when the source fails.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<(), AppError> {
        self.state.begin_load();
        match self.gateway.fetch_shipments().await {
            Ok(records) => {
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
    use chrono::Utc;

    #[tokio::test]
    async fn test_record_event_appends_in_order() {
        let mut store = ShipmentStore::new(Fixtures);
        store.refresh().await.unwrap();
        let id = store.view(Page::first()).page.items[0].id;
        let before = store.find(id).unwrap().events.len();

        store
            .record_event(
                id,
                TrackingEvent {
                    description: "Out for delivery".to_string(),
                    location: Some("Hangzhou".to_string()),
                    occurred_at: Utc::now(),
                },
            )
            .unwrap();

        let shipment = store.find(id).unwrap();
        assert_eq!(shipment.events.len(), before + 1);
        assert_eq!(
            shipment.latest_event().unwrap().description,
            "Out for delivery"
        );
    }

    #[tokio::test]
    async fn test_delivered_shipment_cannot_regress() {
        let mut store = ShipmentStore::new(Fixtures);
        store.refresh().await.unwrap();
        let delivered = store
            .view(Page::first())
            .page
            .items
            .iter()
            .find(|s| s.status == ShipmentStatus::Delivered)
            .unwrap()
            .id;

        let err = store
            .set_status(delivered, ShipmentStatus::InTransit)
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }
}
