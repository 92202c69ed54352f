//! Shipment and logistics tracking types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use jade_shopping_core::{OrderId, ShipmentId, ShipmentStatus};

use crate::query::filter::matches_opt;
use crate::query::{DateRange, Filter, TextSearch};

/// A shipment with its embedded tracking history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shipment {
    /// Unique shipment ID.
    pub id: ShipmentId,
    /// Order this shipment fulfills.
    pub order_id: OrderId,
    /// Carrier name.
    pub carrier: String,
    /// Carrier tracking number.
    pub tracking_number: String,
    /// Delivery status.
    pub status: ShipmentStatus,
    /// Destination summary line.
    pub destination: String,
    /// Tracking events in insertion order. Append-only; nothing beyond
    /// insertion order is guaranteed or enforced.
    pub events: Vec<TrackingEvent>,
    /// When the shipment was created.
    pub created_at: DateTime<Utc>,
    /// When the shipment was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Shipment {
    /// Append a tracking event, keeping insertion order.
    pub fn record_event(&mut self, event: TrackingEvent) {
        self.updated_at = event.occurred_at;
        self.events.push(event);
    }

    /// The most recently appended event.
    #[must_use]
    pub fn latest_event(&self) -> Option<&TrackingEvent> {
        self.events.last()
    }
}

/// A single carrier scan or status update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingEvent {
    /// Carrier-reported description.
    pub description: String,
    /// Where the scan happened.
    pub location: Option<String>,
    /// When the carrier reports it happened.
    pub occurred_at: DateTime<Utc>,
}

/// Filter criteria for the shipping list screen.
#[derive(Debug, Clone, Default)]
pub struct ShipmentFilter {
    /// Substring search over tracking number and destination.
    pub search: TextSearch,
    /// Filter by delivery status.
    pub status: Option<ShipmentStatus>,
    /// Filter by carrier name (exact, case-insensitive).
    pub carrier: Option<String>,
    /// Filter by creation time.
    pub created: DateRange,
}

impl Filter<Shipment> for ShipmentFilter {
    fn matches(&self, record: &Shipment) -> bool {
        self.search.matches_any([
            record.tracking_number.as_str(),
            record.destination.as_str(),
        ]) && matches_opt(self.status.as_ref(), &record.status)
            && self
                .carrier
                .as_ref()
                .is_none_or(|c| c.eq_ignore_ascii_case(&record.carrier))
            && self.created.contains(record.created_at)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn shipment(carrier: &str, status: ShipmentStatus) -> Shipment {
        let now = Utc::now();
        Shipment {
            id: ShipmentId::generate(),
            order_id: OrderId::generate(),
            carrier: carrier.to_string(),
            tracking_number: "SF1234567890".to_string(),
            status,
            destination: "Hangzhou, Zhejiang".to_string(),
            events: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_events_keep_insertion_order() {
        let mut shipment = shipment("SF Express", ShipmentStatus::InTransit);
        for desc in ["picked up", "departed facility", "arrived at hub"] {
            shipment.record_event(TrackingEvent {
                description: desc.to_string(),
                location: None,
                occurred_at: Utc::now(),
            });
        }
        let order: Vec<&str> = shipment.events.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(order, ["picked up", "departed facility", "arrived at hub"]);
        assert_eq!(shipment.latest_event().unwrap().description, "arrived at hub");
    }

    #[test]
    fn test_carrier_filter_ignores_case() {
        let records = vec![
            shipment("SF Express", ShipmentStatus::InTransit),
            shipment("ZTO", ShipmentStatus::Delivered),
        ];
        let filter = ShipmentFilter {
            carrier: Some("sf express".to_string()),
            ..ShipmentFilter::default()
        };
        assert_eq!(filter.apply(&records).len(), 1);
    }
}
