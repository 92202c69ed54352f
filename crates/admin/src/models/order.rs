//! Order records, as returned by the external order service.
//!
//! Orders are read-only in the admin: the order service is a collaborator
//! consumed as a black box (filters in, list out), so there are no create or
//! update inputs here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use jade_shopping_core::{FinancialStatus, FulfillmentStatus, OrderId, Price};

use crate::query::filter::matches_opt;
use crate::query::{DateRange, Filter, TextSearch};

/// An order summary row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// Human-facing order number (e.g. "JD-1001").
    pub order_number: String,
    /// Customer display name.
    pub customer_name: String,
    /// Payment state.
    pub financial_status: FinancialStatus,
    /// Shipping state.
    pub fulfillment_status: FulfillmentStatus,
    /// Order total.
    pub total: Price,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
}

/// Filter criteria for the orders list screen.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    /// Substring search over order number and customer name.
    pub search: TextSearch,
    /// Filter by payment state.
    pub financial_status: Option<FinancialStatus>,
    /// Filter by shipping state.
    pub fulfillment_status: Option<FulfillmentStatus>,
    /// Filter by placement time.
    pub placed: DateRange,
}

impl Filter<Order> for OrderFilter {
    fn matches(&self, record: &Order) -> bool {
        self.search
            .matches_any([record.order_number.as_str(), record.customer_name.as_str()])
            && matches_opt(self.financial_status.as_ref(), &record.financial_status)
            && matches_opt(
                self.fulfillment_status.as_ref(),
                &record.fulfillment_status,
            )
            && self.placed.contains(record.placed_at)
    }
}
