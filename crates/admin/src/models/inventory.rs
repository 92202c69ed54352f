//! Inventory domain types and derived stock quantities.
//!
//! `available_stock` and the stock status badge are derived values. The
//! legacy admin recomputed them ad hoc in several screens, which drifted;
//! here they exist once, as pure functions next to the record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use jade_shopping_core::{
    AdjustmentKind, AdjustmentStatus, AdminUserId, InventoryItemId, ProductId, StockAdjustmentId,
    StockStatus,
};

use crate::query::filter::matches_opt;
use crate::query::{Filter, TextSearch};

/// A per-product stock record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Unique inventory record ID.
    pub id: InventoryItemId,
    /// Product this record tracks.
    pub product_id: ProductId,
    /// Stock-keeping unit code.
    pub sku: String,
    /// Product display name.
    pub product_name: String,
    /// Units on hand.
    pub current_stock: u32,
    /// Units held for unshipped orders.
    pub reserved_stock: u32,
    /// Stock level below which the item reads as low.
    pub min_stock_threshold: u32,
    /// Stock level that should trigger a reorder.
    pub reorder_point: u32,
    /// Bumped on every stock write; stock mutations carry the version they
    /// read so a stale write is rejected instead of silently lost.
    pub version: u64,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Units available to sell: on hand minus reserved, floored at zero.
#[must_use]
pub const fn available_stock(item: &InventoryItem) -> u32 {
    item.current_stock.saturating_sub(item.reserved_stock)
}

/// Derived stock status badge.
///
/// Out of stock wins over low stock; an item is low when on-hand stock is
/// strictly below its minimum threshold.
#[must_use]
pub const fn stock_status(item: &InventoryItem) -> StockStatus {
    if item.current_stock == 0 {
        StockStatus::OutOfStock
    } else if item.current_stock < item.min_stock_threshold {
        StockStatus::LowStock
    } else {
        StockStatus::Normal
    }
}

/// A stock adjustment request moving through the approval workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockAdjustment {
    /// Unique adjustment ID.
    pub id: StockAdjustmentId,
    /// Inventory record being adjusted.
    pub item_id: InventoryItemId,
    /// Direction of the change.
    pub kind: AdjustmentKind,
    /// Units to add, remove, or (for corrections) the counted quantity.
    pub quantity: u32,
    /// Why the adjustment was requested.
    pub reason: String,
    /// On-hand stock when the request was submitted.
    pub quantity_before: u32,
    /// On-hand stock the request would produce.
    pub quantity_after: u32,
    /// Item version observed at submission; checked again at approval.
    pub item_version: u64,
    /// Current workflow status.
    pub status: AdjustmentStatus,
    /// Admin who submitted the request.
    pub requested_by: AdminUserId,
    /// Admin who approved or rejected it.
    pub resolved_by: Option<AdminUserId>,
    /// When the request was resolved.
    pub resolved_at: Option<DateTime<Utc>>,
    /// When the request was submitted.
    pub created_at: DateTime<Utc>,
}

/// Input for submitting a stock adjustment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAdjustmentInput {
    /// Inventory record to adjust.
    pub item_id: InventoryItemId,
    /// Direction of the change.
    pub kind: AdjustmentKind,
    /// Units to add, remove, or the counted quantity for corrections.
    pub quantity: u32,
    /// Why the adjustment is needed.
    pub reason: String,
}

/// Filter criteria for the inventory list screen.
///
/// Text search matches SKU and product name. The status predicate compares
/// against the derived badge, not a stored field.
#[derive(Debug, Clone, Default)]
pub struct InventoryFilter {
    /// Substring search over SKU and product name.
    pub search: TextSearch,
    /// Filter by derived stock status.
    pub status: Option<StockStatus>,
    /// Only items at or below their reorder point.
    pub needs_reorder: Option<bool>,
}

impl Filter<InventoryItem> for InventoryFilter {
    fn matches(&self, record: &InventoryItem) -> bool {
        self.search
            .matches_any([record.sku.as_str(), record.product_name.as_str()])
            && matches_opt(self.status.as_ref(), &stock_status(record))
            && self
                .needs_reorder
                .is_none_or(|n| n == (record.current_stock <= record.reorder_point))
    }
}
