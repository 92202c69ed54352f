//! Stock adjustment approval workflow.
//!
//! An adjustment moves pending -> approved or pending -> rejected, once.
//! Approval re-checks the item's version: the legacy admin would happily
//! approve two adjustments computed from the same stale read, losing one of
//! them; here the second approval surfaces a conflict and the requester
//! resubmits against fresh stock.

use chrono::Utc;
use tracing::{info, instrument};

use jade_shopping_core::{
    AdjustmentKind, AdjustmentStatus, AdminUserId, StockAdjustmentId,
};

use crate::error::AppError;
use crate::models::{AdminUser, CreateAdjustmentInput, StockAdjustment};
use crate::store::InventoryStore;

/// Permission required to resolve adjustments.
const APPROVE_PERMISSION: &str = "inventory.approve";

/// The pending-adjustment queue.
#[derive(Debug, Default)]
pub struct AdjustmentQueue {
    adjustments: Vec<StockAdjustment>,
}

impl AdjustmentQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All adjustments, newest last.
    #[must_use]
    pub fn adjustments(&self) -> &[StockAdjustment] {
        &self.adjustments
    }

    /// Look up an adjustment by ID.
    #[must_use]
    pub fn find(&self, id: StockAdjustmentId) -> Option<&StockAdjustment> {
        self.adjustments.iter().find(|a| a.id == id)
    }

    /// Pending adjustments against one inventory item.
    #[must_use]
    pub fn pending_for(
        &self,
        item_id: jade_shopping_core::InventoryItemId,
    ) -> Vec<&StockAdjustment> {
        self.adjustments
            .iter()
            .filter(|a| a.item_id == item_id && a.status == AdjustmentStatus::Pending)
            .collect()
    }

    /// Submit an adjustment request.
    ///
    /// `quantity_before` and `quantity_after` are computed from the item's
    /// live stock at submission time, and the item's version is captured for
    /// the staleness check at approval.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a zero quantity, an empty
    /// reason, or a decrease below zero, and [`AppError::NotFound`] for an
    /// unknown item.
    #[instrument(skip(self, inventory, input), fields(item = %input.item_id))]
    pub fn submit<G>(
        &mut self,
        inventory: &InventoryStore<G>,
        input: CreateAdjustmentInput,
        requested_by: AdminUserId,
    ) -> Result<StockAdjustmentId, AppError> {
        if input.quantity == 0 && input.kind != AdjustmentKind::Correction {
            return Err(AppError::validation("adjustment quantity must be non-zero"));
        }
        if input.reason.trim().is_empty() {
            return Err(AppError::validation("adjustment reason is required"));
        }

        let item = inventory
            .find(input.item_id)
            .ok_or_else(|| AppError::NotFound(format!("inventory item {}", input.item_id)))?;

        let quantity_before = item.current_stock;
        let quantity_after = match input.kind {
            AdjustmentKind::Increase => quantity_before
                .checked_add(input.quantity)
                .ok_or_else(|| AppError::validation("adjustment overflows stock counter"))?,
            AdjustmentKind::Decrease => quantity_before
                .checked_sub(input.quantity)
                .ok_or_else(|| AppError::validation("adjustment would take stock below zero"))?,
            AdjustmentKind::Correction => input.quantity,
        };

        let adjustment = StockAdjustment {
            id: StockAdjustmentId::generate(),
            item_id: input.item_id,
            kind: input.kind,
            quantity: input.quantity,
            reason: input.reason,
            quantity_before,
            quantity_after,
            item_version: item.version,
            status: AdjustmentStatus::Pending,
            requested_by,
            resolved_by: None,
            resolved_at: None,
            created_at: Utc::now(),
        };
        let id = adjustment.id;
        info!(adjustment = %id, sku = %item.sku, before = quantity_before, after = quantity_after, "adjustment submitted");
        self.adjustments.push(adjustment);
        Ok(id)
    }

    /// Approve a pending adjustment and apply it to the inventory.
    ///
    /// Applies the stock write to exactly the adjusted item; no other
    /// record is touched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] when the approver lacks the approve
    /// permission, [`AppError::Conflict`] when the adjustment is already
    /// resolved or the item's stock changed since submission, and
    /// [`AppError::NotFound`] when the adjustment or item is unknown.
    #[instrument(skip(self, inventory, approver), fields(approver = %approver.username))]
    pub fn approve<G>(
        &mut self,
        inventory: &mut InventoryStore<G>,
        id: StockAdjustmentId,
        approver: &AdminUser,
    ) -> Result<(), AppError> {
        if !approver.has_permission(APPROVE_PERMISSION) {
            return Err(AppError::Forbidden(format!(
                "{} may not approve adjustments",
                approver.username
            )));
        }

        let (item_id, item_version, quantity_after, status) = self
            .adjustments
            .iter()
            .find(|a| a.id == id)
            .map(|a| (a.item_id, a.item_version, a.quantity_after, a.status))
            .ok_or_else(|| AppError::NotFound(format!("adjustment {id}")))?;

        if status != AdjustmentStatus::Pending {
            return Err(AppError::Conflict(format!(
                "adjustment is not pending (status: {status:?})"
            )));
        }

        // commit_stock re-checks the captured version; a mismatch means the
        // item was written since submission and the before/after quantities
        // no longer describe reality.
        inventory.commit_stock(item_id, item_version, quantity_after)?;

        let adjustment = self
            .adjustments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::Internal("adjustment vanished mid-approval".to_string()))?;
        adjustment.status = AdjustmentStatus::Approved;
        adjustment.resolved_by = Some(approver.id);
        adjustment.resolved_at = Some(Utc::now());
        info!(adjustment = %id, "adjustment approved");
        Ok(())
    }

    /// Reject a pending adjustment. The inventory is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] when the approver lacks the approve
    /// permission, [`AppError::Conflict`] when the adjustment is already
    /// resolved, and [`AppError::NotFound`] when it is unknown.
    #[instrument(skip(self, approver), fields(approver = %approver.username))]
    pub fn reject(&mut self, id: StockAdjustmentId, approver: &AdminUser) -> Result<(), AppError> {
        if !approver.has_permission(APPROVE_PERMISSION) {
            return Err(AppError::Forbidden(format!(
                "{} may not reject adjustments",
                approver.username
            )));
        }

        let adjustment = self
            .adjustments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::NotFound(format!("adjustment {id}")))?;

        if adjustment.status != AdjustmentStatus::Pending {
            return Err(AppError::Conflict(format!(
                "adjustment is not pending (status: {:?})",
                adjustment.status
            )));
        }

        adjustment.status = AdjustmentStatus::Rejected;
        adjustment.resolved_by = Some(approver.id);
        adjustment.resolved_at = Some(Utc::now());
        info!(adjustment = %id, "adjustment rejected");
        Ok(())
    }
}
