//! Audit log records.
//!
//! Logs are append-only by API: the audit store exposes no update or delete
//! operations, which is as close to immutability as an in-memory collection
//! gets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use jade_shopping_core::{AdminUserId, AuditLogId, RiskLevel};

use crate::query::filter::matches_opt;
use crate::query::{DateRange, Filter, TextSearch};

/// One recorded admin operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLog {
    /// Unique log ID.
    pub id: AuditLogId,
    /// Action key (e.g. `"inventory.adjustment.approve"`).
    pub action: String,
    /// Admin who performed the action.
    pub actor: AdminUserId,
    /// Actor's username at the time of the action.
    pub actor_name: String,
    /// Kind of resource acted on (e.g. `"inventory_item"`).
    pub resource_type: String,
    /// Identifier of the resource acted on.
    pub resource_id: String,
    /// Risk classification.
    pub risk_level: RiskLevel,
    /// Free-form detail.
    pub detail: String,
    /// When the action happened.
    pub recorded_at: DateTime<Utc>,
}

/// Filter criteria for the audit log screen.
#[derive(Debug, Clone, Default)]
pub struct AuditFilter {
    /// Substring search over action, actor name, and detail.
    pub search: TextSearch,
    /// Filter by risk level.
    pub risk_level: Option<RiskLevel>,
    /// Only this risk level and above.
    pub min_risk_level: Option<RiskLevel>,
    /// Filter by actor.
    pub actor: Option<AdminUserId>,
    /// Filter by when the action happened.
    pub recorded: DateRange,
}

impl Filter<AuditLog> for AuditFilter {
    fn matches(&self, record: &AuditLog) -> bool {
        self.search.matches_any([
            record.action.as_str(),
            record.actor_name.as_str(),
            record.detail.as_str(),
        ]) && matches_opt(self.risk_level.as_ref(), &record.risk_level)
            && self
                .min_risk_level
                .is_none_or(|min| record.risk_level >= min)
            && self.actor.is_none_or(|a| a == record.actor)
            && self.recorded.contains(record.recorded_at)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn log(action: &str, risk: RiskLevel) -> AuditLog {
        AuditLog {
            id: AuditLogId::generate(),
            action: action.to_string(),
            actor: AdminUserId::generate(),
            actor_name: "li".to_string(),
            resource_type: "inventory_item".to_string(),
            resource_id: "sku-1".to_string(),
            risk_level: risk,
            detail: String::new(),
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn test_min_risk_level_filter() {
        let records = vec![
            log("inventory.view", RiskLevel::Low),
            log("inventory.adjustment.approve", RiskLevel::High),
            log("admin.delete", RiskLevel::Critical),
        ];
        let filter = AuditFilter {
            min_risk_level: Some(RiskLevel::High),
            ..AuditFilter::default()
        };
        assert_eq!(filter.apply(&records).len(), 2);
    }
}
