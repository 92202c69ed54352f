//! Audit log state container.
//!
//! Append-only: there are no update or delete operations on this store.

use chrono::Utc;
use tracing::instrument;

use jade_shopping_core::{AuditLogId, RiskLevel};

use crate::error::AppError;
use crate::gateway::AuditSource;
use crate::models::{AdminUser, AuditFilter, AuditLog};
use crate::query::Page;

use super::{ListState, ListView};

/// State container for the audit log screen.
pub struct AuditStore<G> {
    gateway: G,
    state: ListState<AuditLog, AuditFilter>,
}

impl<G> AuditStore<G> {
    /// Create an empty store backed by the given source.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: ListState::default(),
        }
    }

    /// Replace the active filter.
    pub fn set_filter(&mut self, filter: AuditFilter) {
        self.state.set_filter(filter);
    }

    /// The filtered, paginated view for rendering.
    #[must_use]
    pub fn view(&self, page: Page) -> ListView<AuditLog> {
        self.state.view(page)
    }

    /// Append an entry for an action the given admin performed.
    pub fn record(
        &mut self,
        actor: &AdminUser,
        action: impl Into<String>,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
        risk_level: RiskLevel,
        detail: impl Into<String>,
    ) -> AuditLogId {
        let entry = AuditLog {
            id: AuditLogId::generate(),
            action: action.into(),
            actor: actor.id,
            actor_name: actor.username.clone(),
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
            risk_level,
            detail: detail.into(),
            recorded_at: Utc::now(),
        };
        let id = entry.id;
        self.state.records_mut().push(entry);
        id
    }
}

impl<G: AuditSource> AuditStore<G> {
    /// Fetch recorded history from the source.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Gateway`] when the source fails.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<(), AppError> {
        self.state.begin_load();
        match self.gateway.fetch_audit_logs().await {
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
    use crate::gateway::fixtures::{Fixtures, sample_admins};

    #[tokio::test]
    async fn test_record_appends_at_the_end() {
        let mut store = AuditStore::new(Fixtures);
        store.refresh().await.unwrap();
        let before = store.view(Page::first()).page.total;

        let actor = sample_admins().remove(0);
        let id = store.record(
            &actor,
            "inventory.adjustment.approve",
            "stock_adjustment",
            "adj-1",
            RiskLevel::High,
            "approved decrease of 10",
        );

        let view = store.view(Page::first());
        assert_eq!(view.page.total, before + 1);
        assert_eq!(view.page.items.last().unwrap().id, id);
    }
}
