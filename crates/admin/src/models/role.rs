//! Role records for the roles list screen.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use jade_shopping_core::RoleId;

use crate::query::{Filter, TextSearch};

/// A named permission bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    /// Unique role ID.
    pub id: RoleId,
    /// Role name (e.g. "Warehouse Lead").
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Permission keys granted by this role.
    pub permissions: Vec<String>,
    /// Denormalized count of admins holding the role.
    pub member_count: u32,
    /// Builtin roles cannot be deleted.
    pub builtin: bool,
    /// When the role was created.
    pub created_at: DateTime<Utc>,
    /// When the role was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Filter criteria for the roles list screen.
#[derive(Debug, Clone, Default)]
pub struct RoleFilter {
    /// Substring search over name and description.
    pub search: TextSearch,
    /// Only roles granting this permission key.
    pub grants: Option<String>,
}

impl Filter<Role> for RoleFilter {
    fn matches(&self, record: &Role) -> bool {
        self.search
            .matches_any([record.name.as_str(), record.description.as_str()])
            && self
                .grants
                .as_ref()
                .is_none_or(|key| record.permissions.iter().any(|p| p == key))
    }
}
