//! Admin user domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use jade_shopping_core::{AdminRole, AdminStatus, AdminUserId, Email};

use crate::query::filter::matches_opt;
use crate::query::{DateRange, Filter, TextSearch};

/// An admin account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    /// Unique admin user ID.
    pub id: AdminUserId,
    /// Login name.
    pub username: String,
    /// Admin's email address.
    pub email: Email,
    /// Display name.
    pub full_name: String,
    /// Admin's role/permission level.
    pub role: AdminRole,
    /// Account status.
    pub status: AdminStatus,
    /// Granted permission keys (e.g. `"users.edit"`, `"inventory.approve"`).
    pub permissions: Vec<String>,
    /// Number of successful logins.
    pub login_count: u64,
    /// Most recent successful login.
    pub last_login_at: Option<DateTime<Utc>>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl AdminUser {
    /// Whether this account bypasses permission checks entirely.
    #[must_use]
    pub fn is_super_admin(&self) -> bool {
        self.role == AdminRole::SuperAdmin
    }

    /// Whether the account holds the given permission key.
    ///
    /// Super admins implicitly hold every permission.
    #[must_use]
    pub fn has_permission(&self, key: &str) -> bool {
        self.is_super_admin() || self.permissions.iter().any(|p| p == key)
    }
}

/// Input for creating an admin account.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAdminInput {
    /// Login name.
    pub username: String,
    /// Email address (validated before the record is fabricated).
    pub email: Email,
    /// Display name.
    pub full_name: String,
    /// Role to assign.
    pub role: AdminRole,
    /// Permission keys to grant.
    pub permissions: Vec<String>,
}

/// Input for updating an admin account; unset fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAdminInput {
    /// New display name.
    pub full_name: Option<String>,
    /// New role.
    pub role: Option<AdminRole>,
    /// New account status.
    pub status: Option<AdminStatus>,
    /// Replacement permission list.
    pub permissions: Option<Vec<String>>,
}

/// Filter criteria for the admin list screen.
///
/// Text search matches username, email, and full name.
#[derive(Debug, Clone, Default)]
pub struct AdminFilter {
    /// Substring search over identity fields.
    pub search: TextSearch,
    /// Filter by role.
    pub role: Option<AdminRole>,
    /// Filter by account status.
    pub status: Option<AdminStatus>,
    /// Filter by creation time.
    pub created: DateRange,
}

impl Filter<AdminUser> for AdminFilter {
    fn matches(&self, record: &AdminUser) -> bool {
        self.search.matches_any([
            record.username.as_str(),
            record.email.as_str(),
            record.full_name.as_str(),
        ]) && matches_opt(self.role.as_ref(), &record.role)
            && matches_opt(self.status.as_ref(), &record.status)
            && self.created.contains(record.created_at)
    }
}
