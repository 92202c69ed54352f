//! Admin account state container.

use chrono::Utc;
use tracing::{info, instrument};

use jade_shopping_core::AdminUserId;

use crate::error::AppError;
use crate::gateway::{AdminDirectory, DirectoryStats};
use crate::models::{AdminFilter, AdminUser, CreateAdminInput, UpdateAdminInput};
use crate::query::Page;

use super::{ListState, ListView, Selection};

/// State container for the admin accounts screen.
pub struct AdminStore<G> {
    gateway: G,
    state: ListState<AdminUser, AdminFilter>,
    selection: Selection<AdminUserId>,
    stats: Option<DirectoryStats>,
    tags: Vec<String>,
}

impl<G> AdminStore<G> {
    /// Create an empty store backed by the given directory.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: ListState::default(),
            selection: Selection::new(),
            stats: None,
            tags: Vec::new(),
        }
    }

    /// Replace the active filter.
    pub fn set_filter(&mut self, filter: AdminFilter) {
        self.state.set_filter(filter);
    }

    /// The filtered, paginated view for rendering.
    #[must_use]
    pub fn view(&self, page: Page) -> ListView<AdminUser> {
        self.state.view(page)
    }

    /// Look up an account by ID.
    #[must_use]
    pub fn find(&self, id: AdminUserId) -> Option<&AdminUser> {
        self.state.records().iter().find(|a| a.id == id)
    }

    /// Look up an account by username across the whole collection.
    ///
    /// Ignores the screen filter: authentication must see every account,
    /// not just the ones the list is currently showing.
    #[must_use]
    pub fn find_by_username(&self, username: &str) -> Option<&AdminUser> {
        self.state.records().iter().find(|a| a.username == username)
    }

    /// Directory stats from the last successful stats fetch.
    #[must_use]
    pub const fn stats(&self) -> Option<&DirectoryStats> {
        self.stats.as_ref()
    }

    /// Tag vocabulary from the last successful tags fetch.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Toggle an account's bulk-selection checkbox.
    pub fn toggle_selected(&mut self, id: AdminUserId) -> bool {
        self.selection.toggle(id)
    }

    /// Current bulk selection.
    #[must_use]
    pub const fn selection(&self) -> &Selection<AdminUserId> {
        &self.selection
    }

    /// Bump login counters after a successful authentication.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the account is unknown.
    pub fn record_login(&mut self, id: AdminUserId) -> Result<(), AppError> {
        let account = self
            .state
            .records_mut()
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::NotFound(format!("admin {id}")))?;
        account.login_count += 1;
        account.last_login_at = Some(Utc::now());
        Ok(())
    }

    /// Create an account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty username or full name,
    /// or [`AppError::Conflict`] for a duplicate username.
    pub fn create(&mut self, input: CreateAdminInput) -> Result<AdminUserId, AppError> {
        if input.username.trim().is_empty() {
            return Err(AppError::validation("username is required"));
        }
        if input.full_name.trim().is_empty() {
            return Err(AppError::validation("full name is required"));
        }
        if self
            .state
            .records()
            .iter()
            .any(|a| a.username == input.username)
        {
            return Err(AppError::Conflict(format!(
                "username {} is taken",
                input.username
            )));
        }

        let now = Utc::now();
        let account = AdminUser {
            id: AdminUserId::generate(),
            username: input.username,
            email: input.email,
            full_name: input.full_name,
            role: input.role,
            status: jade_shopping_core::AdminStatus::Active,
            permissions: input.permissions,
            login_count: 0,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        };
        let id = account.id;
        info!(admin = %id, username = %account.username, "admin account created");
        self.state.records_mut().push(account);
        Ok(id)
    }

    /// Apply a partial update to an account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the account is unknown.
    pub fn update(&mut self, id: AdminUserId, input: UpdateAdminInput) -> Result<(), AppError> {
        let account = self
            .state
            .records_mut()
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::NotFound(format!("admin {id}")))?;

        if let Some(full_name) = input.full_name {
            account.full_name = full_name;
        }
        if let Some(role) = input.role {
            account.role = role;
        }
        if let Some(status) = input.status {
            account.status = status;
        }
        if let Some(permissions) = input.permissions {
            account.permissions = permissions;
        }
        account.updated_at = Utc::now();
        Ok(())
    }

    /// Remove an account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the account is unknown.
    pub fn delete(&mut self, id: AdminUserId) -> Result<(), AppError> {
        let records = self.state.records_mut();
        let before = records.len();
        records.retain(|a| a.id != id);
        if records.len() == before {
            return Err(AppError::NotFound(format!("admin {id}")));
        }
        info!(admin = %id, "admin account deleted");
        Ok(())
    }
}

impl<G: AdminDirectory> AdminStore<G> {
    /// Fetch the account list from the directory.
    ///
    /// The load flag is cleared on both outcomes; a failed fetch keeps the
    /// prior collection and records the error in the list state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Gateway`] when the directory fails.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<(), AppError> {
        self.state.begin_load();
        match self.gateway.fetch_admins().await {
            Ok(records) => {
                info!(count = records.len(), "admin list refreshed");
                self.state.complete(records);
                Ok(())
            }
            Err(e) => {
                self.state.fail(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Fetch directory stats.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Gateway`] when the directory fails.
    pub async fn refresh_stats(&mut self) -> Result<(), AppError> {
        self.stats = Some(self.gateway.fetch_stats().await?);
        Ok(())
    }

    /// Fetch the tag vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Gateway`] when the directory fails.
    pub async fn refresh_tags(&mut self) -> Result<(), AppError> {
        self.tags = self.gateway.fetch_tags().await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::gateway::fixtures::{Fixtures, Unavailable};
    use crate::store::LoadState;
    use jade_shopping_core::{AdminRole, Email};

    fn create_input(username: &str) -> CreateAdminInput {
        CreateAdminInput {
            username: username.to_string(),
            email: Email::parse(&format!("{username}@jadeshopping.example")).unwrap(),
            full_name: username.to_string(),
            role: AdminRole::Operator,
            permissions: vec!["inventory.view".to_string()],
        }
    }

    #[tokio::test]
    async fn test_refresh_replaces_collection() {
        let mut store = AdminStore::new(Fixtures);
        store.refresh().await.unwrap();
        assert_eq!(store.view(Page::first()).page.total, 4);
        assert_eq!(store.view(Page::first()).load, LoadState::Loaded);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_prior_collection() {
        let mut store = AdminStore::new(Fixtures);
        store.refresh().await.unwrap();
        let before = store.view(Page::first()).page.total;

        // Swap in a failing gateway by rebuilding the store state by hand.
        let mut failing = AdminStore::new(Unavailable);
        failing.state = store.state.clone();
        assert!(failing.refresh().await.is_err());

        let view = failing.view(Page::first());
        assert_eq!(view.page.total, before);
        assert!(matches!(view.load, LoadState::Failed(_)));
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_username() {
        let mut store = AdminStore::new(Fixtures);
        store.refresh().await.unwrap();

        store.create(create_input("new.admin")).unwrap();
        let err = store.create(create_input("new.admin")).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_unknown_admin_is_not_found() {
        let mut store = AdminStore::new(Fixtures);
        store.refresh().await.unwrap();
        let err = store
            .update(AdminUserId::generate(), UpdateAdminInput::default())
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_find_by_username_sees_filtered_out_accounts() {
        use crate::query::TextSearch;

        let mut store = AdminStore::new(Fixtures);
        store.refresh().await.unwrap();
        store.set_filter(AdminFilter {
            search: TextSearch::new("audit.bot"),
            ..AdminFilter::default()
        });

        assert_eq!(store.view(Page::first()).page.total, 1);
        assert!(store.find_by_username("mei.lin").is_some());
        assert!(store.find_by_username("no.such.admin").is_none());
    }

    #[tokio::test]
    async fn test_record_login_bumps_counter() {
        let mut store = AdminStore::new(Fixtures);
        store.refresh().await.unwrap();
        let id = store.view(Page::first()).page.items[0].id;
        let before = store.find(id).unwrap().login_count;

        store.record_login(id).unwrap();
        assert_eq!(store.find(id).unwrap().login_count, before + 1);
    }
}
