//! Role state container.

use tracing::instrument;

use jade_shopping_core::RoleId;

use crate::error::AppError;
use crate::gateway::RoleSource;
use crate::models::{Role, RoleFilter};
use crate::query::Page;

use super::{ListState, ListView};

/// State container for the roles screen.
pub struct RoleStore<G> {
    gateway: G,
    state: ListState<Role, RoleFilter>,
}

impl<G> RoleStore<G> {
    /// Create an empty store backed by the given source.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: ListState::default(),
        }
    }

    /// Replace the active filter.
    pub fn set_filter(&mut self, filter: RoleFilter) {
        self.state.set_filter(filter);
    }

    /// The filtered, paginated view for rendering.
    #[must_use]
    pub fn view(&self, page: Page) -> ListView<Role> {
        self.state.view(page)
    }

    /// Look up a role by ID.
    #[must_use]
    pub fn find(&self, id: RoleId) -> Option<&Role> {
        self.state.records().iter().find(|r| r.id == id)
    }

    /// Remove a role.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] for builtin roles and
    /// [`AppError::NotFound`] if the role is unknown.
    pub fn delete(&mut self, id: RoleId) -> Result<(), AppError> {
        let Some(role) = self.find(id) else {
            return Err(AppError::NotFound(format!("role {id}")));
        };
        if role.builtin {
            return Err(AppError::Forbidden(format!(
                "builtin role {} cannot be deleted",
                role.name
            )));
        }
        self.state.records_mut().retain(|r| r.id != id);
        Ok(())
    }
}

impl<G: RoleSource> RoleStore<G> {
    /// Fetch the role list from the source.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Gateway`] when the source fails.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<(), AppError> {
        self.state.begin_load();
        match self.gateway.fetch_roles().await {
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

    #[tokio::test]
    async fn test_builtin_roles_cannot_be_deleted() {
        let mut store = RoleStore::new(Fixtures);
        store.refresh().await.unwrap();
        let builtin = store
            .view(Page::first())
            .page
            .items
            .iter()
            .find(|r| r.builtin)
            .unwrap()
            .id;
        assert!(matches!(
            store.delete(builtin).unwrap_err(),
            AppError::Forbidden(_)
        ));
    }
}
