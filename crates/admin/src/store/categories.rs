//! Category state container.

use chrono::Utc;
use tracing::{info, instrument};

use jade_shopping_core::CategoryId;

use crate::error::AppError;
use crate::gateway::CategorySource;
use crate::models::{Category, CategoryFilter, CreateCategoryInput, UpdateCategoryInput};
use crate::query::Page;

use super::{ListState, ListView};

/// State container for the category screen.
pub struct CategoryStore<G> {
    gateway: G,
    state: ListState<Category, CategoryFilter>,
}

impl<G> CategoryStore<G> {
    /// Create an empty store backed by the given source.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: ListState::default(),
        }
    }

    /// Replace the active filter.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.state.set_filter(filter);
    }

    /// The filtered, paginated view for rendering.
    #[must_use]
    pub fn view(&self, page: Page) -> ListView<Category> {
        self.state.view(page)
    }

    /// Look up a category by ID.
    #[must_use]
    pub fn find(&self, id: CategoryId) -> Option<&Category> {
        self.state.records().iter().find(|c| c.id == id)
    }

    /// Create a category.
    ///
    /// The node's level is derived from its parent; a missing parent is a
    /// validation failure rather than a dangling tree edge.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty name or unknown parent.
    pub fn create(&mut self, input: CreateCategoryInput) -> Result<CategoryId, AppError> {
        if input.name.trim().is_empty() {
            return Err(AppError::validation("category name is required"));
        }
        let level = match input.parent_id {
            None => 1,
            Some(parent_id) => {
                let parent = self
                    .find(parent_id)
                    .ok_or_else(|| AppError::validation("parent category does not exist"))?;
                parent.level + 1
            }
        };

        let now = Utc::now();
        let category = Category {
            id: CategoryId::generate(),
            name: input.name,
            parent_id: input.parent_id,
            level,
            sort_order: input.sort_order,
            is_active: true,
            seo_title: input.seo_title,
            seo_keywords: input.seo_keywords,
            product_count: 0,
            total_sales: jade_shopping_core::Price::zero(jade_shopping_core::CurrencyCode::USD),
            created_at: now,
            updated_at: now,
        };
        let id = category.id;
        info!(category = %id, name = %category.name, "category created");
        self.state.records_mut().push(category);
        Ok(id)
    }

    /// Apply a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category is unknown.
    pub fn update(&mut self, id: CategoryId, input: UpdateCategoryInput) -> Result<(), AppError> {
        let category = self
            .state
            .records_mut()
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("category {id}")))?;

        if let Some(name) = input.name {
            category.name = name;
        }
        if let Some(sort_order) = input.sort_order {
            category.sort_order = sort_order;
        }
        if let Some(seo_title) = input.seo_title {
            category.seo_title = Some(seo_title);
        }
        if let Some(seo_keywords) = input.seo_keywords {
            category.seo_keywords = seo_keywords;
        }
        category.updated_at = Utc::now();
        Ok(())
    }

    /// Flip the activation flag; returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category is unknown.
    pub fn toggle_active(&mut self, id: CategoryId) -> Result<bool, AppError> {
        let category = self
            .state
            .records_mut()
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("category {id}")))?;
        category.is_active = !category.is_active;
        category.updated_at = Utc::now();
        Ok(category.is_active)
    }

    /// Remove a category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the node still has children, and
    /// [`AppError::NotFound`] if it is unknown.
    pub fn delete(&mut self, id: CategoryId) -> Result<(), AppError> {
        if self
            .state
            .records()
            .iter()
            .any(|c| c.parent_id == Some(id))
        {
            return Err(AppError::Conflict(
                "category still has child categories".to_string(),
            ));
        }
        let records = self.state.records_mut();
        let before = records.len();
        records.retain(|c| c.id != id);
        if records.len() == before {
            return Err(AppError::NotFound(format!("category {id}")));
        }
        Ok(())
    }
}

impl<G: CategorySource> CategoryStore<G> {
    /// Fetch the category list from the source.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Gateway`] when the source fails.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<(), AppError> {
        self.state.begin_load();
        match self.gateway.fetch_categories().await {
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
    async fn test_create_under_parent_derives_level() {
        let mut store = CategoryStore::new(Fixtures);
        store.refresh().await.unwrap();

        let parent = store.view(Page::first()).page.items[0].clone();
        let id = store
            .create(CreateCategoryInput {
                name: "Limited Editions".to_string(),
                parent_id: Some(parent.id),
                sort_order: 9,
                seo_title: None,
                seo_keywords: vec![],
            })
            .unwrap();
        assert_eq!(store.find(id).unwrap().level, parent.level + 1);
    }

    #[tokio::test]
    async fn test_delete_with_children_conflicts() {
        let mut store = CategoryStore::new(Fixtures);
        store.refresh().await.unwrap();

        // Fixture "Tea" has children.
        let parent_id = store
            .view(Page::first())
            .page
            .items
            .iter()
            .find(|c| c.name == "Tea")
            .unwrap()
            .id;
        let err = store.delete(parent_id).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_toggle_active_twice_restores_state() {
        let mut store = CategoryStore::new(Fixtures);
        store.refresh().await.unwrap();
        let id = store.view(Page::first()).page.items[0].id;
        let original = store.find(id).unwrap().is_active;

        store.toggle_active(id).unwrap();
        store.toggle_active(id).unwrap();
        assert_eq!(store.find(id).unwrap().is_active, original);
    }
}
