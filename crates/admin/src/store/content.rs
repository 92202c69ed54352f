//! Content block state container.

use tracing::{info, instrument};

use jade_shopping_core::{ContentBlockId, ContentStatus};

use crate::error::AppError;
use crate::gateway::ContentSource;
use crate::models::{ContentBlock, ContentFilter};
use crate::query::Page;

use super::{ListState, ListView};

/// State container for the content screen.
pub struct ContentStore<G> {
    gateway: G,
    state: ListState<ContentBlock, ContentFilter>,
}

impl<G> ContentStore<G> {
    /// Create an empty store backed by the given source.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: ListState::default(),
        }
    }

    /// Replace the active filter.
    pub fn set_filter(&mut self, filter: ContentFilter) {
        self.state.set_filter(filter);
    }

    /// The filtered, paginated view for rendering.
    #[must_use]
    pub fn view(&self, page: Page) -> ListView<ContentBlock> {
        self.state.view(page)
    }

    /// Look up a block by ID.
    #[must_use]
    pub fn find(&self, id: ContentBlockId) -> Option<&ContentBlock> {
        self.state.records().iter().find(|b| b.id == id)
    }

    /// Move a block to a new publication state.
    ///
    /// Draft -> published -> archived, with republish allowed from archived.
    /// The only forbidden move is back to draft once published.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] for a forbidden transition and
    /// [`AppError::NotFound`] if the block is unknown.
    pub fn set_status(
        &mut self,
        id: ContentBlockId,
        status: ContentStatus,
    ) -> Result<(), AppError> {
        let block = self
            .state
            .records_mut()
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(format!("content block {id}")))?;

        if status == ContentStatus::Draft && block.status != ContentStatus::Draft {
            return Err(AppError::Conflict(
                "published content cannot return to draft".to_string(),
            ));
        }
        info!(slug = %block.slug, ?status, "content status changed");
        block.status = status;
        block.updated_at = chrono::Utc::now();
        Ok(())
    }
}

impl<G: ContentSource> ContentStore<G> {
    /// Fetch the content list from the source.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Gateway`] when the source fails.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<(), AppError> {
        self.state.begin_load();
        match self.gateway.fetch_content().await {
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
    async fn test_published_cannot_return_to_draft() {
        let mut store = ContentStore::new(Fixtures);
        store.refresh().await.unwrap();
        let published = store
            .view(Page::first())
            .page
            .items
            .iter()
            .find(|b| b.status == ContentStatus::Published)
            .unwrap()
            .id;

        let err = store.set_status(published, ContentStatus::Draft).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        store.set_status(published, ContentStatus::Archived).unwrap();
        store
            .set_status(published, ContentStatus::Published)
            .unwrap();
    }
}
