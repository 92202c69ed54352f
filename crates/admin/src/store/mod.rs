//! Per-domain state containers.
//!
//! The legacy admin held everything in one store object with hundreds of
//! fields. Here each domain gets its own container built on [`ListState`]:
//! the full unfiltered collection, the current filter, and a load flag. The
//! filtered, paginated view is recomputed on read, never cached.
//!
//! Containers are single-session values: they are plain owned data, not
//! shared globals, and no cross-session coordination is attempted.

pub mod admins;
pub mod audit;
pub mod categories;
pub mod content;
pub mod inventory;
pub mod orders;
pub mod payments;
pub mod roles;
pub mod shipments;

use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::query::page::paginate;
use crate::query::{Filter, Page, Paged};

pub use admins::AdminStore;
pub use audit::AuditStore;
pub use categories::CategoryStore;
pub use content::ContentStore;
pub use inventory::InventoryStore;
pub use orders::OrderStore;
pub use payments::PaymentStore;
pub use roles::RoleStore;
pub use shipments::ShipmentStore;

/// Load lifecycle of a list screen.
///
/// The legacy dispatchers could leave the loading flag stuck when a promise
/// rejected outside a try/catch. Containers here clear it on every outcome:
/// a fetch ends in `Loaded` or `Failed`, never a dangling `Loading`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "state", content = "message")]
pub enum LoadState {
    /// No fetch attempted yet.
    #[default]
    Idle,
    /// A fetch is in flight; screens render skeletons.
    Loading,
    /// The collection reflects the last successful fetch.
    Loaded,
    /// The last fetch failed; the collection keeps its prior shape.
    Failed(String),
}

impl LoadState {
    /// Whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// The generic list container: full collection plus filter plus load flag.
#[derive(Debug, Clone)]
pub struct ListState<T, F> {
    records: Vec<T>,
    filter: F,
    load: LoadState,
}

impl<T, F: Default> Default for ListState<T, F> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            filter: F::default(),
            load: LoadState::Idle,
        }
    }
}

impl<T, F> ListState<T, F> {
    /// Mark a fetch as started.
    pub fn begin_load(&mut self) {
        self.load = LoadState::Loading;
    }

    /// Replace the collection with a successful fetch result.
    pub fn complete(&mut self, records: Vec<T>) {
        self.records = records;
        self.load = LoadState::Loaded;
    }

    /// Record a failed fetch, leaving the collection in its prior shape.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.load = LoadState::Failed(message.into());
    }

    /// The full unfiltered collection.
    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Mutable access for in-place record edits.
    pub(crate) fn records_mut(&mut self) -> &mut Vec<T> {
        &mut self.records
    }

    /// Current load state.
    #[must_use]
    pub const fn load(&self) -> &LoadState {
        &self.load
    }

    /// Replace the active filter.
    pub fn set_filter(&mut self, filter: F) {
        self.filter = filter;
    }

    /// The active filter.
    #[must_use]
    pub const fn filter(&self) -> &F {
        &self.filter
    }
}

impl<T: Clone, F: Filter<T>> ListState<T, F> {
    /// Recompute the filtered, paginated view.
    ///
    /// Filtering preserves collection order; an out-of-range page yields an
    /// empty slice.
    #[must_use]
    pub fn view(&self, page: Page) -> ListView<T> {
        let filtered: Vec<T> = self
            .records
            .iter()
            .filter(|r| self.filter.matches(r))
            .cloned()
            .collect();
        ListView {
            page: paginate(&filtered, page),
            load: self.load.clone(),
        }
    }
}

/// What a list screen renders: one page of filtered records plus the load
/// flag that drives skeletons and error banners.
#[derive(Debug, Clone)]
pub struct ListView<T> {
    /// The requested page of the filtered collection.
    pub page: Paged<T>,
    /// Load state at the time of the read.
    pub load: LoadState,
}

/// Membership-toggling selection, used for bulk-action checkboxes and
/// favorites.
#[derive(Debug, Clone, Default)]
pub struct Selection<Id: Eq + Hash> {
    selected: HashSet<Id>,
}

impl<Id: Eq + Hash + Copy> Selection<Id> {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            selected: HashSet::new(),
        }
    }

    /// Toggle membership; returns whether the id is selected afterwards.
    ///
    /// Toggling twice restores the original membership.
    pub fn toggle(&mut self, id: Id) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    /// Whether the id is currently selected.
    #[must_use]
    pub fn contains(&self, id: Id) -> bool {
        self.selected.contains(&id)
    }

    /// Number of selected ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Iterate over selected ids.
    pub fn iter(&self) -> impl Iterator<Item = &Id> {
        self.selected.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::{AdminFilter, AdminUser};
    use crate::query::TextSearch;
    use jade_shopping_core::AdminUserId;

    fn sample() -> Vec<AdminUser> {
        crate::gateway::fixtures::sample_admins()
    }

    #[test]
    fn test_view_with_empty_filter_returns_all() {
        let mut state: ListState<AdminUser, AdminFilter> = ListState::default();
        state.complete(sample());

        let view = state.view(Page::first());
        assert_eq!(view.page.total, state.records().len());
        assert_eq!(view.load, LoadState::Loaded);
    }

    #[test]
    fn test_view_applies_filter_without_reordering() {
        let mut state: ListState<AdminUser, AdminFilter> = ListState::default();
        state.complete(sample());
        state.set_filter(AdminFilter {
            search: TextSearch::new("jadeshopping.example"),
            ..AdminFilter::default()
        });

        let view = state.view(Page::first());
        let usernames: Vec<&str> = view.page.items.iter().map(|a| a.username.as_str()).collect();
        let original: Vec<String> = state
            .records()
            .iter()
            .map(|a| a.username.clone())
            .collect();
        assert_eq!(usernames, original.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_failed_fetch_clears_loading_and_keeps_records() {
        let mut state: ListState<AdminUser, AdminFilter> = ListState::default();
        state.complete(sample());
        let before = state.records().len();

        state.begin_load();
        assert!(state.load().is_loading());

        state.fail("source unavailable");
        assert!(!state.load().is_loading());
        assert_eq!(state.records().len(), before);
    }

    #[test]
    fn test_selection_toggle_is_idempotent_in_pairs() {
        let mut selection: Selection<AdminUserId> = Selection::new();
        let id = AdminUserId::generate();

        assert!(selection.toggle(id));
        assert!(selection.contains(id));
        assert!(!selection.toggle(id));
        assert!(selection.is_empty());
    }
}
