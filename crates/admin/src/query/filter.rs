//! Filter predicates for list screens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A filter that selects a subset of records.
///
/// Implementations must compose their predicates with logical AND and treat
/// unset predicates as always-true, so that the default (empty) filter
/// matches every record.
pub trait Filter<T> {
    /// Whether the record satisfies every set predicate.
    fn matches(&self, record: &T) -> bool;

    /// Apply the filter to a collection, preserving its order.
    fn apply<'a>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Case-insensitive substring search.
///
/// Each list screen matches the query against a fixed set of fields
/// (name, username, email, SKU, depending on the domain); a record matches
/// if any field contains the query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextSearch(String);

impl TextSearch {
    /// Create a search term. Whitespace is trimmed; an all-whitespace term
    /// is the empty (always-true) search.
    #[must_use]
    pub fn new(query: impl AsRef<str>) -> Self {
        Self(query.as_ref().trim().to_lowercase())
    }

    /// Whether no term is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any of the given fields contains the term.
    ///
    /// An empty search matches everything.
    #[must_use]
    pub fn matches_any<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        if self.0.is_empty() {
            return true;
        }
        fields
            .into_iter()
            .any(|f| f.to_lowercase().contains(&self.0))
    }
}

/// An inclusive timestamp range with optional bounds.
///
/// The legacy screens disagreed on whether date filters had an upper bound;
/// this port supports both bounds everywhere (see DESIGN.md).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Inclusive lower bound.
    pub from: Option<DateTime<Utc>>,
    /// Inclusive upper bound.
    pub to: Option<DateTime<Utc>>,
}

impl DateRange {
    /// Range bounded below only.
    #[must_use]
    pub const fn since(from: DateTime<Utc>) -> Self {
        Self {
            from: Some(from),
            to: None,
        }
    }

    /// Range bounded on both ends.
    #[must_use]
    pub const fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Whether no bound is set.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Whether the timestamp falls inside the range.
    #[must_use]
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        if let Some(from) = self.from {
            if at < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if at > to {
                return false;
            }
        }
        true
    }
}

/// Helper for optional enum-equality predicates: `None` matches everything.
pub(crate) fn matches_opt<T: PartialEq>(wanted: Option<&T>, actual: &T) -> bool {
    wanted.is_none_or(|w| w == actual)
}
