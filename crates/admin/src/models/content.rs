//! Content block records for the content management screen.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use jade_shopping_core::{ContentBlockId, ContentStatus};

use crate::query::filter::matches_opt;
use crate::query::{DateRange, Filter, TextSearch};

/// A piece of managed storefront content (banner, announcement, page).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBlock {
    /// Unique content ID.
    pub id: ContentBlockId,
    /// URL slug.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Body markup.
    pub body: String,
    /// Publication state.
    pub status: ContentStatus,
    /// Ordering position within its placement.
    pub position: u32,
    /// Optional publish window start.
    pub publish_from: Option<DateTime<Utc>>,
    /// Optional publish window end.
    pub publish_until: Option<DateTime<Utc>>,
    /// When the block was created.
    pub created_at: DateTime<Utc>,
    /// When the block was last updated.
    pub updated_at: DateTime<Utc>,
}

impl ContentBlock {
    /// Whether the block should be visible at the given instant: published
    /// and inside its publish window (open-ended when bounds are unset).
    #[must_use]
    pub fn is_live_at(&self, at: DateTime<Utc>) -> bool {
        self.status == ContentStatus::Published
            && self.publish_from.is_none_or(|from| at >= from)
            && self.publish_until.is_none_or(|until| at <= until)
    }
}

/// Filter criteria for the content list screen.
#[derive(Debug, Clone, Default)]
pub struct ContentFilter {
    /// Substring search over slug and title.
    pub search: TextSearch,
    /// Filter by publication state.
    pub status: Option<ContentStatus>,
    /// Filter by last update time.
    pub updated: DateRange,
}

impl Filter<ContentBlock> for ContentFilter {
    fn matches(&self, record: &ContentBlock) -> bool {
        self.search
            .matches_any([record.slug.as_str(), record.title.as_str()])
            && matches_opt(self.status.as_ref(), &record.status)
            && self.updated.contains(record.updated_at)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_publish_window() {
        let now = Utc::now();
        let block = ContentBlock {
            id: ContentBlockId::generate(),
            slug: "spring-sale".to_string(),
            title: "Spring Sale".to_string(),
            body: String::new(),
            status: ContentStatus::Published,
            position: 0,
            publish_from: Some(now - Duration::days(1)),
            publish_until: Some(now + Duration::days(1)),
            created_at: now,
            updated_at: now,
        };

        assert!(block.is_live_at(now));
        assert!(!block.is_live_at(now + Duration::days(2)));

        let draft = ContentBlock {
            status: ContentStatus::Draft,
            ..block
        };
        assert!(!draft.is_live_at(now));
    }
}
