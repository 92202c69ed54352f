//! Category domain types.
//!
//! Categories form a tree through embedded parent IDs only; nothing enforces
//! referential integrity, matching the flat-record data model of the rest of
//! the admin.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use jade_shopping_core::{CategoryId, Price};

use crate::query::{Filter, TextSearch};

/// A category node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique category ID.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Parent category; `None` for top-level nodes.
    pub parent_id: Option<CategoryId>,
    /// Depth in the tree, 1 for top-level.
    pub level: u8,
    /// Position among siblings.
    pub sort_order: u32,
    /// Whether the category is shown in the storefront.
    pub is_active: bool,
    /// SEO page title.
    pub seo_title: Option<String>,
    /// SEO keyword list.
    pub seo_keywords: Vec<String>,
    /// Denormalized product count.
    pub product_count: u32,
    /// Denormalized lifetime sales.
    pub total_sales: Price,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
    /// When the category was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategoryInput {
    /// Display name.
    pub name: String,
    /// Parent category, if nesting.
    pub parent_id: Option<CategoryId>,
    /// Position among siblings.
    pub sort_order: u32,
    /// SEO page title.
    pub seo_title: Option<String>,
    /// SEO keyword list.
    pub seo_keywords: Vec<String>,
}

/// Input for updating a category; unset fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCategoryInput {
    /// New display name.
    pub name: Option<String>,
    /// New sibling position.
    pub sort_order: Option<u32>,
    /// New SEO page title.
    pub seo_title: Option<String>,
    /// New SEO keyword list.
    pub seo_keywords: Option<Vec<String>>,
}

/// Filter criteria for the category list screen.
#[derive(Debug, Clone, Default)]
pub struct CategoryFilter {
    /// Substring search over the category name.
    pub search: TextSearch,
    /// Filter by activation state.
    pub is_active: Option<bool>,
    /// Only direct children of this category.
    pub parent_id: Option<CategoryId>,
    /// Only nodes at this depth.
    pub level: Option<u8>,
}

impl Filter<Category> for CategoryFilter {
    fn matches(&self, record: &Category) -> bool {
        self.search.matches_any([record.name.as_str()])
            && self.is_active.is_none_or(|a| a == record.is_active)
            && self
                .parent_id
                .is_none_or(|p| record.parent_id == Some(p))
            && self.level.is_none_or(|l| l == record.level)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use jade_shopping_core::CurrencyCode;

    fn category(name: &str, parent: Option<CategoryId>, active: bool) -> Category {
        let now = Utc::now();
        Category {
            id: CategoryId::generate(),
            name: name.to_string(),
            parent_id: parent,
            level: if parent.is_some() { 2 } else { 1 },
            sort_order: 0,
            is_active: active,
            seo_title: None,
            seo_keywords: vec![],
            product_count: 0,
            total_sales: Price::zero(CurrencyCode::USD),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_children_of_parent() {
        let root = category("Apparel", None, true);
        let child_a = category("Shoes", Some(root.id), true);
        let child_b = category("Hats", Some(root.id), false);
        let stranger = category("Garden", None, true);

        let records = vec![root.clone(), child_a, child_b, stranger];
        let filter = CategoryFilter {
            parent_id: Some(root.id),
            ..CategoryFilter::default()
        };
        assert_eq!(filter.apply(&records).len(), 2);

        let filter = CategoryFilter {
            parent_id: Some(root.id),
            is_active: Some(true),
            ..CategoryFilter::default()
        };
        let matched = filter.apply(&records);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Shoes");
    }
}
