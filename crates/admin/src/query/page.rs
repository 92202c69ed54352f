//! Pagination over filtered collections.

use serde::{Deserialize, Serialize};

/// A 1-based page request.
///
/// The fields are private and every construction path, deserialization
/// included, goes through [`Page::new`], so a `Page` never carries a zero
/// number or size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPage")]
pub struct Page {
    number: usize,
    size: usize,
}

/// Wire shape for [`Page`] before clamping.
#[derive(Debug, Clone, Copy, Deserialize)]
struct RawPage {
    number: usize,
    size: usize,
}

impl From<RawPage> for Page {
    fn from(raw: RawPage) -> Self {
        Self::new(raw.number, raw.size)
    }
}

impl Page {
    /// Default page size used by the list screens.
    pub const DEFAULT_SIZE: usize = 20;

    /// Create a page request. A zero page number is treated as page 1 and a
    /// zero size as the default size, so malformed query params degrade to
    /// the first page rather than an error.
    #[must_use]
    pub fn new(number: usize, size: usize) -> Self {
        Self {
            number: number.max(1),
            size: if size == 0 { Self::DEFAULT_SIZE } else { size },
        }
    }

    /// The first page at the default size.
    #[must_use]
    pub fn first() -> Self {
        Self::new(1, Self::DEFAULT_SIZE)
    }

    /// 1-based page number.
    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    /// Records per page.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Index of the first record on this page.
    #[must_use]
    pub const fn offset(&self) -> usize {
        (self.number - 1) * self.size
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::first()
    }
}

/// One page of a filtered collection, with enough metadata to render
/// pagination controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paged<T> {
    /// Records on this page, in collection order.
    pub items: Vec<T>,
    /// The page that was requested.
    pub page: Page,
    /// Total records across all pages (after filtering).
    pub total: usize,
    /// Total number of pages; zero when the collection is empty.
    pub total_pages: usize,
}

impl<T> Paged<T> {
    /// Whether a later page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page.number < self.total_pages
    }

    /// Whether an earlier page exists.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.page.number > 1
    }
}

/// Slice a collection into the requested page.
///
/// Pages past the end yield an empty slice without error; the legacy list
/// dispatchers behaved the same way and left clamping to the screens.
pub fn paginate<T: Clone>(records: &[T], page: Page) -> Paged<T> {
    let total = records.len();
    let total_pages = total.div_ceil(page.size);
    let items = records
        .iter()
        .skip(page.offset())
        .take(page.size)
        .cloned()
        .collect();

    Paged {
        items,
        page,
        total,
        total_pages,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_last_page_is_short() {
        let records = numbers(45);
        let paged = paginate(&records, Page::new(3, 20));
        assert_eq!(paged.items.len(), 5);
        assert_eq!(paged.total_pages, 3);
        assert!(!paged.has_next());
        assert!(paged.has_prev());
    }

    #[test]
    fn test_pages_partition_without_overlap_or_gap() {
        let records = numbers(47);
        let size = 10;
        let total_pages = records.len().div_ceil(size);

        let mut seen = Vec::new();
        for n in 1..=total_pages {
            let paged = paginate(&records, Page::new(n, size));
            let expected_len = size.min(records.len() - (n - 1) * size);
            assert_eq!(paged.items.len(), expected_len);
            seen.extend(paged.items);
        }
        assert_eq!(seen, records);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let records = numbers(5);
        let paged = paginate(&records, Page::new(4, 20));
        assert!(paged.items.is_empty());
        assert_eq!(paged.total, 5);
        assert_eq!(paged.total_pages, 1);
    }

    #[test]
    fn test_empty_collection() {
        let records: Vec<usize> = vec![];
        let paged = paginate(&records, Page::first());
        assert!(paged.items.is_empty());
        assert_eq!(paged.total_pages, 0);
        assert!(!paged.has_next());
    }

    #[test]
    fn test_zero_inputs_degrade_to_first_page() {
        let page = Page::new(0, 0);
        assert_eq!(page.number(), 1);
        assert_eq!(page.size(), Page::DEFAULT_SIZE);
    }

    #[test]
    fn test_deserialized_zero_size_cannot_panic_pagination() {
        let page: Page = serde_json::from_str(r#"{"number":1,"size":0}"#).unwrap();
        assert_eq!(page.size(), Page::DEFAULT_SIZE);

        let paged = paginate(&numbers(3), page);
        assert_eq!(paged.total_pages, 1);
        assert_eq!(paged.items.len(), 3);
    }

    #[test]
    fn test_deserialized_zero_number_cannot_underflow_offset() {
        let page: Page = serde_json::from_str(r#"{"number":0,"size":10}"#).unwrap();
        assert_eq!(page.number(), 1);
        assert_eq!(page.offset(), 0);
    }
}
