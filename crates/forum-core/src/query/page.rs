//! Pagination - sanitized page requests and the page envelope

use serde::Serialize;

use crate::value_objects::SubjectKind;

use super::{SortKey, SortOrder};

/// A fully sanitized read request: every field is already inside its
/// whitelist or window, so downstream rendering never re-validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
    pub sort: SortKey,
    pub order: SortOrder,
}

impl PageRequest {
    /// Default and minimum page size
    pub const DEFAULT_LIMIT: i64 = 10;
    /// Exclusive upper bound on page size
    pub const LIMIT_CEILING: i64 = 100;

    /// Sanitize raw request values for the given resource kind.
    ///
    /// Out-of-whitelist sort keys and orders fall back to `created_at DESC`;
    /// limits outside `[10, 100)` fall back to the default; non-positive
    /// pages become page 1. Reads stay permissive: nothing here rejects.
    pub fn sanitized(
        kind: SubjectKind,
        searching: bool,
        page: i64,
        limit: i64,
        sort_by: Option<&str>,
        order: Option<&str>,
    ) -> Self {
        let sort = sort_by
            .and_then(SortKey::parse)
            .filter(|key| key.allowed_for(kind, searching))
            .unwrap_or_default();

        let order = order.and_then(SortOrder::parse).unwrap_or_default();

        let page = if page <= 0 { 1 } else { page };
        let limit = if (Self::DEFAULT_LIMIT..Self::LIMIT_CEILING).contains(&limit) {
            limit
        } else {
            Self::DEFAULT_LIMIT
        };

        Self { page, limit, sort, order }
    }

    /// Row offset for the current page
    #[inline]
    pub const fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: Self::DEFAULT_LIMIT,
            sort: SortKey::default(),
            order: SortOrder::default(),
        }
    }
}

/// The read outcome envelope. Empty result sets serialize as an explicit
/// empty `items` array, never as null.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub count: i64,
    pub page: i64,
    pub limit: i64,
    pub sort_by: &'static str,
    pub order: &'static str,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Wrap a result set in the envelope describing how it was shaped
    pub fn new(items: Vec<T>, request: &PageRequest) -> Self {
        Self {
            count: items.len() as i64,
            page: request.page,
            limit: request.limit,
            sort_by: request.sort.as_str(),
            order: request.order.as_str(),
            items,
        }
    }

    /// Map the items while keeping the envelope
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            count: self.count,
            page: self.page,
            limit: self.limit,
            sort_by: self.sort_by,
            order: self.order,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_sort_key_falls_back() {
        let req = PageRequest::sanitized(
            SubjectKind::Post,
            false,
            1,
            10,
            Some("id; DROP TABLE posts;--"),
            Some("DESC"),
        );
        assert_eq!(req.sort, SortKey::CreatedAt);
        assert_eq!(req.order, SortOrder::Desc);
    }

    #[test]
    fn test_relevance_degrades_without_search() {
        let req =
            PageRequest::sanitized(SubjectKind::Post, false, 1, 10, Some("relevance"), None);
        assert_eq!(req.sort, SortKey::CreatedAt);

        let req = PageRequest::sanitized(SubjectKind::Post, true, 1, 10, Some("relevance"), None);
        assert_eq!(req.sort, SortKey::Relevance);
    }

    #[test]
    fn test_limit_window() {
        let inside = PageRequest::sanitized(SubjectKind::Topic, false, 1, 50, None, None);
        assert_eq!(inside.limit, 50);

        let below = PageRequest::sanitized(SubjectKind::Topic, false, 1, 3, None, None);
        assert_eq!(below.limit, PageRequest::DEFAULT_LIMIT);

        let above = PageRequest::sanitized(SubjectKind::Topic, false, 1, 100, None, None);
        assert_eq!(above.limit, PageRequest::DEFAULT_LIMIT);
    }

    #[test]
    fn test_page_floor_and_offset() {
        let req = PageRequest::sanitized(SubjectKind::Topic, false, -3, 10, None, None);
        assert_eq!(req.page, 1);
        assert_eq!(req.offset(), 0);

        let req = PageRequest::sanitized(SubjectKind::Topic, false, 4, 25, None, None);
        assert_eq!(req.offset(), 75);
    }

    #[test]
    fn test_empty_page_serializes_items_array() {
        let page: Page<i64> = Page::new(Vec::new(), &PageRequest::default());
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["count"], 0);
        assert!(json["items"].is_array());
        assert_eq!(json["items"].as_array().unwrap().len(), 0);
    }
}
