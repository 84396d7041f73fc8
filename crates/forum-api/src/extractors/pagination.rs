//! List and search query extractors
//!
//! Raw page/sort query parameters as they arrive on the wire. Sanitization
//! into a `PageRequest` happens per resource kind at the handler, because
//! the sort whitelist depends on what is being listed.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use forum_core::query::PageRequest;
use forum_core::SubjectKind;
use serde::Deserialize;

use crate::response::ApiError;

/// Raw list parameters (`?page=&limit=&sort_by=&order=`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
}

impl ListQuery {
    /// Sanitize into a page request for the given resource kind
    pub fn page_request(&self, kind: SubjectKind, searching: bool) -> PageRequest {
        PageRequest::sanitized(
            kind,
            searching,
            self.page.unwrap_or(1),
            self.limit.unwrap_or(PageRequest::DEFAULT_LIMIT),
            self.sort_by.as_deref(),
            self.order.as_deref(),
        )
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ListQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;
        Ok(params)
    }
}

/// Raw search parameters: list parameters plus the query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
}

impl SearchQuery {
    /// Sanitize into a page request for the given resource kind
    pub fn page_request(&self, kind: SubjectKind) -> PageRequest {
        PageRequest::sanitized(
            kind,
            true,
            self.page.unwrap_or(1),
            self.limit.unwrap_or(PageRequest::DEFAULT_LIMIT),
            self.sort_by.as_deref(),
            self.order.as_deref(),
        )
    }

    /// The raw search string (may be empty; the service rejects that)
    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SearchQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<SearchQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forum_core::query::{SortKey, SortOrder};

    #[test]
    fn test_defaults_when_absent() {
        let query = ListQuery::default();
        let page = query.page_request(SubjectKind::Topic, false);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, PageRequest::DEFAULT_LIMIT);
        assert_eq!(page.sort, SortKey::CreatedAt);
        assert_eq!(page.order, SortOrder::Desc);
    }

    #[test]
    fn test_search_widens_whitelist() {
        let query = SearchQuery {
            sort_by: Some("relevance".to_string()),
            q: Some("rust".to_string()),
            ..SearchQuery::default()
        };
        let page = query.page_request(SubjectKind::Post);
        assert_eq!(page.sort, SortKey::Relevance);
    }

    #[test]
    fn test_explicit_values_survive_sanitization() {
        let query = ListQuery {
            page: Some(2),
            limit: Some(25),
            sort_by: Some("likes".to_string()),
            order: Some("ASC".to_string()),
        };
        let page = query.page_request(SubjectKind::Post, false);
        assert_eq!(page.page, 2);
        assert_eq!(page.limit, 25);
        assert_eq!(page.sort, SortKey::Likes);
        assert_eq!(page.order, SortOrder::Asc);
    }
}
