//! ORDER BY rendering - the one trusted sort translation
//!
//! Column and direction names cannot be bound as parameters, so this is the
//! single point where the sanitized sort vocabulary becomes SQL text.

use forum_core::query::{PageRequest, SortKey, SortOrder};
use sqlx::{Postgres, QueryBuilder};

/// Render the ORDER BY fragment for a sanitized page request.
///
/// Search statements expose a `query` tsquery alias; only there does
/// `Relevance` render as a rank expression. Outside a search it degrades to
/// the default column (sanitization upstream already rules this out).
pub fn order_clause(sort: SortKey, order: SortOrder, searching: bool) -> String {
    let key = match sort {
        SortKey::CreatedAt => "created_at",
        SortKey::Likes => "likes",
        SortKey::Views => "views",
        SortKey::Popularity => "popularity",
        SortKey::Relevance if searching => "ts_rank(document, query)",
        SortKey::Relevance => "created_at",
    };

    format!(" ORDER BY {key} {}", order.as_str())
}

/// Append the ORDER BY / LIMIT / OFFSET tail shared by every list query.
/// Limit and offset are bound, never concatenated.
pub fn push_page_bounds(
    builder: &mut QueryBuilder<'_, Postgres>,
    page: &PageRequest,
    searching: bool,
) {
    builder.push(order_clause(page.sort, page.order, searching));
    builder.push(" LIMIT ");
    builder.push_bind(page.limit);
    builder.push(" OFFSET ");
    builder.push_bind(page.offset());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_sort_rendering() {
        assert_eq!(
            order_clause(SortKey::CreatedAt, SortOrder::Desc, false),
            " ORDER BY created_at DESC"
        );
        assert_eq!(
            order_clause(SortKey::Likes, SortOrder::Asc, false),
            " ORDER BY likes ASC"
        );
    }

    #[test]
    fn test_relevance_renders_rank_only_when_searching() {
        assert_eq!(
            order_clause(SortKey::Relevance, SortOrder::Desc, true),
            " ORDER BY ts_rank(document, query) DESC"
        );
        assert_eq!(
            order_clause(SortKey::Relevance, SortOrder::Desc, false),
            " ORDER BY created_at DESC"
        );
    }

    #[test]
    fn test_page_bounds_are_bound_parameters() {
        let page = PageRequest::default();
        let mut builder = QueryBuilder::new("SELECT id FROM topics");
        push_page_bounds(&mut builder, &page, false);
        assert_eq!(
            builder.into_sql(),
            "SELECT id FROM topics ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
    }
}
