//! UPDATE ... SET builder for partial updates
//!
//! Call sites pass (column, present-value) pairs from a closed set of
//! `&'static str` column names; values are always bound. An update with no
//! present fields is a distinct outcome (`EmptyUpdate`), not a no-op.

use forum_core::error::DomainError;
use forum_core::value_objects::Id;
use sqlx::{Encode, Postgres, QueryBuilder, Type};

/// Incrementally assembled `UPDATE <table> SET ...` statement
pub struct UpdateBuilder<'args> {
    builder: QueryBuilder<'args, Postgres>,
    fields: usize,
}

impl<'args> UpdateBuilder<'args> {
    /// Start an update against a table. The table name is a compile-time
    /// constant at every call site.
    pub fn new(table: &'static str) -> Self {
        let mut builder = QueryBuilder::new("UPDATE ");
        builder.push(table);
        builder.push(" SET ");
        Self { builder, fields: 0 }
    }

    /// Add a column assignment with a bound value
    pub fn set<T>(&mut self, column: &'static str, value: T) -> &mut Self
    where
        T: 'args + Encode<'args, Postgres> + Type<Postgres> + Send,
    {
        if self.fields > 0 {
            self.builder.push(", ");
        }
        self.builder.push(column);
        self.builder.push(" = ");
        self.builder.push_bind(value);
        self.fields += 1;
        self
    }

    /// Add a column assignment when the value is present
    pub fn set_if<T>(&mut self, column: &'static str, value: Option<T>) -> &mut Self
    where
        T: 'args + Encode<'args, Postgres> + Type<Postgres> + Send,
    {
        if let Some(value) = value {
            self.set(column, value);
        }
        self
    }

    /// Number of assignments collected so far
    pub fn field_count(&self) -> usize {
        self.fields
    }

    /// Whether no field has been supplied
    pub fn is_empty(&self) -> bool {
        self.fields == 0
    }

    /// Close the statement with its row filter.
    ///
    /// # Errors
    /// `DomainError::EmptyUpdate` when no assignment was added.
    pub fn finish(mut self, id: Id) -> Result<QueryBuilder<'args, Postgres>, DomainError> {
        if self.is_empty() {
            return Err(DomainError::EmptyUpdate);
        }
        self.builder.push(" WHERE id = ");
        self.builder.push_bind(id.into_inner());
        Ok(self.builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_clause_list_in_order() {
        let mut builder = UpdateBuilder::new("posts");
        builder
            .set("title", "new title".to_string())
            .set("description", "new body".to_string())
            .set("is_edited", true);

        let query = builder.finish(Id::new(7)).unwrap();
        assert_eq!(
            query.into_sql(),
            "UPDATE posts SET title = $1, description = $2, is_edited = $3 WHERE id = $4"
        );
    }

    #[test]
    fn test_absent_fields_are_skipped() {
        let mut builder = UpdateBuilder::new("topics");
        builder
            .set_if("title", None::<String>)
            .set_if("description", Some("updated".to_string()));

        assert_eq!(builder.field_count(), 1);
        let query = builder.finish(Id::new(1)).unwrap();
        assert_eq!(
            query.into_sql(),
            "UPDATE topics SET description = $1 WHERE id = $2"
        );
    }

    #[test]
    fn test_empty_update_is_an_error() {
        let builder = UpdateBuilder::new("comments");
        let result = builder.finish(Id::new(1));
        assert!(matches!(result, Err(DomainError::EmptyUpdate)));
    }
}
