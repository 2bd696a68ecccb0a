//! Query construction and filtering API for document stores.
//!
//! This module provides typed filter expressions over the fields of a
//! [`Document`](crate::document::Document) and a visitor pattern for evaluating
//! them in different backends.
//!
//! # Query Building
//!
//! ```ignore
//! use docshelf::query::{Field, Filter, Query};
//!
//! let query = Query::builder()
//!     .filter(
//!         Filter::starts_with(Field::Title, "Java")
//!             .and(Filter::any_of(Field::AuthorId, vec!["a1", "a2"])),
//!     )
//!     .build();
//! ```
//!
//! # Filter Expression API
//!
//! The [`Filter`] struct provides static constructors:
//!
//! - Comparison: `eq`, `ne`, `gt`, `gte`, `lt`, `lte`
//! - String: `starts_with`, `ends_with`, `contains`
//! - Membership: `any_of`
//! - Logical: `and`, `or`
//!
//! Expressions can be combined using the chainable [`Expr::and`], [`Expr::or`]
//! and [`Expr::not`] methods.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::DocumentStoreError;

/// A document field addressable from a filter expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Title,
    Content,
    AuthorId,
    AuthorName,
    Created,
}

impl Field {
    /// Returns the dotted path of this field as it appears in serialized documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Title => "title",
            Field::Content => "content",
            Field::AuthorId => "author.id",
            Field::AuthorName => "author.name",
            Field::Created => "created",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A literal operand of a field comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Timestamp(DateTime<Utc>),
    List(Vec<Value>),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Timestamp(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(
            values
                .into_iter()
                .map(Into::into)
                .collect()
        )
    }
}

/// Field comparison operators for filter expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOp {
    /// Equal to (exact match).
    Eq,
    /// Not equal to.
    Ne,
    /// Greater than.
    Gt,
    /// Greater than or equal to.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal to.
    Lte,
    /// String contains value as a substring.
    Contains,
    /// String starts with value (literal, case-sensitive).
    StartsWith,
    /// String ends with value.
    EndsWith,
    /// Field equals any of the values in a list.
    AnyOf,
}

/// A filter expression for querying documents.
///
/// Expressions can be combined using logical operators (`And`, `Or`, `Not`)
/// to build complex filter predicates. An empty `And` matches every document,
/// an empty `Or` matches none.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Logical AND of multiple expressions (all must match).
    And(Vec<Expr>),
    /// Logical OR of multiple expressions (any must match).
    Or(Vec<Expr>),
    /// Logical NOT of an expression (inverts the result).
    Not(Box<Expr>),
    /// Field comparison expression.
    Field {
        /// The field to compare.
        field: Field,
        /// The comparison operator.
        op: FieldOp,
        /// The value to compare against.
        value: Value,
    },
}

impl Expr {
    /// Creates a field comparison expression.
    pub fn field(field: Field, op: FieldOp, value: Value) -> Self {
        Expr::Field { field, op, value }
    }

    /// Combines this expression with another using logical AND.
    ///
    /// If this expression is already an AND, the other expression is appended
    /// to the list. Otherwise, a new AND expression is created.
    pub fn and(self, other: Expr) -> Self {
        match self {
            Expr::And(mut list) => {
                list.push(other);
                Expr::And(list)
            }
            _ => Expr::And(vec![self, other]),
        }
    }

    /// Combines this expression with another using logical OR.
    ///
    /// If this expression is already an OR, the other expression is appended
    /// to the list. Otherwise, a new OR expression is created.
    pub fn or(self, other: Expr) -> Self {
        match self {
            Expr::Or(mut list) => {
                list.push(other);
                Expr::Or(list)
            }
            _ => Expr::Or(vec![self, other]),
        }
    }

    /// Negates this expression (logical NOT).
    pub fn not(self) -> Self {
        Expr::Not(Box::new(self))
    }
}

/// A structured query for retrieving documents.
///
/// A query without a filter matches every document. Use [`QueryBuilder`] for
/// ergonomic construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    /// Optional filter expression to match documents.
    pub filter: Option<Expr>,
}

impl Query {
    /// Creates a new empty query that matches every document.
    pub fn new() -> Self {
        Query { filter: None }
    }

    /// Creates a new query builder for fluent construction.
    pub fn builder() -> QueryBuilder {
        QueryBuilder::new()
    }
}

/// Helper struct for constructing filter expressions.
///
/// All methods accept values as `Into<Value>` for ergonomics.
pub struct Filter;

impl Filter {
    /// Matches documents where the field equals the specified value.
    pub fn eq(field: Field, value: impl Into<Value>) -> Expr {
        Expr::field(field, FieldOp::Eq, value.into())
    }

    /// Matches documents where the field does not equal the specified value.
    pub fn ne(field: Field, value: impl Into<Value>) -> Expr {
        Expr::field(field, FieldOp::Ne, value.into())
    }

    pub fn gt(field: Field, value: impl Into<Value>) -> Expr {
        Expr::field(field, FieldOp::Gt, value.into())
    }

    pub fn gte(field: Field, value: impl Into<Value>) -> Expr {
        Expr::field(field, FieldOp::Gte, value.into())
    }

    pub fn lt(field: Field, value: impl Into<Value>) -> Expr {
        Expr::field(field, FieldOp::Lt, value.into())
    }

    pub fn lte(field: Field, value: impl Into<Value>) -> Expr {
        Expr::field(field, FieldOp::Lte, value.into())
    }

    /// Matches documents where the string field starts with the specified value.
    pub fn starts_with(field: Field, value: impl Into<Value>) -> Expr {
        Expr::field(field, FieldOp::StartsWith, value.into())
    }

    /// Matches documents where the string field ends with the specified value.
    pub fn ends_with(field: Field, value: impl Into<Value>) -> Expr {
        Expr::field(field, FieldOp::EndsWith, value.into())
    }

    /// Matches documents where the string field contains the specified value anywhere.
    pub fn contains(field: Field, value: impl Into<Value>) -> Expr {
        Expr::field(field, FieldOp::Contains, value.into())
    }

    /// Matches documents where the field equals one of the listed values.
    pub fn any_of(field: Field, values: impl Into<Value>) -> Expr {
        Expr::field(field, FieldOp::AnyOf, values.into())
    }

    /// Combines multiple expressions such that all must match.
    pub fn and(exprs: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::And(exprs.into_iter().collect())
    }

    /// Combines multiple expressions such that any can match.
    pub fn or(exprs: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::Or(exprs.into_iter().collect())
    }
}

#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    query: Query,
}

impl QueryBuilder {
    /// Creates a new query builder.
    pub fn new() -> Self {
        QueryBuilder { query: Query::default() }
    }

    /// Sets the filter expression for this query.
    pub fn filter(mut self, filter: Expr) -> Self {
        self.query.filter = Some(filter);
        self
    }

    /// Builds and returns the final query.
    pub fn build(self) -> Query {
        self.query
    }
}

/// Walks a filter expression tree.
///
/// Backends implement this to evaluate or translate expressions; the provided
/// [`visit_expr`](QueryVisitor::visit_expr) dispatches on the node kind.
pub trait QueryVisitor {
    type Output;
    type Error: Into<DocumentStoreError>;

    fn visit_and(&mut self, exprs: &[Expr]) -> Result<Self::Output, Self::Error>;
    fn visit_or(&mut self, exprs: &[Expr]) -> Result<Self::Output, Self::Error>;
    fn visit_not(&mut self, expr: &Expr) -> Result<Self::Output, Self::Error>;
    fn visit_field(
        &mut self,
        field: Field,
        op: FieldOp,
        value: &Value,
    ) -> Result<Self::Output, Self::Error>;

    fn visit_expr(&mut self, expr: &Expr) -> Result<Self::Output, Self::Error> {
        match expr {
            Expr::And(exprs) => self.visit_and(exprs),
            Expr::Or(exprs) => self.visit_or(exprs),
            Expr::Not(expr) => self.visit_not(expr),
            Expr::Field { field, op, value } => self.visit_field(*field, *op, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn chained_and_flattens_into_one_node() {
        let expr = Filter::starts_with(Field::Title, "Java")
            .and(Filter::eq(Field::AuthorId, "a1"))
            .and(Filter::ne(Field::Content, ""));

        match expr {
            Expr::And(list) => assert_eq!(list.len(), 3),
            other => panic!("expected And, got {other:?}"),
        }
    }

    #[test]
    fn chained_or_flattens_into_one_node() {
        let expr = Filter::eq(Field::Id, "x")
            .or(Filter::eq(Field::Id, "y"))
            .or(Filter::eq(Field::Id, "z"));

        assert_eq!(
            expr,
            Filter::or(vec![
                Filter::eq(Field::Id, "x"),
                Filter::eq(Field::Id, "y"),
                Filter::eq(Field::Id, "z"),
            ])
        );
    }

    #[test]
    fn list_values_convert_element_wise() {
        let value: Value = vec!["a1", "a2"].into();

        assert_eq!(
            value,
            Value::List(vec![Value::Text("a1".into()), Value::Text("a2".into())])
        );
    }

    #[test]
    fn builder_sets_filter() {
        let query = Query::builder()
            .filter(Filter::contains(Field::Content, "needle"))
            .build();

        assert_eq!(query.filter, Some(Filter::contains(Field::Content, "needle")));
        assert_eq!(Query::new().filter, None);
    }

    #[test]
    fn field_paths_follow_serialized_names() {
        assert_eq!(Field::AuthorId.to_string(), "author.id");
        assert_eq!(Field::Created.as_str(), "created");
    }
}
