//! Query expression evaluation for in-memory document filtering.
//!
//! This module provides the evaluation engine for filter expressions,
//! matching them directly against typed [`Document`] values.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use docshelf_core::{
    document::Document,
    error::{DocumentStoreError, DocumentStoreResult},
    query::{Expr, Field, FieldOp, QueryVisitor, Value},
};

/// Borrowed, comparable view of a document field or a filter operand.
///
/// Values of different kinds never compare equal and have no ordering.
#[derive(Debug)]
pub(crate) enum Comparable<'a> {
    /// A missing value (e.g. a document without an id)
    Null,
    Text(&'a str),
    Timestamp(DateTime<Utc>),
    List(Vec<Comparable<'a>>),
}

impl<'a> Comparable<'a> {
    fn of_field(document: &'a Document, field: Field) -> Self {
        match field {
            Field::Id => document
                .id()
                .map(Comparable::Text)
                .unwrap_or(Comparable::Null),
            Field::Title => Comparable::Text(&document.title),
            Field::Content => Comparable::Text(&document.content),
            Field::AuthorId => Comparable::Text(&document.author.id),
            Field::AuthorName => Comparable::Text(&document.author.name),
            Field::Created => Comparable::Timestamp(document.created),
        }
    }
}

impl<'a> From<&'a Value> for Comparable<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Text(value) => Comparable::Text(value),
            Value::Timestamp(value) => Comparable::Timestamp(*value),
            Value::List(values) => Comparable::List(
                values
                    .iter()
                    .map(Comparable::from)
                    .collect::<Vec<_>>()
            ),
        }
    }
}

impl<'a> PartialEq for Comparable<'a> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Comparable::Null, Comparable::Null) => true,
            (Comparable::Text(a), Comparable::Text(b)) => a == b,
            (Comparable::Timestamp(a), Comparable::Timestamp(b)) => a == b,
            (Comparable::List(a), Comparable::List(b)) => a == b,
            _ => false,
        }
    }
}

impl<'a> PartialOrd for Comparable<'a> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Comparable::Text(a), Comparable::Text(b)) => a.partial_cmp(b),
            (Comparable::Timestamp(a), Comparable::Timestamp(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

pub(crate) struct DocumentEvaluator<'a> {
    document: &'a Document,
}

impl<'a> DocumentEvaluator<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    pub fn evaluate(&mut self, expr: &Expr) -> DocumentStoreResult<bool> {
        self.visit_expr(expr)
    }

    /// Returns clones of the documents matching `expr`, keeping their order.
    pub fn filter_documents(
        documents: impl IntoIterator<Item = &'a Document>,
        expr: &Expr,
    ) -> DocumentStoreResult<Vec<Document>> {
        let mut matched = Vec::new();

        for document in documents {
            if DocumentEvaluator::new(document).evaluate(expr)? {
                matched.push(document.clone());
            }
        }

        Ok(matched)
    }
}

impl<'a> QueryVisitor for DocumentEvaluator<'a> {
    type Output = bool;
    type Error = DocumentStoreError;

    fn visit_and(&mut self, exprs: &[Expr]) -> Result<Self::Output, Self::Error> {
        for expr in exprs {
            if !self.visit_expr(expr)? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn visit_or(&mut self, exprs: &[Expr]) -> Result<Self::Output, Self::Error> {
        for expr in exprs {
            if self.visit_expr(expr)? {
                return Ok(true);
            }
        }

        Ok(false)
    }

    fn visit_not(&mut self, expr: &Expr) -> Result<Self::Output, Self::Error> {
        Ok(!self.visit_expr(expr)?)
    }

    fn visit_field(&mut self, field: Field, op: FieldOp, value: &Value) -> Result<Self::Output, Self::Error> {
        let left = Comparable::of_field(self.document, field);
        let right = Comparable::from(value);

        Ok(match op {
            FieldOp::Eq => left == right,
            FieldOp::Ne => left != right,
            FieldOp::Gt | FieldOp::Gte | FieldOp::Lt | FieldOp::Lte => {
                match left.partial_cmp(&right) {
                    Some(ordering) => match op {
                        FieldOp::Gt => ordering == Ordering::Greater,
                        FieldOp::Gte => ordering != Ordering::Less,
                        FieldOp::Lt => ordering == Ordering::Less,
                        FieldOp::Lte => ordering != Ordering::Greater,
                        _ => unreachable!(),
                    },
                    None => false,
                }
            },
            FieldOp::Contains => match (left, right) {
                (Comparable::Text(left), Comparable::Text(right)) => left.contains(right),
                _ => false,
            },
            FieldOp::StartsWith => match (left, right) {
                (Comparable::Text(left), Comparable::Text(right)) => left.starts_with(right),
                _ => false,
            },
            FieldOp::EndsWith => match (left, right) {
                (Comparable::Text(left), Comparable::Text(right)) => left.ends_with(right),
                _ => false,
            },
            FieldOp::AnyOf => match right {
                Comparable::List(values) => values
                    .iter()
                    .any(|candidate| candidate == &left),
                single_value => single_value == left,
            },
        })
    }
}
