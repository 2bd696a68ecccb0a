//! Multi-criteria search requests.
//!
//! A [`SearchRequest`] holds up to five independent constraints. Each one is vacuously
//! satisfied when its field is `None` or an empty list; the active ones are combined
//! with logical AND by [`SearchRequest::to_filter`].
//!
//! Note that `contains_contents` matches by *prefix*, exactly like `title_prefixes`,
//! despite its name. Callers that want substring matching can build their own
//! expression with [`Filter::contains`] and run it through
//! [`DocumentStore::query`](crate::store::DocumentStore::query).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::query::{Expr, Field, Filter, Query};

/// Search criteria for documents. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Matches when any entry is a literal prefix of the document title.
    #[serde(default)]
    pub title_prefixes: Option<Vec<String>>,
    /// Matches when any entry is a literal prefix of the document content.
    #[serde(default)]
    pub contains_contents: Option<Vec<String>>,
    /// Matches when the document's author id is one of these.
    #[serde(default)]
    pub author_ids: Option<Vec<String>>,
    /// Inclusive lower bound on `created`.
    #[serde(default)]
    pub created_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `created`.
    #[serde(default)]
    pub created_to: Option<DateTime<Utc>>,
}

impl SearchRequest {
    /// Creates a new builder for fluent construction.
    pub fn builder() -> SearchRequestBuilder {
        SearchRequestBuilder::default()
    }

    /// Compiles the active criteria into a filter expression.
    ///
    /// Returns `None` when no criterion constrains the result, in which case every
    /// document matches.
    pub fn to_filter(&self) -> Option<Expr> {
        let mut predicates = Vec::new();

        if let Some(prefixes) = non_empty(&self.title_prefixes) {
            predicates.push(Filter::or(
                prefixes
                    .iter()
                    .map(|prefix| Filter::starts_with(Field::Title, prefix))
            ));
        }

        if let Some(prefixes) = non_empty(&self.contains_contents) {
            predicates.push(Filter::or(
                prefixes
                    .iter()
                    .map(|prefix| Filter::starts_with(Field::Content, prefix))
            ));
        }

        if let Some(author_ids) = non_empty(&self.author_ids) {
            predicates.push(Filter::any_of(Field::AuthorId, author_ids.to_vec()));
        }

        if let Some(from) = self.created_from {
            predicates.push(Filter::gte(Field::Created, from));
        }

        if let Some(to) = self.created_to {
            predicates.push(Filter::lte(Field::Created, to));
        }

        match predicates.len() {
            0 => None,
            1 => predicates.pop(),
            _ => Some(Filter::and(predicates)),
        }
    }

    /// Converts this request into a [`Query`].
    pub fn to_query(&self) -> Query {
        Query {
            filter: self.to_filter(),
        }
    }
}

impl From<&SearchRequest> for Query {
    fn from(request: &SearchRequest) -> Self {
        request.to_query()
    }
}

fn non_empty(list: &Option<Vec<String>>) -> Option<&[String]> {
    list.as_deref()
        .filter(|list| !list.is_empty())
}

/// Builder for constructing [`SearchRequest`] instances.
#[derive(Debug, Clone, Default)]
pub struct SearchRequestBuilder {
    request: SearchRequest,
}

impl SearchRequestBuilder {
    pub fn title_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.title_prefixes = Some(prefixes.into_iter().map(Into::into).collect());
        self
    }

    pub fn contains_contents<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.contains_contents = Some(prefixes.into_iter().map(Into::into).collect());
        self
    }

    pub fn author_ids<I, S>(mut self, author_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.author_ids = Some(author_ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn created_from(mut self, from: DateTime<Utc>) -> Self {
        self.request.created_from = Some(from);
        self
    }

    pub fn created_to(mut self, to: DateTime<Utc>) -> Self {
        self.request.created_to = Some(to);
        self
    }

    /// Builds and returns the final request.
    pub fn build(self) -> SearchRequest {
        self.request
    }
}
