//! Core types for document representation.
//!
//! A [`Document`] carries an optional identifier (absent until the store assigns one),
//! a title, content, an embedded [`Author`] and a creation timestamp. Both types are
//! plain serde values so an embedding service layer can expose them directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, from_value, to_value};

use crate::error::DocumentStoreResult;

/// The author of a document, embedded by value.
///
/// Neither field is validated; both may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Opaque author identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl Author {
    /// Creates a new author.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A document stored in a document store.
///
/// # Example
///
/// ```ignore
/// use docshelf::document::{Author, Document};
///
/// let document = Document::builder()
///     .title("Java Title")
///     .content("C1")
///     .author(Author::new("a1", "Alice"))
///     .build();
///
/// assert!(document.id().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unique key within a store. `None` or an empty string marks a new document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub author: Author,
    /// Set by the caller; a store never reassigns it once the id is stored.
    pub created: DateTime<Utc>,
}

impl Document {
    /// Creates a new builder for fluent construction.
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }

    /// Returns the identifier, treating an empty string as absent.
    pub fn id(&self) -> Option<&str> {
        self.id
            .as_deref()
            .filter(|id| !id.is_empty())
    }

    /// Copies the mutable fields of `incoming` onto this document.
    ///
    /// Only `title`, `content` and `author` are taken; `id` and `created` stay as stored.
    pub fn apply_update(&mut self, incoming: Document) {
        self.title = incoming.title;
        self.content = incoming.content;
        self.author = incoming.author;
    }

    /// Converts this document to a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> DocumentStoreResult<Value> {
        Ok(to_value(self)?)
    }

    /// Creates a document from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails or the structure is invalid.
    pub fn from_json(value: Value) -> DocumentStoreResult<Self> {
        Ok(from_value(value)?)
    }
}

/// Builder for constructing [`Document`] instances with a fluent API.
///
/// A document built without an explicit `created` timestamp is stamped with the
/// current time when [`build`](DocumentBuilder::build) is called.
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    id: Option<String>,
    title: String,
    content: String,
    author: Author,
    created: Option<DateTime<Utc>>,
}

impl DocumentBuilder {
    /// Creates a new document builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn author(mut self, author: Author) -> Self {
        self.author = author;
        self
    }

    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Builds and returns the final document.
    pub fn build(self) -> Document {
        Document {
            id: self.id,
            title: self.title,
            content: self.content,
            author: self.author,
            created: self
                .created
                .unwrap_or_else(Utc::now),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn sample(created: DateTime<Utc>) -> Document {
        Document::builder()
            .id("doc-1")
            .title("Title")
            .content("Content")
            .author(Author::new("a1", "John Doe"))
            .created(created)
            .build()
    }

    #[test]
    fn empty_id_is_treated_as_absent() {
        let document = Document::builder()
            .id("")
            .build();

        assert_eq!(document.id(), None);
        assert_eq!(sample(Utc::now()).id(), Some("doc-1"));
    }

    #[test]
    fn apply_update_keeps_identity_and_creation_time() {
        let created = Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .unwrap();
        let mut stored = sample(created);

        let incoming = Document::builder()
            .id("other")
            .title("New Title")
            .content("New Content")
            .author(Author::new("a2", "Bob"))
            .created(created + chrono::Duration::hours(5))
            .build();

        stored.apply_update(incoming);

        assert_eq!(stored.id(), Some("doc-1"));
        assert_eq!(stored.created, created);
        assert_eq!(stored.title, "New Title");
        assert_eq!(stored.content, "New Content");
        assert_eq!(stored.author, Author::new("a2", "Bob"));
    }

    #[test]
    fn json_uses_camel_case_and_omits_missing_id() {
        let created = Utc
            .with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
            .unwrap();
        let mut document = sample(created);
        document.id = None;

        let value = document
            .to_json()
            .unwrap();

        assert_eq!(
            value,
            json!({
                "title": "Title",
                "content": "Content",
                "author": { "id": "a1", "name": "John Doe" },
                "created": "2024-03-01T12:00:00Z",
            })
        );
        assert_eq!(Document::from_json(value).unwrap(), document);
    }

    #[test]
    fn from_json_rejects_malformed_documents() {
        let result = Document::from_json(json!({ "title": 42 }));

        assert!(matches!(
            result,
            Err(crate::error::DocumentStoreError::Serialization(_))
        ));
    }
}
