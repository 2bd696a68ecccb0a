//! Storage backend abstraction for the document store.
//!
//! This module defines the traits that abstract over storage implementations,
//! allowing the [`DocumentStore`](crate::store::DocumentStore) facade to work with
//! different backends.
//!
//! # Overview
//!
//! The [`StoreBackend`] trait provides a synchronous interface for upserting, fetching,
//! enumerating and querying documents. Implementations are required to be `Send + Sync`;
//! how they guard their state is implementation-specific and should be documented by
//! the implementer. The trait is object safe, so `Box<dyn StoreBackend>` can stand in
//! wherever the concrete backend type is chosen at runtime.
//!
//! # Traits
//!
//! - [`StoreBackend`]: The core trait for storage backends
//! - [`StoreBackendBuilder`]: Factory trait for creating backend instances

use std::fmt::Debug;

use crate::{document::Document, error::DocumentStoreResult, query::Query};

/// Abstract interface for document storage backends.
///
/// # Upsert contract
///
/// [`upsert_document`](StoreBackend::upsert_document) must:
///
/// 1. assign a fresh unique identifier when the incoming id is absent or empty;
/// 2. when an entry with that id exists, replace only `title`, `content` and `author`
///    (see [`Document::apply_update`]), keeping the stored `id` and `created`;
/// 3. otherwise insert the incoming document as is;
/// 4. return a copy of the stored entry.
///
/// # Ordering
///
/// [`list_documents`](StoreBackend::list_documents) and
/// [`query_documents`](StoreBackend::query_documents) return documents in the backend's
/// enumeration order, which must be stable between calls that do not insert.
pub trait StoreBackend: Send + Sync + Debug {
    /// Inserts a new document or updates the mutable fields of an existing one.
    fn upsert_document(&self, document: Document) -> DocumentStoreResult<Document>;

    /// Retrieves a document by id. A missing id yields `Ok(None)`.
    fn get_document(&self, id: &str) -> DocumentStoreResult<Option<Document>>;

    /// Returns every stored document in enumeration order.
    fn list_documents(&self) -> DocumentStoreResult<Vec<Document>>;

    /// Returns the stored documents matching the query's filter, in enumeration order.
    ///
    /// A query without a filter returns every document.
    fn query_documents(&self, query: &Query) -> DocumentStoreResult<Vec<Document>>;

    /// Returns the number of stored documents.
    fn count_documents(&self) -> DocumentStoreResult<usize>;
}

impl<B> StoreBackend for &B
where
    B: StoreBackend + ?Sized,
{
    fn upsert_document(&self, document: Document) -> DocumentStoreResult<Document> {
        (**self).upsert_document(document)
    }

    fn get_document(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        (**self).get_document(id)
    }

    fn list_documents(&self) -> DocumentStoreResult<Vec<Document>> {
        (**self).list_documents()
    }

    fn query_documents(&self, query: &Query) -> DocumentStoreResult<Vec<Document>> {
        (**self).query_documents(query)
    }

    fn count_documents(&self) -> DocumentStoreResult<usize> {
        (**self).count_documents()
    }
}

impl<B> StoreBackend for Box<B>
where
    B: StoreBackend + ?Sized,
{
    fn upsert_document(&self, document: Document) -> DocumentStoreResult<Document> {
        (**self).upsert_document(document)
    }

    fn get_document(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        (**self).get_document(id)
    }

    fn list_documents(&self) -> DocumentStoreResult<Vec<Document>> {
        (**self).list_documents()
    }

    fn query_documents(&self, query: &Query) -> DocumentStoreResult<Vec<Document>> {
        (**self).query_documents(query)
    }

    fn count_documents(&self) -> DocumentStoreResult<usize> {
        (**self).count_documents()
    }
}

/// Factory trait for creating backend instances.
pub trait StoreBackendBuilder {
    type Backend: StoreBackend;

    /// Builds the configured backend.
    fn build(self) -> DocumentStoreResult<Self::Backend>;
}
