//! Main document store interface for interacting with document backends.
//!
//! This module provides the primary API for working with document stores:
//!
//! - [`DocumentStore`] - Typed store for working with a specific backend implementation
//! - [`DynDocumentStore`] - Dynamic dispatch store for runtime backend selection
//!
//! # Example
//!
//! ```ignore
//! use docshelf::prelude::*;
//! use docshelf::memory::InMemoryStore;
//!
//! let store = DocumentStore::new(InMemoryStore::new());
//!
//! let saved = store.save(
//!     Document::builder()
//!         .title("Java Title")
//!         .content("C1")
//!         .author(Author::new("a1", "Alice"))
//!         .build(),
//! )?;
//!
//! let found = store.find_by_id(saved.id().unwrap())?;
//! assert_eq!(found, Some(saved));
//!
//! let java = store.search(Some(
//!     &SearchRequest::builder()
//!         .title_prefixes(["Java"])
//!         .build(),
//! ))?;
//! assert_eq!(java.len(), 1);
//! ```

use tracing::{debug, instrument, trace};

use crate::{
    backend::StoreBackend,
    document::Document,
    error::{DocumentStoreError, DocumentStoreResult},
    query::Query,
    request::SearchRequest,
};

/// A strongly-typed document store bound to a specific backend implementation.
///
/// # Type Parameters
///
/// * `B` - The backend implementation type
#[derive(Debug)]
pub struct DocumentStore<B: StoreBackend> {
    backend: B,
}

/// A document store whose backend type is erased.
pub type DynDocumentStore = DocumentStore<Box<dyn StoreBackend>>;

impl<B: StoreBackend> DocumentStore<B> {
    /// Creates a new document store with the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Returns a reference to the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Upserts a document and returns the stored entry.
    ///
    /// A document without an id (or with an empty one) is inserted under a freshly
    /// generated id. A document whose id is already stored updates that entry's
    /// `title`, `content` and `author`; its `created` timestamp never changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails, or if it hands back an entry without an id.
    #[instrument(skip_all, fields(doc_id = document.id().unwrap_or_default()))]
    pub fn save(&self, document: Document) -> DocumentStoreResult<Document> {
        let saved = self.backend.upsert_document(document)?;

        if saved.id().is_none() {
            return Err(DocumentStoreError::InvalidDocument(
                "backend returned a document without an id".to_string(),
            ));
        }

        debug!(doc_id = saved.id().unwrap_or_default(), "Saved document");
        Ok(saved)
    }

    /// Looks up a document by id.
    ///
    /// Returns `Ok(None)` when no document with the given id is stored.
    #[instrument(skip(self))]
    pub fn find_by_id(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        let document = self.backend.get_document(id)?;

        debug!(found = document.is_some(), "Looked up document");
        Ok(document)
    }

    /// Returns the stored documents matching every criterion of the request.
    ///
    /// `None` returns every stored document. Results keep the backend's enumeration
    /// order. See [`SearchRequest`] for the matching rules of each criterion.
    #[instrument(skip_all)]
    pub fn search(&self, request: Option<&SearchRequest>) -> DocumentStoreResult<Vec<Document>> {
        let documents = match request {
            Some(request) => {
                let query = request.to_query();
                trace!(filter = ?query.filter, "Compiled search request");
                self.backend.query_documents(&query)?
            }
            None => self.backend.list_documents()?,
        };

        debug!(matched = documents.len(), "Search finished");
        Ok(documents)
    }

    /// Runs an arbitrary filter query against the store.
    #[instrument(skip_all)]
    pub fn query(&self, query: Query) -> DocumentStoreResult<Vec<Document>> {
        let documents = self.backend.query_documents(&query)?;

        debug!(matched = documents.len(), "Query finished");
        Ok(documents)
    }

    /// Returns every stored document in enumeration order.
    pub fn documents(&self) -> DocumentStoreResult<Vec<Document>> {
        self.backend.list_documents()
    }

    /// Returns the number of stored documents.
    pub fn len(&self) -> DocumentStoreResult<usize> {
        self.backend.count_documents()
    }

    /// Returns `true` when the store holds no documents.
    pub fn is_empty(&self) -> DocumentStoreResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Returns `true` when a document with the given id is stored.
    pub fn contains(&self, id: &str) -> DocumentStoreResult<bool> {
        Ok(self.backend.get_document(id)?.is_some())
    }
}

impl<B: StoreBackend + 'static> DocumentStore<B> {
    /// Erases the backend type, e.g. to select a backend at runtime.
    pub fn into_dyn(self) -> DynDocumentStore {
        DocumentStore::new(Box::new(self.backend) as Box<dyn StoreBackend>)
    }
}
