//! In-memory storage implementation for document stores.
//!
//! This module provides a simple in-memory backend that keeps documents in an
//! insertion-ordered map guarded by a read-write lock.

use std::sync::Arc;

use indexmap::{IndexMap, map::Entry};
use parking_lot::RwLock;
use tracing::{debug, instrument, trace};
use uuid::Uuid;

use docshelf_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    document::Document,
    error::DocumentStoreResult,
    query::Query,
};

use crate::evaluator::DocumentEvaluator;

type DocumentMap = IndexMap<String, Document>;

/// Produces identifiers for documents saved without one.
///
/// Every call must return a fresh identifier; a repeated value would turn an
/// insert into an update of the existing entry.
pub type IdGenerator = fn() -> String;

fn uuid_v4() -> String {
    Uuid::new_v4().to_string()
}

/// Thread-safe in-memory document storage backend.
///
/// Documents are kept in insertion order, so enumeration and search results are
/// stable and an update keeps a document in its original position.
///
/// # Thread Safety
///
/// `InMemoryStore` is cloneable and uses an `Arc`-wrapped internal state; clones
/// share the same documents. An upsert holds the write lock across lookup,
/// update and insert, so concurrent saves of one id never produce two entries
/// or overwrite the first `created` timestamp.
///
/// # Performance
///
/// Searches scan all documents (no indexing).
///
/// # Example
///
/// ```ignore
/// use docshelf_memory::InMemoryStore;
/// use docshelf_core::{backend::StoreBackend, document::Document};
///
/// let store = InMemoryStore::new();
/// let saved = store.upsert_document(Document::builder().title("Hello").build())?;
///
/// assert!(saved.id().is_some());
/// assert_eq!(store.count_documents()?, 1);
/// ```
#[derive(Clone, Debug)]
pub struct InMemoryStore {
    /// document_id -> document, in insertion order
    documents: Arc<RwLock<DocumentMap>>,
    id_generator: IdGenerator,
}

impl InMemoryStore {
    /// Creates a new empty in-memory document store generating UUID v4 identifiers.
    pub fn new() -> Self {
        Self {
            documents: Arc::new(RwLock::new(DocumentMap::new())),
            id_generator: uuid_v4,
        }
    }

    /// Creates a builder for constructing an `InMemoryStore` with custom options.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use docshelf_memory::InMemoryStore;
    /// use docshelf_core::backend::StoreBackendBuilder;
    ///
    /// let store = InMemoryStore::builder()
    ///     .with_capacity(1024)
    ///     .build()?;
    /// ```
    pub fn builder() -> InMemoryStoreBuilder {
        InMemoryStoreBuilder::default()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreBackend for InMemoryStore {
    #[instrument(skip_all)]
    fn upsert_document(&self, mut document: Document) -> DocumentStoreResult<Document> {
        let id = match document.id() {
            Some(id) => id.to_string(),
            None => {
                let id = (self.id_generator)();
                debug!(doc_id = %id, "Generated id for new document");
                document.id = Some(id.clone());
                id
            }
        };

        let mut documents = self.documents.write();

        let stored = match documents.entry(id) {
            Entry::Occupied(entry) => {
                let stored = entry.into_mut();
                stored.apply_update(document);
                debug!(doc_id = %stored.id().unwrap_or_default(), "Updated existing document");
                stored
            }
            Entry::Vacant(entry) => {
                debug!(doc_id = %entry.key(), "Inserted new document");
                entry.insert(document)
            }
        };

        Ok(stored.clone())
    }

    fn get_document(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        Ok(
            self.documents
                .read()
                .get(id)
                .cloned()
        )
    }

    fn list_documents(&self) -> DocumentStoreResult<Vec<Document>> {
        Ok(
            self.documents
                .read()
                .values()
                .cloned()
                .collect()
        )
    }

    fn query_documents(&self, query: &Query) -> DocumentStoreResult<Vec<Document>> {
        let documents = self.documents.read();

        match &query.filter {
            Some(filter) => {
                trace!(count = documents.len(), "Scanning documents");
                DocumentEvaluator::filter_documents(documents.values(), filter)
            }
            None => Ok(
                documents
                    .values()
                    .cloned()
                    .collect()
            ),
        }
    }

    fn count_documents(&self) -> DocumentStoreResult<usize> {
        Ok(self.documents.read().len())
    }
}

/// Builder for constructing [`InMemoryStore`] instances.
///
/// # Example
///
/// ```ignore
/// use docshelf_memory::InMemoryStore;
/// use docshelf_core::backend::StoreBackendBuilder;
///
/// fn sequential_id() -> String {
///     static NEXT: AtomicUsize = AtomicUsize::new(0);
///     format!("doc-{}", NEXT.fetch_add(1, Ordering::Relaxed))
/// }
///
/// let store = InMemoryStore::builder()
///     .with_id_generator(sequential_id)
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStoreBuilder {
    capacity: usize,
    id_generator: Option<IdGenerator>,
}

impl InMemoryStoreBuilder {
    /// Pre-allocates room for `capacity` documents.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Replaces the default UUID v4 identifier generation.
    pub fn with_id_generator(mut self, id_generator: IdGenerator) -> Self {
        self.id_generator = Some(id_generator);
        self
    }
}

impl StoreBackendBuilder for InMemoryStoreBuilder {
    type Backend = InMemoryStore;

    /// Builds and returns a new [`InMemoryStore`] instance.
    ///
    /// This always succeeds and returns a freshly initialized store.
    fn build(self) -> DocumentStoreResult<Self::Backend> {
        Ok(InMemoryStore {
            documents: Arc::new(RwLock::new(DocumentMap::with_capacity(self.capacity))),
            id_generator: self
                .id_generator
                .unwrap_or(uuid_v4),
        })
    }
}
