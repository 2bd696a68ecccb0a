//! Main docshelf crate providing an embeddable in-memory document repository.
//!
//! This crate is the primary entry point for users of docshelf. It re-exports the core
//! types from `docshelf-core` and the in-memory backend from `docshelf-memory`.
//!
//! # Features
//!
//! - **Upsert** - Ids are generated for new documents; updates touch only title, content
//!   and author, never the creation timestamp
//! - **Point lookup** - `find_by_id` returns `None` for unknown ids
//! - **Multi-criteria search** - Title prefixes, content prefixes, author ids and an
//!   inclusive creation range, combined with logical AND
//! - **Custom filters** - Arbitrary filter expressions through `DocumentStore::query`
//!
//! # Quick Start
//!
//! ```ignore
//! use docshelf::{prelude::*, memory::InMemoryStore};
//!
//! let store = DocumentStore::new(InMemoryStore::new());
//!
//! for (title, author) in [("Java Title", "a1"), ("Py Title", "a2")] {
//!     store.save(
//!         Document::builder()
//!             .title(title)
//!             .content("C1")
//!             .author(Author::new(author, ""))
//!             .build(),
//!     )?;
//! }
//!
//! let results = store.search(Some(
//!     &SearchRequest::builder()
//!         .title_prefixes(["Java"])
//!         .build(),
//! ))?;
//!
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].title, "Java Title");
//! ```
//!
//! # Dynamic Dispatch
//!
//! A typed `DocumentStore` can be converted into a [`DynDocumentStore`](store::DynDocumentStore)
//! with `into_dyn` when the backend is chosen at runtime.
//!
//! # Backends
//!
//! - [`memory`] - In-memory storage

pub mod prelude;

pub use docshelf_core::{backend, document, error, query, request, store};

// Re-export chrono so callers can build timestamps without a separate dependency
pub use chrono;

/// In-memory storage backend implementations.
pub mod memory {
    pub use docshelf_memory::{IdGenerator, InMemoryStore, InMemoryStoreBuilder};
}
