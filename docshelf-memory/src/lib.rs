//! In-memory document storage backend for docshelf.
//!
//! This crate provides a thread-safe, in-memory implementation of the `StoreBackend` trait.
//! It is the backend an embedding application uses when documents live for the lifetime
//! of the process, and the natural choice for tests: every store is an independent value.
//!
//! # Features
//!
//! - **Upsert semantics** - Generated ids for new documents, immutable creation timestamps
//! - **Insertion-ordered enumeration** - Stable result order for listing and searching
//! - **Full filter support** - Every `Expr` node is evaluated against typed documents
//! - **Configurable** - Capacity hints and a pluggable id generator via the builder
//!
//! # Quick Start
//!
//! ```ignore
//! use docshelf::{prelude::*, memory::InMemoryStore};
//!
//! let store = DocumentStore::new(InMemoryStore::builder().build()?);
//!
//! let saved = store.save(
//!     Document::builder()
//!         .title("Java Title")
//!         .content("C1")
//!         .author(Author::new("a1", "Alice"))
//!         .build(),
//! )?;
//!
//! assert_eq!(store.find_by_id(saved.id().unwrap())?, Some(saved));
//! ```

#[allow(unused_extern_crates)]
extern crate self as docshelf_memory;

pub mod evaluator;
pub mod store;

pub use store::{IdGenerator, InMemoryStore, InMemoryStoreBuilder};
