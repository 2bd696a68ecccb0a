//! Core types and traits for an embeddable in-memory document repository.
//!
//! This crate is the core of the docshelf project and provides:
//!
//! - **Documents** ([`document`]) - The `Document` and `Author` value types
//! - **Search requests** ([`request`]) - Optional multi-criteria search constraints
//! - **Query and filtering API** ([`query`]) - Filter expressions and the visitor used to evaluate them
//! - **Store backend abstraction** ([`backend`]) - Traits for implementing storage backends
//! - **Document store** ([`store`]) - Upsert, lookup and search over any backend
//! - **Error handling** ([`error`]) - Error and result types
//!
//! # Example
//!
//! ```ignore
//! use docshelf::prelude::*;
//! use docshelf::memory::InMemoryStore;
//!
//! let store = DocumentStore::new(InMemoryStore::new());
//! let saved = store.save(Document::builder().title("Hello").build())?;
//! assert!(saved.id().is_some());
//! ```

#[allow(unused_extern_crates)]
extern crate self as docshelf_core;

pub mod backend;
pub mod document;
pub mod error;
pub mod query;
pub mod request;
pub mod store;
