//! Convenient re-exports of commonly used types from docshelf.
//!
//! ```ignore
//! use docshelf::prelude::*;
//! ```

pub use docshelf_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    document::{Author, Document, DocumentBuilder},
    error::{DocumentStoreError, DocumentStoreResult},
    query::{Expr, Field, FieldOp, Filter, Query, QueryBuilder, QueryVisitor, Value},
    request::{SearchRequest, SearchRequestBuilder},
    store::{DocumentStore, DynDocumentStore},
};
