//! store
//!
//! Abstraction for the remote content store.
//!
//! # Architecture
//!
//! The `DocumentStore` trait defines the interface the sync workflows use
//! to talk to the remote store. Workflows take `&dyn DocumentStore`, so
//! the HTTP client and the in-memory mock are interchangeable.
//!
//! # Modules
//!
//! - `traits`: Core `DocumentStore` trait and request/response types
//! - [`http`]: HTTP implementation against the store's REST API
//! - [`mock`]: Mock implementation for deterministic testing
//!
//! # Example
//!
//! ```ignore
//! use quire::store::http::HttpDocumentStore;
//! use quire::store::{DocumentStore, ListDocsOpts};
//!
//! let store = HttpDocumentStore::new(token, "acme");
//! let page = store
//!     .list_docs(ListDocsOpts { page: 1, per_page: 100, ..Default::default() })
//!     .await?;
//! ```

pub mod http;
pub mod mock;
mod traits;

pub use traits::*;
