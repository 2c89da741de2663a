//! store::traits
//!
//! Store trait definition for interacting with the remote content store.
//!
//! # Design
//!
//! The `DocumentStore` trait is async because store operations involve
//! network I/O. All methods return `Result` to handle API errors
//! gracefully.
//!
//! Listing is paginated: `list_docs` fetches one page and reports the next
//! page number (or its absence). The pull workflow owns the page loop, so
//! implementations stay cursor-shaped rather than buffering a whole
//! workspace in one call.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::document::Document;

/// Errors from store operations.
///
/// These error types map to common failure modes when talking to the
/// remote content store.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Authentication is required but not available.
    #[error("authentication required")]
    AuthRequired,

    /// Authentication failed (invalid token, expired, insufficient permissions).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded.
    #[error("rate limited")]
    RateLimited,

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Network or connection error.
    #[error("network error: {0}")]
    NetworkError(String),
}

/// A document as stored remotely.
///
/// This is the wire-facing record; [`RemoteDocument::to_document`]
/// converts it to the domain type used by the codec and the workflows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteDocument {
    /// Store-assigned identifier, starting at 1.
    pub number: u64,
    /// Leaf name.
    pub name: String,
    /// `category/name`, as reported by the store.
    #[serde(default)]
    pub full_name: String,
    /// Ordered tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Category path; `None` means root.
    #[serde(default)]
    pub category: Option<String>,
    /// Work-in-progress flag.
    #[serde(default)]
    pub wip: bool,
    /// Markdown body.
    #[serde(default)]
    pub body_md: String,
    /// Monotonic edit counter, starting at 1.
    pub revision_number: u64,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RemoteDocument {
    /// Convert to the domain document used by the title codec.
    pub fn to_document(&self) -> Document {
        Document {
            name: self.name.clone(),
            category: self.category.clone().unwrap_or_default(),
            tags: self.tags.clone(),
            number: (self.number > 0).then_some(self.number),
            revision_number: (self.revision_number > 0).then_some(self.revision_number),
            wip: self.wip,
            body: self.body_md.clone(),
        }
    }
}

/// One page of a document listing.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentPage {
    /// Documents on this page.
    pub docs: Vec<RemoteDocument>,
    /// Next page number, or `None` on the last page.
    pub next_page: Option<u32>,
    /// Total matching documents across all pages.
    #[serde(default)]
    pub total_count: u64,
}

/// Listing parameters.
#[derive(Debug, Clone, Default)]
pub struct ListDocsOpts {
    /// Search expression understood by the store; empty lists everything.
    pub query: Option<String>,
    /// Page to fetch, starting at 1.
    pub page: u32,
    /// Documents per page.
    pub per_page: u32,
}

/// Request to create a document.
#[derive(Debug, Clone, Default)]
pub struct CreateDocRequest {
    /// Document name (required).
    pub name: String,
    /// Markdown body.
    pub body_md: Option<String>,
    /// Tags to set.
    pub tags: Option<Vec<String>>,
    /// Category path; `None` or empty means root.
    pub category: Option<String>,
    /// Create as work-in-progress.
    pub wip: Option<bool>,
}

/// Request to update a document.
#[derive(Debug, Clone, Default)]
pub struct UpdateDocRequest {
    /// New name (if changing).
    pub name: Option<String>,
    /// New body (if changing).
    pub body_md: Option<String>,
    /// New tags (if changing).
    pub tags: Option<Vec<String>>,
    /// New category (if changing).
    pub category: Option<String>,
    /// New WIP state (if changing).
    pub wip: Option<bool>,
}

/// Result of an update.
#[derive(Debug, Clone)]
pub struct UpdatedDocument {
    /// The stored document after the update.
    pub doc: RemoteDocument,
    /// True when the update overlapped a concurrent remote edit and the
    /// store merged both bodies.
    pub overlapped: bool,
}

/// The trait for interacting with the remote content store.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Error Handling
///
/// All methods return `Result<T, StoreError>`. Callers should handle:
/// - `AuthRequired` / `AuthFailed`: prompt the user to authenticate
/// - `NotFound`: resource doesn't exist
/// - `RateLimited`: back off and retry
/// - `ApiError`: display the message to the user
/// - `NetworkError`: check connectivity
///
/// # Example
///
/// ```ignore
/// use quire::store::{DocumentStore, ListDocsOpts};
///
/// async fn count_docs(store: &dyn DocumentStore) -> Result<u64, StoreError> {
///     let page = store
///         .list_docs(ListDocsOpts { page: 1, per_page: 1, ..Default::default() })
///         .await?;
///     Ok(page.total_count)
/// }
/// ```
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Get the store implementation name (e.g., "http", "mock").
    fn name(&self) -> &'static str;

    /// Fetch one page of the document listing.
    ///
    /// # Errors
    ///
    /// - `AuthFailed` if the token is invalid or lacks permissions
    /// - `ApiError` for query or paging problems
    async fn list_docs(&self, opts: ListDocsOpts) -> Result<DocumentPage, StoreError>;

    /// Get a document by number.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the document doesn't exist
    async fn get_doc(&self, number: u64) -> Result<RemoteDocument, StoreError>;

    /// Create a new document.
    ///
    /// # Returns
    ///
    /// The stored record including the assigned number and revision.
    async fn create_doc(&self, request: CreateDocRequest) -> Result<RemoteDocument, StoreError>;

    /// Update an existing document.
    ///
    /// # Returns
    ///
    /// The stored record after the update, plus whether the update
    /// overlapped a concurrent edit.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the document doesn't exist
    async fn update_doc(
        &self,
        number: u64,
        request: UpdateDocRequest,
    ) -> Result<UpdatedDocument, StoreError>;
}
