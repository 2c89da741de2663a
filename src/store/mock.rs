//! store::mock
//!
//! Mock store implementation for deterministic testing.
//!
//! # Design
//!
//! The mock store keeps documents in memory and allows configuring
//! failure scenarios. Every call is recorded so tests can verify which
//! operations a workflow performed.
//!
//! # Example
//!
//! ```
//! use quire::store::mock::MockStore;
//! use quire::store::{CreateDocRequest, DocumentStore};
//!
//! # tokio_test::block_on(async {
//! let store = MockStore::new();
//!
//! let doc = store.create_doc(CreateDocRequest {
//!     name: "oncall".to_string(),
//!     body_md: Some("# Oncall".to_string()),
//!     category: Some("ops".to_string()),
//!     ..Default::default()
//! }).await.unwrap();
//!
//! assert_eq!(doc.number, 1);
//! assert_eq!(doc.revision_number, 1);
//!
//! let fetched = store.get_doc(1).await.unwrap();
//! assert_eq!(fetched.full_name, "ops/oncall");
//! # });
//! ```

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use super::traits::{
    CreateDocRequest, DocumentPage, DocumentStore, ListDocsOpts, RemoteDocument, StoreError,
    UpdateDocRequest, UpdatedDocument,
};

/// Mock store for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone)]
pub struct MockStore {
    inner: Arc<Mutex<MockStoreInner>>,
}

/// Internal mutable state.
#[derive(Debug)]
struct MockStoreInner {
    /// Stored documents by number, iterated in number order.
    docs: BTreeMap<u64, RemoteDocument>,
    /// Next document number to assign.
    next_number: u64,
    /// Method to fail on (for testing error paths).
    fail_on: Option<FailOn>,
    /// Mark the next successful update as overlapped.
    overlap_next_update: bool,
    /// Recorded operations for verification.
    operations: Vec<MockOperation>,
}

/// Configuration for which operation should fail.
#[derive(Debug, Clone)]
pub enum FailOn {
    /// Fail list_docs with the given error.
    ListDocs(StoreError),
    /// Fail get_doc with the given error.
    GetDoc(StoreError),
    /// Fail create_doc with the given error.
    CreateDoc(StoreError),
    /// Fail update_doc with the given error.
    UpdateDoc(StoreError),
}

/// Recorded operation for test verification.
#[derive(Debug, Clone)]
pub enum MockOperation {
    ListDocs {
        query: Option<String>,
        page: u32,
        per_page: u32,
    },
    GetDoc {
        number: u64,
    },
    CreateDoc {
        name: String,
        category: Option<String>,
        wip: bool,
    },
    UpdateDoc {
        number: u64,
        name: Option<String>,
    },
}

impl MockStore {
    /// Create a new empty mock store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockStoreInner {
                docs: BTreeMap::new(),
                next_number: 1,
                fail_on: None,
                overlap_next_update: false,
                operations: Vec::new(),
            })),
        }
    }

    /// Create a mock store with pre-existing documents.
    pub fn with_docs(docs: Vec<RemoteDocument>) -> Self {
        let max_number = docs.iter().map(|d| d.number).max().unwrap_or(0);
        let map: BTreeMap<u64, RemoteDocument> =
            docs.into_iter().map(|d| (d.number, d)).collect();
        Self {
            inner: Arc::new(Mutex::new(MockStoreInner {
                docs: map,
                next_number: max_number + 1,
                fail_on: None,
                overlap_next_update: false,
                operations: Vec::new(),
            })),
        }
    }

    /// Configure the store to fail a specific operation.
    pub fn set_fail_on(&self, fail_on: FailOn) {
        self.inner.lock().unwrap().fail_on = Some(fail_on);
    }

    /// Clear any configured failure.
    pub fn clear_fail_on(&self) {
        self.inner.lock().unwrap().fail_on = None;
    }

    /// Make the next successful update report `overlapped = true`.
    pub fn overlap_next_update(&self) {
        self.inner.lock().unwrap().overlap_next_update = true;
    }

    /// Get all recorded operations.
    pub fn operations(&self) -> Vec<MockOperation> {
        self.inner.lock().unwrap().operations.clone()
    }

    /// Get the current number of stored documents.
    pub fn doc_count(&self) -> usize {
        self.inner.lock().unwrap().docs.len()
    }

    /// Get a stored document without recording an operation.
    pub fn peek_doc(&self, number: u64) -> Option<RemoteDocument> {
        self.inner.lock().unwrap().docs.get(&number).cloned()
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute `category/name` the way the store reports it.
fn full_name(category: Option<&str>, name: &str) -> String {
    match category {
        Some(c) if !c.is_empty() => format!("{}/{}", c, name),
        _ => name.to_string(),
    }
}

#[async_trait]
impl DocumentStore for MockStore {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn list_docs(&self, opts: ListDocsOpts) -> Result<DocumentPage, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(MockOperation::ListDocs {
            query: opts.query.clone(),
            page: opts.page,
            per_page: opts.per_page,
        });

        if let Some(FailOn::ListDocs(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        let matches: Vec<RemoteDocument> = inner
            .docs
            .values()
            .filter(|doc| match opts.query.as_deref() {
                Some(q) if !q.is_empty() => {
                    doc.full_name.contains(q) || doc.tags.iter().any(|t| t == q)
                }
                _ => true,
            })
            .cloned()
            .collect();

        let page = opts.page.max(1) as usize;
        let per_page = opts.per_page.max(1) as usize;
        let start = (page - 1) * per_page;
        let docs: Vec<RemoteDocument> =
            matches.iter().skip(start).take(per_page).cloned().collect();
        let next_page = if start + per_page < matches.len() {
            Some(page as u32 + 1)
        } else {
            None
        };

        Ok(DocumentPage {
            docs,
            next_page,
            total_count: matches.len() as u64,
        })
    }

    async fn get_doc(&self, number: u64) -> Result<RemoteDocument, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(MockOperation::GetDoc { number });

        if let Some(FailOn::GetDoc(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        inner
            .docs
            .get(&number)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("doc {}", number)))
    }

    async fn create_doc(&self, request: CreateDocRequest) -> Result<RemoteDocument, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(MockOperation::CreateDoc {
            name: request.name.clone(),
            category: request.category.clone(),
            wip: request.wip.unwrap_or(false),
        });

        if let Some(FailOn::CreateDoc(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        let number = inner.next_number;
        inner.next_number += 1;

        let category = request.category.filter(|c| !c.is_empty());
        let doc = RemoteDocument {
            number,
            full_name: full_name(category.as_deref(), &request.name),
            name: request.name,
            tags: request.tags.unwrap_or_default(),
            category,
            wip: request.wip.unwrap_or(false),
            body_md: request.body_md.unwrap_or_default(),
            revision_number: 1,
            created_at: None,
            updated_at: None,
        };
        inner.docs.insert(number, doc.clone());

        Ok(doc)
    }

    async fn update_doc(
        &self,
        number: u64,
        request: UpdateDocRequest,
    ) -> Result<UpdatedDocument, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(MockOperation::UpdateDoc {
            number,
            name: request.name.clone(),
        });

        if let Some(FailOn::UpdateDoc(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        let overlapped = std::mem::take(&mut inner.overlap_next_update);

        let doc = inner
            .docs
            .get_mut(&number)
            .ok_or_else(|| StoreError::NotFound(format!("doc {}", number)))?;

        if let Some(name) = request.name {
            doc.name = name;
        }
        if let Some(body_md) = request.body_md {
            doc.body_md = body_md;
        }
        if let Some(tags) = request.tags {
            doc.tags = tags;
        }
        if let Some(category) = request.category {
            doc.category = (!category.is_empty()).then_some(category);
        }
        if let Some(wip) = request.wip {
            doc.wip = wip;
        }
        doc.revision_number += 1;
        doc.full_name = full_name(doc.category.as_deref(), &doc.name);

        Ok(UpdatedDocument {
            doc: doc.clone(),
            overlapped,
        })
    }
}
