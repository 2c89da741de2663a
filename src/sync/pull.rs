//! sync::pull
//!
//! The pull workflow: fetch every document matching a query from the
//! remote store and write each one to the local tree under its encoded
//! title.
//!
//! # Design
//!
//! Listing is fetched page by page until the store stops reporting a next
//! page. Each remote record is converted to a domain document, its title
//! is encoded, and the body is written to `<title>.md` relative to the
//! tree root, creating category directories as needed. A re-pull
//! overwrites existing files; the remote store is the source of truth.

use crate::core::document::Document;
use crate::core::paths;
use crate::files::FileTree;
use crate::store::{DocumentStore, ListDocsOpts, StoreError};
use crate::ui::output::{self, Verbosity};
use anyhow::{Context as _, Result};

/// Documents fetched per listing request.
const PER_PAGE: u32 = 100;

/// Options for a pull.
#[derive(Debug, Clone, Default)]
pub struct PullOptions {
    /// Search expression understood by the store; `None` pulls everything.
    pub query: Option<String>,
}

/// Result of a pull.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullSummary {
    /// Documents fetched from the store.
    pub fetched: usize,
    /// Files written to the tree.
    pub written: usize,
}

/// Pull documents from the store into the tree.
pub async fn pull(
    store: &dyn DocumentStore,
    tree: &FileTree,
    options: &PullOptions,
    verbosity: Verbosity,
) -> Result<PullSummary> {
    let docs = fetch_all(store, options.query.clone(), verbosity).await?;

    let mut summary = PullSummary {
        fetched: docs.len(),
        written: 0,
    };

    for doc in docs {
        let rel = paths::title_to_rel_path(&doc.to_title());
        tree.write(&rel, &doc.body)
            .with_context(|| format!("failed to store document '{}'", doc.full_name()))?;
        output::debug(format!("wrote {}", rel.display()), verbosity);
        summary.written += 1;
    }

    Ok(summary)
}

/// Fetch every page of the listing.
async fn fetch_all(
    store: &dyn DocumentStore,
    query: Option<String>,
    verbosity: Verbosity,
) -> Result<Vec<Document>, StoreError> {
    let mut docs = Vec::new();
    let mut page = 1;

    loop {
        output::debug(
            format!("fetch docs page={} per_page={}", page, PER_PAGE),
            verbosity,
        );
        let listing = store
            .list_docs(ListDocsOpts {
                query: query.clone(),
                page,
                per_page: PER_PAGE,
            })
            .await?;

        docs.extend(listing.docs.iter().map(|d| d.to_document()));

        match listing.next_page {
            Some(next) => page = next,
            None => break,
        }
    }

    Ok(docs)
}
