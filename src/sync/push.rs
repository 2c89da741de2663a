//! sync::push
//!
//! The push workflow: send local files to the remote store and rename
//! each one to its canonical title afterwards.
//!
//! # Design
//!
//! Each file name (relative to the tree root) is decoded back into a
//! document. A document with no id mark is created remotely; one with an
//! id is updated in place. The store's response carries the authoritative
//! metadata (assigned id, bumped revision), so the local file is renamed
//! to the re-encoded title when it differs — this is how a freshly
//! created file picks up its `[id:N]` mark.
//!
//! A failure while processing one file is reported and does not abort the
//! remaining files; the caller gets an error at the end if anything
//! failed.

use std::path::{Path, PathBuf};

use crate::core::document::Document;
use crate::core::paths;
use crate::files::FileTree;
use crate::store::{CreateDocRequest, DocumentStore, UpdateDocRequest};
use crate::ui::output::{self, Verbosity};
use anyhow::{bail, Context as _, Result};

/// Result of a push.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushSummary {
    /// Documents created remotely.
    pub created: usize,
    /// Documents updated remotely.
    pub updated: usize,
    /// Files renamed to their canonical title.
    pub renamed: usize,
    /// Files that failed to push.
    pub failed: usize,
}

/// Push the named files (paths relative to the tree root) to the store.
///
/// # Errors
///
/// Individual file failures are reported as they happen; the returned
/// error summarizes the count once every file has been attempted.
pub async fn push(
    store: &dyn DocumentStore,
    tree: &FileTree,
    files: &[PathBuf],
    verbosity: Verbosity,
) -> Result<PushSummary> {
    let mut summary = PushSummary::default();

    for file in files {
        match push_one(store, tree, file, &mut summary, verbosity).await {
            Ok(()) => {}
            Err(err) => {
                summary.failed += 1;
                output::error(format!("{}: {:#}", file.display(), err));
            }
        }
    }

    if summary.failed > 0 {
        bail!("{} of {} files failed to push", summary.failed, files.len());
    }
    Ok(summary)
}

/// Push a single file.
async fn push_one(
    store: &dyn DocumentStore,
    tree: &FileTree,
    file: &Path,
    summary: &mut PushSummary,
    verbosity: Verbosity,
) -> Result<()> {
    let title = paths::title_from_rel_path(file);
    let doc = Document::from_title(&title)
        .with_context(|| format!("failed to parse title {:?}", title))?;

    let body = tree.read(file).context("failed to read file")?;

    let after = match doc.number {
        None => {
            let created = store
                .create_doc(CreateDocRequest {
                    name: doc.name.clone(),
                    body_md: Some(body),
                    tags: Some(doc.tags.clone()),
                    category: (!doc.category.is_empty()).then(|| doc.category.clone()),
                    wip: Some(doc.wip),
                })
                .await
                .context("failed to create document")?;
            output::print(
                format!("created {} [id:{}]", created.full_name, created.number),
                verbosity,
            );
            summary.created += 1;
            created
        }
        Some(number) => {
            let updated = store
                .update_doc(
                    number,
                    UpdateDocRequest {
                        name: Some(doc.name.clone()),
                        body_md: Some(body),
                        tags: Some(doc.tags.clone()),
                        category: Some(doc.category.clone()),
                        wip: Some(doc.wip),
                    },
                )
                .await
                .context("failed to update document")?;
            if updated.overlapped {
                output::warn(
                    format!(
                        "update of {} [id:{}] overlapped a remote edit",
                        updated.doc.full_name, number
                    ),
                    verbosity,
                );
            }
            output::print(
                format!("updated {} [rev:{}]", updated.doc.full_name, updated.doc.revision_number),
                verbosity,
            );
            summary.updated += 1;
            updated.doc
        }
    };

    // The store's record is authoritative; rename the file to match it.
    let canonical = paths::title_to_rel_path(&after.to_document().to_title());
    if canonical != file {
        tree.rename(file, &canonical)
            .context("failed to rename file to canonical title")?;
        output::debug(
            format!("renamed {} -> {}", file.display(), canonical.display()),
            verbosity,
        );
        summary.renamed += 1;
    }

    Ok(())
}
