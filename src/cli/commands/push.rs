//! cli::commands::push
//!
//! Push local files to the store.
//!
//! # Example
//!
//! ```bash
//! # Update an existing document
//! quire push --dir notes 'ops/oncall [id:42] [rev:7].md'
//!
//! # Create a new one (no [id:N] mark yet)
//! quire push --dir notes 'ops/postmortem [WIP].md'
//! ```

use std::path::{Path, PathBuf};

use crate::cli::Context;
use crate::core::Config;
use crate::files::FileTree;
use crate::sync;
use crate::ui::output::{self, Verbosity};
use anyhow::Result;

/// Run the push command.
///
/// This is a synchronous wrapper that uses tokio to run the async
/// implementation.
pub fn push(
    ctx: &Context,
    files: &[PathBuf],
    dir: Option<&Path>,
    workspace: Option<&str>,
    token: Option<&str>,
    api_base: Option<&str>,
) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(push_async(ctx, files, dir, workspace, token, api_base))
}

async fn push_async(
    ctx: &Context,
    files: &[PathBuf],
    dir: Option<&Path>,
    workspace: Option<&str>,
    token: Option<&str>,
    api_base: Option<&str>,
) -> Result<()> {
    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);
    let config = Config::load()?;

    let store = super::resolve_store(&config, token, workspace, api_base)?;
    let dir = super::resolve_dir(&config, dir);
    let tree = FileTree::new(&dir);

    let summary = sync::push(&store, &tree, files, verbosity).await?;

    output::print(
        format!(
            "Pushed {} files ({} created, {} updated)",
            summary.created + summary.updated,
            summary.created,
            summary.updated
        ),
        verbosity,
    );
    Ok(())
}
