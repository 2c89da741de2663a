//! cli::commands::pull
//!
//! Pull documents from the store into a local directory.
//!
//! # Example
//!
//! ```bash
//! # Pull the whole workspace
//! quire pull --dir notes
//!
//! # Pull a subset
//! quire pull --query 'category:ops' --dir notes
//! ```

use std::path::Path;

use crate::cli::Context;
use crate::core::Config;
use crate::files::FileTree;
use crate::sync::{self, PullOptions};
use crate::ui::output::{self, Verbosity};
use anyhow::Result;

/// Run the pull command.
///
/// This is a synchronous wrapper that uses tokio to run the async
/// implementation.
pub fn pull(
    ctx: &Context,
    query: Option<&str>,
    dir: Option<&Path>,
    workspace: Option<&str>,
    token: Option<&str>,
    api_base: Option<&str>,
) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(pull_async(ctx, query, dir, workspace, token, api_base))
}

async fn pull_async(
    ctx: &Context,
    query: Option<&str>,
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

    let options = PullOptions {
        query: query.map(str::to_string),
    };
    let summary = sync::pull(&store, &tree, &options, verbosity).await?;

    output::print(
        format!(
            "Pulled {} documents into {}",
            summary.written,
            dir.display()
        ),
        verbosity,
    );
    Ok(())
}
