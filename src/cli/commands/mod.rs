//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Resolves configuration (flags over env vars over config file)
//! 3. Runs the workflow and formats output
//!
//! # Async Commands
//!
//! Store commands (pull, push) are async because they involve network
//! I/O. Their handlers are synchronous wrappers that run the async body
//! on a tokio runtime.

mod auth;
mod completion;
mod config_cmd;
mod pull;
mod push;

pub use auth::auth;
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use pull::pull;
pub use push::push;

use std::path::PathBuf;

use crate::cli::args::{Command, ConfigAction};
use crate::cli::Context;
use crate::core::Config;
use crate::secrets::{self, SecretStore};
use crate::store::http::HttpDocumentStore;
use anyhow::{bail, Result};

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Pull {
            query,
            dir,
            workspace,
            token,
            api_base,
        } => pull::pull(
            ctx,
            query.as_deref(),
            dir.as_deref(),
            workspace.as_deref(),
            token.as_deref(),
            api_base.as_deref(),
        ),
        Command::Push {
            files,
            dir,
            workspace,
            token,
            api_base,
        } => push::push(
            ctx,
            &files,
            dir.as_deref(),
            workspace.as_deref(),
            token.as_deref(),
            api_base.as_deref(),
        ),
        Command::Auth {
            token,
            status,
            logout,
        } => auth::auth(ctx, token.as_deref(), status, logout),
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::Set { key, value } => config_cmd::set(ctx, &key, &value),
            ConfigAction::List => config_cmd::list(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Resolve the store client from flags, environment, config, and the
/// secret store.
///
/// Precedence per setting: CLI flag, then environment variable, then
/// config file (then the stored token for authentication).
pub(crate) fn resolve_store(
    config: &Config,
    token: Option<&str>,
    workspace: Option<&str>,
    api_base: Option<&str>,
) -> Result<HttpDocumentStore> {
    let token = match token {
        Some(t) => t.to_string(),
        None => match std::env::var("QUIRE_TOKEN") {
            Ok(t) if !t.is_empty() => t,
            _ => {
                let store = secrets::default_store()?;
                match store.get(secrets::TOKEN_KEY)? {
                    Some(t) => t,
                    None => bail!(
                        "Not authenticated. Run 'quire auth' or pass --token."
                    ),
                }
            }
        },
    };

    let workspace = match workspace {
        Some(w) => w.to_string(),
        None => match std::env::var("QUIRE_WORKSPACE") {
            Ok(w) if !w.is_empty() => w,
            _ => match config.workspace() {
                Some(w) => w.to_string(),
                None => bail!(
                    "No workspace configured. Pass --workspace, set QUIRE_WORKSPACE, \
                     or run 'quire config set workspace <NAME>'."
                ),
            },
        },
    };

    Ok(match api_base.or(config.api_base()) {
        Some(base) => HttpDocumentStore::with_api_base(token, workspace, base),
        None => HttpDocumentStore::new(token, workspace),
    })
}

/// Resolve the pull/push directory: flag, then config, then `.`.
pub(crate) fn resolve_dir(config: &Config, dir: Option<&std::path::Path>) -> PathBuf {
    match dir {
        Some(d) => d.to_path_buf(),
        None => PathBuf::from(config.default_dir()),
    }
}
