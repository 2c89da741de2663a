//! cli::commands::auth
//!
//! Authentication command for storing store credentials.
//!
//! # Design
//!
//! - Stores the token via [`SecretStore`]
//! - NEVER prints token values to stdout/stderr
//! - Supports both interactive and non-interactive modes
//!
//! # Example
//!
//! ```bash
//! # Interactive (prompts for token)
//! quire auth
//!
//! # Non-interactive
//! quire auth --token tok_xxxx
//!
//! # Check status
//! quire auth --status
//!
//! # Remove stored token
//! quire auth --logout
//! ```

use crate::cli::Context;
use crate::secrets::{self, SecretStore};
use anyhow::{bail, Context as _, Result};
use std::io::{self, Write};

/// Run the auth command.
///
/// # Security
///
/// This function NEVER prints the token value. It only confirms
/// success or failure.
pub fn auth(ctx: &Context, token: Option<&str>, status: bool, logout: bool) -> Result<()> {
    let store = secrets::default_store().context("Failed to initialize secret store")?;

    if status {
        return show_status(&store, ctx.quiet);
    }

    if logout {
        return do_logout(&store, ctx.quiet);
    }

    let token_value = get_token(ctx, token)?;
    validate_token(&token_value)?;

    store
        .set(secrets::TOKEN_KEY, &token_value)
        .context("Failed to store token")?;

    if !ctx.quiet {
        println!("Authentication configured.");
    }

    Ok(())
}

/// Show authentication status.
fn show_status(store: &dyn SecretStore, quiet: bool) -> Result<()> {
    let exists = store.exists(secrets::TOKEN_KEY)?;

    if quiet {
        // Machine-readable output
        if exists {
            println!("authenticated");
        } else {
            println!("not_authenticated");
        }
    } else if exists {
        println!("Authenticated.");
        // The token itself is intentionally never shown
    } else {
        println!("Not authenticated.");
        println!("Run 'quire auth' to authenticate.");
    }

    Ok(())
}

/// Remove stored authentication.
fn do_logout(store: &dyn SecretStore, quiet: bool) -> Result<()> {
    store
        .delete(secrets::TOKEN_KEY)
        .context("Failed to remove stored token")?;

    if !quiet {
        println!("Logged out.");
    }

    Ok(())
}

/// Get token from argument or interactive prompt.
fn get_token(ctx: &Context, token_arg: Option<&str>) -> Result<String> {
    if let Some(t) = token_arg {
        return Ok(t.to_string());
    }

    if ctx.quiet || !ctx.interactive {
        bail!("Token required. Use --token <TOKEN> or run interactively.");
    }

    // Interactive prompt with masked input
    print!("Store API token: ");
    io::stdout().flush()?;

    let token = rpassword::read_password().context("Failed to read token")?;

    if token.is_empty() {
        bail!("Token cannot be empty.");
    }

    Ok(token)
}

/// Validate token format (basic checks).
///
/// The token is not verified against the API here - that would require
/// network access. Only obvious mistakes are rejected.
fn validate_token(token: &str) -> Result<()> {
    if token.is_empty() {
        bail!("Token cannot be empty.");
    }

    if token.len() < 10 {
        bail!("Token appears to be too short.");
    }

    if token.contains(' ') {
        bail!("Token should not contain spaces.");
    }

    if token.contains('\n') || token.contains('\r') {
        bail!("Token should not contain newlines.");
    }

    Ok(())
}
