//! cli::commands::config_cmd
//!
//! Get, set, and list global configuration values.
//!
//! # Example
//!
//! ```bash
//! quire config set workspace acme
//! quire config get workspace
//! quire config list
//! ```

use crate::cli::Context;
use crate::core::Config;
use anyhow::{Context as _, Result};

/// Get a config value by key.
pub fn get(_ctx: &Context, key: &str) -> Result<()> {
    let config = Config::load()?;
    match config.get_key(key)? {
        Some(value) => println!("{}", value),
        None => println!(),
    }
    Ok(())
}

/// Set a config value by key and persist it.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set_key(key, value)?;

    let path = Config::write_global(&config.global).context("Failed to write config")?;

    if !ctx.quiet {
        println!("Set {} in {}", key, path.display());
    }
    Ok(())
}

/// List all config values.
pub fn list(_ctx: &Context) -> Result<()> {
    let config = Config::load()?;
    for key in Config::keys() {
        let value = config.get_key(key)?.unwrap_or_default();
        println!("{} = {}", key, value);
    }
    Ok(())
}
