//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Environment variables and CLI flags (not handled here)
//!
//! # Locations
//!
//! Searched in order:
//! 1. `$QUIRE_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/quire/config.toml`
//! 3. `~/.quire/config.toml` (canonical write location)

pub mod schema;

pub use schema::GlobalConfig;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("unknown config key: {0}")]
    UnknownKey(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Loaded configuration plus where it came from.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration values.
    pub global: GlobalConfig,
    /// Path to the loaded config file (if one was found).
    loaded_from: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed or
    /// fails validation. A missing file is not an error (defaults apply).
    pub fn load() -> Result<Self, ConfigError> {
        let (global, loaded_from) = Self::load_global()?;
        global.validate()?;
        Ok(Config {
            global,
            loaded_from,
        })
    }

    /// Load configuration from an explicit file path.
    ///
    /// Primarily useful for tests.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let global = Self::read_config(path)?;
        global.validate()?;
        Ok(Config {
            global,
            loaded_from: Some(path.to_path_buf()),
        })
    }

    /// Load global configuration from standard locations.
    fn load_global() -> Result<(GlobalConfig, Option<PathBuf>), ConfigError> {
        // 1. Check $QUIRE_CONFIG
        if let Ok(path) = std::env::var("QUIRE_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 2. Check $XDG_CONFIG_HOME/quire/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("quire/config.toml");
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 3. Check ~/.quire/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".quire/config.toml");
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        Ok((GlobalConfig::default(), None))
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<GlobalConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical path for the global config file.
    ///
    /// Returns `~/.quire/config.toml`.
    pub fn global_config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".quire/config.toml"))
    }

    /// Write global config atomically to the canonical location.
    ///
    /// Creates parent directories if needed. Uses atomic write (write to
    /// temp file, then rename) to prevent corruption.
    pub fn write_global(config: &GlobalConfig) -> Result<PathBuf, ConfigError> {
        let path = Self::global_config_path()?;
        Self::write_config_atomic(&path, config)?;
        Ok(path)
    }

    /// Write a config file atomically to an explicit path.
    pub fn write_to(path: &Path, config: &GlobalConfig) -> Result<(), ConfigError> {
        Self::write_config_atomic(path, config)
    }

    fn write_config_atomic(path: &Path, config: &GlobalConfig) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        // Write to temp file in same directory (for atomic rename)
        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    // =========================================================================
    // Accessors and config-command keys
    // =========================================================================

    /// Get the configured workspace name, if any.
    pub fn workspace(&self) -> Option<&str> {
        self.global.workspace.as_deref()
    }

    /// Get the configured API base URL, if any.
    pub fn api_base(&self) -> Option<&str> {
        self.global.api_base.as_deref()
    }

    /// Get the default pull/push directory.
    ///
    /// Defaults to `.` if not configured.
    pub fn default_dir(&self) -> &str {
        self.global.default_dir.as_deref().unwrap_or(".")
    }

    /// Get the path the config was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.loaded_from.as_deref()
    }

    /// Keys understood by `quire config get/set`.
    pub fn keys() -> &'static [&'static str] {
        &["workspace", "api_base", "default_dir"]
    }

    /// Get a value by config-command key.
    pub fn get_key(&self, key: &str) -> Result<Option<String>, ConfigError> {
        match key {
            "workspace" => Ok(self.global.workspace.clone()),
            "api_base" => Ok(self.global.api_base.clone()),
            "default_dir" => Ok(self.global.default_dir.clone()),
            _ => Err(ConfigError::UnknownKey(key.to_string())),
        }
    }

    /// Set a value by config-command key, validating the result.
    pub fn set_key(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "workspace" => self.global.workspace = Some(value.to_string()),
            "api_base" => self.global.api_base = Some(value.to_string()),
            "default_dir" => self.global.default_dir = Some(value.to_string()),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        self.global.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
            workspace = "acme"
            api_base = "https://store.example.com"
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.workspace(), Some("acme"));
        assert_eq!(config.api_base(), Some("https://store.example.com"));
        assert_eq!(config.default_dir(), ".");
        assert_eq!(config.loaded_from(), Some(path.as_path()));
    }

    #[test]
    fn unknown_fields_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "workspace = \"acme\"\nunknown_field = true\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn invalid_api_base_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "api_base = \"store.example.com\"\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn write_then_reload() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/config.toml");

        let global = GlobalConfig {
            workspace: Some("acme".to_string()),
            default_dir: Some("notes".to_string()),
            ..Default::default()
        };
        Config::write_to(&path, &global).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.global, global);
        assert_eq!(loaded.default_dir(), "notes");
    }

    #[test]
    fn get_and_set_by_key() {
        let mut config = Config::default();
        assert_eq!(config.get_key("workspace").unwrap(), None);

        config.set_key("workspace", "acme").unwrap();
        assert_eq!(config.get_key("workspace").unwrap(), Some("acme".into()));

        assert!(config.set_key("api_base", "not-a-url").is_err());
        assert!(config.get_key("bogus").is_err());
        assert!(config.set_key("bogus", "x").is_err());
    }
}
