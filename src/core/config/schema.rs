//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Locations
//!
//! Global config is searched in order:
//! 1. `$QUIRE_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/quire/config.toml`
//! 3. `~/.quire/config.toml` (canonical write location)
//!
//! # Validation
//!
//! Values are validated after parsing; a config file that parses but holds
//! an unusable value (e.g. a non-HTTP API base) is rejected at load time.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// workspace = "acme"
/// api_base = "https://store.example.com"
/// default_dir = "~/notes"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Workspace name on the remote store.
    pub workspace: Option<String>,

    /// Base URL of the remote store API.
    pub api_base: Option<String>,

    /// Default directory for pulled and pushed files.
    pub default_dir: Option<String>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(workspace) = &self.workspace {
            if workspace.is_empty() || workspace.contains('/') {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid workspace name '{}'",
                    workspace
                )));
            }
        }

        if let Some(api_base) = &self.api_base {
            if !api_base.starts_with("http://") && !api_base.starts_with("https://") {
                return Err(ConfigError::InvalidValue(format!(
                    "api_base must be an http(s) URL, got '{}'",
                    api_base
                )));
            }
        }

        if let Some(dir) = &self.default_dir {
            if dir.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "default_dir cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(GlobalConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_api_base() {
        let config = GlobalConfig {
            api_base: Some("store.example.com".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_workspace_with_slash() {
        let config = GlobalConfig {
            workspace: Some("acme/docs".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
