//! secrets::traits
//!
//! Secret storage trait definition.
//!
//! # Design
//!
//! A simple namespaced key-value interface (keys like `store.token`).
//! Implementations must be thread-safe and must never log, print, or
//! include secret values in error messages.

use thiserror::Error;

/// Errors from secret storage operations.
///
/// Note: error messages intentionally do not include secret values.
#[derive(Debug, Error)]
pub enum SecretError {
    /// Failed to read from secret storage.
    #[error("failed to read secret: {0}")]
    ReadError(String),

    /// Failed to write to secret storage.
    #[error("failed to write secret: {0}")]
    WriteError(String),

    /// Failed to delete from secret storage.
    #[error("failed to delete secret: {0}")]
    DeleteError(String),
}

/// Trait for secret storage providers.
pub trait SecretStore: Send + Sync {
    /// Get a secret by key. Returns `None` when not stored.
    fn get(&self, key: &str) -> Result<Option<String>, SecretError>;

    /// Store a secret under a key, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), SecretError>;

    /// Delete a secret. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), SecretError>;

    /// Check whether a secret exists without reading it.
    fn exists(&self, key: &str) -> Result<bool, SecretError> {
        Ok(self.get(key)?.is_some())
    }
}
