//! secrets
//!
//! Secret storage for the store API token.
//!
//! # Security
//!
//! All implementations follow these rules:
//!
//! - Secret values are **never** logged or included in error messages
//! - The file store uses 0600 permissions on Unix (owner read/write only)
//! - All writes are atomic (temp file + rename)

mod file_store;
mod traits;

pub use file_store::FileSecretStore;
pub use traits::{SecretError, SecretStore};

/// Secret key under which the store API token is kept.
pub const TOKEN_KEY: &str = "store.token";

/// Create the default secret store.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_store() -> Result<FileSecretStore, SecretError> {
    FileSecretStore::new()
}
