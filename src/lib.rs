//! Quire - sync documents between a remote content store and a local
//! Markdown tree
//!
//! Quire pulls every document in a workspace down to local `.md` files and
//! pushes edited files back up. A document's metadata (category, tags,
//! remote id, revision, WIP status) is encoded into the file *name* by the
//! title codec, so the tree stays plain files that any editor can work
//! with.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to workflows)
//! - [`sync`] - Pull and push workflows
//! - [`core`] - Domain types: the document record, title codec, paths, config
//! - [`store`] - Abstraction for the remote content store (HTTP + mock)
//! - [`files`] - Local file tree operations
//! - [`secrets`] - Secret storage for the API token
//! - [`ui`] - User interaction utilities
//!
//! # The title codec
//!
//! The wire format between the store's structured metadata and the local
//! file system is the title string:
//!
//! ```text
//! ops/runbooks/oncall rotation #infra #oncall [id:42] [rev:7] [WIP]
//! ```
//!
//! [`core::document::Document::to_title`] and
//! [`core::document::Document::from_title`] are the only places that
//! produce and consume this format; everything else treats titles as
//! opaque file names.

pub mod cli;
pub mod core;
pub mod files;
pub mod secrets;
pub mod store;
pub mod sync;
pub mod ui;
