//! sync
//!
//! The pull and push workflows.
//!
//! Both operate on a [`DocumentStore`](crate::store::DocumentStore) and a
//! [`FileTree`](crate::files::FileTree), so they run unchanged against
//! the HTTP store in production and the mock store in tests. Remote calls
//! and file operations are sequential, one document at a time.

pub mod pull;
pub mod push;

pub use pull::{pull, PullOptions, PullSummary};
pub use push::{push, PushSummary};
