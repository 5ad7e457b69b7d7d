//! # Storage Layer
//!
//! The todo collection lives behind the [`TodoStore`] trait so the command layer
//! never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - The whole collection is a single JSON array in one file
//!   - Pretty-printed with 2-space indentation
//!   - Writes go through a temp file and a rename
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Read-All / Write-All
//!
//! There are no partial reads or updates. Every operation loads the full collection,
//! and every mutation writes the full collection back:
//!
//! ```text
//! load() ──► Vec<Todo> ──► mutate ──► save(&[Todo])
//! ```
//!
//! A store that cannot read its backing state (missing or corrupt file) reports an
//! empty collection instead of an error. The next save replaces whatever was there.
//!
//! Stores carry no locking of their own. Callers that share a store across threads
//! must serialize the load-mutate-save cycle themselves (the HTTP service does this
//! with one mutex around its [`crate::api::TodoApi`]).

use crate::error::Result;
use crate::model::Todo;

pub mod fs;
pub mod memory;

/// Abstract interface for todo persistence.
pub trait TodoStore {
    /// Load the full collection in storage order.
    fn load(&self) -> Result<Vec<Todo>>;

    /// Replace the stored collection with `todos`.
    fn save(&mut self, todos: &[Todo]) -> Result<()>;
}
