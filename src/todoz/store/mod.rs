//! # Storage Layer
//!
//! The [`DataStore`] trait is the only way the command layer touches persisted
//! todos. A store holds exactly one collection and always reads and writes it
//! wholesale: there are no per-item operations, no partial updates and no
//! in-place patching.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - The whole collection lives in one JSON document (`data.json` by default)
//!   - Every save replaces the document through a temp file + rename
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate a corrupt document or a failing write
//!
//! ## Load Policy
//!
//! Reading is **fail-open**. [`DataStore::load`] never fails: a document that
//! is missing yields an empty collection, and one that cannot be read or
//! parsed is logged as an error and *also* yields an empty collection. The
//! next save then overwrites whatever was there. Callers cannot tell a
//! corrupt document from an empty list; use [`DataStore::read`] when that
//! distinction matters.
//!
//! Writing is not fail-open: a failed save is returned to the caller.
//!
//! ## Document Format
//!
//! ```text
//! [{"id":0,"todo":"buy milk","complete":false}, ...]
//! ```

use crate::error::Result;
use crate::model::Todo;
use tracing::{debug, error};

pub mod fs;
pub mod memory;

/// Abstract interface for todo storage.
pub trait DataStore {
    /// Read the persisted collection, surfacing any read or parse failure.
    ///
    /// A store with nothing persisted yet returns an empty collection.
    fn read(&self) -> Result<Vec<Todo>>;

    /// Replace the persisted collection with `todos`.
    fn write(&mut self, todos: &[Todo]) -> Result<()>;

    /// Load the collection, degrading any failure to an empty list.
    fn load(&self) -> Vec<Todo> {
        match self.read() {
            Ok(todos) => {
                debug!(count = todos.len(), "loaded todos");
                todos
            }
            Err(e) => {
                error!("failed to load todos, continuing with an empty list: {}", e);
                Vec::new()
            }
        }
    }

    /// Persist the full collection.
    fn save(&mut self, todos: &[Todo]) -> Result<()> {
        debug!(count = todos.len(), "saving todos");
        self.write(todos)
    }
}
