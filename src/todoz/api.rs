//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for todo
//! operations, whichever front end drives them.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs** (raw path ids become numeric ids)
//! - **Returns structured types**, never response bodies or status codes
//!
//! `TodoApi<S: TodoStore>` is generic over the storage backend:
//! - Production: `TodoApi<FileStore>`
//! - Testing: `TodoApi<InMemoryStore>`

use crate::commands;
use crate::error::{Result, TodozError};
use crate::model::{NewTodo, Todo, TodoPatch};
use crate::store::TodoStore;

pub struct TodoApi<S: TodoStore> {
    store: S,
}

impl<S: TodoStore> TodoApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_todos(&self) -> Result<Vec<Todo>> {
        commands::list::run(&self.store)
    }

    pub fn create_todo(&mut self, new_todo: NewTodo) -> Result<Todo> {
        commands::create::run(&mut self.store, new_todo)
    }

    pub fn update_todo(&mut self, id: &str, patch: TodoPatch) -> Result<Todo> {
        let id = parse_id(id)?;
        commands::update::run(&mut self.store, id, patch)
    }

    pub fn delete_todo(&mut self, id: &str) -> Result<()> {
        let id = parse_id(id)?;
        commands::delete::run(&mut self.store, id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Ids arrive as raw path segments. Anything that is not a non-negative integer
/// can never name a stored todo, so it resolves to not-found.
fn parse_id(raw: &str) -> Result<u64> {
    raw.trim().parse().map_err(|_| TodozError::TodoNotFound)
}
