use crate::error::Result;
use crate::model::{Todo, TodoPatch};
use crate::store::TodoStore;
use tracing::info;

use super::helpers::position_of;

pub fn run<S: TodoStore>(store: &mut S, id: u64, patch: TodoPatch) -> Result<Todo> {
    let mut todos = store.load()?;
    let pos = position_of(&todos, id)?;

    let todo = &mut todos[pos];
    if let Some(title) = patch.title {
        todo.title = title;
    }
    if let Some(completed) = patch.completed {
        todo.completed = completed;
    }
    let updated = todo.clone();

    store.save(&todos)?;
    info!(id, "todo updated");
    Ok(updated)
}
