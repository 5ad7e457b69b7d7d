use crate::error::{Result, TodozError};
use crate::model::{NewTodo, Todo};
use crate::store::TodoStore;
use tracing::info;

use super::helpers::next_id;

pub const TITLE_REQUIRED: &str = "title is required";

pub fn run<S: TodoStore>(store: &mut S, new_todo: NewTodo) -> Result<Todo> {
    let title = match new_todo.title {
        Some(title) if !title.is_empty() => title,
        _ => return Err(TodozError::Validation(TITLE_REQUIRED.to_string())),
    };

    let mut todos = store.load()?;
    let todo = Todo::new(next_id(&todos), title, new_todo.completed.unwrap_or(false));
    todos.push(todo.clone());
    store.save(&todos)?;

    info!(id = todo.id, "todo created");
    Ok(todo)
}
