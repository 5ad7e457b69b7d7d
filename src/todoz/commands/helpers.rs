use crate::error::{Result, TodozError};
use crate::model::Todo;

/// Position of the todo with `id`, by linear scan.
pub fn position_of(todos: &[Todo], id: u64) -> Result<usize> {
    todos
        .iter()
        .position(|t| t.id == id)
        .ok_or(TodozError::TodoNotFound)
}

/// Next id to hand out: one past the largest id present, or 1 when empty.
pub fn next_id(todos: &[Todo]) -> u64 {
    todos.iter().map(|t| t.id).max().map_or(1, |max| max + 1)
}
