use super::TodoStore;
use crate::error::Result;
use crate::model::Todo;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    todos: Vec<Todo>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl TodoStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Todo>> {
        Ok(self.todos.clone())
    }

    fn save(&mut self, todos: &[Todo]) -> Result<()> {
        self.todos = todos.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---
