use crate::error::Result;
use crate::store::TodoStore;
use tracing::info;

use super::helpers::position_of;

pub fn run<S: TodoStore>(store: &mut S, id: u64) -> Result<()> {
    let mut todos = store.load()?;
    let pos = position_of(&todos, id)?;
    todos.remove(pos);
    store.save(&todos)?;

    info!(id, "todo deleted");
    Ok(())
}
