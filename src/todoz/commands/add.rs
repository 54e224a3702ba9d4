use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{next_id, Todo};
use crate::store::DataStore;
use tracing::{info, warn};

pub fn run<S: DataStore>(store: &mut S, content: &str) -> Result<CmdResult> {
    if content.is_empty() {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::error("Please add content for your todo")));
    }

    let mut todos = store.load();
    let Some(id) = next_id(&todos) else {
        warn!("highest todo id is already u64::MAX");
        return Ok(CmdResult::default()
            .with_message(CmdMessage::error("No ids left for a new todo")));
    };
    let todo = Todo::new(id, content);
    todos.push(todo.clone());
    store.save(&todos)?;
    info!(id = todo.id, "added todo");

    Ok(CmdResult::default()
        .with_affected_todos(vec![todo])
        .with_message(CmdMessage::success("Added successfully"))
        .persisted())
}
