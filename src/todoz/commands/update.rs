use crate::commands::{CmdMessage, CmdResult, TodoUpdate};
use crate::error::Result;
use crate::store::DataStore;
use tracing::info;

use super::helpers::has_id;

pub fn run<S: DataStore>(store: &mut S, id: i64, update: &TodoUpdate) -> Result<CmdResult> {
    let mut todos = store.load();

    let Some(todo) = todos.iter_mut().find(|t| has_id(t, id)) else {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::warning("The todo item is not in the list")));
    };

    if let Some(complete) = update.complete {
        todo.complete = complete;
    }
    if let Some(content) = &update.content {
        todo.content = content.clone();
    }
    let updated = todo.clone();

    store.save(&todos)?;
    info!(id = updated.id, "updated todo");

    Ok(CmdResult::default()
        .with_affected_todos(vec![updated])
        .with_message(CmdMessage::success("Updated successfully"))
        .persisted())
}
