use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use tracing::info;

use super::helpers::has_id;

pub fn run<S: DataStore>(store: &mut S, id: i64) -> Result<CmdResult> {
    let todos = store.load();

    if !todos.iter().any(|t| has_id(t, id)) {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::warning("A todo is not in the list")));
    }

    // Ids are unique, but every match goes if a hand-edited file duplicated one
    let (removed, kept): (Vec<_>, Vec<_>) = todos.into_iter().partition(|t| has_id(t, id));
    store.save(&kept)?;
    info!(id, removed = removed.len(), "deleted todo");

    Ok(CmdResult::default()
        .with_affected_todos(removed)
        .with_message(CmdMessage::success("Deleted successfully"))
        .persisted())
}
