use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use tracing::info;

/// Clear the list.
///
/// - `None`: remove everything. The stored list is not read first.
/// - `Some(true)`: remove completed todos only.
/// - `Some(false)`: do nothing. It does *not* remove incomplete todos.
pub fn run<S: DataStore>(store: &mut S, delete_completed: Option<bool>) -> Result<CmdResult> {
    match delete_completed {
        None => {
            store.save(&[])?;
            info!("cleared todo list");
            Ok(CmdResult::default()
                .with_message(CmdMessage::success("Deleted successfully todo list."))
                .persisted())
        }
        Some(true) => {
            let (removed, kept): (Vec<_>, Vec<_>) =
                store.load().into_iter().partition(|t| t.complete);
            store.save(&kept)?;
            info!(removed = removed.len(), "cleared completed todos");
            Ok(CmdResult::default()
                .with_affected_todos(removed)
                .with_message(CmdMessage::success(
                    "Deleted successfully completed todo items.",
                ))
                .persisted())
        }
        // TODO: decide whether `false` should remove incomplete todos instead
        Some(false) => Ok(CmdResult::default().with_message(CmdMessage::info("Nothing deleted."))),
    }
}
