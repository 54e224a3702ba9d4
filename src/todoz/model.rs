use serde::{Deserialize, Serialize};

/// A single task record.
///
/// The content is stored under the `todo` key so documents written by older
/// versions of the tool keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    #[serde(rename = "todo")]
    pub content: String,
    pub complete: bool,
}

impl Todo {
    pub fn new(id: u64, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            complete: false,
        }
    }
}

/// Id for the next todo appended to `todos`: one past the highest id, or 0
/// for an empty collection. `None` once the highest id is `u64::MAX`.
pub fn next_id(todos: &[Todo]) -> Option<u64> {
    match todos.iter().map(|t| t.id).max() {
        None => Some(0),
        Some(max) => max.checked_add(1),
    }
}
