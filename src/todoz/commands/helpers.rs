use crate::model::Todo;

/// Parse a user-supplied id. Anything that is not a base-10 integer is
/// rejected; negative values parse but never match a todo.
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

pub fn has_id(todo: &Todo, id: i64) -> bool {
    u64::try_from(id).is_ok_and(|id| todo.id == id)
}
