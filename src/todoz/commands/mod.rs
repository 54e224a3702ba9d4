//! # Command Layer
//!
//! One module per operation. Each `run` function takes a store plus typed
//! arguments, performs at most one load and at most one save, and returns a
//! [`CmdResult`].
//!
//! User-input problems (empty content, unknown id, ...) are not errors here:
//! they come back as messages in the result and nothing is persisted. An
//! `Err` means the store failed to write.

use crate::model::Todo;

pub mod add;
pub mod delete;
pub mod delete_all;
pub mod helpers;
pub mod list;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Todos created, changed or removed by the command.
    pub affected_todos: Vec<Todo>,
    /// Todos to display (only set by `list`).
    pub listed_todos: Vec<Todo>,
    /// Whether the command wrote the collection back.
    pub persisted: bool,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_todos(mut self, todos: Vec<Todo>) -> Self {
        self.affected_todos = todos;
        self
    }

    pub fn with_listed_todos(mut self, todos: Vec<Todo>) -> Self {
        self.listed_todos = todos;
        self
    }

    pub fn persisted(mut self) -> Self {
        self.persisted = true;
        self
    }
}

/// Fields to patch on an existing todo. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct TodoUpdate {
    pub content: Option<String>,
    pub complete: Option<bool>,
}

impl TodoUpdate {
    pub fn new(content: Option<String>, complete: Option<bool>) -> Self {
        Self { content, complete }
    }
}
