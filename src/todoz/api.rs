//! # API Facade
//!
//! The single entry point for todo operations, whatever the UI.
//!
//! The API takes raw user input (id strings, filter names), turns it into
//! typed values and dispatches to `commands/*.rs`. Input that cannot be
//! normalized is answered with a message in the [`CmdResult`], the same way
//! the commands report their own rejections, so callers only handle one shape.
//!
//! `TodoApi<S: DataStore>` is generic over the store:
//! - Production: `TodoApi<FileStore>`
//! - Testing: `TodoApi<InMemoryStore>`
//!
//! Tests here check dispatch and input normalization, not command logic.

use crate::commands::{self, helpers::parse_id};
use crate::error::Result;
use crate::store::DataStore;
use tracing::debug;

pub struct TodoApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> TodoApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add_todo(&mut self, content: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, content)
    }

    pub fn list_todos(&self, filter: Option<&str>) -> Result<commands::CmdResult> {
        let filter = match filter.map(str::parse::<ListFilter>).transpose() {
            Ok(filter) => filter,
            Err(e) => {
                debug!("{}", e);
                return Ok(invalid("Incorrect arguments!"));
            }
        };
        Ok(commands::list::run(&self.store, filter))
    }

    pub fn update_todo(
        &mut self,
        id: &str,
        content: Option<String>,
        complete: Option<bool>,
    ) -> Result<commands::CmdResult> {
        let Some(id) = parse_id(id) else {
            return Ok(invalid("Invalid id"));
        };
        let update = commands::TodoUpdate::new(content, complete);
        commands::update::run(&mut self.store, id, &update)
    }

    pub fn delete_todo(&mut self, id: &str) -> Result<commands::CmdResult> {
        let Some(id) = parse_id(id) else {
            return Ok(invalid("Invalid id"));
        };
        commands::delete::run(&mut self.store, id)
    }

    pub fn delete_all(&mut self, delete_completed: Option<bool>) -> Result<commands::CmdResult> {
        commands::delete_all::run(&mut self.store, delete_completed)
    }
}

fn invalid(message: &str) -> commands::CmdResult {
    commands::CmdResult::default().with_message(commands::CmdMessage::error(message))
}

pub use commands::list::ListFilter;
pub use commands::{CmdMessage, CmdResult, MessageLevel, TodoUpdate};
