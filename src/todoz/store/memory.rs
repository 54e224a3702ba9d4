use super::DataStore;
use crate::error::{Result, TodoError};
use crate::model::Todo;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    todos: Vec<Todo>,
    writes: usize,
    simulate_corrupt: bool,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos,
            ..Self::default()
        }
    }

    /// The collection as currently held, bypassing the load policy.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Number of successful writes since creation.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Make every read fail as if the document were malformed.
    pub fn set_simulate_corrupt(&mut self, simulate: bool) {
        self.simulate_corrupt = simulate;
    }

    /// Make every write fail.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }
}

impl DataStore for InMemoryStore {
    fn read(&self) -> Result<Vec<Todo>> {
        if self.simulate_corrupt {
            return Err(TodoError::Store("Simulated corrupt document".to_string()));
        }
        Ok(self.todos.clone())
    }

    fn write(&mut self, todos: &[Todo]) -> Result<()> {
        if self.simulate_write_error {
            return Err(TodoError::Store("Simulated write error".to_string()));
        }
        self.todos = todos.to_vec();
        self.writes += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::next_id;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_todos(mut self, count: usize) -> Self {
            for i in 0..count {
                self = self.with_todo(&format!("Todo {}", i + 1));
            }
            self
        }

        fn fresh_id(&self) -> u64 {
            next_id(&self.store.todos).expect("fixture ran out of todo ids")
        }

        pub fn with_todo(mut self, content: &str) -> Self {
            let todo = Todo::new(self.fresh_id(), content);
            self.store.todos.push(todo);
            self
        }

        pub fn with_completed_todo(mut self, content: &str) -> Self {
            let mut todo = Todo::new(self.fresh_id(), content);
            todo.complete = true;
            self.store.todos.push(todo);
            self
        }
    }
}
