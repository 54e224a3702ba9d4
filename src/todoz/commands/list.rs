use crate::commands::CmdResult;
use crate::store::DataStore;
use std::str::FromStr;

/// Which todos `list` shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFilter {
    Completed,
    Incompleted,
}

impl ListFilter {
    fn wants(self, complete: bool) -> bool {
        match self {
            ListFilter::Completed => complete,
            ListFilter::Incompleted => !complete,
        }
    }
}

impl FromStr for ListFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(ListFilter::Completed),
            "incompleted" => Ok(ListFilter::Incompleted),
            other => Err(format!("Unknown filter: {}", other)),
        }
    }
}

/// Read-only: never saves.
pub fn run<S: DataStore>(store: &S, filter: Option<ListFilter>) -> CmdResult {
    let todos = store.load();
    let listed = match filter {
        None => todos,
        Some(filter) => todos
            .into_iter()
            .filter(|t| filter.wants(t.complete))
            .collect(),
    };

    CmdResult::default().with_listed_todos(listed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn fixture() -> StoreFixture {
        StoreFixture::new()
            .with_todo("a")
            .with_completed_todo("b")
            .with_todo("c")
            .with_completed_todo("d")
    }

    fn contents(result: &CmdResult) -> Vec<&str> {
        result
            .listed_todos
            .iter()
            .map(|t| t.content.as_str())
            .collect()
    }

    #[test]
    fn lists_everything_in_stored_order() {
        let fx = fixture();
        let result = run(&fx.store, None);
        assert_eq!(contents(&result), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn filters_completed_keeping_order() {
        let fx = fixture();
        let result = run(&fx.store, Some(ListFilter::Completed));
        assert_eq!(contents(&result), vec!["b", "d"]);
    }

    #[test]
    fn filters_incompleted_keeping_order() {
        let fx = fixture();
        let result = run(&fx.store, Some(ListFilter::Incompleted));
        assert_eq!(contents(&result), vec!["a", "c"]);
    }

    #[test]
    fn filters_partition_the_collection() {
        let fx = fixture();
        let done = run(&fx.store, Some(ListFilter::Completed)).listed_todos;
        let open = run(&fx.store, Some(ListFilter::Incompleted)).listed_todos;

        assert_eq!(done.len() + open.len(), fx.store.todos().len());
        for todo in fx.store.todos() {
            assert!(done.contains(todo) ^ open.contains(todo));
        }
    }

    #[test]
    fn does_not_save() {
        let fx = fixture();
        run(&fx.store, None);
        assert_eq!(fx.store.writes(), 0);
    }

    #[test]
    fn parses_filter_names() {
        assert_eq!("completed".parse::<ListFilter>(), Ok(ListFilter::Completed));
        assert_eq!("incompleted".parse::<ListFilter>(), Ok(ListFilter::Incompleted));
        assert!("done".parse::<ListFilter>().is_err());
        assert!("Completed".parse::<ListFilter>().is_err());
    }
}
