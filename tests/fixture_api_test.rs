use todoz::api::{MessageLevel, TodoApi};
use todoz::store::memory::fixtures::StoreFixture;

fn setup() -> TodoApi<todoz::store::memory::InMemoryStore> {
    let fixture = StoreFixture::new()
        .with_todo("write report")
        .with_completed_todo("buy milk")
        .with_todo("call mom");
    TodoApi::new(fixture.store)
}

#[test]
fn test_list_filters_seeded_todos() {
    let api = setup();

    let done = api.list_todos(Some("completed")).unwrap();
    let contents: Vec<&str> = done.listed_todos.iter().map(|t| t.content.as_str()).collect();
    assert_eq!(contents, vec!["buy milk"]);

    let open = api.list_todos(Some("incompleted")).unwrap();
    assert_eq!(open.listed_todos.len(), 2);
}

#[test]
fn test_add_continues_after_seeded_ids() {
    let mut api = setup();
    let result = api.add_todo("water plants").unwrap();

    assert!(result.persisted);
    assert_eq!(result.affected_todos[0].id, 3);
    assert_eq!(api.store().writes(), 1);
}

#[test]
fn test_delete_completed_keeps_open_todos() {
    let mut api = setup();
    let result = api.delete_all(Some(true)).unwrap();

    assert_eq!(result.affected_todos.len(), 1);
    let ids: Vec<u64> = api.store().todos().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![0, 2]);
}

#[test]
fn test_invalid_id_leaves_fixture_untouched() {
    let mut api = setup();
    let result = api.update_todo("two", None, Some(true)).unwrap();

    assert_eq!(result.messages[0].level, MessageLevel::Error);
    assert_eq!(api.store().writes(), 0);
    assert_eq!(api.store().todos().len(), 3);
}
