//! Tests for debounced search feeding a table.

use std::time::Duration;

use tabula_lib::debounce::SearchInput;
use tabula_lib::model::Record;
use tabula_lib::table::{Column, Table, TableConfig};

fn staff_table() -> Table<Record> {
    Table::with_config(
        vec![Column::field("name", "Name"), Column::field("role", "Role")],
        TableConfig::default().with_page_size(1),
    )
    .with_rows(vec![
        Record::new().set("name", "Alice").set("role", "agent"),
        Record::new().set("name", "Alina").set("role", "admin"),
        Record::new().set("name", "Bob").set("role", "agent"),
    ])
}

#[tokio::test(start_paused = true)]
async fn test_typing_burst_commits_once() {
    let mut table = staff_table();
    let (mut search, mut commits) = SearchInput::new(table.config().search_debounce);

    for text in ["a", "al", "ali", "alin"] {
        search.input(text);
        table.set_search_input(search.text());
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    assert_eq!(table.search_draft(), "alin");
    assert_eq!(table.filtered_len(), 3);
    assert!(commits.try_recv().is_err());

    tokio::time::sleep(Duration::from_millis(500)).await;
    let query = commits.recv().await.expect("debounced query");
    table.apply_global_filter(query);

    assert_eq!(table.search_query(), "alin");
    assert_eq!(table.filtered_len(), 1);
    assert!(commits.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_committed_search_returns_to_first_page() {
    let mut table = staff_table();
    table.set_page(2);
    let (mut search, mut commits) = SearchInput::new(Duration::from_millis(500));

    search.input("agent");
    tokio::time::sleep(Duration::from_millis(600)).await;
    if let Some(query) = commits.recv().await {
        table.apply_global_filter(query);
    }

    assert_eq!(table.current_page(), 0);
    assert_eq!(table.page_count(), 2);
}
