//! Listings example - a property list page driven by a Table.
//!
//! Simulates a user typing into the search box, clicking the price header
//! twice and paging forward, printing the visible page after each step.

use std::time::Duration;

use tabula_lib::debounce::SearchInput;
use tabula_lib::query::Criterion;
use tabula_lib::table::{Alignment, Column, Table, TableConfig, TableView};

#[derive(Debug, Clone)]
struct Listing {
    title: String,
    city: String,
    price: i64,
    featured: bool,
}

fn listings() -> Vec<Listing> {
    let cities = ["Doha", "Lusail", "Al Wakra", "Al Khor"];
    (0..40)
        .map(|i| Listing {
            title: format!("Listing {:02}", i),
            city: cities[i % cities.len()].to_string(),
            price: 250_000 + ((i as i64 * 7_919) % 40) * 25_000,
            featured: i % 5 == 0,
        })
        .collect()
}

fn columns() -> Vec<Column<Listing>> {
    vec![
        Column::new("title", "Title", |l: &Listing| l.title.clone().into()).sortable(),
        Column::new("city", "City", |l: &Listing| l.city.clone().into()),
        Column::new("price", "Price", |l: &Listing| l.price.into())
            .sortable()
            .align(Alignment::Right)
            .format(|l: &Listing| format!("{} QAR", l.price)),
        Column::new("featured", "Featured", |l: &Listing| l.featured.into())
            .searchable(false)
            .format(|l: &Listing| if l.featured { "★".into() } else { String::new() }),
    ]
}

fn print(step: &str, view: &TableView) {
    println!("== {}", step);
    for row in &view.rows {
        let cells: Vec<&str> = row.iter().map(|cell| cell.display.as_str()).collect();
        println!("  {}", cells.join(" | "));
    }
    let p = &view.pagination;
    println!(
        "  page {}/{} ({} rows)\n",
        p.current_page + 1,
        p.page_count,
        p.filtered
    );
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = TableConfig::default()
        .with_page_size(5)
        .with_search_debounce(Duration::from_millis(300));
    let (mut search, mut commits) = SearchInput::new(config.search_debounce);
    let mut table = Table::with_config(columns(), config).with_rows(listings());

    print("initial", &table.view());

    for text in ["l", "lu", "lus"] {
        search.input(text);
        table.set_search_input(search.text());
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    if let Some(query) = commits.recv().await {
        table.apply_global_filter(query);
    }
    print("search 'lus'", &table.view());

    table.set_sort("price");
    table.set_sort("price");
    print("price descending", &table.view());

    table.set_filter("featured", Criterion::tristate(Some(true)));
    print("featured only", &table.view());

    table.reset_filters();
    search.clear();
    table.next_page();
    print("reset, page 2", &table.view());
}
