//! Plain-text rendering of a table view.

use tabula_lib::table::{Alignment, EmptyState, TableView};
use unicode_width::UnicodeWidthStr;

/// Renders the header, rows and pagination footer as aligned text.
pub fn render(view: &TableView) -> String {
    let labels: Vec<String> = view
        .header
        .iter()
        .map(|cell| match cell.indicator() {
            "" => cell.label.clone(),
            indicator => format!("{} {}", cell.label, indicator),
        })
        .collect();

    let mut widths: Vec<usize> = labels.iter().map(|label| label.width()).collect();
    for row in &view.rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.display.width());
        }
    }

    let mut out = String::new();
    let header_line: Vec<String> = labels
        .iter()
        .zip(&widths)
        .map(|(label, &width)| pad(label, width, Alignment::Left))
        .collect();
    push_line(&mut out, &header_line.join("  "));
    let rule: Vec<String> = widths.iter().map(|&width| "-".repeat(width)).collect();
    push_line(&mut out, &rule.join("  "));

    for row in &view.rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .zip(&view.header)
            .map(|((cell, &width), header)| pad(&cell.display, width, header.align))
            .collect();
        push_line(&mut out, &line.join("  "));
    }

    match view.empty {
        Some(EmptyState::NoRecords) => push_line(&mut out, "No records found."),
        Some(EmptyState::NoMatches) => {
            push_line(&mut out, "No records match the current search or filters.")
        }
        None => {}
    }

    let pagination = &view.pagination;
    if pagination.visible {
        let footer = format!(
            "Page {} of {} (rows {}-{} of {})",
            pagination.current_page + 1,
            pagination.page_count,
            pagination.first_row,
            pagination.last_row,
            pagination.filtered
        );
        push_line(&mut out, &footer);
    }

    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}

fn pad(text: &str, width: usize, align: Alignment) -> String {
    let fill = width.saturating_sub(text.width());
    match align {
        Alignment::Left => format!("{}{}", text, " ".repeat(fill)),
        Alignment::Right => format!("{}{}", " ".repeat(fill), text),
        Alignment::Center => {
            let left = fill / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(fill - left))
        }
    }
}

#[cfg(test)]
mod tests {
    use tabula_lib::model::Record;
    use tabula_lib::table::{Column, Table, TableConfig};

    use super::*;

    fn table() -> Table<Record> {
        Table::with_config(
            vec![
                Column::field("name", "Name").sortable(),
                Column::field("units", "Units").align(Alignment::Right),
            ],
            TableConfig::default().with_page_size(2),
        )
        .with_rows(vec![
            Record::new().set("name", "Alice").set("units", 12i64),
            Record::new().set("name", "Bob").set("units", 3i64),
            Record::new().set("name", "Carol").set("units", 7i64),
        ])
    }

    #[test]
    fn test_render_page_with_footer() {
        let mut table = table();
        table.set_sort("name");
        assert_eq!(
            render(&table.view()),
            "Name ↑  Units\n\
             ------  -----\n\
             Alice      12\n\
             Bob         3\n\
             Page 1 of 2 (rows 1-2 of 3)\n"
        );
    }

    #[test]
    fn test_render_empty_search() {
        let mut table = table();
        table.apply_global_filter("zed");
        let text = render(&table.view());
        assert!(text.ends_with("No records match the current search or filters.\n"));
        assert!(!text.contains("Page"));
    }
}
