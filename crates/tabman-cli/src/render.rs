//! Terminal tables.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use tabman_core::ColumnRegistry;
use tabman_model::{ColumnDef, ColumnType, ImportIssue, Record};

/// Issues shown before the rest are summarized.
pub const MAX_LISTED_ISSUES: usize = 10;

/// One page of the table, ready to print.
#[derive(Debug, Clone)]
pub struct PageView {
    pub columns: Vec<ColumnDef>,
    pub rows: Vec<Record>,
    pub page: usize,
    pub page_count: usize,
    pub rows_per_page: usize,
    pub total: usize,
}

impl PageView {
    /// "Rows 11-20 of 23 (page 2/3)".
    pub fn footer(&self) -> String {
        if self.rows.is_empty() {
            return format!("No rows on page {} ({} matching)", self.page + 1, self.total);
        }
        let first = self.page * self.rows_per_page + 1;
        let last = first + self.rows.len() - 1;
        format!(
            "Rows {first}-{last} of {} (page {}/{})",
            self.total,
            self.page + 1,
            self.page_count.max(1)
        )
    }
}

pub fn page_table(view: &PageView) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(
        view.columns
            .iter()
            .map(|column| header_cell(&column.label))
            .collect::<Vec<_>>(),
    );
    for (idx, column) in view.columns.iter().enumerate() {
        if column.column_type == ColumnType::Number {
            align_column(&mut table, idx, CellAlignment::Right);
        }
    }
    for record in &view.rows {
        table.add_row(
            view.columns
                .iter()
                .map(|column| {
                    let value = record.field(column.id.as_str());
                    if value.is_missing() {
                        dim_cell("-")
                    } else {
                        Cell::new(value.render())
                    }
                })
                .collect::<Vec<_>>(),
        );
    }
    table
}

pub fn print_page(view: &PageView) {
    println!("{}", page_table(view));
    println!("{}", view.footer());
}

/// Issue table with at most [`MAX_LISTED_ISSUES`] rows, plus the summary
/// line for the rest when there are more.
pub fn issue_table(issues: &[ImportIssue]) -> (Table, Option<String>) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Field"),
        header_cell("Message"),
    ]);
    align_column(&mut table, 0, CellAlignment::Right);
    for issue in issues.iter().take(MAX_LISTED_ISSUES) {
        table.add_row(vec![
            Cell::new(issue.row),
            Cell::new(&issue.field).fg(Color::Yellow),
            Cell::new(&issue.message).fg(Color::Red),
        ]);
    }
    let more = issues
        .len()
        .checked_sub(MAX_LISTED_ISSUES)
        .filter(|&rest| rest > 0)
        .map(|rest| format!("... and {rest} more errors"));
    (table, more)
}

pub fn print_issues(issues: &[ImportIssue]) {
    let (table, more) = issue_table(issues);
    eprintln!("Import rejected: {} issue(s)", issues.len());
    eprintln!("{table}");
    if let Some(more) = more {
        eprintln!("{more}");
    }
}

pub fn columns_table(columns: &ColumnRegistry) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Label"),
        header_cell("Type"),
        header_cell("Visible"),
        header_cell("Required"),
    ]);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Center);
    for column in columns.columns() {
        table.add_row(vec![
            Cell::new(column.id.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&column.label),
            Cell::new(column.column_type.as_str()),
            flag_cell(column.visible),
            flag_cell(column.required),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn flag_cell(flag: bool) -> Cell {
    if flag {
        Cell::new("✓").fg(Color::Green)
    } else {
        dim_cell("-")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
