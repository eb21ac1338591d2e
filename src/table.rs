//! Aligned text-table rendering of a record sequence
//!
//! Columns, in order: importance marker (`!` or empty), user, date,
//! source-file basename, comment. Each column carries a maximum width cap;
//! the effective width is the smaller of the cap and the widest value in
//! that column (header included), but never narrower than the header label.
//! Overlong values are truncated with a trailing ellipsis so the result
//! exactly fills the column; short values are padded with spaces. Widths
//! are measured in characters, not bytes.

use crate::todo::Todo;

/// Printed when the record set to render is empty
pub const NO_RESULTS: &str = "No TODOs found";

/// Separator between adjacent columns
const SEPARATOR: &str = "  |  ";

/// Header label and maximum width per column, in display order
const COLUMNS: [(&str, usize); 5] = [
    ("!", 1),
    ("user", 10),
    ("date", 10),
    ("file", 20),
    ("comment", 50),
];

/// Render records into printable lines
///
/// # Arguments
/// * `todos` - Records to display, already filtered and ordered
///
/// # Returns
/// Header, rule, one line per record, and a closing rule; or the single
/// no-results line when `todos` is empty.
pub fn render(todos: &[Todo]) -> Vec<String> {
    if todos.is_empty() {
        return vec![NO_RESULTS.to_string()];
    }

    let rows: Vec<[String; 5]> = todos.iter().map(row).collect();
    let widths = column_widths(&rows);

    let header = format_row(&COLUMNS.map(|(label, _)| label.to_string()), &widths);
    let rule = "-".repeat(rule_length(&widths));

    let mut lines = vec![header, rule.clone()];
    lines.extend(rows.iter().map(|r| format_row(r, &widths)));
    lines.push(rule);
    lines
}

/// Cell values for one record, in column order
fn row(todo: &Todo) -> [String; 5] {
    [
        if todo.is_important() { "!" } else { "" }.to_string(),
        todo.author.clone(),
        todo.date.map(|d| d.to_string()).unwrap_or_default(),
        todo.file_name(),
        todo.message.clone(),
    ]
}

/// Effective width of each column given the rows to render
fn column_widths(rows: &[[String; 5]]) -> [usize; 5] {
    let mut widths = [0usize; 5];
    for (i, (label, cap)) in COLUMNS.iter().enumerate() {
        let content_max = rows
            .iter()
            .map(|r| r[i].chars().count())
            .chain(std::iter::once(label.chars().count()))
            .max()
            .unwrap_or(0);
        widths[i] = content_max.min(*cap).max(label.chars().count());
    }
    widths
}

/// Total rule length: column widths plus the width consumed by separators
fn rule_length(widths: &[usize; 5]) -> usize {
    widths.iter().sum::<usize>() + SEPARATOR.chars().count() * (widths.len() - 1)
}

fn format_row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| fit(cell, width))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Truncate with a trailing ellipsis or pad with spaces to exactly `width`
fn fit(value: &str, width: usize) -> String {
    if value.chars().count() > width {
        let mut truncated: String = value.chars().take(width - 1).collect();
        truncated.push('…');
        truncated
    } else {
        format!("{value:<width$}")
    }
}
