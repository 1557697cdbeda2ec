//! Markdown table rendering.
//!
//! Turns a [`Table`] into a GitHub-flavored markdown table padded for
//! visual alignment. Widths are measured in characters after embedded
//! newlines have been rewritten as `<br>`, so multi-line cells stay on
//! one table row.

use crate::error::{RenderError, Result};
use crate::table::Table;

/// Render a table as an aligned markdown table.
///
/// Emits a header row, a dash separator row, and one row per record,
/// `|`-delimited and space-padded to each column's maximum cell width.
/// The surrounding whitespace of the assembled table is trimmed.
///
/// A table with no data rows fails with [`RenderError::EmptyTable`]; the
/// driver never resolves a placeholder to an empty table on purpose, and
/// emitting a header with no body would not be a well-formed table.
pub fn render_table(table: &Table) -> Result<String> {
    if table.is_empty() {
        return Err(RenderError::EmptyTable {
            path: table.source().to_owned(),
        });
    }

    // Rewrite newlines before measuring so padding matches what is emitted.
    let cells: Vec<Vec<String>> = table
        .records()
        .iter()
        .map(|record| record.iter().map(|cell| cell.replace('\n', "<br>")).collect())
        .collect();

    let widths: Vec<usize> = table
        .columns()
        .iter()
        .enumerate()
        .map(|(i, name)| {
            cells
                .iter()
                .fold(name.chars().count(), |width, row: &Vec<String>| {
                    width.max(row[i].chars().count())
                })
        })
        .collect();

    let mut out = String::new();
    out.push_str(&format_row(
        table.columns().iter().map(String::as_str),
        &widths,
    ));
    out.push('\n');
    out.push_str(&separator_row(&widths));
    out.push('\n');
    for row in &cells {
        out.push_str(&format_row(row.iter().map(String::as_str), &widths));
        out.push('\n');
    }

    Ok(out.trim().to_string())
}

/// One `|`-delimited line, each cell left-aligned and padded to its
/// column width.
fn format_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let mut line = String::new();
    for (cell, &width) in cells.zip(widths) {
        line.push_str(&format!("| {cell:<width$} "));
    }
    line.push('|');
    line
}

/// The header/body separator line, one dash run per column.
fn separator_row(widths: &[usize]) -> String {
    let mut line = String::new();
    for &width in widths {
        line.push_str(&format!("| {} ", "-".repeat(width)));
    }
    line.push('|');
    line
}
