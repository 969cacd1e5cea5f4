//! Terminal output rendering for search results.

use comfy_table::{Attribute, Cell, Table};
use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::models::DocumentResult;

/// Check if stdout is a terminal.
pub fn is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// Short display name for a book: the last segment of its source URL.
fn book_label(book: &str) -> &str {
    book.rsplit('/').next().unwrap_or(book)
}

/// One table row per entry: year, book, entry text (comfy-table wraps the
/// long entry column to the terminal width).
pub fn render_table(results: &[DocumentResult]) -> String {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Year", "Book", "Entry"]);

    for result in results {
        for entry in &result.entries {
            table.add_row(vec![
                Cell::new(result.year).add_attribute(Attribute::Bold),
                Cell::new(book_label(&result.book)),
                Cell::new(entry),
            ]);
        }
    }
    table.to_string()
}

/// Machine-readable output.
pub fn render_json(results: &[DocumentResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

/// Year and book headers with indented entries.
pub fn render_plain(results: &[DocumentResult], color: bool) -> String {
    let mut out = String::new();
    for result in results {
        if color {
            out.push_str(&format!(
                "{} {}\n",
                result.year.bold().green(),
                result.book
            ));
        } else {
            out.push_str(&format!("{} {}\n", result.year, result.book));
        }
        for entry in &result.entries {
            out.push_str(&format!("  - {}\n", entry));
        }
        out.push('\n');
    }
    out
}
