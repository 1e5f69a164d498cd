//! Table formatting utilities

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, *};

/// Table formatter
pub struct TableFormatter;

impl TableFormatter {
    /// Create a new table with default styling
    pub fn new() -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table
    }

    /// Create a table with headers, right-aligning every column after the first
    pub fn numeric<R>(headers: Vec<&str>, rows: Vec<R>) -> Table
    where
        R: Into<Row>,
    {
        let width = headers.len();
        let mut table = Self::new();
        table.set_header(headers);

        for row in rows {
            table.add_row(row);
        }

        for index in 1..width {
            if let Some(column) = table.column_mut(index) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }

        table
    }

    /// Create a key-value table
    pub fn key_value(items: Vec<(&str, String)>) -> Table {
        let mut table = Self::new();

        for (key, value) in items {
            table.add_row(vec![key.to_string(), value]);
        }

        table
    }
}

/// Cell for a yes/no flag, green when set and colors are enabled
pub fn flag_cell(value: bool) -> Cell {
    let cell = Cell::new(if value { "yes" } else { "no" });
    if value && colored::control::SHOULD_COLORIZE.should_colorize() {
        cell.fg(Color::Green)
    } else {
        cell
    }
}
