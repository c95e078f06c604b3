use crate::core::ReportRow;
use comfy_table::presets::ASCII_MARKDOWN;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use serde_json::Value;

/// Column that gets fixed two-decimal formatting and right alignment.
pub const NUMERIC_COLUMN: &str = "performance";

/// Renders report rows as a pipe-delimited markdown table.
///
/// Cells are looked up by header name; a missing key renders empty. Every
/// cell is turned into text here, so nothing downstream re-parses numbers.
pub fn render_table<H: AsRef<str>>(headers: &[H], rows: &[ReportRow]) -> String {
    let mut table = Table::new();
    table
        .load_preset(ASCII_MARKDOWN)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(headers.iter().map(|h| Cell::new(h.as_ref())));

    for row in rows {
        table.add_row(
            headers
                .iter()
                .map(|h| Cell::new(format_cell(h.as_ref(), row.get(h.as_ref())))),
        );
    }

    for (index, header) in headers.iter().enumerate() {
        let alignment = if header.as_ref() == NUMERIC_COLUMN {
            CellAlignment::Right
        } else {
            CellAlignment::Left
        };
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(alignment);
        }
    }

    table.to_string()
}

fn format_cell(column: &str, value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::Number(number)) if column == NUMERIC_COLUMN => match number.as_f64() {
            Some(v) => format!("{v:.2}"),
            None => number.to_string(),
        },
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
