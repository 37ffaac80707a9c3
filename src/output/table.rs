//! Fixed-width table rendering
//!
//! Every column has a fixed display width. Cells are left-aligned and padded
//! with spaces to that width; there are no borders, separators or padding
//! between cells. A value wider than its column is cut to the column width
//! and ends in [`TRUNCATION_SUFFIX`].

use tabled::{
    Table,
    builder::Builder,
    grid::util::string::{get_char_width, get_string_width},
    settings::{Modify, Padding, Style, Width, object::Columns},
};

/// Marker placed at the end of a truncated cell
pub const TRUNCATION_SUFFIX: &str = "...";

/// One rendered column: header, fixed width and a projection from the row type.
pub struct ColumnSpec<T> {
    /// Header text shown in the first line
    pub header: &'static str,
    /// Display width in terminal columns
    pub width: usize,
    /// Extracts the cell text from a row
    pub value: fn(&T) -> String,
}

/// Render rows under a fixed column schema.
///
/// Produces one header line followed by one line per row, in input order,
/// joined by `\n` without a trailing newline. An empty `rows` slice yields the
/// header line only.
pub fn render<T>(columns: &[ColumnSpec<T>], rows: &[T]) -> String {
    let mut builder = Builder::default();
    builder.push_record(columns.iter().map(|c| sanitize(c.header)));
    for row in rows {
        builder.push_record(
            columns
                .iter()
                .map(|c| fit(&sanitize(&(c.value)(row)), c.width)),
        );
    }

    let mut table = builder.build();
    table.with(Style::empty()).with(Padding::zero());
    apply_widths(&mut table, columns);

    table.to_string()
}

fn apply_widths<T>(table: &mut Table, columns: &[ColumnSpec<T>]) {
    for (index, column) in columns.iter().enumerate() {
        table.with(Modify::new(Columns::new(index..=index)).with(Width::increase(column.width)));
    }
}

/// Cut a cell to at most `width` display columns, ending in [`TRUNCATION_SUFFIX`].
///
/// Cuts fall on character boundaries; a wide character that would straddle the
/// limit is dropped whole and the gap is left to padding.
fn fit(value: &str, width: usize) -> String {
    if get_string_width(value) <= width {
        return value.to_string();
    }

    let suffix_width = TRUNCATION_SUFFIX.len().min(width);
    let budget = width - suffix_width;

    let mut used = 0;
    let mut fitted = String::new();
    for c in value.chars() {
        let w = get_char_width(c);
        if used + w > budget {
            break;
        }
        used += w;
        fitted.push(c);
    }

    fitted.push_str(&TRUNCATION_SUFFIX[..suffix_width]);
    fitted
}

/// Keep every record on a single line.
fn sanitize(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            c => c,
        })
        .collect()
}
