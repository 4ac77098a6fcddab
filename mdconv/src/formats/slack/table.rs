//! Table rendering and column alignment
//!
//! A table is first rendered into tab separated lines (bold header line, then one
//! line per body row) and then aligned for monospaced display:
//!
//!     *Header 1*   *Header 2*    *Header 3*
//!     short value  longer value  really long value
//!     qwerty       asdfgh        zxcvbn
//!
//! Alignment is two passes over the lines. The first pass finds the width of each
//! column. The second pads every cell except the last one on its line. A column's
//! width is its longest cell plus [`COLUMN_PADDING`], and never less than
//! [`MIN_COLUMN_WIDTH`]. Cells are left-justified and widths count characters,
//! not bytes.
//!
//! Tabs and newlines inside cell text are not escaped; they split cells and lines
//! like any other separator.

use super::renderer::render;
use crate::tree::{Node, NodeValue};

pub const MIN_COLUMN_WIDTH: usize = 2;
pub const COLUMN_PADDING: usize = 2;

/// Render a `Table` node into aligned text.
///
/// The result ends with an empty line. The leading newline and the trailing
/// block separator come from the table node's own enter and exit handling.
pub fn render_table(table: &Node) -> String {
    if !has_cells(table) {
        return String::new();
    }

    let mut text = String::new();
    for child in &table.children {
        match &child.value {
            NodeValue::TableHeader => {
                text.push_str(&render(child));
                text.push('\n');
            }
            NodeValue::TableBody => {
                // Each row's exit supplies its line break
                for row in &child.children {
                    text.push_str(&render(row));
                }
            }
            _ => text.push_str(&render(child)),
        }
    }
    text.push('\n');

    align_columns(&text)
}

fn has_cells(node: &Node) -> bool {
    node.value == NodeValue::TableCell || node.children.iter().any(has_cells)
}

/// Align tab separated columns across all lines of `text`.
pub fn align_columns(text: &str) -> String {
    let lines: Vec<Vec<&str>> = text
        .split('\n')
        .map(|line| line.split('\t').collect())
        .collect();

    let widths = column_widths(&lines);

    let mut output = String::with_capacity(text.len());
    for (index, cells) in lines.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        let last = cells.len().saturating_sub(1);
        for (column, cell) in cells.iter().enumerate() {
            output.push_str(cell);
            if column < last {
                let pad = widths[column].saturating_sub(cell.chars().count());
                output.extend(std::iter::repeat(' ').take(pad));
            }
        }
    }
    output
}

fn column_widths(lines: &[Vec<&str>]) -> Vec<usize> {
    let mut widths: Vec<usize> = Vec::new();
    for cells in lines {
        // The last cell on a line does not take part in alignment
        let aligned = cells.len().saturating_sub(1);
        for (column, cell) in cells.iter().take(aligned).enumerate() {
            let width = (cell.chars().count() + COLUMN_PADDING).max(MIN_COLUMN_WIDTH);
            if column >= widths.len() {
                widths.resize(column + 1, MIN_COLUMN_WIDTH);
            }
            widths[column] = widths[column].max(width);
        }
    }
    widths
}
