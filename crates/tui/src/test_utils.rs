//! Test helpers shared by the TUI test modules.

use ratatui::buffer::Buffer;

/// Converts a ratatui [`Buffer`] to a string, one line per row.
///
/// Trailing spaces are trimmed from each row so inline snapshots stay
/// readable.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((buf.area.x + x, buf.area.y + y)) {
                result.push_str(cell.symbol());
            }
        }
        let trimmed = result.trim_end_matches(' ');
        result.truncate(trimmed.len());
        result.push('\n');
    }
    result
}

/// Returns the text of row `y`, trailing spaces trimmed.
#[must_use]
pub(crate) fn row_text(buf: &Buffer, y: u16) -> String {
    let mut row = String::new();
    for x in buf.area.left()..buf.area.right() {
        if let Some(cell) = buf.cell((x, y)) {
            row.push_str(cell.symbol());
        }
    }
    row.trim_end().to_string()
}
