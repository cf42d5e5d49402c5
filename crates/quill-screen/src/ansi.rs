#![forbid(unsafe_code)]

//! Cursor-control sequences the painter emits.

use std::fmt::Write;

/// Clear the addressed line from start to end.
pub const CLEAR_LINE: &str = "\x1b[2K";
/// Clear the whole screen (used by full clears, never by incremental
/// paints).
pub const CLEAR_SCREEN: &str = "\x1b[2J";
/// Park the cursor at the top-left corner.
pub const CURSOR_HOME: &str = "\x1b[H";
/// Begin synchronized output (DEC 2026): the terminal buffers until the
/// matching end, preventing tearing mid-frame.
pub const SYNC_BEGIN: &str = "\x1b[?2026h";
/// End synchronized output.
pub const SYNC_END: &str = "\x1b[?2026l";

/// Move the cursor to a 0-based `(row, col)` cell.
pub fn cursor_to(out: &mut String, row: usize, col: usize) {
    let _ = write!(out, "\x1b[{};{}H", row + 1, col + 1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_addressing_is_one_based() {
        let mut out = String::new();
        cursor_to(&mut out, 0, 0);
        assert_eq!(out, "\x1b[1;1H");

        out.clear();
        cursor_to(&mut out, 2, 10);
        assert_eq!(out, "\x1b[3;11H");
    }
}
