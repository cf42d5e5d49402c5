#![forbid(unsafe_code)]

//! Table rendering: column-width negotiation and wrap-aware rows.

use quill_style::Style;
use quill_text::{StyledLine, WrapMode, visible_width, wrap_styled};
use tracing::debug;

/// Columns never negotiate below this, even when the proportional share
/// would be smaller. A floored table may exceed its budget; that is the
/// accepted trade against unreadable slivers.
const MIN_COLUMN_WIDTH: usize = 6;

/// Renders one table: a header row, body rows, and full borders.
///
/// Cells arrive pre-rendered as inline strings (possibly styled); each is
/// hard-wrapped to its negotiated column, and every cell in a row pads with
/// blank lines up to the row's tallest cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableLayout {
    max_width: Option<usize>,
}

impl TableLayout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the render budget below the terminal width.
    #[must_use]
    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Lay out the table. Returns no lines for a table with neither headers
    /// nor rows.
    #[must_use]
    pub fn render(
        &self,
        headers: &[String],
        rows: &[Vec<String>],
        term_width: usize,
        color: bool,
    ) -> Vec<String> {
        let num_cols = headers
            .len()
            .max(rows.iter().map(Vec::len).max().unwrap_or(0));
        if num_cols == 0 {
            return Vec::new();
        }

        let mut widths = vec![0usize; num_cols];
        for row in std::iter::once(headers).chain(rows.iter().map(Vec::as_slice)) {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(visible_width(cell));
            }
        }
        for w in &mut widths {
            *w += 2;
        }

        let budget = self.max_width.unwrap_or(term_width);
        let total: usize = widths.iter().sum::<usize>() + num_cols + 1;
        if total > budget {
            let available = budget.saturating_sub(num_cols + 1);
            let natural: usize = widths.iter().sum();
            debug!(total, budget, "table over budget; shrinking columns");
            for w in &mut widths {
                *w = ((*w * available) / natural.max(1)).max(MIN_COLUMN_WIDTH);
            }
        }

        let mut out = vec![make_border(&widths, '╭', '┬', '╮')];
        if !headers.is_empty() {
            render_row(&mut out, headers, &widths, true, color);
            out.push(make_border(&widths, '├', '┼', '┤'));
        }
        for row in rows {
            render_row(&mut out, row, &widths, false, color);
        }
        out.push(make_border(&widths, '╰', '┴', '╯'));
        out
    }
}

fn make_border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut out = String::new();
    out.push(left);
    for (i, w) in widths.iter().enumerate() {
        if i > 0 {
            out.push(mid);
        }
        out.push_str(&"─".repeat(*w));
    }
    out.push(right);
    out
}

/// Emit the physical lines of one logical row. Missing cells in a ragged row
/// render empty.
fn render_row(out: &mut Vec<String>, cells: &[String], widths: &[usize], header: bool, color: bool) {
    let wrapped: Vec<Vec<StyledLine>> = widths
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let raw = cells.get(i).map_or("", String::as_str);
            let mut line = StyledLine::parse(raw);
            if header {
                line = embolden(&line);
            }
            wrap_styled(&line, w.saturating_sub(2), WrapMode::Hard)
        })
        .collect();

    let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);
    for line_idx in 0..height {
        let mut row = String::from("│");
        for (i, cell_lines) in wrapped.iter().enumerate() {
            let (text, width) = match cell_lines.get(line_idx) {
                Some(line) => (line.render(color), line.width()),
                None => (String::new(), 0),
            };
            row.push(' ');
            row.push_str(&text);
            row.push_str(&" ".repeat(widths[i].saturating_sub(width + 1)));
            row.push('│');
        }
        out.push(row);
    }
}

fn embolden(line: &StyledLine) -> StyledLine {
    let mut out = StyledLine::new();
    for span in line.spans() {
        out.push(span.style.patch(Style::new().bold()), &span.text);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cells(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    // ── width negotiation ────────────────────────────────────────────

    #[test]
    fn natural_widths_on_an_unconstrained_terminal() {
        // Columns "A"/"BB": 1+2 and 2+2 wide; total 3+4+3 borders = 10.
        let table = TableLayout::new();
        let lines = table.render(&cells(&["A", "BB"]), &[cells(&["1", "22"])], 500, false);
        assert_eq!(
            lines,
            vec![
                "╭───┬────╮".to_owned(),
                "│ A │ BB │".to_owned(),
                "├───┼────┤".to_owned(),
                "│ 1 │ 22 │".to_owned(),
                "╰───┴────╯".to_owned(),
            ]
        );
        assert!(lines.iter().all(|l| visible_width(l) == 10));
    }

    #[test]
    fn over_budget_columns_shrink_proportionally() {
        let table = TableLayout::new();
        let wide = "x".repeat(20);
        let narrow = "y".repeat(10);
        let lines = table.render(&cells(&[wide.as_str(), narrow.as_str()]), &[], 20, false);
        // Natural 22+12+3 = 37 > 20; shares of 17: 11 and 6.
        assert_eq!(visible_width(&lines[0]), 11 + 6 + 3);
    }

    #[test]
    fn shrink_never_goes_below_the_floor() {
        let table = TableLayout::new();
        let wide = "x".repeat(28);
        let lines = table.render(&cells(&[wide.as_str(), "a", "b"]), &[], 20, false);
        // Every column stays >= 6 even though the proportional share of the
        // narrow ones is 1; the table overflows its budget instead.
        let border = &lines[0];
        let segs: Vec<usize> = border
            .trim_matches(['╭', '╮'])
            .split('┬')
            .map(visible_width)
            .collect();
        assert_eq!(segs.len(), 3);
        assert!(segs.iter().all(|&w| w >= MIN_COLUMN_WIDTH));
    }

    #[test]
    fn explicit_max_width_overrides_terminal() {
        let table = TableLayout::new().max_width(25);
        let wide = "x".repeat(40);
        let lines = table.render(&cells(&[wide.as_str()]), &[], 500, false);
        assert!(visible_width(&lines[0]) <= 25);
    }

    // ── rows ─────────────────────────────────────────────────────────

    #[test]
    fn wrapped_cells_pad_the_row_to_equal_height() {
        let table = TableLayout::new().max_width(16);
        let lines = table.render(
            &cells(&["name", "note"]),
            &[vec!["ab".to_owned(), "a fairly long note".to_owned()]],
            500,
            false,
        );
        // All physical lines share the border width; the short cell pads
        // with blank lines against the wrapped tall one.
        let w = visible_width(&lines[0]);
        assert!(lines.iter().all(|l| visible_width(l) == w));
        let body_lines = lines.len() - 4;
        assert!(body_lines > 1, "long cell should wrap: {lines:?}");
    }

    #[test]
    fn ragged_rows_pad_with_empty_cells() {
        let table = TableLayout::new();
        let lines = table.render(
            &cells(&["a", "b", "c"]),
            &[cells(&["1"])],
            500,
            false,
        );
        let w = visible_width(&lines[0]);
        assert!(lines.iter().all(|l| visible_width(l) == w));
    }

    #[test]
    fn header_is_bold_in_color_mode() {
        let table = TableLayout::new();
        let lines = table.render(&cells(&["H"]), &[cells(&["x"])], 500, true);
        assert!(lines[1].contains("\x1b[1mH"));
        assert!(!lines[3].contains("\x1b[1m"));
    }

    #[test]
    fn styled_cells_survive_wrapping() {
        let table = TableLayout::new();
        let styled = format!("\x1b[31m{}\x1b[0m", "r".repeat(10));
        let lines = table.render(&[], &[vec![styled]], 11, true);
        // Column floor is 6 -> content 4; every wrapped piece reopens red
        // and resets.
        let body: Vec<&String> = lines
            .iter()
            .filter(|l| l.contains('r'))
            .collect();
        assert!(body.len() > 1);
        for line in body {
            assert!(line.contains("\x1b[31m"));
            assert!(line.contains("\x1b[0m"));
        }
    }

    #[test]
    fn headerless_table_has_no_separator() {
        let table = TableLayout::new();
        let lines = table.render(&[], &[cells(&["a"])], 500, false);
        assert_eq!(lines.len(), 3);
        assert!(!lines.concat().contains('├'));
    }

    #[test]
    fn empty_table_renders_nothing() {
        let table = TableLayout::new();
        assert!(table.render(&[], &[], 500, false).is_empty());
    }
}
