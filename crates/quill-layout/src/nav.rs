#![forbid(unsafe_code)]

//! Navigation bar: one row of centered cells spanning the terminal.

use quill_text::StyledLine;

/// Minimum blank columns on each side of a nav item.
const MIN_PADDING: usize = 2;

/// Render pre-rendered inline items as a single bordered bar.
///
/// Every item gets its width plus twice [`MIN_PADDING`]; whatever terminal
/// width is left over is dealt out one column at a time, left to right, so
/// the bar fills the line evenly. Items center inside their cells with the
/// odd column on the right. An empty item list renders nothing.
#[must_use]
pub fn render_nav(items: &[String], term_width: usize, color: bool) -> Vec<String> {
    if items.is_empty() {
        return Vec::new();
    }

    let cells: Vec<StyledLine> = items
        .iter()
        .map(|raw| StyledLine::parse(raw.trim()))
        .collect();
    let widths: Vec<usize> = cells.iter().map(StyledLine::width).collect();

    let mut cell_widths: Vec<usize> = widths.iter().map(|w| w + 2 * MIN_PADDING).collect();
    let base_total: usize = cell_widths.iter().sum::<usize>() + (items.len() - 1) + 2;
    let extra = term_width.saturating_sub(base_total);
    let n = cell_widths.len();
    for i in 0..extra {
        cell_widths[i % n] += 1;
    }

    let border = |left: char, mid: char, right: char| -> String {
        let mut out = String::new();
        out.push(left);
        for (i, w) in cell_widths.iter().enumerate() {
            if i > 0 {
                out.push(mid);
            }
            out.push_str(&"─".repeat(*w));
        }
        out.push(right);
        out
    };

    let mut middle = String::from("│");
    for (i, cell) in cells.iter().enumerate() {
        let slack = cell_widths[i] - widths[i];
        let left = slack / 2;
        middle.push_str(&" ".repeat(left));
        middle.push_str(&cell.render(color));
        middle.push_str(&" ".repeat(slack - left));
        middle.push('│');
    }

    vec![border('╭', '┬', '╮'), middle, border('╰', '┴', '╯')]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quill_text::visible_width;

    #[test]
    fn empty_nav_renders_nothing() {
        assert!(render_nav(&[], 80, false).is_empty());
    }

    #[test]
    fn single_item_fills_the_terminal() {
        let lines = render_nav(&["[1] Home".to_owned()], 20, false);
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| visible_width(l) == 20));
    }

    #[test]
    fn extra_space_deals_left_to_right() {
        // Items 1 wide: base cells 5+5, borders 3 -> 13. At 15 columns the
        // two leftover columns land one per cell.
        let lines = render_nav(&["a".to_owned(), "b".to_owned()], 15, false);
        assert_eq!(lines[0], "╭──────┬──────╮");
        assert_eq!(visible_width(&lines[1]), 15);
    }

    #[test]
    fn uneven_extra_favors_earlier_cells() {
        // Base 13 again; at 16 columns cell 0 gets two extras, cell 1 one.
        let lines = render_nav(&["a".to_owned(), "b".to_owned()], 16, false);
        assert_eq!(lines[0], "╭───────┬──────╮");
    }

    #[test]
    fn items_center_with_odd_column_right() {
        let lines = render_nav(&["ab".to_owned()], 9, false);
        // Cell width 6: slack 4 splits 2/2; at 9 the extra column goes in
        // the cell and then to the right of center.
        assert_eq!(lines[1], "│  ab   │");
    }

    #[test]
    fn narrow_terminal_keeps_minimum_padding() {
        let lines = render_nav(&["abc".to_owned(), "de".to_owned()], 0, false);
        // 3+4 and 2+4 wide cells, no extras.
        assert_eq!(lines[0], "╭───────┬──────╮");
    }

    #[test]
    fn styled_items_render_reset_and_centered() {
        let item = "\x1b[34m\x1b[4mlink\x1b[0m".to_owned();
        let lines = render_nav(&[item], 12, true);
        assert_eq!(visible_width(&lines[1]), 12);
        assert!(lines[1].contains("\x1b[4;34mlink\x1b[0m"));
    }

    #[test]
    fn items_are_trimmed_before_measuring() {
        let lines = render_nav(&["  a  ".to_owned()], 0, false);
        assert_eq!(lines[1], "│  a  │");
    }
}
