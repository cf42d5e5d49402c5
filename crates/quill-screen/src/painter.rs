#![forbid(unsafe_code)]

//! The incremental line-diff painter.
//!
//! Instead of reprinting the document on every change, the painter keeps the
//! previously painted frame and rewrites only rows whose content differs —
//! in a typical scroll step that is the handful of rows that shifted, not
//! the whole viewport. All escape output for one paint is accumulated and
//! flushed in a single write.

use std::io::{self, Write};

use quill_text::{StyledLine, truncate_styled};
use tracing::debug;

use crate::ansi;
use crate::size::SizeProbe;

/// Rows reserved above the content region for the title bar.
pub const TITLE_ROWS: u16 = 1;

/// Statistics from one paint, for tests and debug logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaintStats {
    /// Rows that differed from the previous frame and were rewritten.
    pub rows_redrawn: usize,
    /// Rows left untouched.
    pub rows_skipped: usize,
    /// Escape-sequence bytes emitted.
    pub bytes_written: usize,
}

/// Paints viewport slices of a logical line buffer with minimal updates.
///
/// `previous_frame` is the painter's only cross-call state and is owned
/// exclusively here; a [`clear`](Painter::clear) empties it, forcing the
/// next paint to redraw everything (used on navigation, never on scroll).
pub struct Painter<W, P> {
    out: W,
    probe: P,
    previous: Vec<String>,
}

impl<W: Write, P: SizeProbe> Painter<W, P> {
    #[must_use]
    pub fn new(out: W, probe: P) -> Self {
        Self {
            out,
            probe,
            previous: Vec::new(),
        }
    }

    /// Current `(columns, rows)` straight from the probe.
    #[must_use]
    pub fn size(&self) -> (u16, u16) {
        self.probe.size()
    }

    /// Content rows currently available (terminal height minus the title
    /// bar), queried fresh from the probe.
    #[must_use]
    pub fn usable_height(&self) -> usize {
        let (_, rows) = self.probe.size();
        usize::from(rows.saturating_sub(TITLE_ROWS))
    }

    /// The raw output sink (tests inspect the emitted escape stream).
    #[must_use]
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Paint the viewport slice of `buffer` at `scroll`, redrawing the
    /// title bar and every changed content row.
    ///
    /// The scroll offset is clamped defensively; callers normally clamp via
    /// [`crate::Viewport`] first.
    ///
    /// # Errors
    ///
    /// Propagates failures writing to the output sink.
    pub fn paint(&mut self, buffer: &[String], scroll: usize, title: &str) -> io::Result<PaintStats> {
        let (cols, rows) = self.probe.size();
        let cols = usize::from(cols);
        let usable = usize::from(rows.saturating_sub(TITLE_ROWS));

        let scroll = scroll.min(buffer.len().saturating_sub(usable));
        let end = (scroll + usable).min(buffer.len());
        let visible = &buffer[scroll.min(end)..end];

        let mut frame = String::new();
        frame.push_str(ansi::SYNC_BEGIN);

        // Title bar: full width, centered, truncated; redrawn every paint.
        ansi::cursor_to(&mut frame, 0, 0);
        frame.push_str(ansi::CLEAR_LINE);
        frame.push_str(&title_bar(title, cols));

        let mut stats = PaintStats::default();
        for i in 0..visible.len().max(self.previous.len()) {
            let new = visible.get(i);
            let old = self.previous.get(i);
            if new == old {
                stats.rows_skipped += 1;
                continue;
            }
            ansi::cursor_to(&mut frame, usize::from(TITLE_ROWS) + i, 0);
            frame.push_str(ansi::CLEAR_LINE);
            if let Some(line) = new {
                frame.push_str(line);
            }
            stats.rows_redrawn += 1;
        }

        frame.push_str(ansi::SYNC_END);
        stats.bytes_written = frame.len();
        debug!(
            rows_redrawn = stats.rows_redrawn,
            rows_skipped = stats.rows_skipped,
            "painted frame"
        );

        self.out.write_all(frame.as_bytes())?;
        self.out.flush()?;
        self.previous = visible.to_vec();
        Ok(stats)
    }

    /// Wipe the physical screen and forget the previous frame, so the next
    /// incremental paint redraws from scratch.
    ///
    /// # Errors
    ///
    /// Propagates failures writing to the output sink.
    pub fn clear(&mut self) -> io::Result<()> {
        self.out.write_all(ansi::CLEAR_SCREEN.as_bytes())?;
        self.out.write_all(ansi::CURSOR_HOME.as_bytes())?;
        self.out.flush()?;
        self.previous.clear();
        Ok(())
    }
}

/// Center `title` in `cols` columns, truncating when it does not fit.
fn title_bar(title: &str, cols: usize) -> String {
    let cut = truncate_styled(&StyledLine::parse(title), cols);
    let width = cut.width();
    let slack = cols.saturating_sub(width);
    let left = slack / 2;
    let mut bar = " ".repeat(left);
    bar.push_str(&cut.render(true));
    bar.push_str(&" ".repeat(slack - left));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::FixedProbe;
    use quill_text::visible_width;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    fn emitted(painter: &Painter<Vec<u8>, FixedProbe>, from: usize) -> String {
        String::from_utf8_lossy(&painter.writer()[from..]).into_owned()
    }

    // ── diffing ──────────────────────────────────────────────────────

    #[test]
    fn only_the_changed_row_is_rewritten() {
        let mut painter = Painter::new(Vec::new(), FixedProbe(20, 10));
        let _ = painter.paint(&lines(&["foo", "bar"]), 0, "t").unwrap();
        let mark = painter.writer().len();

        let stats = painter.paint(&lines(&["foo", "baz"]), 0, "t").unwrap();
        assert_eq!(stats.rows_redrawn, 1);
        assert_eq!(stats.rows_skipped, 1);

        let delta = emitted(&painter, mark);
        // Content row 1 sits below the title bar, at absolute row 3.
        assert!(delta.contains("\x1b[3;1H"));
        assert!(!delta.contains("\x1b[2;1H"));
        assert!(delta.contains("baz"));
        assert!(!delta.contains("foo"));
    }

    #[test]
    fn identical_frames_redraw_nothing_but_the_title() {
        let mut painter = Painter::new(Vec::new(), FixedProbe(20, 10));
        let buffer = lines(&["a", "b", "c"]);
        let _ = painter.paint(&buffer, 0, "t").unwrap();
        let stats = painter.paint(&buffer, 0, "t").unwrap();
        assert_eq!(stats.rows_redrawn, 0);
        assert_eq!(stats.rows_skipped, 3);
    }

    #[test]
    fn shrunken_frame_clears_trailing_rows() {
        let mut painter = Painter::new(Vec::new(), FixedProbe(20, 10));
        let _ = painter.paint(&lines(&["a", "b", "c"]), 0, "t").unwrap();
        let mark = painter.writer().len();

        let stats = painter.paint(&lines(&["a"]), 0, "t").unwrap();
        assert_eq!(stats.rows_redrawn, 2);
        let delta = emitted(&painter, mark);
        // Rows 1 and 2 (absolute 3 and 4) get addressed and cleared.
        assert!(delta.contains("\x1b[3;1H\x1b[2K"));
        assert!(delta.contains("\x1b[4;1H\x1b[2K"));
    }

    // ── scrolling ────────────────────────────────────────────────────

    #[test]
    fn scroll_slices_the_buffer() {
        let mut painter = Painter::new(Vec::new(), FixedProbe(20, 3));
        // 2 usable rows over 4 lines.
        let buffer = lines(&["l0", "l1", "l2", "l3"]);
        let _ = painter.paint(&buffer, 1, "t").unwrap();
        let out = emitted(&painter, 0);
        assert!(out.contains("l1"));
        assert!(out.contains("l2"));
        assert!(!out.contains("l3"));
        assert!(!out.contains("l0"));
    }

    #[test]
    fn overlarge_scroll_clamps_to_the_bottom() {
        let mut painter = Painter::new(Vec::new(), FixedProbe(20, 3));
        let buffer = lines(&["l0", "l1", "l2", "l3"]);
        let _ = painter.paint(&buffer, 99, "t").unwrap();
        let out = emitted(&painter, 0);
        assert!(out.contains("l2"));
        assert!(out.contains("l3"));
    }

    // ── title bar ────────────────────────────────────────────────────

    #[test]
    fn title_bar_is_always_redrawn() {
        let mut painter = Painter::new(Vec::new(), FixedProbe(20, 10));
        let buffer = lines(&["x"]);
        let _ = painter.paint(&buffer, 0, "one").unwrap();
        let mark = painter.writer().len();
        let _ = painter.paint(&buffer, 0, "two").unwrap();
        let delta = emitted(&painter, mark);
        assert!(delta.contains("\x1b[1;1H"));
        assert!(delta.contains("two"));
    }

    #[test]
    fn title_centers_and_truncates() {
        assert_eq!(title_bar("ab", 6), "  ab  ");
        assert_eq!(title_bar("ab", 7), "  ab   ");
        assert_eq!(title_bar("abcdefgh", 4), "abcd");
        assert_eq!(visible_width(&title_bar("abcdefgh", 4)), 4);
    }

    // ── clear ────────────────────────────────────────────────────────

    #[test]
    fn clear_forgets_the_previous_frame() {
        let mut painter = Painter::new(Vec::new(), FixedProbe(20, 10));
        let buffer = lines(&["a", "b"]);
        let _ = painter.paint(&buffer, 0, "t").unwrap();
        painter.clear().unwrap();
        let stats = painter.paint(&buffer, 0, "t").unwrap();
        // Everything repaints after a clear.
        assert_eq!(stats.rows_redrawn, 2);
    }

    #[test]
    fn clear_wipes_the_screen() {
        let mut painter = Painter::new(Vec::new(), FixedProbe(20, 10));
        painter.clear().unwrap();
        let out = emitted(&painter, 0);
        assert!(out.contains("\x1b[2J"));
        assert!(out.contains("\x1b[H"));
    }

    // ── resize handling ──────────────────────────────────────────────

    #[test]
    fn usable_height_tracks_the_probe() {
        let painter = Painter::new(Vec::new(), FixedProbe(20, 10));
        assert_eq!(painter.usable_height(), 9);
        let painter = Painter::new(Vec::new(), FixedProbe(20, 0));
        assert_eq!(painter.usable_height(), 0);
    }

    #[test]
    fn zero_height_terminal_paints_no_content() {
        let mut painter = Painter::new(Vec::new(), FixedProbe(20, 0));
        let stats = painter.paint(&lines(&["a"]), 0, "t").unwrap();
        assert_eq!(stats.rows_redrawn, 0);
    }
}
