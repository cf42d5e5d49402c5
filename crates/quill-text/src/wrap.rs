#![forbid(unsafe_code)]

//! Width-budgeted wrapping and truncation over styled lines.
//!
//! Both operations cut by visible width, never inside a grapheme cluster,
//! and never strand an open style: each produced [`StyledLine`] carries its
//! own span state, so rendering it in isolation opens and resets correctly.
//!
//! Wide-glyph policy: a cluster that does not fit the remaining budget is
//! deferred to the next line whole. A cluster wider than the entire budget
//! sits alone on its own line when wrapping (a line cannot be split below
//! cluster granularity) and is dropped entirely when truncating.

use quill_style::Style;
use unicode_segmentation::UnicodeSegmentation;

use crate::span::StyledLine;
use crate::width::grapheme_width;

/// Wrapping policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// Break at whitespace when possible, fall back to cluster boundaries
    /// for words wider than the budget. Paragraphs and box titles use this.
    #[default]
    Word,
    /// Break at cluster boundaries only. Table cells use this.
    Hard,
}

/// One grapheme cluster of the flattened line, with its style and width.
#[derive(Clone, Copy)]
struct Cluster<'a> {
    style: Style,
    text: &'a str,
    width: usize,
}

impl Cluster<'_> {
    fn is_whitespace(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }
}

fn clusters(line: &StyledLine) -> Vec<Cluster<'_>> {
    let mut out = Vec::new();
    for span in line.spans() {
        for g in span.text.graphemes(true) {
            out.push(Cluster {
                style: span.style,
                text: g,
                width: grapheme_width(g),
            });
        }
    }
    out
}

/// Wrap a styled line to `width` columns.
///
/// `width == 0` disables wrapping (the line is returned whole); an empty
/// line wraps to one empty line.
#[must_use]
pub fn wrap_styled(line: &StyledLine, width: usize, mode: WrapMode) -> Vec<StyledLine> {
    if width == 0 {
        return vec![line.clone()];
    }
    let stream = clusters(line);
    match mode {
        WrapMode::Word => wrap_word(&stream, width),
        WrapMode::Hard => wrap_hard(&stream, width),
    }
}

fn flush(lines: &mut Vec<StyledLine>, cur: &mut StyledLine, cur_width: &mut usize) {
    cur.trim_end();
    lines.push(std::mem::take(cur));
    *cur_width = 0;
}

fn wrap_word(stream: &[Cluster<'_>], width: usize) -> Vec<StyledLine> {
    let mut lines = Vec::new();
    let mut cur = StyledLine::new();
    let mut cur_width = 0usize;

    let mut i = 0;
    while i < stream.len() {
        let cluster = stream[i];
        if cluster.is_whitespace() {
            // Whitespace at a line start or past the budget marks a break
            // point and is dropped.
            if cur_width > 0 && cur_width + cluster.width <= width {
                cur.push(cluster.style, cluster.text);
                cur_width += cluster.width;
            }
            i += 1;
            continue;
        }

        let mut j = i;
        let mut word_width = 0;
        while j < stream.len() && !stream[j].is_whitespace() {
            word_width += stream[j].width;
            j += 1;
        }

        if cur_width + word_width <= width {
            for c in &stream[i..j] {
                cur.push(c.style, c.text);
            }
            cur_width += word_width;
        } else if word_width <= width {
            flush(&mut lines, &mut cur, &mut cur_width);
            for c in &stream[i..j] {
                cur.push(c.style, c.text);
            }
            cur_width = word_width;
        } else {
            // Word wider than the whole budget: cluster fallback.
            for c in &stream[i..j] {
                if cur_width > 0 && cur_width + c.width > width {
                    flush(&mut lines, &mut cur, &mut cur_width);
                }
                cur.push(c.style, c.text);
                cur_width += c.width;
            }
        }
        i = j;
    }

    cur.trim_end();
    if !cur.is_empty() || lines.is_empty() {
        lines.push(cur);
    }
    lines
}

fn wrap_hard(stream: &[Cluster<'_>], width: usize) -> Vec<StyledLine> {
    let mut lines = Vec::new();
    let mut cur = StyledLine::new();
    let mut cur_width = 0usize;

    for c in stream {
        if cur_width > 0 && cur_width + c.width > width {
            flush(&mut lines, &mut cur, &mut cur_width);
        }
        cur.push(c.style, c.text);
        cur_width += c.width;
    }
    cur.trim_end();
    if !cur.is_empty() || lines.is_empty() {
        lines.push(cur);
    }
    lines
}

/// Cut a styled line to at most `width` visible columns.
///
/// A cluster that would cross the budget is dropped whole; no partial wide
/// glyphs, no stranded openers.
#[must_use]
pub fn truncate_styled(line: &StyledLine, width: usize) -> StyledLine {
    let mut out = StyledLine::new();
    let mut used = 0usize;
    for span in line.spans() {
        for g in span.text.graphemes(true) {
            let gw = grapheme_width(g);
            if used + gw > width {
                return out;
            }
            out.push(span.style, g);
            used += gw;
        }
    }
    out
}

/// Wrap plain text. Splits on embedded newlines first, then applies `mode`
/// per paragraph.
#[must_use]
pub fn wrap_text(text: &str, width: usize, mode: WrapMode) -> Vec<String> {
    let mut out = Vec::new();
    for paragraph in text.split('\n') {
        let paragraph = paragraph.strip_suffix('\r').unwrap_or(paragraph);
        for line in wrap_styled(&StyledLine::plain(paragraph), width, mode) {
            out.push(line.plain_text());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::width::{strip_styles, visible_width};
    use proptest::prelude::*;
    use quill_style::Ansi16;

    // ── word wrap ────────────────────────────────────────────────────

    #[test]
    fn hello_world_at_five() {
        assert_eq!(
            wrap_text("hello world", 5, WrapMode::Word),
            vec!["hello", "world"]
        );
    }

    #[test]
    fn word_wrap_keeps_short_words_together() {
        assert_eq!(
            wrap_text("Hello world foo bar", 10, WrapMode::Word),
            vec!["Hello", "world foo", "bar"]
        );
    }

    #[test]
    fn overlong_word_falls_back_to_clusters() {
        let lines = wrap_text("Supercalifragilistic", 10, WrapMode::Word);
        assert_eq!(lines, vec!["Supercalif", "ragilistic"]);
    }

    #[test]
    fn newlines_are_paragraph_breaks() {
        assert_eq!(wrap_text("a\nb", 10, WrapMode::Word), vec!["a", "b"]);
    }

    #[test]
    fn empty_input_is_one_empty_line() {
        assert_eq!(wrap_text("", 8, WrapMode::Word), vec![""]);
    }

    // ── hard wrap ────────────────────────────────────────────────────

    #[test]
    fn hard_wrap_ignores_word_boundaries() {
        assert_eq!(
            wrap_text("hello world", 4, WrapMode::Hard),
            vec!["hell", "o wo", "rld"]
        );
    }

    #[test]
    fn wide_cluster_is_deferred_whole() {
        // "日" is two cells; at width 3 it cannot follow two ASCII cells.
        let lines = wrap_text("ab日", 3, WrapMode::Hard);
        assert_eq!(lines, vec!["ab", "日"]);
    }

    // ── styled wrap ──────────────────────────────────────────────────

    #[test]
    fn styled_lines_are_self_contained() {
        let mut line = StyledLine::new();
        line.push(Style::new().bold().fg(Ansi16::Red), "hello world");
        let wrapped = wrap_styled(&line, 5, WrapMode::Word);
        assert_eq!(wrapped.len(), 2);
        for piece in &wrapped {
            let rendered = piece.render(true);
            assert!(rendered.starts_with("\x1b[1;31m"));
            assert!(rendered.ends_with("\x1b[0m"));
        }
    }

    #[test]
    fn style_boundary_survives_wrap() {
        let mut line = StyledLine::new();
        line.push(Style::new().bold(), "ab");
        line.push(Style::new(), "cd ef");
        let wrapped = wrap_styled(&line, 4, WrapMode::Word);
        assert_eq!(wrapped[0].plain_text(), "abcd");
        assert_eq!(wrapped[0].spans().len(), 2);
        assert_eq!(wrapped[1].plain_text(), "ef");
    }

    // ── truncate ─────────────────────────────────────────────────────

    #[test]
    fn truncate_cuts_by_visible_width() {
        let line = StyledLine::plain("hello");
        assert_eq!(truncate_styled(&line, 3).plain_text(), "hel");
    }

    #[test]
    fn truncate_drops_wide_cluster_instead_of_splitting() {
        let line = StyledLine::plain("a日b");
        assert_eq!(truncate_styled(&line, 2).plain_text(), "a");
    }

    #[test]
    fn truncate_preserves_style_of_kept_text() {
        let line = StyledLine::styled(Style::new().underline(), "abcdef");
        let cut = truncate_styled(&line, 4);
        assert_eq!(cut.spans()[0].style, Style::new().underline());
        assert_eq!(cut.width(), 4);
    }

    // ── properties ───────────────────────────────────────────────────

    proptest! {
        #[test]
        fn wrap_respects_width_budget(s in "[ a-zA-Z0-9é日]{0,60}", w in 1usize..24) {
            for line in wrap_text(&s, w, WrapMode::Word) {
                let lw = visible_width(&line);
                // A single cluster wider than the budget is the documented
                // exception; nothing else may overflow.
                prop_assert!(lw <= w || line.graphemes(true).count() == 1);
            }
        }

        #[test]
        fn width_is_style_invariant(s in "[a-z ]{0,20}", t in "[a-z ]{0,20}") {
            let mut line = StyledLine::new();
            line.push(Style::new().bold().fg(Ansi16::Cyan), &s);
            line.push(Style::new(), &t);
            let rendered = line.render(true);
            prop_assert_eq!(visible_width(&rendered), visible_width(&strip_styles(&rendered)));
            prop_assert_eq!(visible_width(&rendered), line.width());
        }

        #[test]
        fn truncate_never_exceeds_budget(s in "[ a-zA-Z日é]{0,40}", w in 0usize..16) {
            let cut = truncate_styled(&StyledLine::plain(&s), w);
            prop_assert!(cut.width() <= w);
        }
    }
}
