#![forbid(unsafe_code)]

//! Styled text as explicit `(style, run)` spans.
//!
//! Child renders travel between engines as strings with embedded SGR codes.
//! [`StyledLine::parse`] recovers the span structure from such a string by
//! tracking style state across escape sequences, so wrapping and truncation
//! operate on structured runs instead of splicing raw escapes.

use memchr::memchr;
use quill_style::{Ansi16, Color, RESET, Style, StyleFlags};
use smallvec::SmallVec;

use crate::width::visible_width;

/// One run of text with a uniform style. The text never contains ESC bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub style: Style,
    pub text: String,
}

/// A single physical line of styled text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledLine {
    spans: SmallVec<[Span; 4]>,
}

impl StyledLine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        let mut line = Self::new();
        line.push(Style::new(), &text.into());
        line
    }

    #[must_use]
    pub fn styled(style: Style, text: impl Into<String>) -> Self {
        let mut line = Self::new();
        line.push(style, &text.into());
        line
    }

    /// Append a run, merging with the previous span when styles match.
    pub fn push(&mut self, style: Style, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(last) = self.spans.last_mut() {
            if last.style == style {
                last.text.push_str(text);
                return;
            }
        }
        self.spans.push(Span {
            style,
            text: text.to_owned(),
        });
    }

    #[must_use]
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|s| s.text.is_empty())
    }

    /// Visible column width of the line (no SGR overhead to skip; span text
    /// is already clean).
    #[must_use]
    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| visible_width(&s.text)).sum()
    }

    /// Drop trailing whitespace from the end of the line.
    pub fn trim_end(&mut self) {
        while let Some(last) = self.spans.last_mut() {
            let trimmed = last.text.trim_end();
            if trimmed.len() == last.text.len() {
                break;
            }
            if trimmed.is_empty() {
                self.spans.pop();
            } else {
                last.text.truncate(trimmed.len());
                break;
            }
        }
    }

    /// The line's text with all styling removed.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for span in &self.spans {
            out.push_str(&span.text);
        }
        out
    }

    /// Render to a terminal string.
    ///
    /// Each styled run opens its own SGR sequence; a reset is emitted at
    /// every styled-to-different transition and once at end of line, so the
    /// result is safe to print in isolation or concatenate with neighbors.
    /// With `color` off the plain text is returned untouched.
    #[must_use]
    pub fn render(&self, color: bool) -> String {
        if !color {
            return self.plain_text();
        }
        let mut out = String::new();
        let mut open = false;
        for span in &self.spans {
            if span.text.is_empty() {
                continue;
            }
            if open {
                out.push_str(RESET);
                open = false;
            }
            if !span.style.is_plain() {
                span.style.push_sgr(&mut out);
                open = true;
            }
            out.push_str(&span.text);
        }
        if open {
            out.push_str(RESET);
        }
        out
    }

    /// Parse a string with embedded SGR sequences back into spans.
    ///
    /// Understands the SGR subset the renderer emits (reset, bold, dim,
    /// italic, underline, strikethrough, named/256/RGB foregrounds, and the
    /// corresponding "off" codes); unknown parameters are ignored. Malformed
    /// sequences never panic.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut line = Self::new();
        let bytes = raw.as_bytes();
        let mut style = Style::new();
        let mut pos = 0;

        while pos < bytes.len() {
            let Some(esc_off) = memchr(0x1b, &bytes[pos..]) else {
                line.push(style, &raw[pos..]);
                break;
            };
            let esc = pos + esc_off;
            line.push(style, &raw[pos..esc]);
            pos = esc + 1;
            if pos < bytes.len() && bytes[pos] == b'[' {
                pos += 1;
                let params_start = pos;
                while pos < bytes.len() && matches!(bytes[pos], 0x20..=0x3f) {
                    pos += 1;
                }
                let is_sgr = pos < bytes.len() && bytes[pos] == b'm';
                if is_sgr {
                    apply_sgr(&mut style, &raw[params_start..pos]);
                }
                if pos < bytes.len() {
                    pos += 1;
                }
            }
        }
        line
    }
}

/// Apply one SGR parameter list (the text between `ESC[` and `m`) to `style`.
fn apply_sgr(style: &mut Style, params: &str) {
    let mut iter = params.split(';').map(|p| p.parse::<u16>().unwrap_or(0));
    while let Some(param) = iter.next() {
        match param {
            0 => *style = Style::new(),
            1 => style.attrs.insert(StyleFlags::BOLD),
            2 => style.attrs.insert(StyleFlags::DIM),
            3 => style.attrs.insert(StyleFlags::ITALIC),
            4 => style.attrs.insert(StyleFlags::UNDERLINE),
            9 => style.attrs.insert(StyleFlags::STRIKETHROUGH),
            22 => style.attrs.remove(StyleFlags::BOLD | StyleFlags::DIM),
            23 => style.attrs.remove(StyleFlags::ITALIC),
            24 => style.attrs.remove(StyleFlags::UNDERLINE),
            29 => style.attrs.remove(StyleFlags::STRIKETHROUGH),
            30..=37 => style.fg = ansi16_from_param(param - 30).map(Color::Ansi16),
            38 => match iter.next() {
                Some(5) => {
                    if let Some(idx) = iter.next() {
                        style.fg = Some(Color::Ansi256(idx.min(255) as u8));
                    }
                }
                Some(2) => {
                    let (r, g, b) = (iter.next(), iter.next(), iter.next());
                    if let (Some(r), Some(g), Some(b)) = (r, g, b) {
                        style.fg =
                            Some(Color::rgb(r.min(255) as u8, g.min(255) as u8, b.min(255) as u8));
                    }
                }
                _ => {}
            },
            39 => style.fg = None,
            90..=97 => style.fg = ansi16_from_param(param - 90 + 8).map(Color::Ansi16),
            _ => {}
        }
    }
}

fn ansi16_from_param(idx: u16) -> Option<Ansi16> {
    Some(match idx {
        0 => Ansi16::Black,
        1 => Ansi16::Red,
        2 => Ansi16::Green,
        3 => Ansi16::Yellow,
        4 => Ansi16::Blue,
        5 => Ansi16::Magenta,
        6 => Ansi16::Cyan,
        7 => Ansi16::White,
        8 => Ansi16::BrightBlack,
        9 => Ansi16::BrightRed,
        10 => Ansi16::BrightGreen,
        11 => Ansi16::BrightYellow,
        12 => Ansi16::BrightBlue,
        13 => Ansi16::BrightMagenta,
        14 => Ansi16::BrightCyan,
        15 => Ansi16::BrightWhite,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── construction ─────────────────────────────────────────────────

    #[test]
    fn push_merges_equal_styles() {
        let mut line = StyledLine::new();
        line.push(Style::new(), "ab");
        line.push(Style::new(), "cd");
        assert_eq!(line.spans().len(), 1);
        assert_eq!(line.plain_text(), "abcd");
    }

    #[test]
    fn push_keeps_distinct_styles_apart() {
        let mut line = StyledLine::new();
        line.push(Style::new(), "a");
        line.push(Style::new().bold(), "b");
        assert_eq!(line.spans().len(), 2);
    }

    // ── render ───────────────────────────────────────────────────────

    #[test]
    fn plain_line_renders_verbatim() {
        assert_eq!(StyledLine::plain("hi").render(true), "hi");
    }

    #[test]
    fn styled_line_opens_and_resets() {
        let line = StyledLine::styled(Style::new().bold(), "hi");
        assert_eq!(line.render(true), "\x1b[1mhi\x1b[0m");
    }

    #[test]
    fn color_off_drops_all_styling() {
        let line = StyledLine::styled(Style::new().bold().fg(Ansi16::Red), "hi");
        assert_eq!(line.render(false), "hi");
    }

    #[test]
    fn style_transition_resets_between_runs() {
        let mut line = StyledLine::new();
        line.push(Style::new().bold(), "a");
        line.push(Style::new(), "b");
        assert_eq!(line.render(true), "\x1b[1ma\x1b[0mb");
    }

    // ── parse ────────────────────────────────────────────────────────

    #[test]
    fn parse_roundtrips_styled_render() {
        let mut line = StyledLine::new();
        line.push(Style::new().bold().fg(Ansi16::Blue), "link");
        line.push(Style::new(), " rest");
        let reparsed = StyledLine::parse(&line.render(true));
        assert_eq!(reparsed, line);
    }

    #[test]
    fn parse_plain_string() {
        let line = StyledLine::parse("no styles here");
        assert_eq!(line.spans().len(), 1);
        assert!(line.spans()[0].style.is_plain());
    }

    #[test]
    fn parse_tracks_reset_mid_string() {
        let line = StyledLine::parse("\x1b[1mbold\x1b[0mplain");
        assert_eq!(line.spans().len(), 2);
        assert!(line.spans()[1].style.is_plain());
    }

    #[test]
    fn parse_256_and_rgb_foregrounds() {
        let line = StyledLine::parse("\x1b[38;5;27mx\x1b[38;2;1;2;3my");
        assert_eq!(line.spans()[0].style.fg, Some(Color::Ansi256(27)));
        assert_eq!(line.spans()[1].style.fg, Some(Color::rgb(1, 2, 3)));
    }

    #[test]
    fn parse_ignores_unknown_codes_and_non_sgr() {
        let line = StyledLine::parse("\x1b[999ma\x1b[2Jb");
        assert_eq!(line.plain_text(), "ab");
    }

    #[test]
    fn parse_survives_truncated_sequence() {
        let line = StyledLine::parse("ok\x1b[38;5");
        assert_eq!(line.plain_text(), "ok");
    }

    #[test]
    fn width_ignores_styling() {
        let mut line = StyledLine::new();
        line.push(Style::new().underline(), "abc");
        line.push(Style::new(), "de");
        assert_eq!(line.width(), 5);
    }
}
