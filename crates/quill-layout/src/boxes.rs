#![forbid(unsafe_code)]

//! The box geometry solver.
//!
//! Children arrive pre-rendered (strings with embedded SGR codes, possibly
//! multi-line); the solver re-parses them into spans, sizes the box, then
//! truncates, aligns, and pads every row so the emitted grid is perfectly
//! rectangular: top border, content rows, and bottom border all share one
//! width.

use quill_style::{Color, RESET, Style};
use quill_text::{StyledLine, truncate_styled, visible_width};

use crate::geometry::{Alignment, BorderStyle, BoxGeometry};

/// A bordered, padded, optionally titled rectangular render region.
#[derive(Debug, Clone, Default)]
pub struct BoxLayout<'a> {
    geometry: BoxGeometry,
    border: BorderStyle,
    align: Alignment,
    title: Option<&'a str>,
    border_color: Option<Color>,
}

impl<'a> BoxLayout<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            geometry: BoxGeometry::new(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn geometry(mut self, geometry: BoxGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    #[must_use]
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    #[must_use]
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Title shown in the top border; not drawn when the border is
    /// [`BorderStyle::None`] (there is nowhere to attach it).
    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    /// Lay out `children` into the box's character grid.
    ///
    /// Terminal width is consulted for the growth ceiling when `end_x` is
    /// inherited; degenerate inputs (zero width, inverted bounds) clamp to
    /// the minimum the borders, padding, and title require.
    #[must_use]
    pub fn render(&self, children: &[String], term_width: usize, color: bool) -> Vec<String> {
        let term_width = term_width.max(1);
        let g = self.geometry;
        let bordered = self.border.is_drawn();
        let start_x = (g.start_x + g.margin_x).min(term_width.saturating_sub(1));
        let overhead = 2 + 2 * g.padding_x;

        let mut lines: Vec<StyledLine> = Vec::new();
        for child in children {
            for raw in child.trim_end_matches('\n').split('\n') {
                lines.push(StyledLine::parse(raw));
            }
        }
        if lines.is_empty() {
            lines.push(StyledLine::new());
        }
        let max_child = lines.iter().map(StyledLine::width).max().unwrap_or(0);

        // The title asks for room but never forces the box past the
        // terminal edge; an overflowing title truncates instead. The hard
        // floor is what borders and padding alone require.
        let title_min = match self.title {
            Some(t) if bordered => visible_width(t) + 2,
            _ => 0,
        };
        let ceiling = term_width.saturating_sub(start_x + g.margin_x);

        let box_width = match g.end_x {
            Some(end_x) => {
                let end = end_x
                    .saturating_sub(g.margin_x)
                    .min(term_width.saturating_sub(1));
                (end.saturating_sub(start_x) + 1).max(overhead)
            }
            // Inherited right edge: grow with content, stop at the terminal
            // edge, never below the border/padding floor.
            None => (max_child + overhead)
                .max(overhead + title_min)
                .min(ceiling)
                .max(overhead),
        };
        let content_width = box_width - overhead;
        let inner_width = box_width - 2;

        let mut content_rows = Vec::with_capacity(lines.len());
        for line in &lines {
            let cut = truncate_styled(line, content_width);
            let slack = content_width - cut.width();
            let (left, right) = match self.align {
                Alignment::Left => (0, slack),
                // The odd column goes to the right half.
                Alignment::Center => (slack / 2, slack - slack / 2),
                Alignment::Right => (slack, 0),
            };
            let mut row = String::with_capacity(inner_width);
            row.push_str(&" ".repeat(g.padding_x + left));
            row.push_str(&cut.render(color));
            row.push_str(&" ".repeat(right + g.padding_x));
            content_rows.push(row);
        }

        let border_rows = if bordered { 2 } else { 0 };
        let required = content_rows.len() + 2 * g.padding_y + border_rows;
        let (fill_top, fill_bottom) = match g.end_y {
            Some(end_y) => {
                let start_y = g.start_y + g.margin_y;
                let end = end_y.saturating_sub(g.margin_y);
                let height = (end.saturating_sub(start_y) + 1).max(2);
                if height > required {
                    let extra = height - required;
                    // The odd row goes to the bottom half.
                    (extra / 2, extra - extra / 2)
                } else {
                    (0, 0)
                }
            }
            None => (0, 0),
        };

        let border_style = match self.border_color {
            Some(c) if color => Style::new().fg(c),
            _ => Style::new(),
        };
        let paint = |glyphs: &str| -> String {
            if border_style.is_plain() {
                glyphs.to_owned()
            } else {
                format!("{}{glyphs}{RESET}", border_style.sgr_open())
            }
        };

        let blank_inner = " ".repeat(inner_width);
        let mut rows = Vec::with_capacity(required + fill_top + fill_bottom);

        if let Some(set) = self.border.glyphs() {
            rows.push(paint(&format!(
                "{}{}{}",
                set.top_left,
                self.top_fill(inner_width, set.horizontal),
                set.top_right
            )));
        }
        let body_row = |inner: &str| -> String {
            match self.border.glyphs() {
                Some(set) => {
                    let v = paint(&set.vertical.to_string());
                    format!("{v}{inner}{v}")
                }
                None => inner.to_owned(),
            }
        };
        for _ in 0..(g.padding_y + fill_top) {
            rows.push(body_row(&blank_inner));
        }
        for row in &content_rows {
            rows.push(body_row(row));
        }
        for _ in 0..(g.padding_y + fill_bottom) {
            rows.push(body_row(&blank_inner));
        }
        if let Some(set) = self.border.glyphs() {
            rows.push(paint(&format!(
                "{}{}{}",
                set.bottom_left,
                set.horizontal.to_string().repeat(inner_width),
                set.bottom_right
            )));
        }

        // Margins wrap the finished box in blank columns and rows.
        let row_width = if bordered { box_width } else { inner_width };
        let side = " ".repeat(g.margin_x);
        let blank_row = " ".repeat(row_width + 2 * g.margin_x);
        let mut out = Vec::with_capacity(rows.len() + 2 * g.margin_y);
        for _ in 0..g.margin_y {
            out.push(blank_row.clone());
        }
        for row in rows {
            out.push(format!("{side}{row}{side}"));
        }
        for _ in 0..g.margin_y {
            out.push(blank_row.clone());
        }
        out
    }

    /// The horizontal run of the top border, with the centered title segment
    /// spliced in when one fits.
    fn top_fill(&self, fill_len: usize, horizontal: char) -> String {
        let plain_fill = || horizontal.to_string().repeat(fill_len);
        let Some(title) = self.title else {
            return plain_fill();
        };
        if fill_len < 2 {
            return plain_fill();
        }
        let cut = truncate_styled(&StyledLine::plain(title), fill_len - 2);
        if cut.is_empty() {
            return plain_fill();
        }
        let segment = format!(" {} ", cut.plain_text());
        let dashes = fill_len - visible_width(&segment);
        let before = dashes / 2;
        let mut fill = horizontal.to_string().repeat(before);
        fill.push_str(&segment);
        fill.push_str(&horizontal.to_string().repeat(dashes - before));
        fill
    }
}
