#![forbid(unsafe_code)]

//! Text attributes and the unified [`Style`] type with SGR encoding.

use std::fmt::Write;

use crate::color::Color;

/// Reset-all SGR sequence. Every styled physical line ends with this.
pub const RESET: &str = "\x1b[0m";

bitflags::bitflags! {
    /// Text attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        const BOLD          = 1 << 0;
        const DIM           = 1 << 1;
        const ITALIC        = 1 << 2;
        const UNDERLINE     = 1 << 3;
        const STRIKETHROUGH = 1 << 4;
    }
}

impl StyleFlags {
    /// SGR parameter for each flag, in declaration order.
    const SGR_PARAMS: [(Self, u8); 5] = [
        (Self::BOLD, 1),
        (Self::DIM, 2),
        (Self::ITALIC, 3),
        (Self::UNDERLINE, 4),
        (Self::STRIKETHROUGH, 9),
    ];
}

/// A styling run: optional foreground color plus attribute flags.
///
/// `Style` is `Copy` and cheap to thread through the wrap algorithm — the
/// explicit "which styles are open" state the span model relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub attrs: StyleFlags,
}

impl Style {
    /// Create an empty (plain) style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            attrs: StyleFlags::empty(),
        }
    }

    #[must_use]
    pub fn fg<C: Into<Color>>(mut self, color: C) -> Self {
        self.fg = Some(color.into());
        self
    }

    #[must_use]
    pub fn bold(self) -> Self {
        self.add_attr(StyleFlags::BOLD)
    }

    #[must_use]
    pub fn dim(self) -> Self {
        self.add_attr(StyleFlags::DIM)
    }

    #[must_use]
    pub fn italic(self) -> Self {
        self.add_attr(StyleFlags::ITALIC)
    }

    #[must_use]
    pub fn underline(self) -> Self {
        self.add_attr(StyleFlags::UNDERLINE)
    }

    #[must_use]
    pub fn strikethrough(self) -> Self {
        self.add_attr(StyleFlags::STRIKETHROUGH)
    }

    #[must_use]
    fn add_attr(mut self, flag: StyleFlags) -> Self {
        self.attrs.insert(flag);
        self
    }

    /// True when this style would emit no SGR codes at all.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.fg.is_none() && self.attrs.is_empty()
    }

    /// Layer `other` on top of this style: set fields win, unset inherit.
    #[must_use]
    pub fn patch(mut self, other: Self) -> Self {
        if other.fg.is_some() {
            self.fg = other.fg;
        }
        self.attrs.insert(other.attrs);
        self
    }

    /// Append the opening SGR sequence for this style to `out`.
    ///
    /// Emits nothing for a plain style, so callers can write
    /// `style.push_sgr(&mut line)` unconditionally.
    pub fn push_sgr(&self, out: &mut String) {
        if self.is_plain() {
            return;
        }
        out.push_str("\x1b[");
        let mut first = true;
        for (flag, param) in StyleFlags::SGR_PARAMS {
            if self.attrs.contains(flag) {
                if !first {
                    out.push(';');
                }
                let _ = write!(out, "{param}");
                first = false;
            }
        }
        if let Some(fg) = self.fg {
            if !first {
                out.push(';');
            }
            fg.push_fg_params(out);
        }
        out.push('m');
    }

    /// The opening SGR sequence as an owned string (empty when plain).
    #[must_use]
    pub fn sgr_open(&self) -> String {
        let mut out = String::new();
        self.push_sgr(&mut out);
        out
    }
}
