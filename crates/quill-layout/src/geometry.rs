#![forbid(unsafe_code)]

//! Box geometry, alignment, and border character sets.

use std::str::FromStr;

/// Construction-time contract violations.
///
/// Collaborators hand us alignment and border styles as text or integers
/// (attribute values, config entries); conversion rejects anything outside
/// the closed sets instead of coercing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("invalid alignment {0:?} (expected \"left\", \"center\", or \"right\")")]
    InvalidAlignment(String),
    #[error("invalid border style {0:?} (expected \"none\", \"thin\", or \"thick\")")]
    InvalidBorderStyle(String),
    #[error("invalid border style {0} (expected 0, 1, or 2)")]
    InvalidBorderIndex(u8),
}

/// Horizontal alignment of content inside a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl FromStr for Alignment {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            other => Err(LayoutError::InvalidAlignment(other.to_owned())),
        }
    }
}

/// Border glyphs for one box style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderSet {
    /// Rounded single-line border.
    pub const THIN: Self = Self {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        horizontal: '─',
        vertical: '│',
    };

    /// Heavy-line border.
    pub const THICK: Self = Self {
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
        horizontal: '━',
        vertical: '┃',
    };
}

/// Border style of a box: a closed three-way choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// No border rows or columns are drawn; padding math is unchanged.
    None,
    #[default]
    Thin,
    Thick,
}

impl BorderStyle {
    /// The glyph set for a drawn border; `None` draws nothing.
    #[must_use]
    pub const fn glyphs(self) -> Option<&'static BorderSet> {
        match self {
            Self::None => None,
            Self::Thin => Some(&BorderSet::THIN),
            Self::Thick => Some(&BorderSet::THICK),
        }
    }

    #[must_use]
    pub const fn is_drawn(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl TryFrom<u8> for BorderStyle {
    type Error = LayoutError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Thin),
            2 => Ok(Self::Thick),
            other => Err(LayoutError::InvalidBorderIndex(other)),
        }
    }
}

impl FromStr for BorderStyle {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "thin" => Ok(Self::Thin),
            "thick" => Ok(Self::Thick),
            other => Err(LayoutError::InvalidBorderStyle(other.to_owned())),
        }
    }
}

/// Placement of a box in terminal cell coordinates.
///
/// `start_*` are the outermost top-left of the element including margins.
/// `end_x`/`end_y` are optional: an omitted `end_x` lets the box grow with
/// its content up to the terminal's right edge minus margin; an omitted
/// `end_y` sizes the box to content + padding + borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoxGeometry {
    pub start_x: usize,
    pub start_y: usize,
    pub end_x: Option<usize>,
    pub end_y: Option<usize>,
    pub padding_x: usize,
    pub padding_y: usize,
    pub margin_x: usize,
    pub margin_y: usize,
}

impl BoxGeometry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            padding_x: 1,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn at(mut self, x: usize, y: usize) -> Self {
        self.start_x = x;
        self.start_y = y;
        self
    }

    #[must_use]
    pub fn end_x(mut self, x: usize) -> Self {
        self.end_x = Some(x);
        self
    }

    #[must_use]
    pub fn end_y(mut self, y: usize) -> Self {
        self.end_y = Some(y);
        self
    }

    #[must_use]
    pub fn padding(mut self, x: usize, y: usize) -> Self {
        self.padding_x = x;
        self.padding_y = y;
        self
    }

    #[must_use]
    pub fn margin(mut self, x: usize, y: usize) -> Self {
        self.margin_x = x;
        self.margin_y = y;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alignment_parses_the_closed_set() {
        assert_eq!("left".parse::<Alignment>(), Ok(Alignment::Left));
        assert_eq!("center".parse::<Alignment>(), Ok(Alignment::Center));
        assert_eq!("right".parse::<Alignment>(), Ok(Alignment::Right));
    }

    #[test]
    fn alignment_rejects_everything_else() {
        let err = "middle".parse::<Alignment>().unwrap_err();
        assert_eq!(err, LayoutError::InvalidAlignment("middle".to_owned()));
        assert!("Left".parse::<Alignment>().is_err());
    }

    #[test]
    fn border_style_from_index() {
        assert_eq!(BorderStyle::try_from(0), Ok(BorderStyle::None));
        assert_eq!(BorderStyle::try_from(1), Ok(BorderStyle::Thin));
        assert_eq!(BorderStyle::try_from(2), Ok(BorderStyle::Thick));
        assert_eq!(
            BorderStyle::try_from(3),
            Err(LayoutError::InvalidBorderIndex(3))
        );
    }

    #[test]
    fn border_style_from_str_rejects_unknown() {
        assert!("double".parse::<BorderStyle>().is_err());
    }

    #[test]
    fn none_style_has_no_glyphs() {
        assert!(BorderStyle::None.glyphs().is_none());
        assert!(!BorderStyle::None.is_drawn());
    }

    #[test]
    fn thin_and_thick_sets_differ() {
        let thin = BorderStyle::Thin.glyphs().unwrap();
        let thick = BorderStyle::Thick.glyphs().unwrap();
        assert_eq!(thin.top_left, '╭');
        assert_eq!(thick.top_left, '┏');
        assert_ne!(thin.horizontal, thick.horizontal);
    }

    #[test]
    fn geometry_builder_defaults() {
        let g = BoxGeometry::new();
        assert_eq!(g.padding_x, 1);
        assert_eq!(g.end_x, None);
        assert_eq!(g.end_y, None);
    }

    #[test]
    fn error_messages_name_the_offender() {
        let msg = LayoutError::InvalidAlignment("middle".to_owned()).to_string();
        assert!(msg.contains("middle"));
    }
}
