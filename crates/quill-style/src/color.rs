#![forbid(unsafe_code)]

//! Color values and the 256-color quantizer.

use std::collections::HashMap;

/// ANSI 16-color indices (0-15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Ansi16 {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    BrightBlack = 8,
    BrightRed = 9,
    BrightGreen = 10,
    BrightYellow = 11,
    BrightBlue = 12,
    BrightMagenta = 13,
    BrightCyan = 14,
    BrightWhite = 15,
}

impl Ansi16 {
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// SGR foreground parameter for this color (30-37, 90-97).
    #[must_use]
    pub const fn fg_param(self) -> u8 {
        let idx = self as u8;
        if idx < 8 { 30 + idx } else { 90 + (idx - 8) }
    }
}

/// A color value at varying fidelity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// One of the 16 named terminal colors.
    Ansi16(Ansi16),
    /// An index into the xterm 256-color palette.
    Ansi256(u8),
    /// 24-bit RGB, quantized to the 256 palette at emit time.
    Rgb(u8, u8, u8),
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(r, g, b)
    }

    /// Resolve to a 256-palette index.
    #[must_use]
    pub fn to_ansi256(self) -> u8 {
        match self {
            Self::Ansi16(c) => c.as_u8(),
            Self::Ansi256(idx) => idx,
            Self::Rgb(r, g, b) => rgb_to_256(r, g, b),
        }
    }

    /// Append the SGR foreground parameters for this color to `out`.
    ///
    /// Named colors use the compact 30-37/90-97 forms; everything else goes
    /// through `38;5;N`.
    pub fn push_fg_params(self, out: &mut String) {
        use std::fmt::Write;
        match self {
            Self::Ansi16(c) => {
                let _ = write!(out, "{}", c.fg_param());
            }
            _ => {
                let _ = write!(out, "38;5;{}", self.to_ansi256());
            }
        }
    }
}

impl From<Ansi16> for Color {
    fn from(c: Ansi16) -> Self {
        Self::Ansi16(c)
    }
}

/// Quantize 24-bit RGB to the xterm 256 palette.
///
/// Pure grays map onto the 24-step grayscale ramp (232-255) with the extremes
/// snapped to the cube's black (16) and white (231); everything else maps to
/// the 6x6x6 color cube.
#[must_use]
pub const fn rgb_to_256(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        if r < 8 {
            return 16;
        }
        if r > 248 {
            return 231;
        }
        return 232 + ((r as u16 * 23) / 255) as u8;
    }
    16 + 36 * ((r as u16 * 5) / 255) as u8
        + 6 * ((g as u16 * 5) / 255) as u8
        + ((b as u16 * 5) / 255) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
    pub capacity: usize,
}

/// Bounded memo for RGB -> 256-index quantization (clears on overflow).
///
/// Owned by whoever encodes colors in a hot loop; there is no module-level
/// cache.
#[derive(Debug)]
pub struct ColorCache {
    max_entries: usize,
    map: HashMap<u32, u8>,
    hits: u64,
    misses: u64,
}

impl ColorCache {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            max_entries,
            map: HashMap::with_capacity(max_entries.min(2048)),
            hits: 0,
            misses: 0,
        }
    }

    #[must_use]
    pub fn quantize(&mut self, r: u8, g: u8, b: u8) -> u8 {
        let key = ((r as u32) << 16) | ((g as u32) << 8) | (b as u32);
        if let Some(&cached) = self.map.get(&key) {
            self.hits += 1;
            return cached;
        }
        self.misses += 1;
        let idx = rgb_to_256(r, g, b);
        if self.map.len() >= self.max_entries {
            self.map.clear();
        }
        self.map.insert(key, idx);
        idx
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.map.len(),
            capacity: self.max_entries,
        }
    }
}

impl Default for ColorCache {
    fn default() -> Self {
        Self::new()
    }
}
