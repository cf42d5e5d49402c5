#![forbid(unsafe_code)]

//! Oversized headline rendering: text -> pixel bitmap -> Braille blocks.
//!
//! A fixed bitmap font rasterizes each character into a monochrome grid;
//! 2x4 pixel blocks then collapse into single Braille codepoints
//! (U+2800 + dot mask), giving 4x the effective resolution of one terminal
//! cell. Level-1 headings render through this path.

pub mod braille;
pub mod font;

pub use braille::{Bitmap, braillify, rasterize, render_braille};
pub use font::FontMode;
