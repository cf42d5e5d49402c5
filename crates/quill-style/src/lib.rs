#![forbid(unsafe_code)]

//! Style types for quill's terminal output.
//!
//! # Role in quill
//! `quill-style` is the bottom of the stack: everything that renders styled
//! text depends on it. It provides:
//! - [`Color`] at three fidelity levels (named ANSI, 256-index, RGB) with the
//!   256-cube quantizer and a bounded [`ColorCache`]
//! - [`Style`] / [`StyleFlags`] for text attributes with SGR encoding
//!
//! It deliberately knows nothing about widths, nodes, or the screen.

pub mod color;
pub mod style;

pub use color::{Ansi16, CacheStats, Color, ColorCache, rgb_to_256};
pub use style::{RESET, Style, StyleFlags};
