#![forbid(unsafe_code)]

//! Width-correct styled text for quill.
//!
//! # Role in quill
//! Everything the layout engines slice, pad, or measure goes through this
//! crate. It provides:
//! - **Width oracle**: [`visible_width`] / [`strip_styles`] / [`WidthCache`] —
//!   terminal column counts that skip SGR sequences and respect zero-width
//!   and double-width codepoints.
//! - **Span model**: [`StyledLine`] — styled text as explicit `(style, run)`
//!   pairs that survive wrapping and truncation without leaking SGR state.
//! - **Wrapping**: [`wrap_styled`] / [`truncate_styled`] — grapheme-aware,
//!   width-budgeted, every emitted line self-contained.

pub mod span;
pub mod width;
pub mod wrap;

pub use span::{Span, StyledLine};
pub use width::{WidthCache, grapheme_width, strip_styles, visible_width};
pub use wrap::{WrapMode, truncate_styled, wrap_styled, wrap_text};
