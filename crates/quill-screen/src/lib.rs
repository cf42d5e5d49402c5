#![forbid(unsafe_code)]

//! Screen output: minimal repaints over a scrollable line buffer.
//!
//! # Role in quill
//! The document pipeline ends here. A flattened line buffer (whole-document
//! height) comes in; the [`Painter`] slices it by scroll offset, diffs the
//! slice against the previously painted frame, and rewrites only the rows
//! that changed — cursor-addressed, cleared to end of line, flushed in one
//! write. [`Viewport`] owns the scroll offset and its clamping rules.
//!
//! Terminal dimensions are queried fresh on every paint through a
//! [`SizeProbe`], so a resize between paints is picked up immediately and
//! never served from a stale cache.

pub mod ansi;
pub mod painter;
pub mod size;
pub mod viewport;

pub use painter::{PaintStats, Painter, TITLE_ROWS};
pub use size::{FixedProbe, SizeProbe, TerminalProbe};
pub use viewport::Viewport;
