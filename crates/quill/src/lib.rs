#![forbid(unsafe_code)]

//! quill: a layout and rendering engine for constrained HTML document trees
//! in a terminal viewport.
//!
//! # Pipeline
//! An external mapping stage builds a [`Node`] tree (registering link ids in
//! the [`AnchorRegistry`]); rendering flattens the tree into a styled line
//! buffer; the [`Painter`] diffs viewport slices of that buffer against the
//! previously painted frame and rewrites only what changed. [`Session`]
//! wires the stages together and owns the per-document state.
//!
//! The subsystem crates are re-exported here:
//! - `quill-style` — colors, SGR attributes, [`Style`]
//! - `quill-text` — width oracle and styled span wrapping
//! - `quill-glyph` — Braille headline rasterization
//! - `quill-layout` — box, table, and nav geometry
//! - `quill-dom` — the node tree and render dispatch
//! - `quill-screen` — incremental painting and scrolling

pub mod session;

pub use quill_dom::{
    AllTags, Anchor, AnchorRegistry, BoxNode, Node, RenderCtx, TagKind, TagPolicy,
    render_document, render_node,
};
pub use quill_glyph::{Bitmap, FontMode, braillify, rasterize};
pub use quill_layout::{Alignment, BorderStyle, BoxGeometry, BoxLayout, LayoutError, TableLayout};
pub use quill_screen::{FixedProbe, PaintStats, Painter, SizeProbe, TerminalProbe, Viewport};
pub use quill_style::{Ansi16, Color, ColorCache, Style};
pub use quill_text::{StyledLine, WidthCache, WrapMode, visible_width, wrap_styled, wrap_text};
pub use session::Session;
