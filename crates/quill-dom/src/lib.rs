#![forbid(unsafe_code)]

//! The document model: typed nodes, anchors, and render dispatch.
//!
//! # Role in quill
//! An external HTML-mapping stage builds a [`Node`] tree (assigning link ids
//! through the [`AnchorRegistry`]); this crate renders that tree to strings
//! with embedded SGR codes, one closed enum with one render arm per
//! construct. Box, table, and nav geometry is delegated to `quill-layout`;
//! level-1 headings go through `quill-glyph`.
//!
//! Rendering is pure given a [`RenderCtx`] (color flag, inline flag,
//! terminal width, tag policy) and never fails: a disabled tag is skipped
//! with its children, a broken image degrades to an inert token, and
//! siblings always continue.

pub mod anchor;
pub mod node;
pub mod render;

pub use anchor::{Anchor, AnchorRegistry};
pub use node::{BoxNode, Node, TagKind};
pub use render::{AllTags, RenderCtx, TagPolicy, render_document, render_node};
