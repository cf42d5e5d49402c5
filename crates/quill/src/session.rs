#![forbid(unsafe_code)]

//! The document-level session: settings, anchors, line buffer, scrolling.

use std::io::{self, Write};

use quill_dom::{AllTags, Anchor, AnchorRegistry, Node, RenderCtx, TagPolicy, render_document};
use quill_screen::{PaintStats, Painter, SizeProbe, Viewport};

/// Owns everything that lives across paints for one displayed document.
///
/// The flow per navigation: [`begin_document`](Session::begin_document)
/// resets the anchor registry, the caller builds the node tree against it,
/// then [`show`](Session::show) renders the tree into a fresh line buffer,
/// clears the screen, and paints from the top. Scrolling repaints
/// incrementally and is a no-op at the edges.
pub struct Session<W, P> {
    color: bool,
    policy: Box<dyn TagPolicy>,
    anchors: AnchorRegistry,
    lines: Vec<String>,
    title: String,
    viewport: Viewport,
    painter: Painter<W, P>,
}

impl<W: Write, P: SizeProbe> Session<W, P> {
    #[must_use]
    pub fn new(out: W, probe: P) -> Self {
        Self {
            color: true,
            policy: Box::new(AllTags),
            anchors: AnchorRegistry::new(),
            lines: Vec::new(),
            title: String::new(),
            viewport: Viewport::new(),
            painter: Painter::new(out, probe),
        }
    }

    /// Replace the tag-filter policy (supplied by the settings collaborator).
    #[must_use]
    pub fn with_policy(mut self, policy: Box<dyn TagPolicy>) -> Self {
        self.policy = policy;
        self
    }

    pub fn set_color(&mut self, color: bool) {
        self.color = color;
    }

    /// Start a new document: anchors reset, ids restart at 1. The returned
    /// registry is what link construction draws ids from.
    pub fn begin_document(&mut self) -> &mut AnchorRegistry {
        self.anchors.clear();
        &mut self.anchors
    }

    /// Render `nodes` into a fresh line buffer and paint it from the top.
    ///
    /// # Errors
    ///
    /// Propagates terminal write failures.
    pub fn show(&mut self, nodes: &[Node], title: &str) -> io::Result<PaintStats> {
        let (cols, _) = self.painter.size();
        let ctx = RenderCtx::new(self.color, usize::from(cols), self.policy.as_ref());
        self.lines = render_document(nodes, &ctx);
        self.title = title.to_owned();
        self.viewport.reset();
        self.painter.clear()?;
        self.painter.paint(&self.lines, 0, &self.title)
    }

    /// Scroll one line down; repaints only when the offset actually moved.
    ///
    /// # Errors
    ///
    /// Propagates terminal write failures.
    pub fn scroll_down(&mut self) -> io::Result<Option<PaintStats>> {
        let usable = self.painter.usable_height();
        if !self.viewport.scroll_down(self.lines.len(), usable) {
            return Ok(None);
        }
        self.paint_current().map(Some)
    }

    /// Scroll one line up; repaints only when the offset actually moved.
    ///
    /// # Errors
    ///
    /// Propagates terminal write failures.
    pub fn scroll_up(&mut self) -> io::Result<Option<PaintStats>> {
        if !self.viewport.scroll_up() {
            return Ok(None);
        }
        self.paint_current().map(Some)
    }

    /// Repaint the current slice (after a resize, for instance).
    ///
    /// # Errors
    ///
    /// Propagates terminal write failures.
    pub fn repaint(&mut self) -> io::Result<PaintStats> {
        let usable = self.painter.usable_height();
        self.viewport.clamp(self.lines.len(), usable);
        self.paint_current()
    }

    fn paint_current(&mut self) -> io::Result<PaintStats> {
        self.painter
            .paint(&self.lines, self.viewport.offset(), &self.title)
    }

    /// Resolve `click <id>` against the current document's anchors.
    #[must_use]
    pub fn anchor(&self, id: u32) -> Option<&Anchor> {
        self.anchors.get(id)
    }

    /// The current flattened line buffer.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn scroll_offset(&self) -> usize {
        self.viewport.offset()
    }

    /// The underlying painter (tests inspect its output sink).
    #[must_use]
    pub fn painter(&self) -> &Painter<W, P> {
        &self.painter
    }
}
