#![forbid(unsafe_code)]

//! The closed set of renderable constructs.

use quill_layout::{Alignment, BorderStyle, BoxGeometry};
use quill_style::{Ansi16, Color};

use crate::anchor::AnchorRegistry;

/// A renderable document node.
///
/// Nodes are immutable once constructed; rendering them is pure given a
/// [`crate::RenderCtx`]. Adding a variant extends the exhaustive match in
/// `render`, so an unhandled construct is a compile error rather than a
/// runtime surprise.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A literal text run.
    Text(String),
    /// A heading; level 1 renders as Braille block art.
    Heading { text: String, level: u8 },
    /// Inline children concatenated and terminated with a newline.
    Paragraph(Vec<Node>),
    /// Bulleted or numbered items, each a list of inline children.
    List { items: Vec<Vec<Node>>, ordered: bool },
    /// Header cells and body rows; every cell is a list of inline children.
    Table {
        headers: Vec<Vec<Node>>,
        rows: Vec<Vec<Vec<Node>>>,
    },
    /// A clickable anchor with its document-unique id.
    Link { text: String, href: String, id: u32 },
    /// A boxed push button.
    Button(String),
    /// Pre-rendered text art with a caption; `art: None` is the degraded
    /// case.
    Image { alt: String, art: Option<String> },
    /// A full-width navigation bar of inline children.
    Nav(Vec<Node>),
    /// A bordered container with explicit geometry.
    Box(BoxNode),
    /// A grouping container framed by blank lines.
    Div(Vec<Node>),
    /// A full-width horizontal rule.
    Rule,
}

/// Configuration of a [`Node::Box`].
#[derive(Debug, Clone, PartialEq)]
pub struct BoxNode {
    pub children: Vec<Node>,
    pub title: Option<String>,
    pub geometry: BoxGeometry,
    pub border: BorderStyle,
    pub align: Alignment,
    pub border_color: Option<Color>,
}

impl BoxNode {
    #[must_use]
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            children,
            title: None,
            geometry: BoxGeometry::new(),
            border: BorderStyle::Thin,
            align: Alignment::Left,
            border_color: None,
        }
    }

    /// Page-header preset: centered content, blue border, titled "Header".
    #[must_use]
    pub fn header(children: Vec<Node>) -> Self {
        Self::new(children)
            .title("Header")
            .align(Alignment::Center)
            .border_color(Color::Ansi16(Ansi16::Blue))
    }

    /// Page-footer preset: like [`header`](Self::header) with a white
    /// border and "Footer" title.
    #[must_use]
    pub fn footer(children: Vec<Node>) -> Self {
        Self::new(children)
            .title("Footer")
            .align(Alignment::Center)
            .border_color(Color::Ansi16(Ansi16::White))
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn geometry(mut self, geometry: BoxGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    #[must_use]
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    #[must_use]
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    #[must_use]
    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }
}

/// Tag kinds, the keys of the external "should render" predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Text,
    Heading,
    Paragraph,
    List,
    OrderedList,
    Table,
    Link,
    Button,
    Image,
    Nav,
    Box,
    Div,
    Rule,
}

impl Node {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Levels clamp into 1..=6.
    #[must_use]
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        Self::Heading {
            text: text.into(),
            level: level.clamp(1, 6),
        }
    }

    /// Construct a link, drawing its id from the document's registry.
    #[must_use]
    pub fn link(
        registry: &mut AnchorRegistry,
        text: impl Into<String>,
        href: impl Into<String>,
    ) -> Self {
        let text = text.into();
        let href = href.into();
        let id = registry.register(text.clone(), href.clone());
        Self::Link { text, href, id }
    }

    #[must_use]
    pub fn kind(&self) -> TagKind {
        match self {
            Self::Text(_) => TagKind::Text,
            Self::Heading { .. } => TagKind::Heading,
            Self::Paragraph(_) => TagKind::Paragraph,
            Self::List { ordered: false, .. } => TagKind::List,
            Self::List { ordered: true, .. } => TagKind::OrderedList,
            Self::Table { .. } => TagKind::Table,
            Self::Link { .. } => TagKind::Link,
            Self::Button(_) => TagKind::Button,
            Self::Image { .. } => TagKind::Image,
            Self::Nav(_) => TagKind::Nav,
            Self::Box(_) => TagKind::Box,
            Self::Div(_) => TagKind::Div,
            Self::Rule => TagKind::Rule,
        }
    }
}
