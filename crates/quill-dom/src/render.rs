#![forbid(unsafe_code)]

//! Render dispatch: one arm per node kind, uniform context.

use quill_glyph::{FontMode, braillify};
use quill_layout::{BoxLayout, TableLayout, render_nav};
use quill_style::{Ansi16, Style};
use quill_text::StyledLine;
use tracing::debug;

use crate::node::{BoxNode, Node, TagKind};

/// The external "should this tag kind render" predicate.
pub trait TagPolicy {
    fn should_render(&self, kind: TagKind) -> bool;
}

/// The default policy: everything renders.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllTags;

impl TagPolicy for AllTags {
    fn should_render(&self, _kind: TagKind) -> bool {
        true
    }
}

/// Everything a node render is allowed to look at. Same fixed parameter set
/// for every variant; no probing for optional arguments.
#[derive(Clone, Copy)]
pub struct RenderCtx<'a> {
    pub color: bool,
    pub inline: bool,
    pub term_width: usize,
    pub policy: &'a dyn TagPolicy,
}

impl<'a> RenderCtx<'a> {
    #[must_use]
    pub fn new(color: bool, term_width: usize, policy: &'a dyn TagPolicy) -> Self {
        Self {
            color,
            inline: false,
            term_width,
            policy,
        }
    }

    /// The same context in inline position (list items, table cells, nav).
    #[must_use]
    pub fn inline(self) -> Self {
        Self {
            inline: true,
            ..self
        }
    }
}

/// Render a whole document to its flattened line buffer.
#[must_use]
pub fn render_document(nodes: &[Node], ctx: &RenderCtx<'_>) -> Vec<String> {
    let mut text = String::new();
    for node in nodes {
        text.push_str(&render_node(node, ctx));
    }
    text.trim_end_matches('\n')
        .split('\n')
        .map(str::to_owned)
        .collect()
}

/// Render one node (and its children) to a string with embedded SGR codes.
///
/// A node whose tag kind is disabled renders empty, children included.
#[must_use]
pub fn render_node(node: &Node, ctx: &RenderCtx<'_>) -> String {
    let kind = node.kind();
    if !ctx.policy.should_render(kind) {
        debug!(?kind, "tag disabled; skipping node");
        return String::new();
    }
    match node {
        Node::Text(text) => text.clone(),
        Node::Heading { text, level } => render_heading(text, *level, ctx),
        Node::Paragraph(children) => {
            let mut out = String::new();
            for child in children {
                out.push_str(&render_node(child, ctx));
            }
            out.push('\n');
            out
        }
        Node::List { items, ordered } => render_list(items, *ordered, ctx),
        Node::Table { headers, rows } => render_table(headers, rows, ctx),
        Node::Link { text, href, id } => render_link(text, href, *id, ctx),
        Node::Button(label) => render_button(label, ctx),
        Node::Image { alt, art } => render_image(alt, art.as_deref()),
        Node::Nav(children) => render_nav_node(children, ctx),
        Node::Box(config) => render_box(config, ctx),
        Node::Div(children) => render_div(children, ctx),
        Node::Rule => {
            let mut line = "─".repeat(ctx.term_width.max(1));
            line.push('\n');
            line
        }
    }
}

fn render_heading(text: &str, level: u8, ctx: &RenderCtx<'_>) -> String {
    if level == 1 {
        let art = braillify(text, FontMode::Wide, ctx.term_width, ctx.color);
        return format!("\n{art}\n\n");
    }
    let style = match level {
        2 => Style::new().bold().fg(Ansi16::Green),
        _ => Style::new().bold().fg(Ansi16::Yellow),
    };
    let marker = "#".repeat(usize::from(level));
    let line = StyledLine::styled(style, format!("{marker} {text}"));
    format!("\n{}\n", line.render(ctx.color))
}

fn render_list(items: &[Vec<Node>], ordered: bool, ctx: &RenderCtx<'_>) -> String {
    let inline_ctx = ctx.inline();
    let mut rendered = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let mut text = String::new();
        for part in item {
            text.push_str(&render_node(part, &inline_ctx));
        }
        let marker = if ordered {
            StyledLine::styled(Style::new().fg(Ansi16::Magenta), format!("{}.", i + 1))
        } else {
            StyledLine::styled(Style::new().fg(Ansi16::Cyan), "•")
        };
        rendered.push(format!("{} {text}", marker.render(ctx.color)));
    }
    if ctx.inline {
        return rendered.join(", ");
    }
    let mut out = rendered.join("\n");
    out.push('\n');
    out
}

fn render_cell(parts: &[Node], ctx: &RenderCtx<'_>) -> String {
    let inline_ctx = ctx.inline();
    let mut out = String::new();
    for part in parts {
        out.push_str(&render_node(part, &inline_ctx));
    }
    out
}

fn render_table(headers: &[Vec<Node>], rows: &[Vec<Vec<Node>>], ctx: &RenderCtx<'_>) -> String {
    let header_cells: Vec<String> = headers.iter().map(|c| render_cell(c, ctx)).collect();
    let row_cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|c| render_cell(c, ctx)).collect())
        .collect();
    let lines = TableLayout::new().render(&header_cells, &row_cells, ctx.term_width, ctx.color);
    if lines.is_empty() {
        return String::new();
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_link(text: &str, href: &str, id: u32, ctx: &RenderCtx<'_>) -> String {
    if ctx.color {
        let styled = StyledLine::styled(
            Style::new().underline().fg(Ansi16::Blue),
            text.trim().to_owned(),
        );
        format!("[{id}] {}", styled.render(true))
    } else {
        format!("[{id}] {} [{href}]", text.trim())
    }
}

fn render_button(label: &str, ctx: &RenderCtx<'_>) -> String {
    let padded = format!("  {label}  ");
    let width = quill_text::visible_width(&padded);
    let style = Style::new().bold().fg(Ansi16::White);
    let middle = StyledLine::styled(style, padded).render(ctx.color);
    format!(
        "╭{fill}╮\n│{middle}│\n╰{fill}╯\n",
        fill = "─".repeat(width)
    )
}

fn render_image(alt: &str, art: Option<&str>) -> String {
    match art {
        Some(art) => {
            let caption = if alt.is_empty() {
                "[Image]".to_owned()
            } else {
                format!("[Image: {alt}]")
            };
            format!("\n{}\n{caption}\n", art.trim_end_matches('\n'))
        }
        None => {
            debug!(alt, "image art unavailable; degrading to token");
            "[Image]".to_owned()
        }
    }
}

fn render_nav_node(children: &[Node], ctx: &RenderCtx<'_>) -> String {
    let inline_ctx = ctx.inline();
    let items: Vec<String> = children
        .iter()
        .map(|child| render_node(child, &inline_ctx))
        .filter(|item| !item.trim().is_empty())
        .collect();
    let lines = render_nav(&items, ctx.term_width, ctx.color);
    if lines.is_empty() {
        return String::new();
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_box(config: &BoxNode, ctx: &RenderCtx<'_>) -> String {
    let children: Vec<String> = config
        .children
        .iter()
        .map(|child| render_node(child, ctx))
        .filter(|child| !child.is_empty())
        .collect();
    let mut layout = BoxLayout::new()
        .geometry(config.geometry)
        .border(config.border)
        .align(config.align);
    if let Some(title) = config.title.as_deref() {
        layout = layout.title(title);
    }
    if let Some(color) = config.border_color {
        layout = layout.border_color(color);
    }
    let lines = layout.render(&children, ctx.term_width, ctx.color);
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_div(children: &[Node], ctx: &RenderCtx<'_>) -> String {
    let mut content = String::new();
    for child in children {
        let rendered = render_node(child, ctx);
        if rendered.is_empty() {
            continue;
        }
        content.push_str(&rendered);
        if !rendered.ends_with('\n') {
            content.push('\n');
        }
    }
    let trimmed = content.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\n{trimmed}\n")
    }
}
