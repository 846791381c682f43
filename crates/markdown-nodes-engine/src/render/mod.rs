//! # Rendering
//!
//! Turns a parsed node sequence into output through an injected
//! [`RenderTable`]. The dispatch (which component a node becomes and which
//! attributes it gets) lives here; how each component looks is up to the table.

pub mod table;

pub use table::{Component, Element, RenderFn, RenderTable};

use crate::models::{Node, NodeKind};

/// Presentation settings that are not part of the node tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub image_width: u32,
    pub image_height: u32,
    /// Alt text for images whose label is empty.
    pub default_image_alt: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            image_width: 300,
            image_height: 300,
            default_image_alt: "image".to_string(),
        }
    }
}

/// `rel` attribute put on every rendered link.
pub const LINK_REL: &str = "noopener noreferrer";

/// Renders top-level block nodes in order and concatenates the output.
///
/// Headings whose level is missing or outside `1..=6` use [`Component::Div`].
/// Top-level nodes that are not block kinds render nothing.
pub fn render(nodes: &[Node], table: &RenderTable, opts: &RenderOptions) -> String {
    nodes
        .iter()
        .map(|node| render_block(node, table, opts))
        .collect()
}

fn render_block(node: &Node, table: &RenderTable, opts: &RenderOptions) -> String {
    match node.kind {
        NodeKind::Break => table.call(Component::Break, &Element::default()),
        NodeKind::ThematicBreak => table.call(Component::ThematicBreak, &Element::default()),
        NodeKind::Heading => {
            let component = node
                .heading_level()
                .and_then(Component::heading)
                .unwrap_or(Component::Div);
            table.call(component, &Element::new(table.escape(node.value_str())))
        }
        NodeKind::Code => {
            let mut el = Element::new(table.escape(node.value_str()));
            if let Some(lang) = node.label().filter(|l| !l.is_empty()) {
                el = el.attr("class", format!("language-{lang}"));
            }
            table.call(Component::Code, &el)
        }
        NodeKind::Paragraph => {
            let content: String = node
                .children
                .iter()
                .map(|child| render_inline(child, table, opts))
                .collect();
            table.call(Component::Paragraph, &Element::new(content))
        }
        _ => String::new(),
    }
}

fn render_inline(node: &Node, table: &RenderTable, opts: &RenderOptions) -> String {
    let label = || table.escape(node.label().unwrap_or_default());
    match node.kind {
        NodeKind::Image => {
            let alt = node
                .label()
                .filter(|alt| !alt.is_empty())
                .unwrap_or(opts.default_image_alt.as_str());
            let el = Element::default()
                .attr("src", node.value_str())
                .attr("alt", alt)
                .attr("height", opts.image_height.to_string())
                .attr("width", opts.image_width.to_string());
            table.call(Component::Image, &el)
        }
        NodeKind::Anchor if node.is_on_page() => {
            let el = Element::new(label())
                .attr("href", node.value_str())
                .attr("rel", LINK_REL);
            table.call(Component::Link, &el)
        }
        NodeKind::Anchor => {
            let mut el = Element::new(label()).attr("href", node.value_str());
            if let Some(target) = node.link.as_ref().and_then(|l| l.target.as_deref()) {
                el = el.attr("target", target);
            }
            table.call(Component::Anchor, &el.attr("rel", LINK_REL))
        }
        NodeKind::Strong => table.call(
            Component::Strong,
            &Element::new(table.escape(node.value_str())),
        ),
        NodeKind::Italic => table.call(
            Component::Italic,
            &Element::new(table.escape(node.value_str())),
        ),
        NodeKind::Strikethrough => table.call(
            Component::Strikethrough,
            &Element::new(table.escape(node.value_str())),
        ),
        _ => table.call(
            Component::Span,
            &Element::new(table.escape(node.value_str())),
        ),
    }
}
