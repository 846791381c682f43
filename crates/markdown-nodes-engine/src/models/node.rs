use serde::Serialize;

/// The kind of a parsed node.
///
/// Block kinds (`Break`, `ThematicBreak`, `Heading`, `Code`, `Paragraph`) appear
/// at the top level; the rest only appear as paragraph children or as the
/// synthetic label child of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Text,
    Break,
    ThematicBreak,
    Heading,
    Image,
    Paragraph,
    Anchor,
    Strong,
    Italic,
    Strikethrough,
    Code,
}

/// Link metadata carried by anchors.
///
/// The plain text run emitted directly before an anchor carries a copy of the
/// same metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkAttrs {
    /// True when the link target is not an absolute `http`/`https` URL.
    pub on_page: bool,
    /// Explicit open behaviour from a `{target="..."}` annotation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// A node in the parsed document.
///
/// The shape of `value` and `children` depends on `kind`:
///
/// | kind | value | children |
/// |------|-------|----------|
/// | `Heading` | heading text | one `Text` holding the level as digits |
/// | `Image` | source URL | one `Text` holding the alt text |
/// | `Anchor` | link target | one `Text` holding the label |
/// | `Code` | fence body | one `Text` holding the language tag |
/// | `Paragraph` | none | inline nodes in source order |
/// | `Break`, `ThematicBreak` | none | none |
/// | everything else | the text run | none |
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkAttrs>,
}

impl Node {
    fn leaf(kind: NodeKind, value: Option<String>) -> Self {
        Self {
            kind,
            value,
            children: vec![],
            link: None,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Text, Some(value.into()))
    }

    pub fn line_break() -> Self {
        Self::leaf(NodeKind::Break, None)
    }

    pub fn thematic_break() -> Self {
        Self::leaf(NodeKind::ThematicBreak, None)
    }

    /// A heading whose level is stored as a digit string in its only child.
    pub fn heading(level: usize, value: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Heading,
            value: Some(value.into()),
            children: vec![Self::text(level.to_string())],
            link: None,
        }
    }

    pub fn code(body: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Code,
            value: Some(body.into()),
            children: vec![Self::text(language)],
            link: None,
        }
    }

    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Image,
            value: Some(src.into()),
            children: vec![Self::text(alt)],
            link: None,
        }
    }

    pub fn anchor(href: impl Into<String>, label: impl Into<String>, link: LinkAttrs) -> Self {
        Self {
            kind: NodeKind::Anchor,
            value: Some(href.into()),
            children: vec![Self::text(label)],
            link: Some(link),
        }
    }

    pub fn strong(value: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Strong, Some(value.into()))
    }

    pub fn italic(value: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Italic, Some(value.into()))
    }

    pub fn strikethrough(value: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Strikethrough, Some(value.into()))
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Self {
            kind: NodeKind::Paragraph,
            value: None,
            children,
            link: None,
        }
    }

    /// Attaches link metadata (used for the text run preceding an anchor).
    #[must_use]
    pub fn with_link(mut self, link: LinkAttrs) -> Self {
        self.link = Some(link);
        self
    }

    /// The primary payload, or `""` when absent.
    pub fn value_str(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }

    /// Value of the first child: alt text, link label, code language or heading digits.
    pub fn label(&self) -> Option<&str> {
        self.children.first().and_then(|c| c.value.as_deref())
    }

    /// Heading level decoded from the digit child.
    ///
    /// `None` when this is not a heading or the child is missing or not numeric;
    /// callers must not assume the result lies in `1..=6`.
    pub fn heading_level(&self) -> Option<usize> {
        if self.kind != NodeKind::Heading {
            return None;
        }
        self.label()?.parse().ok()
    }

    /// True for anchors pointing inside the hosting application.
    pub fn is_on_page(&self) -> bool {
        self.link.as_ref().is_some_and(|l| l.on_page)
    }

    /// Visible text of a paragraph with styling removed.
    ///
    /// Images and anchors contribute their label; every other child contributes
    /// its value.
    pub fn plain_text(&self) -> String {
        self.children
            .iter()
            .map(|c| match c.kind {
                NodeKind::Image | NodeKind::Anchor => c.label().unwrap_or_default(),
                _ => c.value_str(),
            })
            .collect()
    }
}
