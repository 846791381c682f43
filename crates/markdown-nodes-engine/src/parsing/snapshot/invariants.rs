use xi_rope::Rope;

use crate::models::{Node, NodeKind};
use crate::parsing::blocks::LogicalLine;
use crate::parsing::rope::preview;

/// Asserts the structural guarantees of segmentation and of the node tree.
///
/// Panics with a descriptive message on the first violation.
pub fn check(rope: &Rope, lines: &[LogicalLine], nodes: &[Node]) {
    let n = rope.len();
    let mut next_line = 0;
    for l in lines {
        assert!(
            l.span.start <= l.span.end && l.span.end <= n,
            "line span out of bounds: {:?} (rope len: {})",
            l.span,
            n
        );
        assert_eq!(
            l.first_line,
            next_line,
            "logical lines skip or repeat physical lines near {:?}",
            preview(rope, l.span, 40)
        );
        assert!(l.last_line >= l.first_line);
        next_line = l.last_line + 1;
    }

    for node in nodes {
        check_block(node);
    }
}

fn check_block(node: &Node) {
    match node.kind {
        NodeKind::Break | NodeKind::ThematicBreak => {
            assert!(node.value.is_none() && node.children.is_empty(), "{node:?}");
        }
        NodeKind::Heading => {
            let digits = node.label().unwrap_or_default();
            assert!(
                node.children.len() == 1
                    && !digits.is_empty()
                    && digits.bytes().all(|b| b.is_ascii_digit()),
                "heading level child must be digits: {node:?}"
            );
        }
        NodeKind::Code => check_labelled(node),
        NodeKind::Paragraph => {
            assert!(node.value.is_none(), "{node:?}");
            for child in &node.children {
                check_inline(child);
            }
        }
        _ => panic!("not a block node: {node:?}"),
    }
}

fn check_inline(node: &Node) {
    match node.kind {
        NodeKind::Image | NodeKind::Anchor => check_labelled(node),
        NodeKind::Text | NodeKind::Strong | NodeKind::Italic | NodeKind::Strikethrough => {
            assert!(node.children.is_empty(), "inline nodes do not nest: {node:?}");
        }
        _ => panic!("not an inline node: {node:?}"),
    }
    if node.link.is_some() {
        assert!(
            matches!(node.kind, NodeKind::Anchor | NodeKind::Text),
            "only anchors and their leading text carry link metadata: {node:?}"
        );
    }
}

fn check_labelled(node: &Node) {
    assert!(
        node.value.is_some()
            && node.children.len() == 1
            && node.children[0].kind == NodeKind::Text,
        "expected exactly one text label child: {node:?}"
    );
}
