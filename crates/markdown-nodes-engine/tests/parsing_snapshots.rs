use markdown_nodes_engine::parsing::{blocks::segment, parse_document, snapshot};
use markdown_nodes_engine::{Node, NodeKind, parse_markdown};

#[test]
fn fixture_mixed_document() {
    assert_fixture("mixed_document");
}

#[test]
fn fixture_edge_cases() {
    assert_fixture("edge_cases");
}

#[test]
fn fixture_inline_priority() {
    assert_fixture("inline_priority");
}

fn assert_fixture(name: &str) {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    let rope = xi_rope::Rope::from(md.trim());

    let doc = parse_document(&rope);
    snapshot::invariants(&rope, &segment(&rope), &doc.nodes);

    let snap = snapshot::normalize(&rope);
    insta::assert_yaml_snapshot!(name, snap);
}

/// Flattening the per-line snapshot gives the same sequence as a full parse.
#[test]
fn snapshot_lines_flatten_to_document() {
    let md = "# A\n\nText *here*\n```\ncode\n```\n- gone";
    let rope = xi_rope::Rope::from(md);
    let flat: Vec<Node> = snapshot::normalize(&rope)
        .lines
        .into_iter()
        .flat_map(|l| l.nodes)
        .collect();
    assert_eq!(flat, parse_markdown(md).nodes);
}

#[test]
fn block_order_follows_source() {
    let md = "# One\nTwo\n---\n```\nthree\n```\n\nFour";
    let kinds: Vec<NodeKind> = parse_markdown(md).nodes.iter().map(|n| n.kind).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::Heading,
            NodeKind::Paragraph,
            NodeKind::ThematicBreak,
            NodeKind::Code,
            NodeKind::Break,
            NodeKind::Paragraph,
        ]
    );
}

#[test]
fn documents_parse_independently_in_parallel() {
    let docs = ["# A", "Para **b**", "```\nc\n```", "[x](https://x.org)"];
    let expected: Vec<_> = docs.iter().map(|d| parse_markdown(d)).collect();

    let results: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = docs
            .iter()
            .map(|d| s.spawn(move || parse_markdown(d)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, expected);
}
