//! End-to-end tests for the parsing module: document in, node sequence out.

use pretty_assertions::assert_eq;
use rstest::rstest;
use xi_rope::Rope;

use crate::models::{LinkAttrs, Node, NodeKind};
use crate::parsing::{
    ParseError, ParseLimits, Parser, blocks::segment, parse_markdown, snapshot,
};

fn nodes(md: &str) -> Vec<Node> {
    let doc = parse_markdown(md);
    let rope = Rope::from(md.trim());
    snapshot::invariants(&rope, &segment(&rope), &doc.nodes);
    doc.nodes
}

#[rstest]
#[case("Plain prose with no markers.")]
#[case("a")]
#[case("Some words, then more words; fine.")]
#[case("Zebra 123 # not a heading")]
fn plain_prose_is_one_text_child(#[case] line: &str) {
    assert_eq!(nodes(line), vec![Node::paragraph(vec![Node::text(line)])]);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
#[case(5)]
#[case(6)]
fn heading_levels(#[case] n: usize) {
    let md = format!("{} Section title", "#".repeat(n));
    let parsed = nodes(&md);
    assert_eq!(parsed, vec![Node::heading(n, "Section title")]);
    assert_eq!(parsed[0].heading_level(), Some(n));
    assert_eq!(parsed[0].label(), Some(n.to_string().as_str()));
}

#[test]
fn heading_level_is_not_capped() {
    let parsed = nodes("######## Too deep");
    assert_eq!(parsed[0].heading_level(), Some(8));
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n  \n")]
fn whitespace_document_is_one_break(#[case] md: &str) {
    assert_eq!(nodes(md), vec![Node::line_break()]);
}

#[test]
fn blank_lines_between_blocks_are_breaks() {
    assert_eq!(
        nodes("First\n\n   \nSecond"),
        vec![
            Node::paragraph(vec![Node::text("First")]),
            Node::line_break(),
            Node::line_break(),
            Node::paragraph(vec![Node::text("Second")]),
        ]
    );
}

#[test]
fn fenced_code_block() {
    assert_eq!(nodes("```lang\nBODY\n```"), vec![Node::code("BODY", "lang")]);
}

#[test]
fn fenced_code_is_raw() {
    let md = "```md\n# not a heading\n**not bold**\n\n---\n```";
    assert_eq!(
        nodes(md),
        vec![Node::code("# not a heading\n**not bold**\n\n---", "md")]
    );
}

#[test]
fn repeated_fence_text_merges_each_block() {
    let md = "```js\nconsole.log(1)\n```\nBetween\n```js\nconsole.log(2)\n```";
    assert_eq!(
        nodes(md),
        vec![
            Node::code("console.log(1)", "js"),
            Node::paragraph(vec![Node::text("Between")]),
            Node::code("console.log(2)", "js"),
        ]
    );
}

#[test]
fn unterminated_fence_falls_through() {
    assert_eq!(
        nodes("```rust\nlet x = 1;\nDone"),
        vec![
            Node::paragraph(vec![Node::text("let x = 1;")]),
            Node::paragraph(vec![Node::text("Done")]),
        ]
    );
}

#[rstest]
#[case("[label](/internal/path)", true)]
#[case("[label](https://example.com)", false)]
#[case("[label](http://example.com)", false)]
fn anchor_on_page(#[case] md: &str, #[case] on_page: bool) {
    let parsed = nodes(md);
    let anchor = &parsed[0].children[0];
    assert_eq!(anchor.kind, NodeKind::Anchor);
    assert_eq!(anchor.label(), Some("label"));
    assert_eq!(anchor.is_on_page(), on_page);
}

#[test]
fn anchor_target_attribute() {
    let parsed = nodes(r#"[docs](https://docs.rs){target="_blank"}"#);
    assert_eq!(
        parsed[0].children,
        vec![Node::anchor(
            "https://docs.rs",
            "docs",
            LinkAttrs {
                on_page: false,
                target: Some("_blank".into()),
            }
        )]
    );
}

#[test]
fn image_inside_paragraph() {
    assert_eq!(
        nodes("Look: ![alt](src.png)"),
        vec![Node::paragraph(vec![
            Node::text("Look: "),
            Node::image("src.png", "alt"),
        ])]
    );
}

#[test]
fn hello_world_example() {
    assert_eq!(
        nodes("Hello **world** and *friend*!"),
        vec![Node::paragraph(vec![
            Node::text("Hello "),
            Node::strong("world"),
            Node::text(" and "),
            Node::italic("friend"),
            Node::text("!"),
        ])]
    );
}

#[rstest]
#[case("Hello **world** and *friend*!")]
#[case("See [the docs](/docs) now")]
#[case("*shiny* new ~~old~~ thing")]
fn reparsing_visible_text_is_stable(#[case] md: &str) {
    let first = nodes(md);
    let visible = first[0].plain_text();
    let second = nodes(&visible);
    assert_eq!(second, vec![Node::paragraph(vec![Node::text(visible.clone())])]);
    assert_eq!(second[0].plain_text(), visible);
}

#[test]
fn thematic_break_line() {
    assert_eq!(
        nodes("Above\n---\nBelow"),
        vec![
            Node::paragraph(vec![Node::text("Above")]),
            Node::thematic_break(),
            Node::paragraph(vec![Node::text("Below")]),
        ]
    );
}

#[test]
fn unrecognised_lines_are_dropped_in_place() {
    assert_eq!(
        nodes("Intro\n- item\n1. step\nOutro"),
        vec![
            Node::paragraph(vec![Node::text("Intro")]),
            Node::paragraph(vec![Node::text("Outro")]),
        ]
    );
}

#[test]
fn crlf_documents_parse_like_lf() {
    assert_eq!(nodes("# T\r\n\r\nBody"), nodes("# T\n\nBody"));
}

#[test]
fn parser_without_limits_matches_parse_markdown() {
    let md = "# Title\n\nText";
    assert_eq!(Parser::default().parse(md), Ok(parse_markdown(md)));
}

#[test]
fn input_ceiling() {
    let parser = Parser::new(ParseLimits {
        max_input_bytes: Some(4),
        max_line_bytes: None,
    });
    assert_eq!(
        parser.parse("  hello  "),
        Err(ParseError::InputTooLarge { len: 5, max: 4 })
    );
    assert!(parser.parse("  hi  ").is_ok());
}

#[test]
fn line_ceiling_reports_line_number() {
    let parser = Parser::new(ParseLimits {
        max_input_bytes: None,
        max_line_bytes: Some(5),
    });
    assert_eq!(
        parser.parse("short\ntoo long\nok"),
        Err(ParseError::LineTooLong {
            line: 2,
            len: 8,
            max: 5
        })
    );
}
