use crate::models::Node;

use super::{
    cursor::Cursor,
    kinds::{Anchor, Emphasis, Image, InlineMatch},
};

type Matcher = fn(&str) -> Option<InlineMatch>;

/// Inline matchers in priority order.
///
/// Priority beats position: a strong span late in the line wins over an
/// italic span earlier in the line, and the italic markers stay in the
/// leading text.
const MATCHERS: [Matcher; 5] = [
    Image::find,
    Anchor::find,
    Emphasis::find_strong,
    Emphasis::find_italic,
    Emphasis::find_strikethrough,
];

/// Tokenizes one line of paragraph text into inline nodes.
///
/// At each step every matcher searches the unconsumed remainder; the first
/// matcher (by priority) that finds anything wins. Text before the match is
/// emitted as a `Text` node, then the match itself, and the cursor moves past
/// it. When no matcher finds anything the remainder becomes one final `Text`
/// node.
///
/// Spans never nest: `***x***` and similar overlaps resolve to whatever the
/// first winning match covers.
pub fn parse_inline(s: &str) -> Vec<Node> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];

    while !cur.eof() {
        let rest = cur.rest();
        let Some(m) = MATCHERS.iter().find_map(|find| find(rest)) else {
            log::trace!("text {rest:?}");
            out.push(Node::text(rest));
            break;
        };
        debug_assert!(m.len > 0, "inline matchers must consume input");

        if m.offset > 0 {
            let prefix = Node::text(cur.take(m.offset));
            out.push(match m.prefix_link {
                Some(link) => prefix.with_link(link),
                None => prefix,
            });
        }
        log::trace!("{:?} at byte {}", m.node.kind, cur.i);
        cur.bump_n(m.len);
        out.push(m.node);
    }

    out
}
