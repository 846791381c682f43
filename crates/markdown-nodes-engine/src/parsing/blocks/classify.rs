use crate::models::Node;
use crate::parsing::inline::parse_inline;

use super::{
    kinds::{CodeFence, Heading, Paragraph, ThematicBreak},
    types::LogicalLine,
};

/// Maps logical lines to block nodes.
///
/// Rules are tried in a fixed order: break, thematic break, heading, code,
/// paragraph. A blank line stops after the break. The thematic break does
/// not stop the scan, so later rules may add further nodes for the same line.
/// Heading, code and paragraph each end the scan once they match. Lines that
/// match nothing produce no node.
pub struct LineClassifier;

impl LineClassifier {
    pub fn classify(&self, line: &LogicalLine) -> Vec<Node> {
        let text = line.text.as_str();
        let mut out = vec![];

        if text.trim().is_empty() {
            out.push(Node::line_break());
            return out;
        }

        if ThematicBreak::matches(text) {
            out.push(Node::thematic_break());
        }

        if let Some((level, title)) = Heading::parse(text) {
            out.push(Node::heading(level, title));
            return out;
        }

        if let Some((info, body)) = CodeFence::parse(text) {
            out.push(Node::code(body, info.language));
            return out;
        }

        if Paragraph::starts(text) {
            out.push(Node::paragraph(parse_inline(text)));
            return out;
        }

        if out.is_empty() {
            log::debug!(
                "dropping unrecognised line {}: {:?}",
                line.first_line + 1,
                text
            );
        }
        out
    }
}
