pub mod blocks;
pub mod error;
pub mod inline;
pub mod rope;
pub mod snapshot;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use crate::models::Node;
use blocks::{LineClassifier, segment};
use rope::lines_with_spans;

pub use error::ParseError;

/// The parsed document: block nodes in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDoc {
    pub nodes: Vec<Node>,
}

/// Parses an already-trimmed document held in a rope.
pub fn parse_document(rope: &Rope) -> ParsedDoc {
    let classifier = LineClassifier;
    let nodes = segment(rope)
        .iter()
        .flat_map(|line| classifier.classify(line))
        .collect();
    ParsedDoc { nodes }
}

/// Parses markdown text. Leading and trailing whitespace of the whole
/// document is ignored.
pub fn parse_markdown(text: &str) -> ParsedDoc {
    parse_document(&Rope::from(text.trim()))
}

/// Optional size ceilings applied before parsing.
///
/// Work is proportional to input size, but very long lines make the lazy
/// inline patterns scan repeatedly; a ceiling bounds that.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseLimits {
    /// Maximum size of the trimmed document in bytes.
    pub max_input_bytes: Option<usize>,
    /// Maximum size of any physical line in bytes.
    pub max_line_bytes: Option<usize>,
}

/// A parser with size limits. With default limits it never fails.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    limits: ParseLimits,
}

impl Parser {
    pub fn new(limits: ParseLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> ParseLimits {
        self.limits
    }

    pub fn parse(&self, text: &str) -> Result<ParsedDoc, ParseError> {
        let trimmed = text.trim();
        if let Some(max) = self.limits.max_input_bytes
            && trimmed.len() > max
        {
            return Err(ParseError::InputTooLarge {
                len: trimmed.len(),
                max,
            });
        }

        let rope = Rope::from(trimmed);
        if let Some(max) = self.limits.max_line_bytes
            && let Some((idx, line)) = lines_with_spans(&rope)
                .enumerate()
                .find(|(_, l)| l.span.len() > max)
        {
            return Err(ParseError::LineTooLong {
                line: idx + 1,
                len: line.span.len(),
                max,
            });
        }

        Ok(parse_document(&rope))
    }
}
