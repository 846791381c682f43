use xi_rope::Rope;

use super::span::Span;

/// A single physical line of the document with its byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRef {
    /// Byte span of the line content, excluding the line terminator.
    pub span: Span,
    /// The line text without `\n` or `\r\n`.
    pub text: String,
}

/// Returns an iterator over physical lines with their byte spans.
///
/// Uses `lines_raw` so offsets account for the terminators, then strips them
/// from the yielded text and span.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        offset += line.len();
        let text = line.trim_end_matches('\n').trim_end_matches('\r');
        LineRef {
            span: Span {
                start,
                end: start + text.len(),
            },
            text: text.to_string(),
        }
    })
}
