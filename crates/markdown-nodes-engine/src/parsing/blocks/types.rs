use crate::parsing::rope::span::Span;

/// One entry of the segmented document.
///
/// Usually a single physical line. A fenced code block collapses into one
/// logical line whose `text` holds the opener, body and closer joined by `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// Line content without terminators.
    pub text: String,
    /// Index of the first physical line (0-based).
    pub first_line: usize,
    /// Index of the last physical line, inclusive.
    pub last_line: usize,
    /// Byte span in the trimmed document.
    pub span: Span,
}

impl LogicalLine {
    /// True when this entry was merged from a fenced code region.
    pub fn is_merged(&self) -> bool {
        self.last_line > self.first_line
    }
}
