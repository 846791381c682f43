/// Errors from the size ceilings in [`ParseLimits`](super::ParseLimits).
///
/// Malformed markdown never produces an error; only oversized input does.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Input too large: {len} bytes (limit {max})")]
    InputTooLarge { len: usize, max: usize },
    #[error("Line {line} too long: {len} bytes (limit {max})")]
    LineTooLong { line: usize, len: usize, max: usize },
}
