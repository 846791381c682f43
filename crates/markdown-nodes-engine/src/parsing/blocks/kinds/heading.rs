/// ATX-style heading: one or more leading `#`.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';

    /// Returns `(level, text)` when the line starts with `#`.
    ///
    /// The level is the number of leading markers and is not capped; the text
    /// has the markers and the whitespace after them removed.
    pub fn parse(line: &str) -> Option<(usize, &str)> {
        let text = line.trim_start_matches(Self::MARKER);
        let level = line.len() - text.len();
        if level == 0 {
            return None;
        }
        Some((level, text.trim_start()))
    }
}
