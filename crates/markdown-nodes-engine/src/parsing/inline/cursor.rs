/// A byte cursor over one line of inline content.
///
/// Only ever advanced by whole match lengths reported by the regex matchers,
/// so the index always sits on a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The line being tokenized.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// The unconsumed remainder of the line.
    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or_default()
    }

    /// Consumes `n` bytes and returns them.
    pub fn take(&mut self, n: usize) -> &'a str {
        let rest = self.rest();
        let n = n.min(rest.len());
        self.i += n;
        &rest[..n]
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }
}
