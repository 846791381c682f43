/// Fence metadata taken from the opening line after the backticks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FenceInfo {
    /// First whitespace-separated token, empty when absent.
    pub language: String,
    /// Second token, if any. Parsed but not placed in the node tree.
    pub title: Option<String>,
}

/// A fenced code block delimited by three backticks.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// A physical line opens a fence when it starts with three backticks.
    pub fn opens(line: &str) -> bool {
        line.starts_with(Self::BACKTICKS)
    }

    /// A physical line closes a fence when it is exactly three backticks,
    /// ignoring trailing whitespace.
    pub fn closes(line: &str) -> bool {
        line.trim_end() == Self::BACKTICKS
    }

    /// Parses the info string that follows the opening backticks.
    pub fn info(after_backticks: &str) -> FenceInfo {
        let mut tokens = after_backticks.split_whitespace();
        FenceInfo {
            language: tokens.next().unwrap_or_default().to_string(),
            title: tokens.next().map(str::to_string),
        }
    }

    /// Splits a logical line into fence info and body.
    ///
    /// Returns `None` unless the line starts with backticks and contains a
    /// later backtick run. For a merged multi-line unit the body is everything
    /// between the opening line and the last line. A unit that opens and closes
    /// on one physical line has an empty language and the text between the two
    /// runs as its body.
    pub fn parse(unit: &str) -> Option<(FenceInfo, String)> {
        let rest = unit.strip_prefix(Self::BACKTICKS)?;
        if !rest.contains(Self::BACKTICKS) {
            return None;
        }

        match rest.split_once('\n') {
            Some((opener, tail)) => {
                let body = match tail.rsplit_once('\n') {
                    Some((body, _closer)) => body,
                    None => "",
                };
                Some((Self::info(opener), trim_body(body)))
            }
            None => {
                let end = rest.find(Self::BACKTICKS)?;
                Some((FenceInfo::default(), rest[..end].trim().to_string()))
            }
        }
    }
}

/// Drops blank lines at the start and trailing whitespace at the end,
/// keeping the indentation of the first non-blank line.
fn trim_body(body: &str) -> String {
    let mut rest = body;
    while let Some((first, tail)) = rest.split_once('\n') {
        if !first.trim().is_empty() {
            break;
        }
        rest = tail;
    }
    if rest.trim().is_empty() {
        return String::new();
    }
    rest.trim_end().to_string()
}
