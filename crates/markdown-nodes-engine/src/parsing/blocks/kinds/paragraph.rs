use std::sync::OnceLock;

use regex::Regex;

/// Paragraph block type.
///
/// A line becomes a paragraph when it starts with a letter or with one of the
/// inline constructs (image, link, strong, italic, strikethrough). Inline
/// parsing is then applied to the whole line.
pub struct Paragraph;

impl Paragraph {
    pub fn starts(line: &str) -> bool {
        static INLINE_START: OnceLock<Regex> = OnceLock::new();
        let inline_start = INLINE_START.get_or_init(|| {
            Regex::new(r"^(?:!\[.*?\]\(.*?\)|\[.*?\]\(.*?\)|\*\*.*?\*\*|\*.*?\*|~~.*?~~)")
                .expect("Invalid paragraph start regex")
        });

        line.chars().next().is_some_and(char::is_alphabetic) || inline_start.is_match(line)
    }
}
