use std::sync::OnceLock;

use regex::Regex;

use crate::models::Node;

use super::InlineMatch;

/// The three styled spans: `**strong**`, `*italic*` and `~~strikethrough~~`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Strong,
    Italic,
    Strikethrough,
}

impl Emphasis {
    fn regex(self) -> &'static Regex {
        static STRONG: OnceLock<Regex> = OnceLock::new();
        static ITALIC: OnceLock<Regex> = OnceLock::new();
        static STRIKE: OnceLock<Regex> = OnceLock::new();
        match self {
            Emphasis::Strong => STRONG
                .get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("Invalid strong regex")),
            Emphasis::Italic => {
                ITALIC.get_or_init(|| Regex::new(r"\*(.*?)\*").expect("Invalid italic regex"))
            }
            Emphasis::Strikethrough => STRIKE
                .get_or_init(|| Regex::new(r"~~(.*?)~~").expect("Invalid strikethrough regex")),
        }
    }

    fn node(self, inner: &str) -> Node {
        match self {
            Emphasis::Strong => Node::strong(inner),
            Emphasis::Italic => Node::italic(inner),
            Emphasis::Strikethrough => Node::strikethrough(inner),
        }
    }

    pub fn find(self, rest: &str) -> Option<InlineMatch> {
        let caps = self.regex().captures(rest)?;
        let full = caps.get(0)?;
        Some(InlineMatch {
            offset: full.start(),
            len: full.len(),
            node: self.node(&caps[1]),
            prefix_link: None,
        })
    }

    pub fn find_strong(rest: &str) -> Option<InlineMatch> {
        Emphasis::Strong.find(rest)
    }

    pub fn find_italic(rest: &str) -> Option<InlineMatch> {
        Emphasis::Italic.find(rest)
    }

    pub fn find_strikethrough(rest: &str) -> Option<InlineMatch> {
        Emphasis::Strikethrough.find(rest)
    }
}
