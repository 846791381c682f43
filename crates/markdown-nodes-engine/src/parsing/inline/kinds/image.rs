use std::sync::OnceLock;

use regex::Regex;

use crate::models::Node;

use super::InlineMatch;

/// `![alt](src)`
pub struct Image;

impl Image {
    pub fn find(rest: &str) -> Option<InlineMatch> {
        static IMAGE: OnceLock<Regex> = OnceLock::new();
        let image =
            IMAGE.get_or_init(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("Invalid image regex"));

        let caps = image.captures(rest)?;
        let full = caps.get(0)?;
        Some(InlineMatch {
            offset: full.start(),
            len: full.len(),
            node: Node::image(&caps[2], &caps[1]),
            prefix_link: None,
        })
    }
}
