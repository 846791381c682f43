use std::sync::OnceLock;

use regex::Regex;

use crate::models::{LinkAttrs, Node};

use super::InlineMatch;

/// `[label](href)`, optionally followed by a `{...}` attribute block.
pub struct Anchor;

impl Anchor {
    /// Schemes that mark a link as leaving the hosting application.
    pub const EXTERNAL_SCHEMES: [&'static str; 2] = ["http://", "https://"];

    /// Finds the leftmost link in `rest`.
    ///
    /// The `target` attribute is looked up anywhere in `rest`, not only in the
    /// attribute block that belongs to this link. The reported length covers
    /// the link and its attribute block.
    pub fn find(rest: &str) -> Option<InlineMatch> {
        static ANCHOR: OnceLock<Regex> = OnceLock::new();
        let anchor = ANCHOR.get_or_init(|| {
            Regex::new(r"\[(.*?)\]\((.*?)\)(?:\{([^{}]+)\})?").expect("Invalid anchor regex")
        });

        let caps = anchor.captures(rest)?;
        let full = caps.get(0)?;
        let href = &caps[2];
        let link = LinkAttrs {
            on_page: Self::is_on_page(href),
            target: Self::target_attr(rest),
        };
        log::trace!("anchor {:?} -> {href:?} ({link:?})", &caps[1]);

        Some(InlineMatch {
            offset: full.start(),
            len: full.len(),
            node: Node::anchor(href, &caps[1], link.clone()),
            prefix_link: Some(link),
        })
    }

    /// True unless `href` is an absolute `http`/`https` URL.
    pub fn is_on_page(href: &str) -> bool {
        !Self::EXTERNAL_SCHEMES
            .iter()
            .any(|scheme| href.starts_with(scheme))
    }

    /// First `target="..."` value found in `s`.
    pub fn target_attr(s: &str) -> Option<String> {
        static TARGET: OnceLock<Regex> = OnceLock::new();
        let target = TARGET
            .get_or_init(|| Regex::new(r#"target="([^"]+)""#).expect("Invalid target regex"));
        target.captures(s).map(|c| c[1].to_string())
    }
}
