//! # Inline Kinds
//!
//! Inline-specific matchers that own their syntax.
//!
//! ## Types
//!
//! - **`Image`**: `![alt](src)`
//! - **`Anchor`**: `[label](href)` with an optional `{target="..."}` annotation
//! - **`Emphasis`**: `**strong**`, `*italic*`, `~~strikethrough~~`
//!
//! Every matcher searches the whole remainder and reports the leftmost match
//! as an [`InlineMatch`]; the parser decides between matchers by priority.

pub mod anchor;
pub mod emphasis;
pub mod image;

pub use anchor::Anchor;
pub use emphasis::Emphasis;
pub use image::Image;

use crate::models::{LinkAttrs, Node};

/// The leftmost occurrence of one inline construct in a remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMatch {
    /// Byte offset of the match within the remainder.
    pub offset: usize,
    /// Byte length of the full match.
    pub len: usize,
    /// The node to emit for the match.
    pub node: Node,
    /// Metadata copied onto the plain text run before the match.
    pub prefix_link: Option<LinkAttrs>,
}
