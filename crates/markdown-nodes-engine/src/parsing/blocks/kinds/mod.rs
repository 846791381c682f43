//! # Block Kinds
//!
//! Each block kind owns its syntax delimiters; the classifier asks these
//! types rather than hardcoding `#`, `---` or backticks.

pub mod code_fence;
pub mod heading;
pub mod paragraph;
pub mod thematic_break;

pub use code_fence::{CodeFence, FenceInfo};
pub use heading::Heading;
pub use paragraph::Paragraph;
pub use thematic_break::ThematicBreak;
