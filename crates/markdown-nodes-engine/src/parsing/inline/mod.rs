//! # Inline Parsing
//!
//! Sequential tokenizer for the text of a single paragraph line.
//!
//! ## Architecture
//!
//! A `Cursor` walks the line left to right. At each step an ordered list of
//! matchers (image, anchor, strong, italic, strikethrough) searches the
//! remainder, and the highest-priority matcher that finds anything wins.
//! There is no nesting: inline nodes never have inline children.
//!
//! ## Modules
//!
//! - **`kinds`**: per-construct matchers that own their syntax
//! - **`cursor`**: `Cursor` over the line
//! - **`parser`**: `parse_inline()` main entry point
//!
//! ## Termination
//!
//! Every match consumes at least two bytes, and when nothing matches the
//! remainder is emitted as text and the scan stops.

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::parse_inline;
