//! Parser for a small, line-oriented markdown subset.
//!
//! A document becomes a flat sequence of block [`Node`]s (breaks, thematic
//! breaks, headings, fenced code, paragraphs); paragraphs carry one level of
//! inline children (text, strong, italic, strikethrough, links, images).
//! Rendering goes through an explicit [`RenderTable`] chosen by the caller.

pub mod models;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use models::{LinkAttrs, Node, NodeKind};
pub use parsing::{ParseError, ParseLimits, ParsedDoc, Parser, parse_document, parse_markdown};
pub use render::{Component, Element, RenderOptions, RenderTable, render};
