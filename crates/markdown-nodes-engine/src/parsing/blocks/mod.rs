//! # Block Parsing
//!
//! Two stages turn a document into block nodes.
//!
//! ## Stages
//!
//! 1. **Segmentation** (`segment`): physical lines become `LogicalLine`s, with
//!    each fenced code region collapsed into one unit
//!
//! 2. **Classification** (`classify`): `LineClassifier` maps each logical line
//!    to zero or more block `Node`s, running inline parsing for paragraphs
//!
//! ## Modules
//!
//! - **`types`**: `LogicalLine`
//! - **`kinds`**: Block-specific types with owned delimiters (CodeFence, Heading, ...)
//! - **`segment`**: index-based fence merging
//! - **`classify`**: ordered classification rules
//!
//! ## Key Invariants
//!
//! - Output order follows source line order exactly
//! - Fenced code bodies are raw: no block or inline parsing inside

pub mod classify;
pub mod kinds;
pub mod segment;
pub mod types;

pub use classify::LineClassifier;
pub use segment::segment;
pub use types::LogicalLine;
