//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts parsed structures to a stable, serializable `Snap` format
//!   for `insta` snapshot testing, grouping nodes under the logical line they came from
//! - **`invariants`**: Runtime checks for parser correctness (line spans in bounds and
//!   ordered, node shapes as documented on [`Node`](crate::models::Node))

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
