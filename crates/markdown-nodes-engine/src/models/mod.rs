pub mod node;

pub use node::{LinkAttrs, Node, NodeKind};
