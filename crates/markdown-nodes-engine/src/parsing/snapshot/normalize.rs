use serde::Serialize;
use xi_rope::Rope;

use crate::models::Node;
use crate::parsing::blocks::{LineClassifier, segment};

#[derive(Serialize)]
pub struct Snap {
    pub lines: Vec<LineSnap>,
}

#[derive(Serialize)]
pub struct LineSnap {
    /// 1-based physical line range, e.g. `L3`, or `L3-L6` for a merged fence.
    pub at: String,
    pub nodes: Vec<Node>,
}

/// Segments and classifies `rope`, keeping each logical line's nodes together.
pub fn normalize(rope: &Rope) -> Snap {
    let classifier = LineClassifier;
    let lines = segment(rope)
        .iter()
        .map(|line| {
            let at = if line.is_merged() {
                format!("L{}-L{}", line.first_line + 1, line.last_line + 1)
            } else {
                format!("L{}", line.first_line + 1)
            };
            LineSnap {
                at,
                nodes: classifier.classify(line),
            }
        })
        .collect();
    Snap { lines }
}
