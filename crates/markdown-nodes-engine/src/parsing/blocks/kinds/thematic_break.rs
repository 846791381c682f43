/// A horizontal rule: any line beginning with three dashes.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const DASHES: &'static str = "---";

    pub fn matches(line: &str) -> bool {
        line.starts_with(Self::DASHES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_is_enough() {
        assert!(ThematicBreak::matches("---"));
        assert!(ThematicBreak::matches("-----"));
        assert!(ThematicBreak::matches("--- trailing"));
        assert!(!ThematicBreak::matches("--"));
        assert!(!ThematicBreak::matches(" ---"));
    }
}
