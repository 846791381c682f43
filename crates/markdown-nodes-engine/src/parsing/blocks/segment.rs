use xi_rope::Rope;

use crate::parsing::rope::{LineRef, Span, lines_with_spans};

use super::{kinds::CodeFence, types::LogicalLine};

/// Splits a document into logical lines.
///
/// Every physical line becomes one logical line, except that a fenced code
/// region (an opener line starting with three backticks up to the next line
/// that is exactly three backticks) collapses into a single entry. Fence
/// boundaries are tracked by line index, so repeated fence text is harmless.
/// An opener with no closer is left as an ordinary line.
///
/// An empty rope yields one empty logical line.
pub fn segment(rope: &Rope) -> Vec<LogicalLine> {
    let mut lines: Vec<LineRef> = lines_with_spans(rope).collect();
    if lines.is_empty() {
        lines.push(LineRef {
            span: Span { start: 0, end: 0 },
            text: String::new(),
        });
    }

    let mut out = Vec::with_capacity(lines.len());
    let mut i = 0;
    while i < lines.len() {
        if CodeFence::opens(&lines[i].text)
            && let Some(close) = find_closer(&lines, i)
        {
            log::debug!("merging fenced code on lines {}..={}", i + 1, close + 1);
            out.push(merge(&lines[i..=close], i));
            i = close + 1;
            continue;
        }

        out.push(LogicalLine {
            text: lines[i].text.clone(),
            first_line: i,
            last_line: i,
            span: lines[i].span,
        });
        i += 1;
    }
    out
}

fn find_closer(lines: &[LineRef], open: usize) -> Option<usize> {
    lines[open + 1..]
        .iter()
        .position(|l| CodeFence::closes(&l.text))
        .map(|offset| open + 1 + offset)
}

fn merge(run: &[LineRef], first_line: usize) -> LogicalLine {
    let text = run
        .iter()
        .map(|l| l.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    let span = run
        .iter()
        .map(|l| l.span)
        .reduce(Span::cover)
        .unwrap_or(Span { start: 0, end: 0 });
    LogicalLine {
        text,
        first_line,
        last_line: first_line + run.len() - 1,
        span,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(md: &str) -> Vec<String> {
        segment(&Rope::from(md)).into_iter().map(|l| l.text).collect()
    }

    #[test]
    fn plain_lines_pass_through() {
        assert_eq!(texts("a\n\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn empty_document_is_one_blank_line() {
        let lines = segment(&Rope::from(""));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "");
    }

    #[test]
    fn fence_collapses_into_one_unit() {
        let lines = segment(&Rope::from("before\n```rust\nfn x() {}\n```\nafter"));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].text, "```rust\nfn x() {}\n```");
        assert_eq!((lines[1].first_line, lines[1].last_line), (1, 3));
        assert!(lines[1].is_merged());
        assert_eq!(lines[2].first_line, 4);
    }

    #[test]
    fn merged_span_covers_all_physical_lines() {
        let lines = segment(&Rope::from("```\nx\n```"));
        assert_eq!(lines[0].span, Span { start: 0, end: 9 });
    }

    #[test]
    fn duplicate_fences_are_located_by_index() {
        let md = "```js\none\n```\ntext\n```js\ntwo\n```";
        assert_eq!(
            texts(md),
            vec!["```js\none\n```", "text", "```js\ntwo\n```"]
        );
    }

    #[test]
    fn unterminated_fence_stays_unmerged() {
        assert_eq!(texts("```rust\nlet x = 1;"), vec!["```rust", "let x = 1;"]);
    }

    #[test]
    fn closer_is_the_next_bare_fence() {
        let md = "```a\nx\n```b\ny\n```\nz\n```";
        assert_eq!(texts(md), vec!["```a\nx\n```b\ny\n```", "z", "```"]);
    }

    #[test]
    fn crlf_fences_merge() {
        assert_eq!(texts("```\r\nbody\r\n```"), vec!["```\nbody\n```"]);
    }
}
