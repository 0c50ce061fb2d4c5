//! Row builder: turns line-level diff operations into display rows.

mod block;
mod modify;
mod stats;
mod types;

use crate::char_diff::{CharDiff, SimilarCharDiff};
use crate::config::Settings;
use crate::constant::DEFAULT_CONTEXT_LINES;
use block::Block;
use tracing::{debug, trace};

pub use stats::{RowStats, calculate_stats};
pub use types::{BuiltRows, DiffOp, OpKind, Row, RowType, Token, TokenClass};

/// Build rows with the default character diff and cleanup enabled
pub fn build_rows(ops: &[DiffOp], context_lines: usize) -> BuiltRows {
    RowBuilder::new(context_lines).build(ops)
}

/// Build rows using `char_diff` to highlight modified lines
pub fn build_rows_with<D: CharDiff>(
    ops: &[DiffOp],
    context_lines: usize,
    char_diff: D,
) -> BuiltRows {
    RowBuilder::new(context_lines).char_diff(char_diff).build(ops)
}

/// Reusable row building options
#[derive(Debug, Clone)]
pub struct RowBuilder<D = SimilarCharDiff> {
    context_lines: usize,
    cleanup: bool,
    char_diff: D,
}

impl Default for RowBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXT_LINES)
    }
}

impl RowBuilder {
    pub fn new(context_lines: usize) -> Self {
        Self {
            context_lines,
            cleanup: true,
            char_diff: SimilarCharDiff,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.context_lines).cleanup(settings.cleanup)
    }
}

impl<D: CharDiff> RowBuilder<D> {
    /// Replace the character diff used for modified lines
    pub fn char_diff<E: CharDiff>(self, char_diff: E) -> RowBuilder<E> {
        RowBuilder {
            context_lines: self.context_lines,
            cleanup: self.cleanup,
            char_diff,
        }
    }

    /// Whether the character diff is asked to clean up its output
    pub fn cleanup(mut self, cleanup: bool) -> Self {
        self.cleanup = cleanup;
        self
    }

    pub fn build(&self, ops: &[DiffOp]) -> BuiltRows {
        let blocks = block::group_ops(ops);
        let mut acc = Accumulator::new(self.context_lines);

        for block in blocks {
            trace!("Row block {:?}", block);
            match block {
                Block::Equal { lines, first, last } => {
                    acc.out.original_lines.extend_from_slice(lines);
                    acc.out.current_lines.extend_from_slice(lines);
                    acc.equal_rows(lines, first, last);
                }
                Block::Insert(lines) => {
                    acc.out.current_lines.extend_from_slice(lines);
                    for line in lines {
                        acc.push_line(line, RowType::Addition);
                    }
                }
                Block::Delete(lines) => {
                    acc.out.original_lines.extend_from_slice(lines);
                    for line in lines {
                        acc.push_line(line, RowType::Deletion);
                    }
                }
                Block::Modify { deleted, inserted } => {
                    acc.out.original_lines.extend_from_slice(deleted);
                    acc.out.current_lines.extend_from_slice(inserted);
                    let lines =
                        modify::modified_lines(deleted, inserted, &self.char_diff, self.cleanup);
                    for tokens in lines.deleted {
                        acc.push_row(tokens, RowType::Deletion);
                    }
                    for tokens in lines.inserted {
                        acc.push_row(tokens, RowType::Addition);
                    }
                }
            }
        }

        debug!(
            "Built {} rows from {} diff ops ({} original, {} current lines)",
            acc.out.rows.len(),
            ops.len(),
            acc.out.original_lines.len(),
            acc.out.current_lines.len()
        );
        acc.out
    }
}

/// Per-call state: line counters and the output being built
struct Accumulator {
    context_lines: usize,
    original_line: usize,
    current_line: usize,
    out: BuiltRows,
}

impl Accumulator {
    fn new(context_lines: usize) -> Self {
        Self {
            context_lines,
            original_line: 0,
            current_line: 0,
            out: BuiltRows::default(),
        }
    }

    fn push_row(&mut self, tokens: Vec<Token>, row_type: RowType) {
        match row_type {
            RowType::Addition => self.current_line += 1,
            RowType::Deletion => self.original_line += 1,
            RowType::Equal => {
                self.original_line += 1;
                self.current_line += 1;
            }
            RowType::Spacer => {}
        }
        self.out.rows.push(Row {
            original_line_number: self.original_line,
            current_line_number: self.current_line,
            tokens,
            row_type,
        });
    }

    /// Whole-line row, highlighted in full
    fn push_line(&mut self, text: &str, row_type: RowType) {
        let tokens = if text.is_empty() {
            Vec::new()
        } else {
            vec![Token::inner_diff(text)]
        };
        self.push_row(tokens, row_type);
    }

    /// Advance both counters over lines that get no row
    fn skip(&mut self, lines: usize) {
        self.original_line += lines;
        self.current_line += lines;
    }

    /// Emit an unchanged span, keeping `context_lines` next to each change
    /// and collapsing the middle into a spacer row.
    fn equal_rows(&mut self, lines: &[String], first: bool, last: bool) {
        let window = self.context_lines;
        let len = lines.len();

        // Trailing context after the previous change. A span with no change
        // on either side shows its head.
        if !first || last {
            for line in lines.iter().take(window) {
                self.push_line(line, RowType::Equal);
            }
            if !last && len > window.saturating_mul(2).saturating_add(1) {
                let skipped = len - window * 2;
                self.push_line(&format!("skipping {} matching lines", skipped), RowType::Spacer);
            }
        }

        // Leading context before the next change
        if !last {
            let tail = len.saturating_sub(window.saturating_add(1));
            let (start, skip) = if first {
                (tail, tail)
            } else {
                (tail.max(window), tail.saturating_sub(window))
            };
            self.skip(skip);
            for line in lines.iter().skip(start) {
                self.push_line(line, RowType::Equal);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char_diff::CharChange;

    fn numbered(prefix: &str, count: usize) -> Vec<String> {
        (1..=count).map(|i| format!("{}{}", prefix, i)).collect()
    }

    fn spacers(built: &BuiltRows) -> Vec<String> {
        built
            .rows
            .iter()
            .filter(|r| r.row_type == RowType::Spacer)
            .map(Row::text)
            .collect()
    }

    fn numbers(built: &BuiltRows) -> Vec<(usize, usize)> {
        built
            .rows
            .iter()
            .map(|r| (r.original_line_number, r.current_line_number))
            .collect()
    }

    /// Equal span of `len` lines between two single-line changes
    fn sandwiched(len: usize, window: usize) -> BuiltRows {
        let ops = vec![
            DiffOp::delete(["gone"]),
            DiffOp::equal(numbered("same", len)),
            DiffOp::insert(["new"]),
        ];
        build_rows(&ops, window)
    }

    #[test]
    fn first_equal_row_is_line_one() {
        let built = build_rows(&[DiffOp::equal(["a", "b"])], DEFAULT_CONTEXT_LINES);
        assert_eq!(numbers(&built), vec![(1, 1), (2, 2)]);
        assert!(built.rows.iter().all(|r| r.row_type == RowType::Equal));
    }

    #[test]
    fn unchanged_text_within_window_shows_every_line() {
        for window in [3, 5, 100] {
            let built = build_rows(&[DiffOp::equal(numbered("l", 3))], window);
            assert_eq!(built.rows.len(), 3);
            assert!(spacers(&built).is_empty());
        }
    }

    #[test]
    fn unchanged_text_beyond_window_shows_head() {
        let built = build_rows(&[DiffOp::equal(numbered("l", 10))], 4);
        assert_eq!(built.rows.len(), 4);
        assert!(spacers(&built).is_empty());
        assert_eq!(built.original_lines.len(), 10);
    }

    #[test]
    fn sandwiched_span_boundaries() {
        let w = 3;
        // (span length, expected equal rows, expected spacer text)
        let cases: Vec<(usize, usize, Option<&str>)> = vec![
            (1, 1, None),
            (w, w, None),
            (w + 1, w + 1, None),
            (2 * w, 2 * w, None),
            (2 * w + 1, 2 * w + 1, None),
            (2 * w + 2, 2 * w + 1, Some("skipping 2 matching lines")),
            (20, 2 * w + 1, Some("skipping 14 matching lines")),
        ];
        for (len, equal_rows, spacer) in cases {
            let built = sandwiched(len, w);
            let equal = built.rows.iter().filter(|r| r.row_type == RowType::Equal).count();
            assert_eq!(equal, equal_rows, "span of {}", len);
            assert_eq!(
                spacers(&built),
                spacer.map(str::to_string).into_iter().collect::<Vec<_>>(),
                "span of {}",
                len
            );
            // the insert after the span lands on the right current line
            let last = built.rows.last().unwrap();
            assert_eq!(last.row_type, RowType::Addition);
            assert_eq!(
                (last.original_line_number, last.current_line_number),
                (len + 1, len + 1),
                "span of {}",
                len
            );
        }
    }

    #[test]
    fn collapsed_span_keeps_line_numbers() {
        let built = sandwiched(10, 2);
        let texts: Vec<String> = built.rows.iter().map(Row::text).collect();
        assert_eq!(
            texts,
            vec![
                "gone",
                "same1",
                "same2",
                "skipping 6 matching lines",
                "same8",
                "same9",
                "same10",
                "new"
            ]
        );
        assert_eq!(
            numbers(&built),
            vec![
                (1, 0),
                (2, 1),
                (3, 2),
                (3, 2),
                (9, 8),
                (10, 9),
                (11, 10),
                (11, 11)
            ]
        );
    }

    #[test]
    fn leading_span_keeps_window_plus_one() {
        let w = 2;
        for (len, shown) in [(0, 0), (1, 1), (w, w), (w + 1, w + 1), (2 * w + 2, w + 1)] {
            let ops = vec![DiffOp::equal(numbered("same", len)), DiffOp::insert(["new"])];
            let built = build_rows(&ops, w);
            let equal = built.rows.iter().filter(|r| r.row_type == RowType::Equal).count();
            assert_eq!(equal, shown, "span of {}", len);
            assert!(spacers(&built).is_empty());
            let last = built.rows.last().unwrap();
            assert_eq!(last.current_line_number, len + 1, "span of {}", len);
            assert_eq!(last.original_line_number, len, "span of {}", len);
        }
    }

    #[test]
    fn trailing_span_keeps_window() {
        let w = 2;
        for (len, shown) in [(1, 1), (w, w), (w + 1, w), (2 * w + 2, w)] {
            let ops = vec![DiffOp::delete(["old"]), DiffOp::equal(numbered("same", len))];
            let built = build_rows(&ops, w);
            let equal: Vec<_> = built
                .rows
                .iter()
                .filter(|r| r.row_type == RowType::Equal)
                .collect();
            assert_eq!(equal.len(), shown, "span of {}", len);
            assert_eq!(equal[0].text(), "same1");
            assert!(spacers(&built).is_empty());
        }
    }

    #[test]
    fn delete_followed_by_insert_is_highlighted() {
        let fixed = |before: &str, after: &str, cleanup: bool| {
            assert_eq!(before, "a\nb");
            assert_eq!(after, "a\nc");
            assert!(cleanup);
            vec![
                CharChange::equal("a\n"),
                CharChange::delete("b"),
                CharChange::insert("c"),
            ]
        };
        let ops = vec![DiffOp::delete(["a", "b"]), DiffOp::insert(["a", "c"])];
        let built = build_rows_with(&ops, DEFAULT_CONTEXT_LINES, fixed);

        let types: Vec<RowType> = built.rows.iter().map(|r| r.row_type).collect();
        assert_eq!(
            types,
            vec![
                RowType::Deletion,
                RowType::Deletion,
                RowType::Addition,
                RowType::Addition
            ]
        );
        assert_eq!(built.rows[0].tokens, vec![Token::plain("a")]);
        assert_eq!(built.rows[1].tokens, vec![Token::inner_diff("b")]);
        assert_eq!(built.rows[2].tokens, vec![Token::plain("a")]);
        assert_eq!(built.rows[3].tokens, vec![Token::inner_diff("c")]);
        assert_eq!(numbers(&built), vec![(1, 0), (2, 0), (2, 1), (2, 2)]);
        assert_eq!(built.original_lines, vec!["a", "b"]);
        assert_eq!(built.current_lines, vec!["a", "c"]);
    }

    #[test]
    fn lone_changes_are_whole_lines() {
        let ops = vec![
            DiffOp::equal(["keep"]),
            DiffOp::insert(["added", ""]),
            DiffOp::equal(["keep too"]),
            DiffOp::delete(["removed"]),
        ];
        let built = build_rows(&ops, DEFAULT_CONTEXT_LINES);
        let rows: Vec<(RowType, String)> =
            built.rows.iter().map(|r| (r.row_type, r.text())).collect();
        assert_eq!(
            rows,
            vec![
                (RowType::Equal, "keep".to_string()),
                (RowType::Addition, "added".to_string()),
                (RowType::Addition, String::new()),
                (RowType::Equal, "keep too".to_string()),
                (RowType::Deletion, "removed".to_string()),
            ]
        );
        assert!(built.rows[2].tokens.is_empty());
        assert_eq!(numbers(&built), vec![(1, 1), (1, 2), (1, 3), (2, 4), (3, 4)]);
    }

    #[test]
    fn empty_spans_emit_nothing() {
        let ops = vec![
            DiffOp::equal(["a"]),
            DiffOp::delete(Vec::<String>::new()),
            DiffOp::insert(Vec::<String>::new()),
        ];
        let built = build_rows(&ops, DEFAULT_CONTEXT_LINES);
        assert_eq!(numbers(&built), vec![(1, 1)]);
        assert_eq!(built.original_lines, vec!["a"]);
        assert_eq!(built.current_lines, vec!["a"]);
    }

    #[test]
    fn empty_delete_before_insert_is_plain_insert() {
        let ops = vec![DiffOp::delete(Vec::<String>::new()), DiffOp::insert(["x"])];
        let built = build_rows(&ops, DEFAULT_CONTEXT_LINES);
        assert_eq!(built.rows.len(), 1);
        assert_eq!(built.rows[0].row_type, RowType::Addition);
        assert_eq!(built.rows[0].tokens, vec![Token::inner_diff("x")]);
    }

    #[test]
    fn builder_from_settings() {
        let settings = Settings {
            context_lines: 1,
            ..Settings::default()
        };
        let ops = vec![
            DiffOp::delete(["x"]),
            DiffOp::equal(numbered("same", 6)),
            DiffOp::insert(["y"]),
        ];
        let built = RowBuilder::from_settings(&settings).build(&ops);
        assert_eq!(spacers(&built), vec!["skipping 4 matching lines"]);
    }

    #[test]
    fn huge_window_does_not_overflow() {
        let ops = vec![
            DiffOp::delete(["x"]),
            DiffOp::equal(numbered("same", 3)),
            DiffOp::insert(["y"]),
        ];
        let built = build_rows(&ops, usize::MAX);
        assert_eq!(built.rows.len(), 5);
        assert!(spacers(&built).is_empty());
    }
}
