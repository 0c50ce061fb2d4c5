//! Default line-level diff producing the operations the row builder consumes.

use crate::rows::{DiffOp, OpKind};
use similar::{Algorithm, DiffTag, TextDiff};

/// Diff `old` against `new` line by line. Line terminators are not part of
/// the returned lines.
pub fn diff_lines(old: &str, new: &str) -> Vec<DiffOp> {
    let old_lines: Vec<&str> = old.lines().collect();
    let new_lines: Vec<&str> = new.lines().collect();

    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_slices(&old_lines, &new_lines);

    let mut ops: Vec<DiffOp> = Vec::new();
    for op in diff.ops() {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => push_span(&mut ops, OpKind::Equal, &old_lines[old_range]),
            DiffTag::Delete => push_span(&mut ops, OpKind::Delete, &old_lines[old_range]),
            DiffTag::Insert => push_span(&mut ops, OpKind::Insert, &new_lines[new_range]),
            DiffTag::Replace => {
                push_span(&mut ops, OpKind::Delete, &old_lines[old_range]);
                push_span(&mut ops, OpKind::Insert, &new_lines[new_range]);
            }
        }
    }
    ops
}

fn push_span(ops: &mut Vec<DiffOp>, kind: OpKind, lines: &[&str]) {
    if lines.is_empty() {
        return;
    }
    match ops.last_mut() {
        Some(last) if last.kind == kind => last.lines.extend(lines.iter().map(|l| l.to_string())),
        _ => ops.push(DiffOp::new(kind, lines.iter().copied())),
    }
}
