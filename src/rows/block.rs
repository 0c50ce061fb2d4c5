use super::types::{DiffOp, OpKind};

/// Diff operations regrouped so that a Delete directly followed by an Insert
/// becomes a single modification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    Equal {
        lines: &'a [String],
        first: bool,
        last: bool,
    },
    Insert(&'a [String]),
    Delete(&'a [String]),
    Modify {
        deleted: &'a [String],
        inserted: &'a [String],
    },
}

/// Group `ops` into blocks. Empty spans are dropped before grouping, so they
/// never pair with a neighbour or change whether an Equal span is first/last.
pub fn group_ops(ops: &[DiffOp]) -> Vec<Block<'_>> {
    let ops: Vec<&DiffOp> = ops.iter().filter(|op| !op.lines.is_empty()).collect();
    let mut blocks = Vec::with_capacity(ops.len());

    let mut i = 0;
    while i < ops.len() {
        let op = ops[i];
        match op.kind {
            OpKind::Equal => blocks.push(Block::Equal {
                lines: &op.lines,
                first: i == 0,
                last: i == ops.len() - 1,
            }),
            OpKind::Insert => blocks.push(Block::Insert(&op.lines)),
            OpKind::Delete => match ops.get(i + 1) {
                Some(next) if next.kind == OpKind::Insert => {
                    blocks.push(Block::Modify {
                        deleted: &op.lines,
                        inserted: &next.lines,
                    });
                    i += 1;
                }
                _ => blocks.push(Block::Delete(&op.lines)),
            },
        }
        i += 1;
    }

    blocks
}
