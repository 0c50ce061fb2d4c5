//! Intra-line highlighting for a deleted block replaced by an inserted one.

use super::types::Token;
use crate::char_diff::{CharChange, CharChangeKind, CharDiff};

/// Which side(s) of the diff a fragment of text belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Both,
    Original,
    Current,
}

impl Side {
    fn on_original(self) -> bool {
        self != Side::Current
    }

    fn on_current(self) -> bool {
        self != Side::Original
    }
}

impl From<CharChangeKind> for Side {
    fn from(kind: CharChangeKind) -> Self {
        match kind {
            CharChangeKind::Equal => Side::Both,
            CharChangeKind::Delete => Side::Original,
            CharChangeKind::Insert => Side::Current,
        }
    }
}

/// Part of a character change that lies on a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineFragment<'a> {
    side: Side,
    text: &'a str,
    /// A line break precedes this fragment
    starts_line: bool,
}

fn line_fragments(changes: &[CharChange]) -> impl Iterator<Item = LineFragment<'_>> {
    changes.iter().flat_map(|change| {
        let side = Side::from(change.kind);
        change
            .text
            .split('\n')
            .enumerate()
            .map(move |(i, text)| LineFragment {
                side,
                text,
                starts_line: i > 0,
            })
    })
}

/// Token lines of the deleted and inserted blocks
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ModifiedLines {
    pub deleted: Vec<Vec<Token>>,
    pub inserted: Vec<Vec<Token>>,
}

fn append(lines: &mut Vec<Vec<Token>>, fragment: &LineFragment<'_>) {
    if fragment.starts_line {
        lines.push(Vec::new());
    }
    if fragment.text.is_empty() {
        return;
    }
    let token = if fragment.side == Side::Both {
        Token::plain(fragment.text)
    } else {
        Token::inner_diff(fragment.text)
    };
    if let Some(line) = lines.last_mut() {
        line.push(token);
    }
}

/// Diff `deleted` against `inserted` by character and split the result back
/// into per-line token lists for each side.
pub fn modified_lines<D: CharDiff>(
    deleted: &[String],
    inserted: &[String],
    char_diff: &D,
    cleanup: bool,
) -> ModifiedLines {
    let before = deleted.join("\n");
    let after = inserted.join("\n");
    let changes = char_diff.diff(&before, &after, cleanup);

    let mut lines = ModifiedLines {
        deleted: vec![Vec::new()],
        inserted: vec![Vec::new()],
    };
    for fragment in line_fragments(&changes) {
        if fragment.side.on_original() {
            append(&mut lines.deleted, &fragment);
        }
        if fragment.side.on_current() {
            append(&mut lines.inserted, &fragment);
        }
    }
    lines
}
