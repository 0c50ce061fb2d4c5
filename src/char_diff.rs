//! Character-level diff used to highlight changes inside modified lines.

use similar::{Algorithm, ChangeTag, TextDiff};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharChangeKind {
    Equal,
    /// Present only in the first (original) string
    Delete,
    /// Present only in the second (current) string
    Insert,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharChange {
    pub kind: CharChangeKind,
    pub text: String,
}

impl CharChange {
    pub fn new(kind: CharChangeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn equal(text: impl Into<String>) -> Self {
        Self::new(CharChangeKind::Equal, text)
    }

    pub fn delete(text: impl Into<String>) -> Self {
        Self::new(CharChangeKind::Delete, text)
    }

    pub fn insert(text: impl Into<String>) -> Self {
        Self::new(CharChangeKind::Insert, text)
    }
}

/// Produces the character changes turning `before` into `after`.
///
/// Concatenating Equal and Delete texts must give back `before`, and Equal
/// and Insert texts must give back `after`. `cleanup` asks for coalesced,
/// human-friendly output rather than a minimal edit script.
pub trait CharDiff {
    fn diff(&self, before: &str, after: &str, cleanup: bool) -> Vec<CharChange>;
}

impl<F> CharDiff for F
where
    F: Fn(&str, &str, bool) -> Vec<CharChange>,
{
    fn diff(&self, before: &str, after: &str, cleanup: bool) -> Vec<CharChange> {
        self(before, after, cleanup)
    }
}

/// Default character diff, Myers over chars via `similar`
#[derive(Debug, Default, Clone, Copy)]
pub struct SimilarCharDiff;

impl CharDiff for SimilarCharDiff {
    fn diff(&self, before: &str, after: &str, cleanup: bool) -> Vec<CharChange> {
        let diff = TextDiff::configure()
            .algorithm(Algorithm::Myers)
            .diff_chars(before, after);

        let mut changes: Vec<CharChange> = Vec::new();
        for change in diff.iter_all_changes() {
            let kind = match change.tag() {
                ChangeTag::Equal => CharChangeKind::Equal,
                ChangeTag::Delete => CharChangeKind::Delete,
                ChangeTag::Insert => CharChangeKind::Insert,
            };
            push_coalesced(&mut changes, kind, change.value());
        }

        if cleanup {
            cleanup_semantic(changes)
        } else {
            changes
        }
    }
}

fn push_coalesced(changes: &mut Vec<CharChange>, kind: CharChangeKind, text: &str) {
    if text.is_empty() {
        return;
    }
    match changes.last_mut() {
        Some(last) if last.kind == kind => last.text.push_str(text),
        _ => changes.push(CharChange::new(kind, text)),
    }
}

/// Reorders every run of edits between two equalities into one Delete
/// followed by one Insert and merges adjacent equalities.
fn normalize(changes: Vec<CharChange>) -> Vec<CharChange> {
    let mut out = Vec::with_capacity(changes.len());
    let mut deleted = String::new();
    let mut inserted = String::new();

    for change in changes {
        match change.kind {
            CharChangeKind::Delete => deleted.push_str(&change.text),
            CharChangeKind::Insert => inserted.push_str(&change.text),
            CharChangeKind::Equal => {
                push_coalesced(&mut out, CharChangeKind::Delete, &deleted);
                push_coalesced(&mut out, CharChangeKind::Insert, &inserted);
                deleted.clear();
                inserted.clear();
                push_coalesced(&mut out, CharChangeKind::Equal, &change.text);
            }
        }
    }
    push_coalesced(&mut out, CharChangeKind::Delete, &deleted);
    push_coalesced(&mut out, CharChangeKind::Insert, &inserted);
    out
}

/// Char lengths of the deleted and inserted text in `edits`
fn edit_lengths(edits: &[CharChange]) -> (usize, usize) {
    edits.iter().fold((0, 0), |(del, ins), c| match c.kind {
        CharChangeKind::Delete => (del + c.text.chars().count(), ins),
        CharChangeKind::Insert => (del, ins + c.text.chars().count()),
        CharChangeKind::Equal => (del, ins),
    })
}

/// Folds equalities that are no longer than the edits on both sides of them
/// into those edits, so "abc" -> "xbz" reads as one replacement instead of
/// two single-char edits around a stray "b".
fn cleanup_semantic(changes: Vec<CharChange>) -> Vec<CharChange> {
    let mut changes = normalize(changes);

    loop {
        let equalities: Vec<usize> = changes
            .iter()
            .enumerate()
            .filter(|(_, c)| c.kind == CharChangeKind::Equal)
            .map(|(i, _)| i)
            .collect();

        let mut target = None;
        for (n, &i) in equalities.iter().enumerate() {
            let prev_eq = if n == 0 { 0 } else { equalities[n - 1] + 1 };
            let next_eq = equalities.get(n + 1).copied().unwrap_or(changes.len());
            let before = &changes[prev_eq..i];
            let after = &changes[i + 1..next_eq];
            if before.is_empty() || after.is_empty() {
                continue;
            }

            let len = changes[i].text.chars().count();
            let (del_before, ins_before) = edit_lengths(before);
            let (del_after, ins_after) = edit_lengths(after);
            if len <= del_before.max(ins_before) && len <= del_after.max(ins_after) {
                target = Some(i);
                break;
            }
        }

        let Some(i) = target else {
            break;
        };
        let text = changes[i].text.clone();
        changes[i] = CharChange::delete(text.clone());
        changes.insert(i + 1, CharChange::insert(text));
        changes = normalize(changes);
    }

    changes
}
