use serde::{Deserialize, Serialize};

/// How the length of a line is measured when computing offsets
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetUnit {
    /// Unicode scalar values
    #[default]
    Chars,
    /// UTF-8 bytes, usable for slicing Rust strings
    Bytes,
    /// UTF-16 code units, as counted by browser editors
    Utf16,
}

impl OffsetUnit {
    fn measure(self, line: &str) -> usize {
        match self {
            OffsetUnit::Chars => line.chars().count(),
            OffsetUnit::Bytes => line.len(),
            OffsetUnit::Utf16 => line.encode_utf16().count(),
        }
    }
}

/// Maps 1-based line numbers to the offset of the line's first character
/// in the lines joined with `\n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffsetIndex {
    starts: Vec<usize>,
    /// Offset just past the last character of the last line
    end: usize,
}

impl OffsetIndex {
    /// Offset of `line` (1-based)
    pub fn get(&self, line: usize) -> Option<usize> {
        line.checked_sub(1).and_then(|i| self.starts.get(i)).copied()
    }

    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// `(line, offset)` pairs in ascending line order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.starts.iter().enumerate().map(|(i, &offset)| (i + 1, offset))
    }

    /// Line containing `offset`. The position right after a line's last
    /// character (where its newline sits) belongs to that line.
    pub fn line_at(&self, offset: usize) -> Option<usize> {
        if self.starts.is_empty() || offset > self.end {
            return None;
        }
        Some(self.starts.partition_point(|&start| start <= offset))
    }
}

/// Build the offset index of `lines`, measuring lengths in characters
pub fn build_offset_index<S: AsRef<str>>(lines: &[S]) -> OffsetIndex {
    build_offset_index_with(lines, OffsetUnit::Chars)
}

pub fn build_offset_index_with<S: AsRef<str>>(lines: &[S], unit: OffsetUnit) -> OffsetIndex {
    let mut starts = Vec::with_capacity(lines.len());
    let mut pos = 0;
    let mut end = 0;
    for line in lines {
        starts.push(pos);
        end = pos + unit.measure(line.as_ref());
        pos = end + 1;
    }
    OffsetIndex { starts, end }
}
