use super::types::{BuiltRows, RowType, TokenClass};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RowStats {
    pub additions: usize,
    pub deletions: usize,
    pub equal: usize,
    pub spacers: usize,
    /// Highlighted characters on addition rows
    pub added_chars: usize,
    /// Highlighted characters on deletion rows
    pub removed_chars: usize,
}

/// Count rows by type and highlighted characters per side
pub fn calculate_stats(built: &BuiltRows) -> RowStats {
    let mut stats = RowStats::default();

    for row in &built.rows {
        let highlighted: usize = row
            .tokens
            .iter()
            .filter(|t| t.class == TokenClass::InnerDiff)
            .map(|t| t.text.chars().count())
            .sum();

        match row.row_type {
            RowType::Addition => {
                stats.additions += 1;
                stats.added_chars += highlighted;
            }
            RowType::Deletion => {
                stats.deletions += 1;
                stats.removed_chars += highlighted;
            }
            RowType::Equal => stats.equal += 1,
            RowType::Spacer => stats.spacers += 1,
        }
    }

    stats
}
