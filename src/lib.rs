//! Diff rows
//!
//! Turns a line-level diff into rows for a side-by-side or unified code view:
//! long unchanged runs are collapsed around a context window, replaced lines
//! get character-level highlighting, and each side keeps its own line numbers.
//! The offset index maps line numbers to character positions in a document.

pub mod char_diff;
pub mod config;
pub mod constant;
pub mod export;
pub mod line_diff;
pub mod offset;
pub mod rows;

pub use offset::{OffsetIndex, OffsetUnit, build_offset_index, build_offset_index_with};
pub use rows::{
    BuiltRows, DiffOp, OpKind, Row, RowBuilder, RowType, Token, TokenClass, build_rows,
    build_rows_with,
};
