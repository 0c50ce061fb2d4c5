use crate::constant::INNER_DIFF_CLASS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpKind {
    Equal,
    Insert,
    Delete,
}

/// One span of a line-level diff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffOp {
    pub kind: OpKind,
    pub lines: Vec<String>,
}

impl DiffOp {
    pub fn new<I, S>(kind: OpKind, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn equal<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(OpKind::Equal, lines)
    }

    pub fn insert<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(OpKind::Insert, lines)
    }

    pub fn delete<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(OpKind::Delete, lines)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenClass {
    #[serde(rename = "")]
    Plain,
    #[serde(rename = "inner-diff")]
    InnerDiff,
}

impl TokenClass {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenClass::Plain => "",
            TokenClass::InnerDiff => INNER_DIFF_CLASS,
        }
    }
}

/// A styled fragment of a row's text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    #[serde(rename = "className")]
    pub class: TokenClass,
}

impl Token {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: TokenClass::Plain,
        }
    }

    pub fn inner_diff(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: TokenClass::InnerDiff,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowType {
    Deletion,
    Addition,
    Equal,
    Spacer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub original_line_number: usize,
    pub current_line_number: usize,
    pub tokens: Vec<Token>,
    #[serde(rename = "type")]
    pub row_type: RowType,
}

impl Row {
    /// Visible text of the row
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

/// Output of the row builder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuiltRows {
    pub original_lines: Vec<String>,
    pub current_lines: Vec<String>,
    pub rows: Vec<Row>,
}
