//! JSON export of built rows, for debugging and for handing rows to a
//! renderer in another process.

use crate::rows::BuiltRows;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn to_json(built: &BuiltRows) -> Result<String, ExportError> {
    Ok(serde_json::to_string(built)?)
}

pub fn to_json_pretty(built: &BuiltRows) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(built)?)
}

pub fn from_json(json: &str) -> Result<BuiltRows, ExportError> {
    Ok(serde_json::from_str(json)?)
}
