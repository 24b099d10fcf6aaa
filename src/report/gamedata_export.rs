//! Game data JSON export

use std::path::Path;

use crate::pipeline::{ConvertError, GameData};

/// Encode game data as pretty JSON with two-space indentation.
/// The returned text has no trailing newline.
pub fn to_json(data: &GameData) -> Result<String, ConvertError> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Write encoded JSON verbatim to `path`, replacing any existing file
pub fn write_json(path: &Path, json: &str) -> Result<(), ConvertError> {
    std::fs::write(path, json).map_err(|source| ConvertError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}
