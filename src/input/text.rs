use super::{LoadError, LoadedDocument};
use std::path::Path;

/// Reads a UTF-8 text file. Whitespace-only files are rejected.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path)?;

    if text.trim().is_empty() {
        return Err(LoadError::EmptyFile(path.to_path_buf()));
    }

    Ok(LoadedDocument {
        text,
        source: format!("text:{}", path.display()),
    })
}
