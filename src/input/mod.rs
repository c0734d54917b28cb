use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("EPUB parse error: {0}")]
    EpubParse(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("File is empty: {0}")]
    EmptyFile(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Corpus format error at line {line}: {message}")]
    Conll { line: usize, message: String },
}

/// Raw text extracted from a document, ready for tokenization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    pub text: String,
    pub source: String,
}

/// Loads a document, choosing the reader from the file extension.
///
/// `.pdf` and `.epub` files are converted to plain text; everything else is
/// read as UTF-8.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("pdf") => pdf::load(path),
        Some("epub") => epub::load(path),
        _ => text::load(path),
    }
}

/// Like [`load`], but an empty or whitespace-only file yields an empty document.
///
/// Tokenizing reads empty input as zero tokens, whatever its source.
pub fn load_allow_empty(path: &str) -> Result<LoadedDocument, LoadError> {
    match load(path) {
        Err(LoadError::EmptyFile(path)) => Ok(LoadedDocument {
            text: String::new(),
            source: format!("empty:{}", path.display()),
        }),
        other => other,
    }
}

pub mod conll;
pub mod epub;
pub mod pdf;
pub mod text;
