//! Loading the target source file
//!
//! The file is read whole, decoded as UTF-8 with a Latin-1 fallback so odd
//! encodings still render, and split into lines without their terminators.

use crate::errors::{AnnotateError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Extensions Clang treats as C or C++ sources and headers
const C_FAMILY_EXTENSIONS: &[&str] = &["c", "cpp", "cxx", "cc", "h", "hpp", "hxx", "hh"];

/// A source file split into lines
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub lines: Vec<String>,
}

impl SourceFile {
    /// Build from text already in memory
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        SourceFile {
            path: path.into(),
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    /// Text of a 1-based line
    pub fn line(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|index| self.lines.get(index))
            .map(String::as_str)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Check that `path` names a regular file, warning on unusual extensions
pub fn validate(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|e| AnnotateError::input_unavailable(path, e))?;
    if !metadata.is_file() {
        return Err(AnnotateError::input_unavailable(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "path is not a file"),
        ));
    }

    if !has_c_family_extension(path) {
        let ext = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();
        warn!("file extension '{}' may not be a C/C++ file", ext);
    }
    Ok(())
}

/// Read and decode the file at `path`
pub fn read_source(path: &Path) -> Result<SourceFile> {
    validate(path)?;
    let bytes = fs::read(path).map_err(|e| AnnotateError::input_unavailable(path, e))?;
    let text = decode(bytes);
    let source = SourceFile::from_text(path, &text);
    debug!(path = %path.display(), lines = source.line_count(), "read source");
    Ok(source)
}

fn has_c_family_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| C_FAMILY_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            debug!("source is not UTF-8, decoding as Latin-1");
            err.into_bytes().into_iter().map(char::from).collect()
        }
    }
}
