//! Location ownership
//!
//! Clang attaches `{file?, line?, ...}` locations to nodes. A location without
//! a `file` belongs to the document being processed. A location with a `file`
//! belongs to it only when the path matches the target, either as an absolute
//! path or, failing that, by file name alone (the parser may report a
//! relative path for a file given to it as absolute, or vice versa).

use serde_json::Value;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// A `{file?, line?}` location read from the dump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'a> {
    pub file: Option<&'a str>,
    pub line: Option<usize>,
}

impl<'a> Location<'a> {
    /// Read a location from a dump value; anything that is not a mapping is
    /// "no information"
    pub fn from_value(value: &'a Value) -> Option<Self> {
        let fields = value.as_object()?;
        let file = fields
            .get("file")
            .and_then(Value::as_str)
            .filter(|file| !file.is_empty());
        let line = fields
            .get("line")
            .and_then(Value::as_u64)
            .filter(|line| *line >= 1)
            .and_then(|line| usize::try_from(line).ok());
        Some(Location { file, line })
    }
}

/// The source file whose lines are being annotated
#[derive(Debug, Clone)]
pub struct TargetFile {
    absolute: PathBuf,
    file_name: Option<OsString>,
}

impl TargetFile {
    pub fn new(path: &Path) -> Self {
        let absolute = absolutize(path);
        let file_name = absolute.file_name().map(|name| name.to_os_string());
        TargetFile {
            absolute,
            file_name,
        }
    }

    pub fn path(&self) -> &Path {
        &self.absolute
    }

    /// Whether a location's `file` field denotes this target
    pub fn owns(&self, file: Option<&str>) -> bool {
        let Some(file) = file else {
            return true;
        };

        let candidate = Path::new(file);
        if candidate.is_absolute() && absolutize(candidate) == self.absolute {
            return true;
        }

        match (&self.file_name, candidate.file_name()) {
            (Some(ours), Some(theirs)) => ours.as_os_str() == theirs,
            _ => false,
        }
    }

    /// Line owned by this target, if the location resolves to one
    pub fn owned_line(&self, location: Option<&Location<'_>>) -> Option<usize> {
        let location = location?;
        let line = location.line?;
        self.owns(location.file).then_some(line)
    }
}

fn absolutize(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
