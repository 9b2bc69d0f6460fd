//! Error types for the annotation pipeline
//!
//! [`AnnotateError`] covers every failure that stops a run: the source or dump
//! cannot be read, the dump is not valid JSON, or the external parser could not
//! produce one. A run that succeeds but finds no node kinds is not an error.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnnotateError {
    /// Target source or dump file is missing, not a file, or unreadable
    #[error("cannot read {}: {source}", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The AST dump is not valid JSON
    #[error("malformed AST document ({context}): {source}")]
    MalformedDocument {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The parser executable could not be started
    #[error("{program} not found; please install clang/LLVM or pass --clang")]
    ParserNotFound {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The parser ran but reported failure
    #[error("parser exited with {status}:\n{stderr}")]
    ParserFailed { status: ExitStatus, stderr: String },

    /// The parser did not finish in time and was killed
    #[error("parser timed out after {seconds}s")]
    ParserTimedOut { seconds: u64 },

    /// The parser succeeded but wrote nothing
    #[error("parser produced no output")]
    EmptyDocument,

    /// Failure writing the annotated listing
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl AnnotateError {
    pub fn input_unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AnnotateError::InputUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AnnotateError::InputUnavailable { .. } => 2,
            AnnotateError::MalformedDocument { .. } | AnnotateError::EmptyDocument => 3,
            AnnotateError::ParserNotFound { .. }
            | AnnotateError::ParserFailed { .. }
            | AnnotateError::ParserTimedOut { .. } => 4,
            AnnotateError::Io(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnnotateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_input() {
        let err = AnnotateError::input_unavailable(
            "/nope/prog.c",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert_eq!(
            err.to_string(),
            "cannot read /nope/prog.c: No such file or directory"
        );
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_every_failure_is_nonzero() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let errors = [
            AnnotateError::MalformedDocument {
                context: "test".into(),
                source: json_err,
            },
            AnnotateError::ParserTimedOut { seconds: 30 },
            AnnotateError::EmptyDocument,
            AnnotateError::Io(io::Error::other("broken pipe")),
        ];
        for err in &errors {
            assert_ne!(err.exit_code(), 0, "{}", err);
        }
    }
}
