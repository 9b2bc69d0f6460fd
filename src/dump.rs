//! Obtaining the AST dump
//!
//! The dump comes either from a JSON file produced earlier or from running
//! `clang -Xclang -ast-dump=json -fsyntax-only <file>`. Both paths end in
//! [`parse_document`], which lifts serde_json's nesting limit: Clang emits two
//! JSON levels per AST level, so ordinary expression chains exceed the default.
//!
//! The parsed tree is held in an [`AstDocument`], which takes the tree apart
//! iteratively when dropped. `serde_json::Value`'s own drop recurses once per
//! level and would overflow the stack on the same documents.

use crate::errors::{AnnotateError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Stack for the deserializer thread once the nesting limit is off
const PARSE_STACK_SIZE: usize = 256 * 1024 * 1024;

/// How much of a malformed document to quote in the error
const CONTEXT_CHARS: usize = 500;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// How to run the external parser
#[derive(Debug, Clone)]
pub struct ParserCommand {
    pub program: PathBuf,
    pub timeout: Duration,
}

impl Default for ParserCommand {
    fn default() -> Self {
        ParserCommand {
            program: PathBuf::from("clang"),
            timeout: Duration::from_secs(30),
        }
    }
}

/// A parsed AST dump
#[derive(Debug, Default)]
pub struct AstDocument {
    root: Value,
}

impl AstDocument {
    pub fn new(root: Value) -> Self {
        AstDocument { root }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }
}

impl Deref for AstDocument {
    type Target = Value;

    fn deref(&self) -> &Value {
        &self.root
    }
}

impl Drop for AstDocument {
    fn drop(&mut self) {
        dismantle(std::mem::take(&mut self.root));
    }
}

/// Free a tree of any depth without recursing
pub fn dismantle(value: Value) {
    let mut work = vec![value];
    while let Some(mut value) = work.pop() {
        match &mut value {
            Value::Array(items) => work.append(items),
            Value::Object(fields) => {
                work.extend(std::mem::take(fields).into_iter().map(|(_, child)| child));
            }
            _ => {}
        }
        // `value` has no children left, so dropping it here is shallow
    }
}

/// Read a pre-generated JSON dump
pub fn load_document(path: &Path) -> Result<AstDocument> {
    let text =
        fs::read_to_string(path).map_err(|e| AnnotateError::input_unavailable(path, e))?;
    parse_document(&text)
}

/// Parse dump text of any nesting depth
pub fn parse_document(text: &str) -> Result<AstDocument> {
    let parsed = thread::scope(|scope| {
        thread::Builder::new()
            .name("ast-parse".to_string())
            .stack_size(PARSE_STACK_SIZE)
            .spawn_scoped(scope, || deserialize(text))
            .map(|handle| handle.join())
    })?;

    match parsed {
        Ok(Ok(value)) => Ok(AstDocument::new(value)),
        Ok(Err(source)) => Err(AnnotateError::MalformedDocument {
            context: excerpt(text),
            source,
        }),
        Err(_) => Err(AnnotateError::Io(io::Error::other(
            "AST deserializer thread panicked",
        ))),
    }
}

fn deserialize(text: &str) -> serde_json::Result<Value> {
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let value = Value::deserialize(&mut de)?;
    de.end()?;
    Ok(value)
}

fn excerpt(text: &str) -> String {
    let head: String = text.chars().take(CONTEXT_CHARS).collect();
    format!("raw output: {}", head)
}

/// Run the parser on `file` and parse what it prints
pub fn run_parser(file: &Path, command: &ParserCommand) -> Result<AstDocument> {
    debug!(program = %command.program.display(), file = %file.display(), "running parser");

    let mut child = Command::new(&command.program)
        .args(["-Xclang", "-ast-dump=json", "-fsyntax-only"])
        .arg(file)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| AnnotateError::ParserNotFound {
            program: command.program.display().to_string(),
            source,
        })?;

    // Drain both pipes while waiting; a full pipe would stall the parser
    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    let deadline = Instant::now() + command.timeout;
    let status = loop {
        if let Some(status) = child.try_wait()? {
            break status;
        }
        if Instant::now() >= deadline {
            warn!("parser exceeded {}s, killing it", command.timeout.as_secs());
            let _ = child.kill();
            let _ = child.wait();
            return Err(AnnotateError::ParserTimedOut {
                seconds: command.timeout.as_secs(),
            });
        }
        thread::sleep(POLL_INTERVAL);
    };

    let stdout = stdout.join().unwrap_or_default();
    let stderr = stderr.join().unwrap_or_default();

    if !status.success() {
        return Err(AnnotateError::ParserFailed {
            status,
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
        });
    }

    let text = String::from_utf8_lossy(&stdout);
    if text.trim().is_empty() {
        return Err(AnnotateError::EmptyDocument);
    }
    debug!(bytes = stdout.len(), "parser finished");
    parse_document(&text)
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> thread::JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            if let Err(e) = pipe.read_to_end(&mut buf) {
                warn!("failed reading parser output: {}", e);
            }
        }
        buf
    })
}
