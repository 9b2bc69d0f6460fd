// Tests for running an external parser, using shell scripts as stand-ins for clang.
// Serial: exec'ing a freshly written script races with forks from other test threads.
#![cfg(unix)]

use astlens::dump::{self, ParserCommand};
use astlens::AnnotateError;
use serial_test::serial;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

fn fake_parser(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("fake-clang");
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write script");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod failed");
    path
}

fn command(program: PathBuf, seconds: u64) -> ParserCommand {
    ParserCommand {
        program,
        timeout: Duration::from_secs(seconds),
    }
}

#[test]
#[serial]
fn test_parser_output_is_parsed() {
    let dir = TempDir::new().unwrap();
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample.json");
    let script = fake_parser(&dir, &format!("cat '{}'", fixture.display()));

    let tree = dump::run_parser(Path::new("sample.c"), &command(script, 10)).unwrap();
    assert_eq!(tree["kind"], "TranslationUnitDecl");
}

#[test]
#[serial]
fn test_parser_receives_ast_dump_flags() {
    let dir = TempDir::new().unwrap();
    let script = fake_parser(&dir, r#"printf '{"args": "%s"}' "$*""#);

    let tree = dump::run_parser(Path::new("prog.c"), &command(script, 10)).unwrap();
    assert_eq!(tree["args"], "-Xclang -ast-dump=json -fsyntax-only prog.c");
}

#[test]
#[serial]
fn test_parser_failure_keeps_stderr() {
    let dir = TempDir::new().unwrap();
    let script = fake_parser(&dir, "echo 'prog.c:1:1: error: expected expression' >&2; exit 1");

    let err = dump::run_parser(Path::new("prog.c"), &command(script, 10)).unwrap_err();
    match &err {
        AnnotateError::ParserFailed { stderr, .. } => {
            assert!(stderr.contains("expected expression"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_ne!(err.exit_code(), 0);
}

#[test]
#[serial]
fn test_empty_parser_output() {
    let dir = TempDir::new().unwrap();
    let script = fake_parser(&dir, "exit 0");

    let err = dump::run_parser(Path::new("prog.c"), &command(script, 10)).unwrap_err();
    assert!(matches!(err, AnnotateError::EmptyDocument));
}

#[test]
#[serial]
fn test_invalid_parser_output() {
    let dir = TempDir::new().unwrap();
    let script = fake_parser(&dir, "echo 'not json at all'");

    let err = dump::run_parser(Path::new("prog.c"), &command(script, 10)).unwrap_err();
    match err {
        AnnotateError::MalformedDocument { context, .. } => {
            assert!(context.contains("not json at all"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
#[serial]
fn test_parser_timeout() {
    let dir = TempDir::new().unwrap();
    let script = fake_parser(&dir, "exec sleep 30");

    let err = dump::run_parser(Path::new("prog.c"), &command(script, 1)).unwrap_err();
    assert!(matches!(err, AnnotateError::ParserTimedOut { seconds: 1 }));
}
