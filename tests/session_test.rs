//! Session tests: reading files from disk and reporting illegal characters.

use codespan_reporting::term::termcolor::NoColor;
use monkeylang::{LexSession, MonkeyError, TokenKind};
use std::io::Write;
use tempfile::NamedTempFile;

fn source_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_session_from_file() {
    let file = source_file("let add = fn(x, y) { x + y; };\n");
    let mut session = LexSession::new(file.path()).unwrap();

    let tokens = session.tokenize();
    assert_eq!(tokens.first().map(|t| t.token.kind), Some(TokenKind::Let));
    assert_eq!(tokens.last().map(|t| t.token.kind), Some(TokenKind::Eof));
    assert!(!session.has_errors());
}

#[test]
fn test_missing_file_is_io_error() {
    let result = LexSession::new("/definitely/not/here.monkey");
    assert!(matches!(result, Err(MonkeyError::Io(_))));
}

#[test]
fn test_diagnostics_point_at_illegal_characters() {
    let file = source_file("let x = 1;\nlet y = x ^ 2;\n");
    let mut session = LexSession::new(file.path()).unwrap();
    session.tokenize();

    assert_eq!(session.error_count(), 1);

    let mut writer = NoColor::new(Vec::new());
    session.emit_diagnostics(&mut writer).unwrap();
    let rendered = String::from_utf8(writer.into_inner()).unwrap();

    assert!(rendered.contains("illegal character '^'"));
    assert!(rendered.contains(":2:11"));
}
