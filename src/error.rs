//! Error types and diagnostic reporting.
//!
//! The lexer itself never fails; illegal input is reported through
//! `Illegal` tokens. The types here let callers turn those tokens into
//! errors and render them with source context.

use codespan_reporting::diagnostic::{Diagnostic, Label};
use std::ops::Range;
use thiserror::Error;

/// Top-level error type for the crate
#[derive(Error, Debug, Clone)]
pub enum MonkeyError {
    /// Lexer error
    #[error("lexical error: {0}")]
    Lexer(#[from] LexerError),

    /// File I/O error
    #[error("file error: {0}")]
    Io(String),
}

/// Lexer error details
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("illegal character '{}'", .literal.escape_debug())]
    IllegalCharacter { literal: String, span: Range<usize> },
}

impl LexerError {
    pub fn span(&self) -> Range<usize> {
        match self {
            LexerError::IllegalCharacter { span, .. } => span.clone(),
        }
    }
}

pub type MonkeyResult<T> = Result<T, MonkeyError>;

/// An error paired with the file it was found in
#[derive(Debug, Clone)]
pub struct DiagnosticError {
    pub error: MonkeyError,
    pub file_id: usize,
}

impl DiagnosticError {
    pub fn new(error: MonkeyError, file_id: usize) -> Self {
        Self { error, file_id }
    }

    /// Convert to a codespan-reporting diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic<usize> {
        let (message, labels) = match &self.error {
            MonkeyError::Lexer(e) => match e {
                LexerError::IllegalCharacter { span, .. } => (
                    e.to_string(),
                    vec![Label::primary(self.file_id, span.clone())
                        .with_message("not a valid Monkey token")],
                ),
            },
            MonkeyError::Io(message) => (format!("file error: {}", message), vec![]),
        };

        Diagnostic::error()
            .with_message(message)
            .with_labels(labels)
    }
}

/// Accumulates errors so that every problem in a file is reported in one run
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: Vec<DiagnosticError>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, error: MonkeyError, file_id: usize) {
        self.errors.push(DiagnosticError::new(error, file_id));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[DiagnosticError] {
        &self.errors
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}
