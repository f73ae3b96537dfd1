//! Lexing session for one source file.
//!
//! A session owns the source text and a codespan file database, runs the
//! lexer over it, and turns every `Illegal` token into an error that can be
//! rendered with source context.

use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::{self, termcolor::WriteColor};
use std::fs;
use std::path::Path;

use crate::error::{ErrorCollector, LexerError, MonkeyError, MonkeyResult};
use crate::lexer::{illegal_tokens, Lexer, TokenWithPosition};

pub struct LexSession {
    source_file: String,
    source: String,
    files: SimpleFiles<String, String>,
    file_id: usize,
    error_collector: ErrorCollector,
}

impl LexSession {
    /// Read `source_file` from disk and start a session over it.
    pub fn new<P: AsRef<Path>>(source_file: P) -> MonkeyResult<Self> {
        let path = source_file.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            MonkeyError::Io(format!("failed to read {}: {}", path.display(), e))
        })?;

        Ok(Self::from_source(path.display().to_string(), source))
    }

    /// Start a session over in-memory source; `name` is shown in diagnostics.
    pub fn from_source(name: impl Into<String>, source: impl Into<String>) -> Self {
        let source_file = name.into();
        let source = source.into();

        let mut files = SimpleFiles::new();
        let file_id = files.add(source_file.clone(), source.clone());

        Self {
            source_file,
            source,
            files,
            file_id,
            error_collector: ErrorCollector::new(),
        }
    }

    pub fn source_file(&self) -> &str {
        &self.source_file
    }

    /// Run the lexer over the whole source.
    ///
    /// Returns every token including the trailing `Eof`. Illegal tokens are
    /// recorded as errors; calling this again replaces the previous errors.
    pub fn tokenize(&mut self) -> Vec<TokenWithPosition> {
        log::debug!("lexing {}", self.source_file);

        let tokens = Lexer::new(&self.source).collect_tokens();

        self.error_collector.clear();
        for token in illegal_tokens(&tokens) {
            self.error_collector.add_error(
                MonkeyError::Lexer(LexerError::IllegalCharacter {
                    literal: token.token.literal.clone(),
                    span: token.span.clone(),
                }),
                self.file_id,
            );
        }

        log::debug!(
            "{} tokens, {} illegal",
            tokens.len(),
            self.error_collector.error_count()
        );

        tokens
    }

    pub fn has_errors(&self) -> bool {
        self.error_collector.has_errors()
    }

    pub fn error_count(&self) -> usize {
        self.error_collector.error_count()
    }

    pub fn errors(&self) -> impl Iterator<Item = &MonkeyError> {
        self.error_collector.errors().iter().map(|e| &e.error)
    }

    /// Render every recorded error to `writer`.
    pub fn emit_diagnostics(&self, writer: &mut dyn WriteColor) -> MonkeyResult<()> {
        let config = term::Config::default();

        for error in self.error_collector.errors() {
            let diagnostic = error.to_diagnostic();
            term::emit(writer, &config, &self.files, &diagnostic)
                .map_err(|e| MonkeyError::Io(format!("failed to emit diagnostic: {}", e)))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codespan_reporting::term::termcolor::NoColor;

    #[test]
    fn test_clean_source_has_no_errors() {
        let mut session = LexSession::from_source("clean.monkey", "let x = 5;");
        let tokens = session.tokenize();

        assert_eq!(tokens.len(), 6);
        assert!(!session.has_errors());
    }

    #[test]
    fn test_illegal_tokens_become_errors() {
        let mut session = LexSession::from_source("bad.monkey", "let x = 5 @ 3 # 1;");
        session.tokenize();

        assert_eq!(session.error_count(), 2);
        let spans: Vec<_> = session
            .errors()
            .map(|e| match e {
                MonkeyError::Lexer(lexer_error) => lexer_error.span(),
                other => panic!("unexpected error: {other}"),
            })
            .collect();
        assert_eq!(spans, vec![10..11, 14..15]);
    }

    #[test]
    fn test_tokenize_twice_does_not_duplicate_errors() {
        let mut session = LexSession::from_source("bad.monkey", "@");
        session.tokenize();
        session.tokenize();
        assert_eq!(session.error_count(), 1);
    }

    #[test]
    fn test_emit_diagnostics() {
        let mut session = LexSession::from_source("bad.monkey", "let y = $;");
        session.tokenize();

        let mut writer = NoColor::new(Vec::new());
        session.emit_diagnostics(&mut writer).unwrap();
        let rendered = String::from_utf8(writer.into_inner()).unwrap();

        assert!(rendered.contains("illegal character '$'"));
        assert!(rendered.contains("bad.monkey:1:9"));
    }

    #[test]
    fn test_emit_diagnostics_for_non_ascii() {
        let mut session = LexSession::from_source("u.monkey", "let é = 1;");
        session.tokenize();
        assert_eq!(session.error_count(), 2);

        let mut writer = NoColor::new(Vec::new());
        session.emit_diagnostics(&mut writer).unwrap();
        let rendered = String::from_utf8(writer.into_inner()).unwrap();

        assert!(rendered.contains("illegal character '\u{fffd}'"));
        assert!(rendered.contains("u.monkey:1:5"));
    }
}
