//! Monkey Language Lexer Library
//!
//! This library provides the lexical analysis stage for the Monkey language,
//! along with the session and read-print loop used by the `monkeylang` binary.

pub mod error;
pub mod lexer;
pub mod repl;
pub mod session;

// Re-export commonly used types
pub use error::{ErrorCollector, LexerError, MonkeyError, MonkeyResult};
pub use lexer::{tokenize, Lexer, Token, TokenKind, TokenWithPosition};
pub use session::LexSession;
