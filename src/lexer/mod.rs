//! Lexical analysis module for the Monkey language.
//!
//! This module turns Monkey source code into a stream of tokens: operators,
//! delimiters, identifiers, keywords, integer literals, and an explicit `Eof`.
//! Input is treated as bytes; anything the language does not know becomes an
//! `Illegal` token so scanning never fails.

mod classifier;
#[allow(clippy::module_inception)]
mod lexer;
mod token;
mod tokenizer;

pub use classifier::{classify_word, is_digit_char, is_identifier_start_char};
pub use lexer::Lexer;
pub use token::{Position, Token, TokenKind, TokenWithPosition};
pub use tokenizer::{format_tokens, illegal_tokens, tokenize, tokens_to_json};
