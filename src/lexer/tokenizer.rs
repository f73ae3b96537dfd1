//! Convenience helpers over [`Lexer`] for callers that want the whole stream at once.

use super::lexer::Lexer;
use super::token::{Token, TokenKind, TokenWithPosition};

/// Tokenize source code, up to and including the `Eof` token.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).map(|t| t.token).collect()
}

/// Tokens whose kind is `Illegal`.
pub fn illegal_tokens(tokens: &[TokenWithPosition]) -> impl Iterator<Item = &TokenWithPosition> {
    tokens
        .iter()
        .filter(|t| t.token.kind == TokenKind::Illegal)
}

/// Debug output: one token per line, prefixed with its line and column.
pub fn format_tokens(tokens: &[TokenWithPosition]) -> String {
    tokens
        .iter()
        .map(|t| format!("{:>4}:{:<3} {}", t.position.line, t.position.column, t.token))
        .collect::<Vec<_>>()
        .join("\n")
}

/// JSON array of tokens with positions and spans, as printed by `tokens --format json`.
pub fn tokens_to_json(tokens: &[TokenWithPosition]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tokens)
}
