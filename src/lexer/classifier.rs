//! Character predicates and word classification.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::token::TokenKind;

/// Reserved words, built on first use and shared by every lexer.
static KEYWORDS: LazyLock<HashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    HashMap::from([
        ("fn", TokenKind::Function),
        ("let", TokenKind::Let),
        ("true", TokenKind::True),
        ("false", TokenKind::False),
        ("if", TokenKind::If),
        ("else", TokenKind::Else),
        ("return", TokenKind::Return),
    ])
});

/// Resolves a scanned word to its keyword kind, or `Ident` when it is not reserved.
///
/// Matching is exact and case-sensitive: `lets` and `Let` are identifiers.
pub fn classify_word(text: &str) -> TokenKind {
    KEYWORDS.get(text).copied().unwrap_or(TokenKind::Ident)
}

/// Letters and underscore. Digits never appear inside identifiers.
pub fn is_identifier_start_char(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

pub fn is_digit_char(ch: u8) -> bool {
    ch.is_ascii_digit()
}

pub fn is_whitespace_char(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\r' | b'\n')
}

/// Kind of a token spelled by exactly one byte.
pub fn single_char_kind(ch: u8) -> Option<TokenKind> {
    let kind = match ch {
        b'=' => TokenKind::Assign,
        b'+' => TokenKind::Plus,
        b'-' => TokenKind::Minus,
        b'!' => TokenKind::Bang,
        b'*' => TokenKind::Asterisk,
        b'/' => TokenKind::Slash,
        b'<' => TokenKind::Lt,
        b'>' => TokenKind::Gt,
        b',' => TokenKind::Comma,
        b';' => TokenKind::Semicolon,
        b'(' => TokenKind::LeftParen,
        b')' => TokenKind::RightParen,
        b'{' => TokenKind::LeftBrace,
        b'}' => TokenKind::RightBrace,
        _ => return None,
    };
    Some(kind)
}

/// Kind of a two-byte operator whose first byte is `first` and second is `second`.
pub fn two_char_kind(first: u8, second: u8) -> Option<TokenKind> {
    match (first, second) {
        (b'=', b'=') => Some(TokenKind::Eq),
        (b'!', b'=') => Some(TokenKind::NotEq),
        _ => None,
    }
}
