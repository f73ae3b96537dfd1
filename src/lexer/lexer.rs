//! The scanner: a byte cursor over the source that yields one token per call.

use std::iter::FusedIterator;

use super::classifier::{
    classify_word, is_digit_char, is_identifier_start_char, is_whitespace_char,
    single_char_kind, two_char_kind,
};
use super::token::{Position, Token, TokenKind, TokenWithPosition};

/// Lexer for the Monkey language
///
/// The lexer borrows the whole input up front. Every call to [`Lexer::next_token`]
/// consumes exactly the bytes of one lexeme (plus any whitespace before it).
/// Once the input is exhausted the lexer keeps returning `Eof` without moving.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    /// Byte under examination.
    position: usize,
    /// Always `position + 1`.
    read_position: usize,
    /// `None` once the cursor has passed the last byte.
    ch: Option<u8>,
    location: Position,
    eof_emitted: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            read_position: 1,
            ch: input.as_bytes().first().copied(),
            location: Position::new(),
            eof_emitted: false,
        }
    }

    /// Returns the next token and advances past it.
    pub fn next_token(&mut self) -> Token {
        self.next_token_with_position().token
    }

    /// Same as [`Lexer::next_token`], keeping the position and byte span of the lexeme.
    pub fn next_token_with_position(&mut self) -> TokenWithPosition {
        self.skip_whitespace();

        let start = self.position;
        let position = self.location;

        let token = match self.ch {
            None => Token::eof(),
            Some(ch) => self.scan_token(ch),
        };

        log::trace!("{} at {}", token, position);

        TokenWithPosition {
            token,
            position,
            span: start..self.position,
        }
    }

    /// Collect every token up to and including `Eof`.
    pub fn collect_tokens(self) -> Vec<TokenWithPosition> {
        self.collect()
    }

    fn scan_token(&mut self, ch: u8) -> Token {
        if let Some(kind) = self.peek_char().and_then(|next| two_char_kind(ch, next)) {
            let start = self.position;
            self.read_char();
            self.read_char();
            return Token::new(kind, &self.input[start..self.position]);
        }

        if let Some(kind) = single_char_kind(ch) {
            self.read_char();
            return Token::new(kind, char::from(ch));
        }

        if is_identifier_start_char(ch) {
            let word = self.read_while(is_identifier_start_char);
            return Token::new(classify_word(word), word);
        }

        if is_digit_char(ch) {
            return Token::new(TokenKind::Int, self.read_while(is_digit_char));
        }

        let start = self.position;
        self.read_char();
        let literal = String::from_utf8_lossy(&self.input.as_bytes()[start..self.position]);
        log::debug!("illegal byte {:#04x} at {}", ch, self.location);
        Token::new(TokenKind::Illegal, literal)
    }

    /// Move the cursor one byte forward. A no-op at end of input.
    fn read_char(&mut self) {
        let Some(ch) = self.ch else {
            return;
        };

        self.location.advance(ch);
        self.position = self.read_position;
        self.read_position += 1;
        self.ch = self.input.as_bytes().get(self.position).copied();
    }

    fn peek_char(&self) -> Option<u8> {
        self.input.as_bytes().get(self.read_position).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.ch.is_some_and(is_whitespace_char) {
            self.read_char();
        }
    }

    /// Consume the maximal run of bytes matching `pred` and return it.
    fn read_while(&mut self, pred: fn(u8) -> bool) -> &'a str {
        let start = self.position;
        while self.ch.is_some_and(pred) {
            self.read_char();
        }
        &self.input[start..self.position]
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = TokenWithPosition;

    /// Yields every token, including a single trailing `Eof`, then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.eof_emitted {
            return None;
        }

        let token = self.next_token_with_position();
        if token.token.is_eof() {
            self.eof_emitted = true;
        }
        Some(token)
    }
}

impl FusedIterator for Lexer<'_> {}
