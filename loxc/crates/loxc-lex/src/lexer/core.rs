//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use loxc_util::{DiagnosticBuilder, Handler, Span};
use tracing::trace;

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Literal, Token, TokenKind};

/// Lexer for the Lox language.
///
/// The lexer makes a single forward pass over the source with one character
/// of lookahead. Lexical errors are reported to the [`Handler`] and never stop
/// the scan.
///
/// # Example
///
/// ```
/// use loxc_lex::{Lexer, TokenKind};
/// use loxc_util::Handler;
///
/// let mut handler = Handler::new();
/// let mut lexer = Lexer::new("var x;", &mut handler);
/// assert_eq!(lexer.next_token().kind(), TokenKind::Var);
/// assert_eq!(lexer.next_token().lexeme(), "x");
/// assert_eq!(lexer.next_token().kind(), TokenKind::Semicolon);
/// assert_eq!(lexer.next_token().kind(), TokenKind::Eof);
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Error handler for reporting lexical errors.
    handler: &'a mut Handler,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 1,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Skips whitespace and comments, then dispatches on the current
    /// character. Characters that produce no token (an unexpected character,
    /// an unterminated string) are reported and scanning moves on.
    ///
    /// Once the source is exhausted every call returns an `Eof` token.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace_and_comments();

            self.token_start = self.cursor.position();
            self.token_start_line = self.cursor.line();

            if self.cursor.is_at_end() {
                return Token::new(
                    TokenKind::Eof,
                    "",
                    None,
                    Span::point(self.token_start, self.token_start_line),
                );
            }

            if let Some(token) = self.lex_token() {
                return token;
            }
        }
    }

    fn lex_token(&mut self) -> Option<Token> {
        let kind = match self.cursor.current_char() {
            '(' => self.single(TokenKind::LeftParen),
            ')' => self.single(TokenKind::RightParen),
            '{' => self.single(TokenKind::LeftBrace),
            '}' => self.single(TokenKind::RightBrace),
            ',' => self.single(TokenKind::Comma),
            ';' => self.single(TokenKind::Semicolon),
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '*' => self.single(TokenKind::Star),
            '.' => self.single(TokenKind::Dot),
            '/' => self.lex_slash(),
            '=' => self.lex_equal(),
            '!' => self.lex_bang(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '"' => {
                return match self.lex_string() {
                    Ok(token) => Some(token),
                    Err(error) => {
                        self.report(error);
                        None
                    },
                };
            },
            c if c.is_ascii_digit() => return Some(self.lex_number()),
            c if is_ident_start(c) => self.lex_identifier(),
            c => {
                self.cursor.advance();
                self.report(LexError::UnexpectedCharacter(c));
                return None;
            },
        };

        Some(self.make_token(kind, None))
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    /// Builds a token whose lexeme runs from the token start to the cursor.
    pub(crate) fn make_token(&self, kind: TokenKind, literal: Option<Literal>) -> Token {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
        );
        Token::new(kind, self.cursor.slice_from(self.token_start), literal, span)
    }

    /// Reports a lexical error at the line the cursor is on.
    ///
    /// For an unterminated string this is the last line of the source, not
    /// the line of the opening quote.
    pub(crate) fn report(&mut self, error: LexError) {
        let span = Span::new(self.token_start, self.cursor.position(), self.cursor.line());
        trace!(line = span.line, code = %error.code(), "{}", error);
        DiagnosticBuilder::error(error.to_string())
            .code(error.code())
            .span(span)
            .emit(self.handler);
    }

    /// Scans the rest of the source, returning every token including the
    /// final `Eof`.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.kind() == TokenKind::Eof;
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

/// Yields tokens up to, but not including, `Eof`.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind() == TokenKind::Eof {
            None
        } else {
            Some(token)
        }
    }
}

#[inline]
pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

#[inline]
pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
