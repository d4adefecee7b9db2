//! Operator lexing.
//!
//! Single-character punctuation is handled directly by the dispatch loop;
//! this module covers the characters that may pair with a following `=`.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes the current character, then a `=` if present.
    fn one_or_two(&mut self, with_equal: TokenKind, alone: TokenKind) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            with_equal
        } else {
            alone
        }
    }

    /// Handles: `=`, `==`
    pub fn lex_equal(&mut self) -> TokenKind {
        self.one_or_two(TokenKind::EqualEqual, TokenKind::Equal)
    }

    /// Handles: `!`, `!=`
    pub fn lex_bang(&mut self) -> TokenKind {
        self.one_or_two(TokenKind::BangEqual, TokenKind::Bang)
    }

    /// Handles: `<`, `<=`
    pub fn lex_less(&mut self) -> TokenKind {
        self.one_or_two(TokenKind::LessEqual, TokenKind::Less)
    }

    /// Handles: `>`, `>=`
    pub fn lex_greater(&mut self) -> TokenKind {
        self.one_or_two(TokenKind::GreaterEqual, TokenKind::Greater)
    }

    /// Handles: `/`
    ///
    /// `//` never reaches here, comments are skipped before dispatch.
    pub fn lex_slash(&mut self) -> TokenKind {
        self.cursor.advance();
        TokenKind::Slash
    }
}
