//! String literal lexing.

use crate::error::{LexError, LexResult};
use crate::token::{Literal, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal starting at the opening `"`.
    ///
    /// Strings may span lines and have no escape sequences. The token's line
    /// is the line of the opening quote.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::UnterminatedString`] if the input ends before the
    /// closing quote. The rest of the input is consumed either way.
    pub fn lex_string(&mut self) -> LexResult<Token> {
        self.cursor.advance();
        let content_start = self.cursor.position();

        self.cursor.advance_while(|c| c != '"');
        if self.cursor.is_at_end() {
            return Err(LexError::UnterminatedString);
        }

        let content = self.cursor.slice_from(content_start).to_string();
        self.cursor.advance();

        Ok(self.make_token(TokenKind::String, Some(Literal::String(content))))
    }
}
