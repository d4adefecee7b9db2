//! Whitespace and comment skipping.

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and line comments before the next token.
    ///
    /// Whitespace is exactly space, tab, carriage return and newline. The
    /// cursor counts each newline it steps over.
    pub fn skip_whitespace_and_comments(&mut self) {
        loop {
            if self.cursor.is_at_end() {
                return;
            }

            match self.cursor.current_char() {
                ' ' | '\t' | '\r' | '\n' => {
                    self.cursor.advance();
                },
                '/' if self.cursor.peek_char(1) == '/' => {
                    self.skip_line_comment();
                },
                // Other Unicode whitespace (`\x0b`, `\x0c`, U+00A0) is an unexpected character.
                _ => return,
            }
        }
    }

    /// Skips a `//` comment up to, but not including, the end of the line.
    pub fn skip_line_comment(&mut self) {
        self.cursor.advance_while(|c| c != '\n');
    }
}
