//! Number literal lexing.

use crate::literal::parse_number;
use crate::token::{Literal, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal starting at an ASCII digit.
    ///
    /// A `.` belongs to the number only when a digit follows it, so `4.`
    /// leaves the dot for the next token and `1.2.3` stops after `1.2`.
    pub fn lex_number(&mut self) -> Token {
        self.cursor.advance_while(|c| c.is_ascii_digit());

        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            self.cursor.advance();
            self.cursor.advance_while(|c| c.is_ascii_digit());
        }

        let value = parse_number(self.cursor.slice_from(self.token_start));
        self.make_token(TokenKind::Number, value.map(Literal::Number))
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Literal, Token, TokenKind};
    use crate::Lexer;
    use loxc_util::Handler;

    fn lex_all(source: &str) -> Vec<Token> {
        let mut handler = Handler::new();
        Lexer::new(source, &mut handler).collect()
    }

    #[test]
    fn test_integer() {
        let tokens = lex_all("42");
        assert_eq!(tokens[0].lexeme(), "42");
        assert_eq!(tokens[0].literal(), Some(&Literal::Number(42.0)));
    }

    #[test]
    fn test_decimal() {
        let tokens = lex_all("123.45");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].literal(), Some(&Literal::Number(123.45)));
    }

    #[test]
    fn test_trailing_dot() {
        let tokens = lex_all("4.");
        assert_eq!(tokens[0].kind(), TokenKind::Number);
        assert_eq!(tokens[0].lexeme(), "4");
        assert_eq!(tokens[1].kind(), TokenKind::Dot);
    }

    #[test]
    fn test_leading_dot_is_not_a_number() {
        let tokens = lex_all(".5");
        assert_eq!(tokens[0].kind(), TokenKind::Dot);
        assert_eq!(tokens[1].lexeme(), "5");
    }

    #[test]
    fn test_second_dot_ends_number() {
        let lexemes: Vec<_> = lex_all("1.2.3")
            .iter()
            .map(|t| t.lexeme().to_string())
            .collect();
        assert_eq!(lexemes, vec!["1.2", ".", "3"]);
    }

    #[test]
    fn test_number_followed_by_identifier() {
        let tokens = lex_all("12abc");
        assert_eq!(tokens[0].lexeme(), "12");
        assert_eq!(tokens[1].kind(), TokenKind::Identifier);
    }

    #[test]
    fn test_method_call_on_number() {
        let kinds: Vec<_> = lex_all("1.abs").iter().map(|t| t.kind()).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Number, TokenKind::Dot, TokenKind::Identifier]
        );
    }
}
