//! Identifier and keyword lexing.

use super::core::is_ident_continue;
use crate::token::{keyword_from_ident, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers start with a letter or underscore, followed by letters,
    /// digits or underscores. Reserved words get their keyword kind.
    pub fn lex_identifier(&mut self) -> TokenKind {
        self.cursor.advance_while(is_ident_continue);

        let text = self.cursor.slice_from(self.token_start);
        keyword_from_ident(text).unwrap_or(TokenKind::Identifier)
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::Lexer;
    use loxc_util::Handler;

    fn lex_ident(source: &str) -> TokenKind {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new(source, &mut handler);
        lexer.lex_identifier()
    }

    #[test]
    fn test_simple_identifier() {
        assert_eq!(lex_ident("foo"), TokenKind::Identifier);
    }

    #[test]
    fn test_identifier_with_underscore_and_digits() {
        assert_eq!(lex_ident("_foo_bar_123"), TokenKind::Identifier);
    }

    #[test]
    fn test_keywords() {
        assert_eq!(lex_ident("and"), TokenKind::And);
        assert_eq!(lex_ident("while"), TokenKind::While);
        assert_eq!(lex_ident("nil"), TokenKind::Nil);
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(lex_ident("orchid"), TokenKind::Identifier);
        assert_eq!(lex_ident("classy"), TokenKind::Identifier);
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(lex_ident("True"), TokenKind::Identifier);
    }

    #[test]
    fn test_identifier_stops_at_punctuation() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("print(x)", &mut handler);
        let token = lexer.next_token();
        assert_eq!(token.kind(), TokenKind::Print);
        assert_eq!(token.lexeme(), "print");
    }

    #[test]
    fn test_unicode_letters() {
        let mut handler = Handler::new();
        let token = Lexer::new("café", &mut handler).next_token();
        assert_eq!(token.kind(), TokenKind::Identifier);
        assert_eq!(token.lexeme(), "café");
        assert!(!handler.has_errors());
    }
}
