//! Edge case tests for loxc-lex

#[cfg(test)]
mod tests {
    use crate::{scan, Literal, Token, TokenKind};

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(Token::kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        let result = scan("");
        assert_eq!(kinds(result.tokens()), vec![TokenKind::Eof]);
        assert_eq!(result.tokens()[0].line(), 1);
        assert!(!result.had_error());
    }

    #[test]
    fn test_edge_whitespace_only() {
        let result = scan(" \t\r\n\n");
        assert_eq!(kinds(result.tokens()), vec![TokenKind::Eof]);
        assert_eq!(result.tokens()[0].line(), 3);
    }

    #[test]
    fn test_edge_all_punctuation() {
        let result = scan("(){},;+-*.=!<>/");
        assert_eq!(
            kinds(result.tokens()),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::Comma,
                TokenKind::Semicolon,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Dot,
                TokenKind::Equal,
                TokenKind::Bang,
                TokenKind::Less,
                TokenKind::Greater,
                TokenKind::Slash,
                TokenKind::Eof,
            ]
        );
        assert!(!result.had_error());
    }

    #[test]
    fn test_edge_string() {
        let result = scan("\"hello\"");
        let token = &result.tokens()[0];
        assert_eq!(token.kind(), TokenKind::String);
        assert_eq!(token.lexeme(), "\"hello\"");
        assert_eq!(token.literal(), Some(&Literal::String("hello".to_string())));
        assert_eq!(result.tokens().len(), 2);
    }

    #[test]
    fn test_edge_unterminated_string() {
        let result = scan("\"unterminated");
        assert_eq!(kinds(result.tokens()), vec![TokenKind::Eof]);
        assert!(result.had_error());
        assert_eq!(result.diagnostics().len(), 1);
        assert_eq!(
            result.diagnostics()[0].to_string(),
            "[line 1] Error: Unterminated string."
        );
    }

    #[test]
    fn test_edge_numbers() {
        let result = scan("123.45");
        assert_eq!(
            result.tokens()[0].literal(),
            Some(&Literal::Number(123.45))
        );

        let result = scan("4.");
        assert_eq!(
            kinds(result.tokens()),
            vec![TokenKind::Number, TokenKind::Dot, TokenKind::Eof]
        );
        assert_eq!(result.tokens()[0].to_string(), "NUMBER 4 4.0");
    }

    #[test]
    fn test_edge_identifiers_and_keywords() {
        let result = scan("foo bar123 and");
        let tokens = result.tokens();
        assert_eq!(
            kinds(tokens),
            vec![
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::And,
                TokenKind::Eof,
            ]
        );
        assert_eq!(tokens[0].lexeme(), "foo");
        assert_eq!(tokens[1].lexeme(), "bar123");
    }

    #[test]
    fn test_edge_unexpected_character() {
        let result = scan("@");
        assert_eq!(kinds(result.tokens()), vec![TokenKind::Eof]);
        assert!(result.had_error());
        assert_eq!(
            result.diagnostics()[0].to_string(),
            "[line 1] Error: Unexpected character: @"
        );
    }

    #[test]
    fn test_edge_errors_keep_scanning() {
        let result = scan(",.$(#");
        assert_eq!(
            kinds(result.tokens()),
            vec![
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::LeftParen,
                TokenKind::Eof,
            ]
        );
        let messages: Vec<_> = result
            .diagnostics()
            .iter()
            .map(|d| d.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec!["Unexpected character: $", "Unexpected character: #"]
        );
    }

    #[test]
    fn test_edge_error_lines() {
        let result = scan("a\n@\n\n#");
        let lines: Vec<_> = result.diagnostics().iter().map(|d| d.line()).collect();
        assert_eq!(lines, vec![2, 4]);
    }

    #[test]
    fn test_edge_keyword_every_word() {
        let source = "and class else false for fun if nil or print return super this true var while";
        let result = scan(source);
        let names: Vec<_> = result
            .tokens()
            .iter()
            .map(|t| t.kind().name().to_lowercase())
            .collect();
        let mut expected: Vec<_> = source.split(' ').map(str::to_string).collect();
        expected.push("eof".to_string());
        assert_eq!(names, expected);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let result = scan(&format!("var {} = 1;", name));
        assert_eq!(result.tokens()[1].lexeme(), name);
    }

    #[test]
    fn test_edge_division_vs_comment() {
        let result = scan("a / b // c / d\n/");
        assert_eq!(
            kinds(result.tokens()),
            vec![
                TokenKind::Identifier,
                TokenKind::Slash,
                TokenKind::Identifier,
                TokenKind::Slash,
                TokenKind::Eof,
            ]
        );
        assert_eq!(result.tokens()[3].line(), 2);
    }

    #[test]
    fn test_edge_rendering() {
        let result = scan("var s = \"hi\";");
        let lines: Vec<_> = result.tokens().iter().map(Token::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "VAR var null",
                "IDENTIFIER s null",
                "EQUAL = null",
                "STRING \"hi\" hi",
                "SEMICOLON ; null",
                "EOF  null",
            ]
        );
    }

    #[test]
    fn test_edge_scan_is_repeatable() {
        let source = "if (x <= 10) print \"small\";";
        let first = scan(source);
        let second = scan(source);
        assert_eq!(first.tokens(), second.tokens());
    }

    #[test]
    fn test_edge_into_parts() {
        let (tokens, diagnostics) = scan("1 ?").into_parts();
        assert_eq!(tokens.len(), 2);
        assert_eq!(diagnostics.len(), 1);
    }

    // ==================== PROPERTIES ====================

    mod properties {
        use crate::{scan, TokenKind};
        use proptest::prelude::*;

        const VALID_SOURCE: &str = "[a-z0-9_(){},;+*.=!<>/\" \t\r\n-]{0,64}";

        fn is_whitespace(c: char) -> bool {
            matches!(c, ' ' | '\t' | '\r' | '\n')
        }

        /// Whether every string in `source` is closed, treating `//` outside
        /// a string as the start of a comment.
        fn strings_are_closed(source: &str) -> bool {
            let mut chars = source.chars().peekable();
            let mut in_string = false;
            while let Some(c) = chars.next() {
                match c {
                    '"' => in_string = !in_string,
                    '/' if !in_string && chars.peek() == Some(&'/') => {
                        chars.by_ref().find(|&c| c == '\n');
                    },
                    _ => {},
                }
            }
            !in_string
        }

        /// Whether the text between two tokens is only whitespace and comments.
        fn is_trivia(mut gap: &str) -> bool {
            loop {
                gap = gap.trim_start_matches(is_whitespace);
                match gap.strip_prefix("//") {
                    Some(comment) => {
                        gap = comment.find('\n').map_or("", |i| &comment[i..]);
                    },
                    None => return gap.is_empty(),
                }
            }
        }

        #[test]
        fn test_trivia_and_closed_strings() {
            assert!(is_trivia(" \t// note \"\n  // tail"));
            assert!(!is_trivia(" / "));
            assert!(strings_are_closed("\"a // b\" // \"\nx"));
            assert!(!strings_are_closed("// \"\n\""));
        }

        proptest! {
            #[test]
            fn prop_never_panics_and_ends_with_eof(source in any::<String>()) {
                let result = scan(&source);
                let eofs = result
                    .tokens()
                    .iter()
                    .filter(|t| t.kind() == TokenKind::Eof)
                    .count();
                prop_assert_eq!(eofs, 1);
                prop_assert_eq!(result.tokens().last().map(|t| t.kind()), Some(TokenKind::Eof));
                prop_assert_eq!(result.had_error(), !result.diagnostics().is_empty());
            }

            #[test]
            fn prop_valid_input_has_no_error(source in VALID_SOURCE) {
                prop_assume!(strings_are_closed(&source));
                prop_assert!(!scan(&source).had_error());
            }

            #[test]
            fn prop_lexemes_reconstruct_source(source in VALID_SOURCE) {
                prop_assume!(strings_are_closed(&source));
                let result = scan(&source);
                let mut end = 0;
                for token in result.tokens() {
                    let span = token.span();
                    prop_assert!(is_trivia(&source[end..span.start]));
                    prop_assert_eq!(span.source_text(&source), token.lexeme());
                    end = span.end;
                }
                prop_assert_eq!(end, source.len());
            }

            #[test]
            fn prop_line_counts_newlines_before_token(source in any::<String>()) {
                let result = scan(&source);
                let mut previous = 1;
                for token in result.tokens() {
                    let expected = 1 + source[..token.span().start].matches('\n').count() as u32;
                    prop_assert_eq!(token.line(), expected);
                    prop_assert!(token.line() >= previous);
                    previous = token.line();
                }
            }

            #[test]
            fn prop_rescanning_a_lexeme_is_idempotent(source in VALID_SOURCE) {
                prop_assume!(strings_are_closed(&source));
                for token in scan(&source).tokens() {
                    if token.kind() == TokenKind::Eof {
                        continue;
                    }
                    let again = scan(token.lexeme());
                    let first = &again.tokens()[0];
                    prop_assert_eq!(again.tokens().len(), 2);
                    prop_assert_eq!(first.kind(), token.kind());
                    prop_assert_eq!(first.literal(), token.literal());
                }
            }
        }
    }
}
