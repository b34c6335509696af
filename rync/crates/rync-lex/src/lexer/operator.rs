//! Operator recognition.

use crate::classify;
use crate::lexer::Lexer;
use crate::tables;
use crate::token::{Token, TokenKind};

impl<'src> Lexer<'src, '_> {
    /// Recognize an operator.
    ///
    /// The two-character table is checked first, so `<=` is one token and
    /// never `<` then `=`. A `-` directly followed by a digit is a sign:
    /// the `-` is consumed and the numeric recognizer finishes the literal,
    /// producing a single signed token. Anything else is a one-character
    /// operator if it is in the single-operator set, otherwise an
    /// unrecognized token.
    pub(crate) fn lex_operator(&mut self) -> Token<'src> {
        let first = self.cursor.current_char();
        let second = self.cursor.peek_char(1);

        if tables::is_two_char_operator(first, second) {
            self.cursor.advance_n(2);
            return self.token(TokenKind::Operator);
        }

        if first == '-' && classify::is_digit(second) {
            self.cursor.advance();
            return self.lex_number();
        }

        self.cursor.advance();
        if classify::is_single_operator(first) {
            self.token(TokenKind::Operator)
        } else {
            self.token(TokenKind::Unknown)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::token::{Token, TokenKind};
    use rync_util::Handler;

    fn lex_all(source: &str) -> Vec<Token<'_>> {
        let mut handler = Handler::new();
        Lexer::new(source, &mut handler).tokenize()
    }

    #[test]
    fn test_two_char_operators_are_single_tokens() {
        for op in [
            "->", "==", "!=", "<=", ">=", "&&", "||", "<<", ">>", "+=", "-=", "*=", "/=", "%=",
            "&=", "|=", "^=",
        ] {
            let tokens = lex_all(op);
            assert_eq!(tokens.len(), 2, "{}", op);
            assert_eq!(tokens[0].kind, TokenKind::Operator);
            assert_eq!(tokens[0].lexeme, op);
        }
    }

    #[test]
    fn test_single_char_operators() {
        for op in ["+", "-", "*", "/", "%", "=", "!", "<", ">", "&", "|"] {
            let tokens = lex_all(op);
            assert_eq!(tokens[0].kind, TokenKind::Operator, "{}", op);
            assert_eq!(tokens[0].lexeme, op);
        }
    }

    #[test]
    fn test_longest_match_wins() {
        // `<==` is `<=` then `=`, not `<` `==`.
        let tokens = lex_all("<==");
        assert_eq!(tokens[0].lexeme, "<=");
        assert_eq!(tokens[1].lexeme, "=");
    }

    #[test]
    fn test_negative_literal_fused() {
        let tokens = lex_all("-42");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Literal);
        assert_eq!(tokens[0].lexeme, "-42");
    }

    #[test]
    fn test_negative_float_fused() {
        let tokens = lex_all("-3.5e2");
        assert_eq!(tokens[0].kind, TokenKind::Literal);
        assert_eq!(tokens[0].lexeme, "-3.5e2");
    }

    #[test]
    fn test_minus_before_identifier_stays_operator() {
        let tokens = lex_all("-x");
        assert_eq!(tokens[0].kind, TokenKind::Operator);
        assert_eq!(tokens[0].lexeme, "-");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_minus_equals_beats_negative_literal() {
        // `-=` wins over sign fusion: `x -= 1`, not `x`, `-=1`.
        let tokens = lex_all("-=1");
        assert_eq!(tokens[0].lexeme, "-=");
        assert_eq!(tokens[1].lexeme, "1");
    }

    #[test]
    fn test_operator_chain_splits_pairwise() {
        let tokens = lex_all("a&&&b");
        let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme).collect();
        assert_eq!(lexemes, ["a", "&&", "&", "b", ""]);
    }
}
