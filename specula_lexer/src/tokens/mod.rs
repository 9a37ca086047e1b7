//! Token model for Specula lexical analysis
//!
//! - **[`TokenKind`]**: closed enumeration of every token kind, each with a
//!   stable wire name (`L_INT`, `K_CONTRACT`, `OP_BIDIR_OP`, `D_SEMICOLON`, ...)
//! - **[`Token`]**: kind, decoded text and location of one emitted token
//!
//! Whitespace kinds (`SPACE`, `TAB`, `NEW_LINE`) exist so the delimiter table
//! can classify them, but the lexer never emits them. Comments produce no
//! token at all.

pub mod kind;
pub mod token;

pub use kind::{TokenClass, TokenKind, UnknownTokenKind};
pub use token::Token;

/// Per-class counts over a token slice
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TokenCounts {
    pub total: usize,
    pub literals: usize,
    pub keywords: usize,
    pub operators: usize,
    pub delimiters: usize,
    pub identifiers: usize,
    pub unknown: usize,
}

pub fn count_tokens(tokens: &[Token]) -> TokenCounts {
    let mut counts = TokenCounts::default();
    for token in tokens {
        counts.total += 1;
        match token.kind.token_class() {
            TokenClass::Literal => counts.literals += 1,
            TokenClass::Keyword => counts.keywords += 1,
            TokenClass::Operator => counts.operators += 1,
            TokenClass::Delimiter => counts.delimiters += 1,
            TokenClass::Identifier => counts.identifiers += 1,
            TokenClass::Unknown => counts.unknown += 1,
            TokenClass::Whitespace => {}
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display_and_span() {
        let token = Token::new(TokenKind::Let, "let", 2, 4, 7);
        assert_eq!(token.to_string(), "K_LET | let");
        assert_eq!(token.span().len(), 3);
        assert_eq!(token.start().to_string(), "2:4");
    }

    #[test]
    fn test_count_tokens() {
        let tokens = vec![
            Token::new(TokenKind::Let, "let", 1, 0, 3),
            Token::new(TokenKind::Identifier, "x", 1, 4, 5),
            Token::new(TokenKind::Equals, "=", 1, 6, 7),
            Token::new(TokenKind::LiteralInt, "1", 1, 8, 9),
            Token::new(TokenKind::Semicolon, ";", 1, 9, 10),
            Token::new(TokenKind::Unknown, "@", 1, 11, 12),
        ];
        let counts = count_tokens(&tokens);
        assert_eq!(counts.total, 6);
        assert_eq!(counts.keywords, 1);
        assert_eq!(counts.identifiers, 1);
        assert_eq!(counts.operators, 1);
        assert_eq!(counts.literals, 1);
        assert_eq!(counts.delimiters, 1);
        assert_eq!(counts.unknown, 1);
    }
}
