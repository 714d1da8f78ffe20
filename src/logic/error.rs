//! Error types for formula tokenization and parsing
//!
//! Every failure is fatal to the call that produced it: the lexer never hands back a partial
//! token stream and the parser never hands back a partial tree.

use super::token::Token;
use std::fmt;

/// Errors raised while turning symbolic text into a [`Formula`](super::ast::Formula)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    /// A character outside the formula alphabet.
    ///
    /// `offset` counts characters in the alias-normalized text.
    InvalidSymbol { symbol: char, offset: usize },
    /// The token stream ended where an atom was expected
    UnexpectedEnd,
    /// A `(` whose matching `)` never arrived; `index` is the token where it was expected
    UnclosedParen { index: usize },
    /// A token that cannot start an atom
    UnexpectedToken { token: Token, index: usize },
    /// Tokens left over after a complete expression; `index` is the first leftover
    TrailingTokens { index: usize },
    /// Groups, negations or the resulting tree nest deeper than `limit`
    TooDeep { index: usize, limit: usize },
}

impl fmt::Display for FormulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaError::InvalidSymbol { symbol, offset } => {
                write!(f, "Invalid symbol {:?} at offset {}", symbol, offset)
            }
            FormulaError::UnexpectedEnd => write!(f, "Unexpected end of formula"),
            FormulaError::UnclosedParen { index } => {
                write!(f, "Unclosed parenthesis: expected ')' at token {}", index)
            }
            FormulaError::UnexpectedToken { token, index } => {
                write!(f, "Unexpected token {} at token {}", token.kind_name(), index)
            }
            FormulaError::TrailingTokens { index } => {
                write!(f, "Extra tokens after the end of the formula, starting at token {}", index)
            }
            FormulaError::TooDeep { index, limit } => {
                write!(f, "Formula nests deeper than {} levels at token {}", limit, index)
            }
        }
    }
}

impl std::error::Error for FormulaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_symbol_message() {
        let err = FormulaError::InvalidSymbol {
            symbol: '#',
            offset: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("'#'"));
        assert!(msg.contains("offset 2"));
    }

    #[test]
    fn test_unexpected_token_names_the_kind() {
        let err = FormulaError::UnexpectedToken {
            token: Token::And,
            index: 1,
        };
        assert_eq!(err.to_string(), "Unexpected token AND at token 1");
    }

    #[test]
    fn test_too_deep_message() {
        let err = FormulaError::TooDeep {
            index: 7,
            limit: 256,
        };
        assert_eq!(err.to_string(), "Formula nests deeper than 256 levels at token 7");
    }
}
