//! Formula lexing
//!
//!     Lexing runs in two steps:
//!
//!     1. Alias normalization: textual spellings of operators are rewritten to their canonical
//!        glyphs (`<->`/`<=>` and the word `iff` to `↔`, `->` and `implies` to `→`, `xor` to
//!        `⊕`), whitespace runs collapse to one space and the ends are trimmed.
//!     2. Scanning with the logos [`Token`] lexer. The first unrecognized character aborts
//!        with [`FormulaError::InvalidSymbol`]; no partial stream is returned.
//!
//!     Spans in the output index into the alias-normalized text, not the caller's input.

use super::error::FormulaError;
use super::targets;
use super::token::Token;
use logos::Logos;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Tokens paired with their byte span in the normalized source
pub type TokenStream = Vec<(Token, Range<usize>)>;

static DOUBLE_ARROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"<->|<=>").unwrap());
static SINGLE_ARROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"->").unwrap());
static XOR_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bxor\b").unwrap());
static IFF_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\biff\b").unwrap());
static IMPLIES_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bimplies\b").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Rewrite operator aliases to canonical glyphs and tidy whitespace
pub fn normalize_aliases(source: &str) -> String {
    let s = DOUBLE_ARROW.replace_all(source, "↔");
    let s = SINGLE_ARROW.replace_all(&s, "→");
    let s = XOR_WORD.replace_all(&s, "⊕");
    let s = IFF_WORD.replace_all(&s, "↔");
    let s = IMPLIES_WORD.replace_all(&s, "→");
    let s = WHITESPACE.replace_all(&s, " ");
    s.trim().to_string()
}

/// Scan already-normalized text into tokens
pub fn lex(normalized: &str) -> Result<TokenStream, FormulaError> {
    let mut lexer = Token::lexer(normalized);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => {
                let symbol = normalized[span.start..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                let offset = normalized[..span.start].chars().count();
                log::debug!(target: targets::LEXING, "Invalid symbol {:?} at {}", symbol, offset);
                return Err(FormulaError::InvalidSymbol { symbol, offset });
            }
        }
    }

    log::trace!(target: targets::LEXING, "Lexed {} tokens from {:?}", tokens.len(), normalized);
    Ok(tokens)
}

/// Normalize aliases, then scan
pub fn tokenize(source: &str) -> Result<TokenStream, FormulaError> {
    lex(&normalize_aliases(source))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> Token {
        Token::Identifier(name.to_string())
    }

    fn tokenize_kinds(source: &str) -> Result<Vec<Token>, FormulaError> {
        Ok(tokenize(source)?.into_iter().map(|(t, _)| t).collect())
    }

    #[test]
    fn test_aliases_are_rewritten() {
        assert_eq!(normalize_aliases("a <-> b"), "a ↔ b");
        assert_eq!(normalize_aliases("a <=> b"), "a ↔ b");
        assert_eq!(normalize_aliases("a -> b"), "a → b");
        assert_eq!(normalize_aliases("a XOR b iff c Implies d"), "a ⊕ b ↔ c → d");
    }

    #[test]
    fn test_alias_words_need_word_boundaries() {
        // "xorx" is an identifier, not an operator
        assert_eq!(normalize_aliases("xorx"), "xorx");
    }

    #[test]
    fn test_whitespace_is_collapsed_and_trimmed() {
        assert_eq!(normalize_aliases("  a \t\n ∧   b  "), "a ∧ b");
    }

    #[test]
    fn test_tokenize_simple_implication() {
        assert_eq!(
            tokenize_kinds("p -> q").unwrap(),
            vec![id("P"), Token::Imp, id("Q")]
        );
    }

    #[test]
    fn test_tokenize_spans_follow_normalized_text() {
        let tokens = tokenize("a  &  b").unwrap();
        assert_eq!(tokens[0].1, 0..1);
        assert_eq!(tokens[1].1, 2..3);
        assert_eq!(tokens[2].1, 4..5);
    }

    #[test]
    fn test_identifier_with_digits_and_underscore() {
        assert_eq!(tokenize_kinds("p_1 ∨ Q2").unwrap(), vec![id("P_1"), Token::Or, id("Q2")]);
    }

    #[test]
    fn test_invalid_symbol_reports_character_offset() {
        let err = tokenize("¬A ∧ #").unwrap_err();
        assert_eq!(
            err,
            FormulaError::InvalidSymbol {
                symbol: '#',
                offset: 5
            }
        );
    }

    #[test]
    fn test_leading_digit_is_invalid() {
        let err = tokenize("1A").unwrap_err();
        assert_eq!(
            err,
            FormulaError::InvalidSymbol {
                symbol: '1',
                offset: 0
            }
        );
    }

    #[test]
    fn test_leading_underscore_is_invalid() {
        assert!(matches!(
            tokenize("_a"),
            Err(FormulaError::InvalidSymbol { symbol: '_', .. })
        ));
    }

    #[test]
    fn test_empty_input_yields_no_tokens() {
        assert_eq!(tokenize("   ").unwrap(), vec![]);
    }
}
