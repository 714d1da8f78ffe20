//! Token definitions for symbolic formulas
//!
//! Tokens are produced by the logos lexer over alias-normalized text (see
//! [lexing](super::lexing)). Every operator has one canonical unicode glyph and a handful of
//! ASCII spellings:
//!
//!     NOT  ¬ ! ~
//!     AND  ∧ & ^
//!     OR   ∨ |
//!     XOR  ⊕
//!     IMP  →
//!     IFF  ↔
//!
//! Identifiers are a letter followed by letters, digits or underscores and are upper-cased on
//! the way in. A lone lowercase `v` is therefore the identifier `V`, not an OR.
use super::ast::BinaryOp;
use logos::Logos;
use std::fmt;

/// All tokens the formula lexer can produce
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r" +")]
pub enum Token {
    #[regex(r"[A-Za-z][A-Za-z0-9_]*", |lex| lex.slice().to_ascii_uppercase())]
    Identifier(String),

    #[token("¬")]
    #[token("!")]
    #[token("~")]
    Not,

    #[token("∧")]
    #[token("&")]
    #[token("^")]
    And,

    #[token("∨")]
    #[token("|")]
    Or,

    #[token("⊕")]
    Xor,

    #[token("→")]
    Imp,

    #[token("↔")]
    Iff,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,
}

impl Token {
    /// The binary connective this token stands for, if any
    pub fn binary_op(&self) -> Option<BinaryOp> {
        match self {
            Token::And => Some(BinaryOp::And),
            Token::Or => Some(BinaryOp::Or),
            Token::Xor => Some(BinaryOp::Xor),
            Token::Imp => Some(BinaryOp::Imp),
            Token::Iff => Some(BinaryOp::Iff),
            _ => None,
        }
    }

    /// Short upper-case name of the token kind, used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Identifier(_) => "IDENTIFIER",
            Token::Not => "NOT",
            Token::And => "AND",
            Token::Or => "OR",
            Token::Xor => "XOR",
            Token::Imp => "IMP",
            Token::Iff => "IFF",
            Token::LParen => "LPAREN",
            Token::RParen => "RPAREN",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Identifier(name) => write!(f, "{}", name),
            Token::Not => write!(f, "¬"),
            Token::And => write!(f, "∧"),
            Token::Or => write!(f, "∨"),
            Token::Xor => write!(f, "⊕"),
            Token::Imp => write!(f, "→"),
            Token::Iff => write!(f, "↔"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}
