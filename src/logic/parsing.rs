//! Precedence-climbing parser
//!
//!     parse_atom  := '(' parse_expr(0) ')' | NOT parse_atom | IDENTIFIER
//!     parse_expr(min) := parse_atom { OP parse_expr(bp(OP) + 1) }   while bp(OP) >= min
//!
//!     The right-hand side is parsed with a minimum one above the operator's own binding power,
//!     so a run of equal-precedence operators folds to the left: `A → B → C` is `(A → B) → C`
//!     and `A ∨ B ⊕ C` is `(A ∨ B) ⊕ C`.
//!
//!     NOT takes an atom, not an expression, so `¬A ∧ B` is `(¬A) ∧ B` while `¬(A ∧ B)`
//!     negates the group.
//!
//!     Both the open groups and NOTs on the way down and the depth of the tree being built are
//!     capped at [`MAX_DEPTH`]. Printers, realization and drop all recurse over the tree, so a
//!     parsed formula stays within that bound end to end.

use super::ast::Formula;
use super::error::FormulaError;
use super::lexing::{tokenize, TokenStream};
use super::targets;
use super::token::Token;

/// Deepest nesting of groups and negations, and deepest tree, the parser accepts
pub const MAX_DEPTH: usize = 256;

/// Cursor over a token stream
pub struct Parser<'a> {
    tokens: &'a [(Token, std::ops::Range<usize>)],
    pos: usize,
    nesting: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [(Token, std::ops::Range<usize>)]) -> Self {
        Parser {
            tokens,
            pos: 0,
            nesting: 0,
        }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos).map(|(token, _)| token)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn check_depth(&self, depth: usize, index: usize) -> Result<usize, FormulaError> {
        if depth > MAX_DEPTH {
            return Err(FormulaError::TooDeep {
                index,
                limit: MAX_DEPTH,
            });
        }
        Ok(depth)
    }

    /// Parse the whole stream as one formula
    pub fn parse(mut self) -> Result<Formula, FormulaError> {
        let (formula, _) = self.parse_expr(0)?;
        if self.pos != self.tokens.len() {
            return Err(FormulaError::TrailingTokens { index: self.pos });
        }
        Ok(formula)
    }

    /// Parse one atom, returning it with its tree depth
    fn parse_atom(&mut self) -> Result<(Formula, usize), FormulaError> {
        let index = self.pos;
        match self.advance() {
            None => Err(FormulaError::UnexpectedEnd),
            Some(Token::LParen) => {
                let inner = self.nested(index, |parser| parser.parse_expr(0))?;
                match self.peek() {
                    Some(Token::RParen) => {
                        self.pos += 1;
                        Ok(inner)
                    }
                    _ => Err(FormulaError::UnclosedParen { index: self.pos }),
                }
            }
            Some(Token::Not) => {
                let (operand, depth) = self.nested(index, |parser| parser.parse_atom())?;
                let depth = self.check_depth(depth + 1, index)?;
                Ok((Formula::not(operand), depth))
            }
            Some(Token::Identifier(name)) => Ok((Formula::atom(name.clone()), 1)),
            Some(token) => Err(FormulaError::UnexpectedToken {
                token: token.clone(),
                index,
            }),
        }
    }

    fn nested<T>(
        &mut self,
        index: usize,
        descend: impl FnOnce(&mut Self) -> Result<T, FormulaError>,
    ) -> Result<T, FormulaError> {
        self.nesting = self.check_depth(self.nesting + 1, index)?;
        let result = descend(self);
        self.nesting -= 1;
        result
    }

    fn parse_expr(&mut self, min_bp: u8) -> Result<(Formula, usize), FormulaError> {
        let (mut left, mut depth) = self.parse_atom()?;

        while let Some(op) = self.peek().and_then(Token::binary_op) {
            let bp = op.precedence();
            if bp < min_bp {
                break;
            }
            let index = self.pos;
            self.pos += 1;
            let (right, right_depth) = self.parse_expr(bp + 1)?;
            depth = self.check_depth(1 + depth.max(right_depth), index)?;
            left = Formula::binary(op, left, right);
        }

        Ok((left, depth))
    }
}

/// Parse an already-lexed token stream
pub fn parse_tokens(tokens: &TokenStream) -> Result<Formula, FormulaError> {
    Parser::new(tokens).parse().map_err(|err| {
        log::debug!(target: targets::PARSING, "Parse failed: {}", err);
        err
    })
}

/// Tokenize and parse symbolic text
pub fn parse_formula(source: &str) -> Result<Formula, FormulaError> {
    let tokens = tokenize(source)?;
    let formula = parse_tokens(&tokens)?;
    log::trace!(target: targets::PARSING, "Parsed {:?} to depth {}", source, formula.depth());
    Ok(formula)
}
