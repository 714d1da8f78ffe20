//! Syntax tree for propositional formulas
//!
//! A [`Formula`] is an owned recursive enum: every node owns its children through a `Box`, so
//! trees are acyclic and have exactly one owner by construction.
//!
//! Precedence
//!
//!     IFF 1 < IMP 2 < OR 3 = XOR 3 < AND 4 < NOT 5
//!
//!     NOT is prefix-only and binds tighter than any binary connective. Atoms never need
//!     parentheses and carry rank 9 for printing purposes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rank of the prefix NOT operator
pub const NOT_PRECEDENCE: u8 = 5;

/// Printing rank of an atom; higher than any operator
pub const ATOM_PRECEDENCE: u8 = 9;

/// Binary connectives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BinaryOp {
    And,
    Or,
    Xor,
    Imp,
    Iff,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 5] = [
        BinaryOp::And,
        BinaryOp::Or,
        BinaryOp::Xor,
        BinaryOp::Imp,
        BinaryOp::Iff,
    ];

    /// Binding power of the connective
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Iff => 1,
            BinaryOp::Imp => 2,
            BinaryOp::Or | BinaryOp::Xor => 3,
            BinaryOp::And => 4,
        }
    }

    /// Canonical unicode glyph
    pub fn glyph(self) -> &'static str {
        match self {
            BinaryOp::And => "∧",
            BinaryOp::Or => "∨",
            BinaryOp::Xor => "⊕",
            BinaryOp::Imp => "→",
            BinaryOp::Iff => "↔",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::And => "AND",
            BinaryOp::Or => "OR",
            BinaryOp::Xor => "XOR",
            BinaryOp::Imp => "IMP",
            BinaryOp::Iff => "IFF",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// A propositional formula
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Formula {
    Atom {
        name: String,
    },
    Not {
        operand: Box<Formula>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Formula>,
        right: Box<Formula>,
    },
}

impl Formula {
    pub fn atom(name: impl Into<String>) -> Self {
        Formula::Atom { name: name.into() }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(operand: Formula) -> Self {
        Formula::Not {
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinaryOp, left: Formula, right: Formula) -> Self {
        Formula::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn and(left: Formula, right: Formula) -> Self {
        Self::binary(BinaryOp::And, left, right)
    }

    pub fn or(left: Formula, right: Formula) -> Self {
        Self::binary(BinaryOp::Or, left, right)
    }

    pub fn xor(left: Formula, right: Formula) -> Self {
        Self::binary(BinaryOp::Xor, left, right)
    }

    pub fn implies(left: Formula, right: Formula) -> Self {
        Self::binary(BinaryOp::Imp, left, right)
    }

    pub fn iff(left: Formula, right: Formula) -> Self {
        Self::binary(BinaryOp::Iff, left, right)
    }

    /// Printing rank of the node's top-level operator
    pub fn precedence(&self) -> u8 {
        match self {
            Formula::Atom { .. } => ATOM_PRECEDENCE,
            Formula::Not { .. } => NOT_PRECEDENCE,
            Formula::Binary { op, .. } => op.precedence(),
        }
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Formula::Atom { .. })
    }

    /// Node kind as shown in tree views: `ATOM`, `NOT`, or the connective name
    pub fn node_type(&self) -> &'static str {
        match self {
            Formula::Atom { .. } => "ATOM",
            Formula::Not { .. } => "NOT",
            Formula::Binary { op, .. } => op.name(),
        }
    }

    /// Height of the tree; an atom has depth 1
    pub fn depth(&self) -> usize {
        match self {
            Formula::Atom { .. } => 1,
            Formula::Not { operand } => 1 + operand.depth(),
            Formula::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Atom names in first-occurrence order, without repeats
    pub fn atoms(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_atoms(&mut names);
        names
    }

    fn collect_atoms<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Formula::Atom { name } => {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
            Formula::Not { operand } => operand.collect_atoms(names),
            Formula::Binary { left, right, .. } => {
                left.collect_atoms(names);
                right.collect_atoms(names);
            }
        }
    }
}

/// Renders the canonical symbolic form, see [`formats::symbolic`](super::formats::symbolic)
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::formats::symbolic::formula_to_string(self))
    }
}
