//! Portuguese realization of formulas
//!
//!     ATOM   the dictionary phrase, or the bare label when the phrase is missing or blank
//!     NOT    Não é verdade que X
//!     AND    X e Y
//!     OR     X ou Y
//!     XOR    X ou Y (mas não ambos)
//!     IMP    Se X, então Y
//!     IFF    X se e somente se Y
//!
//! Sub-clauses are wrapped in parentheses when their rendered text contains a connective word
//! (`e`, `ou`, `então`, `somente`, `ambos`) or a comma. The test looks at the text, not at the
//! sub-tree, so a dictionary phrase such as "chove e venta" gets wrapped even as a plain atom.

use crate::logic::ast::{BinaryOp, Formula};
use crate::logic::dictionary::Dictionary;
use once_cell::sync::Lazy;
use regex::Regex;

static CONNECTIVE_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:e|ou|então|somente|ambos)\b|,").unwrap());

/// Render `formula` as a Portuguese sentence using `dictionary` for atom phrases
pub fn realize_natural_language(formula: &Formula, dictionary: &Dictionary) -> String {
    match formula {
        Formula::Atom { name } => dictionary.phrase(name).unwrap_or(name.as_str()).to_string(),
        Formula::Not { operand } => {
            format!("Não é verdade que {}", clause(operand, dictionary))
        }
        Formula::Binary { op, left, right } => {
            let x = clause(left, dictionary);
            let y = clause(right, dictionary);
            match op {
                BinaryOp::And => format!("{} e {}", x, y),
                BinaryOp::Or => format!("{} ou {}", x, y),
                BinaryOp::Xor => format!("{} ou {} (mas não ambos)", x, y),
                BinaryOp::Imp => format!("Se {}, então {}", x, y),
                BinaryOp::Iff => format!("{} se e somente se {}", x, y),
            }
        }
    }
}

fn clause(formula: &Formula, dictionary: &Dictionary) -> String {
    let text = realize_natural_language(formula, dictionary);
    if needs_parens(&text) {
        format!("({})", text)
    } else {
        text
    }
}

fn needs_parens(text: &str) -> bool {
    CONNECTIVE_WORD.is_match(&text.to_lowercase())
}
