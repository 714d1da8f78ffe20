//! Canonical symbolic rendering
//!
//! Operators use their unicode glyphs joined by single spaces, and only the parentheses the
//! parser needs are emitted:
//!
//! - a NOT operand is bare only when it is an atom: `¬A`, `¬(A ∧ B)`, `¬(¬A)`
//! - a left operand is wrapped when it binds looser than the parent: `(A ∨ B) ∧ C`
//! - a right operand is also wrapped when it binds exactly as tight as the parent, because
//!   equal-precedence chains parse to the left: `A → (B → C)`, `A ∨ (B ⊕ C)`
//!
//! The output always parses back to the same tree.

use crate::logic::ast::{BinaryOp, Formula};

/// Render a formula in canonical symbolic notation
pub fn formula_to_string(formula: &Formula) -> String {
    let mut out = String::new();
    write_formula(&mut out, formula);
    out
}

fn write_formula(out: &mut String, formula: &Formula) {
    match formula {
        Formula::Atom { name } => out.push_str(name),
        Formula::Not { operand } => {
            out.push('¬');
            write_operand(out, operand, !operand.is_atom());
        }
        Formula::Binary { op, left, right } => {
            write_operand(out, left, needs_parens_left(*op, left));
            out.push(' ');
            out.push_str(op.glyph());
            out.push(' ');
            write_operand(out, right, needs_parens_right(*op, right));
        }
    }
}

fn write_operand(out: &mut String, operand: &Formula, parens: bool) {
    if parens {
        out.push('(');
        write_formula(out, operand);
        out.push(')');
    } else {
        write_formula(out, operand);
    }
}

fn needs_parens_left(op: BinaryOp, left: &Formula) -> bool {
    left.precedence() < op.precedence()
}

fn needs_parens_right(op: BinaryOp, right: &Formula) -> bool {
    right.precedence() <= op.precedence()
}
