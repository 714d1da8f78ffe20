//! Treeviz formatter for formulas
//!
//! One line per node, nesting shown with box-drawing connectors and two columns per level:
//!
//!     <prefix><connector> <icon> <label>
//!
//! Icons: atoms `◦`, negation `¬`, binary nodes their own glyph. Atom labels carry the
//! dictionary phrase (truncated to 30 characters) when a dictionary is supplied.
//!
//!     └─ → IMP
//!       ├─ ◦ A: está chovendo
//!       └─ ¬ NOT
//!         └─ ◦ B

use crate::logic::ast::Formula;
use crate::logic::dictionary::Dictionary;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(formula: &Formula, dictionary: Option<&Dictionary>) -> String {
    let mut result = String::new();
    append_node(&mut result, formula, dictionary, "", true);
    result
}

fn icon(formula: &Formula) -> &'static str {
    match formula {
        Formula::Atom { .. } => "◦",
        Formula::Not { .. } => "¬",
        Formula::Binary { op, .. } => op.glyph(),
    }
}

fn display_label(formula: &Formula, dictionary: Option<&Dictionary>) -> String {
    match formula {
        Formula::Atom { name } => match dictionary.and_then(|d| d.phrase(name)) {
            Some(phrase) => format!("{}: {}", name, truncate(phrase, 30)),
            None => name.clone(),
        },
        other => other.node_type().to_string(),
    }
}

fn append_node(
    result: &mut String,
    formula: &Formula,
    dictionary: Option<&Dictionary>,
    prefix: &str,
    is_last: bool,
) {
    let connector = if is_last { "└─" } else { "├─" };

    result.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        icon(formula),
        display_label(formula, dictionary)
    ));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });

    match formula {
        Formula::Atom { .. } => {}
        Formula::Not { operand } => append_node(result, operand, dictionary, &new_prefix, true),
        Formula::Binary { left, right, .. } => {
            append_node(result, left, dictionary, &new_prefix, false);
            append_node(result, right, dictionary, &new_prefix, true);
        }
    }
}
