//! Clause extraction and dictionary building
//!
//!     Clauses are found by splitting the normalized sentence on connective phrases, tried in
//!     this order against every fragment produced so far:
//!
//!         " se e somente se ", " se ", " então ", " somente se ", " e ", " ou "
//!
//!     Each fragment is padded with a space on both sides before splitting, so a connective at
//!     the start of a fragment ("se chove ...") splits too. Fragments are then trimmed, a
//!     leading "não " / "não é verdade que " is stripped, and empty or repeated fragments are
//!     dropped, keeping first occurrences.

use super::normalize::{normalize, strip};
use crate::logic::dictionary::{label_for_index, Dictionary};
use crate::logic::targets;
use once_cell::sync::Lazy;
use regex::Regex;

pub const CONNECTIVES: [&str; 6] = [
    " se e somente se ",
    " se ",
    " então ",
    " somente se ",
    " e ",
    " ou ",
];

static NEGATION_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^não (é verdade que )?").unwrap());

/// Extract the atomic clauses of a sentence, in order of first appearance
pub fn extract_clauses(text: &str) -> Vec<String> {
    let mut parts = vec![normalize(text)];
    for connective in CONNECTIVES {
        parts = parts
            .iter()
            .flat_map(|part| {
                format!(" {} ", part)
                    .split(connective)
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();
    }

    let mut clauses: Vec<String> = Vec::new();
    for part in parts {
        let clause = NEGATION_PREFIX.replace(&strip(&part), "").trim().to_string();
        if !clause.is_empty() && !clauses.contains(&clause) {
            clauses.push(clause);
        }
    }

    log::trace!(target: targets::NL, "Extracted clauses {:?} from {:?}", clauses, text);
    clauses
}

/// Build a fresh dictionary labelling each extracted clause `A`, `B`, ... then `P27`, ...
pub fn build_dictionary_from_text(text: &str) -> Dictionary {
    extract_clauses(text)
        .into_iter()
        .enumerate()
        .map(|(index, clause)| (label_for_index(index), clause))
        .collect()
}
