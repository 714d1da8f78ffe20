//! Natural language → symbolic formula
//!
//!     1. Normalize the sentence (see [normalize](super::normalize)).
//!     2. Replace every dictionary phrase found as whole words with its label, longest phrase
//!        first so a short phrase never eats part of a longer one.
//!     3. Apply [`RULES`] in order. The order is part of the contract: ambiguous sentences come
//!        out differently if it changes.
//!
//!     The result is best effort. Unmatched text stays in the output as-is, and only one
//!     "se ... então" and one "ou X ou Y" per sentence are recognized, so the output does not
//!     always parse.

use super::normalize::{normalize, strip};
use crate::logic::dictionary::Dictionary;
use crate::logic::targets;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use std::cmp::Reverse;

/// One textual rewrite of the translation pass
pub struct Rule {
    pub name: &'static str,
    pub pattern: Regex,
    pub replacement: &'static str,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Rule {
            name,
            pattern: Regex::new(pattern).unwrap(),
            replacement,
        }
    }

    pub fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, self.replacement).into_owned()
    }
}

/// Rewrites applied after dictionary substitution, in priority order
pub static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new("negation", r"\bnão é verdade que\s+(\w+)\b", " ¬${1} "),
        Rule::new("biconditional", r"\bse e somente se\b", " ↔ "),
        Rule::new(
            "conditional",
            r"(?s)\bse\s+(.+?)\s*então\s+(.+)$",
            " ( ${1} ) → ( ${2} ) ",
        ),
        Rule::new("exclusive-or", r"\bou\s+(\w+)\s+ou\s+(\w+)\b", " (${1}) ⊕ (${2}) "),
        Rule::new("conjunction", r"\se\b", " ∧ "),
        Rule::new("disjunction", r"\bou\b", " ∨ "),
    ]
});

/// Replace dictionary phrases in normalized text with their labels
pub fn substitute_phrases(normalized: &str, dictionary: &Dictionary) -> String {
    let mut entries: Vec<(&str, &str)> = dictionary
        .iter()
        .filter(|(_, phrase)| !phrase.trim().is_empty())
        .collect();
    entries.sort_by_key(|(_, phrase)| Reverse(phrase.chars().count()));

    let mut s = normalized.to_string();
    for (label, phrase) in entries {
        let pattern = format!(r"\b{}\b", regex::escape(&phrase.to_lowercase()));
        let regex = match Regex::new(&pattern) {
            Ok(regex) => regex,
            Err(err) => {
                log::debug!(target: targets::NL, "Skipping phrase {:?}: {}", phrase, err);
                continue;
            }
        };
        let replaced = regex.replace_all(&s, NoExpand(&format!(" {} ", label)));
        if replaced != s {
            log::trace!(target: targets::NL, "Substituted {:?} with {}", phrase, label);
            s = replaced.into_owned();
        }
    }
    s
}

/// Translate a sentence to symbolic text using `dictionary`
pub fn translate_text_to_formula(text: &str, dictionary: &Dictionary) -> String {
    let mut s = substitute_phrases(&normalize(text), dictionary);
    for rule in RULES.iter() {
        let rewritten = rule.apply(&s);
        if rewritten != s {
            log::trace!(
                target: targets::NL,
                "Rule {} rewrote {:?} to {:?}",
                rule.name,
                s,
                rewritten
            );
            s = rewritten;
        }
    }
    strip(&s)
}
