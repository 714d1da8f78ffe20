//! Sentence normalization
//!
//! Lower-cases, drops punctuation, and rewrites informal spellings to the canonical connective
//! words the rest of the pipeline looks for:
//!
//!     mas  → e
//!     ssi  → se e somente se
//!     nao  → não
//!
//! Whitespace is collapsed and trimmed last, so `normalize` is idempotent.

use once_cell::sync::Lazy;
use regex::Regex;

static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.,;:!?]+").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static SPELLINGS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"\bmas\b").unwrap(), " e "),
        (Regex::new(r"\bssi\b").unwrap(), " se e somente se "),
        (Regex::new(r"\bnao\b").unwrap(), " não "),
    ]
});

/// Normalize free text for clause extraction and translation
pub fn normalize(text: &str) -> String {
    let padded = format!(" {} ", text.to_lowercase());
    let mut s = PUNCTUATION.replace_all(&padded, " ").into_owned();
    for (pattern, replacement) in SPELLINGS.iter() {
        s = pattern.replace_all(&s, *replacement).into_owned();
    }
    WHITESPACE.replace_all(&s, " ").trim().to_string()
}

/// Collapse whitespace runs to single spaces and trim
pub fn strip(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}
