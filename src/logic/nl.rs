//! Natural-language pipeline
//!
//!     text ──normalize──▶ extract_clauses ──▶ build_dictionary_from_text ──▶ Dictionary
//!     text + Dictionary ──▶ translate_text_to_formula ──▶ symbolic text (best effort)
//!
//! None of these steps fail. Text the heuristics cannot place is carried through literally.

pub mod extraction;
pub mod normalize;
pub mod translation;

pub use extraction::{build_dictionary_from_text, extract_clauses, CONNECTIVES};
pub use normalize::normalize;
pub use translation::{substitute_phrases, translate_text_to_formula, Rule, RULES};
