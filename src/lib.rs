//! # logica
//!
//! Converts between symbolic propositional logic (`A → B`, `¬(A ∧ B)`) and Portuguese
//! sentences.
//!
//! ```text
//! parse_formula("p -> q")                 => IMP(P, Q)
//! formula_to_string(&IMP(P, Q))           => "P → Q"
//! realize_natural_language(&f, &dict)     => "Se está chovendo, então levarei guarda-chuva"
//! build_dictionary_from_text(sentence)    => {A: "está chovendo", B: "levarei guarda-chuva"}
//! translate_text_to_formula(text, &dict)  => "( A ) → ( B )"
//! ```
//!
//! See [logic] for the pipeline and [config] for the layered configuration used by the
//! `logica` binary.

pub mod config;
pub mod logic;

pub use logic::{
    build_dictionary_from_text, formula_to_string, parse_formula, realize_natural_language,
    translate_text_to_formula, Dictionary, Formula, FormulaError,
};
