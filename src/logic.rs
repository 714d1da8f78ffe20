//! Symbolic propositional logic and its Portuguese reading
//!
//! Symbolic side: [lexing] → [parsing] → [ast::Formula] → [formats].
//! Natural-language side: [nl], driven by a caller-owned [dictionary::Dictionary].
//!
//! The functions re-exported here are the whole public contract; everything is synchronous and
//! pure, and a dictionary is only ever borrowed for the length of one call.

pub mod ast;
pub mod dictionary;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod nl;
pub mod parsing;
pub mod targets;
pub mod token;

pub use ast::{BinaryOp, Formula};
pub use dictionary::Dictionary;
pub use error::FormulaError;
pub use formats::{formula_to_string, realize_natural_language, to_treeviz_str, FormulaFormat};
pub use lexing::{normalize_aliases, tokenize};
pub use nl::{build_dictionary_from_text, extract_clauses, normalize, translate_text_to_formula};
pub use parsing::parse_formula;
pub use token::Token;
