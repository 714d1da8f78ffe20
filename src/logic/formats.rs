//! Output formats for formulas
//!
//! - [symbolic]: canonical unicode notation, round-trips through the parser
//! - [natural]: Portuguese sentence built from a [`Dictionary`](super::dictionary::Dictionary)
//! - [treeviz]: one line per node, for inspecting the parse
//!
//! The JSON form is plain serde over [`Formula`](super::ast::Formula).

pub mod natural;
pub mod symbolic;
pub mod treeviz;

pub use natural::realize_natural_language;
pub use symbolic::formula_to_string;
pub use treeviz::to_treeviz_str;

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Formula output formats selectable from the command line and configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormulaFormat {
    Symbolic,
    Natural,
    Treeviz,
    Json,
}

impl FormulaFormat {
    pub const NAMES: [&'static str; 4] = ["symbolic", "natural", "treeviz", "json"];
}

impl FromStr for FormulaFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "symbolic" => Ok(FormulaFormat::Symbolic),
            "natural" => Ok(FormulaFormat::Natural),
            "treeviz" => Ok(FormulaFormat::Treeviz),
            "json" => Ok(FormulaFormat::Json),
            other => Err(format!(
                "Unknown format '{}'. Available formats: {}",
                other,
                Self::NAMES.join(", ")
            )),
        }
    }
}

impl fmt::Display for FormulaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormulaFormat::Symbolic => "symbolic",
            FormulaFormat::Natural => "natural",
            FormulaFormat::Treeviz => "treeviz",
            FormulaFormat::Json => "json",
        };
        f.write_str(name)
    }
}
