//! Log targets used by the library.
//!
//! Filter with e.g. `RUST_LOG=logica::nl=trace`.

pub const LEXING: &str = "logica::lexing";
pub const PARSING: &str = "logica::parsing";
pub const NL: &str = "logica::nl";
