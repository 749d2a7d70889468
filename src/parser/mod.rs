//! Parser for vertex record text (`<type> <x> <y>` per line)

pub mod ast;
mod grammar;
pub mod lexer;

pub use ast::*;
pub use grammar::parse;

use crate::normalizer::Subpath;

/// Parse record text straight into a subpath
pub fn parse_subpath(input: &str) -> Result<Subpath, Vec<crate::ParseError>> {
    let records = parse(input)?;
    records_to_subpath(&records)
}
