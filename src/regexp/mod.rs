//! Regexp parsing and the three evaluation modes over one AST.
//!
//! This module implements the pattern core: a standalone parser producing
//! the opcode tree in [`ast`], plus three independent interpreters over it:
//! - [`Sampler`]: one random matching string per walk
//! - [`Count`] via `count_sequence`: exact distinct-string cardinality
//! - `enumerate_strings`: lazy lexicographic enumeration
//!
//! The interpreters share nothing but the alphabet tables; mutable state is
//! confined to the sampler's per-emission group table and the random engine.

pub(crate) mod ast;
mod counter;
mod enumerate;
mod parser;
mod sampler;

pub use counter::Count;

pub(crate) use counter::count_sequence;
pub(crate) use enumerate::strings as enumerate_strings;
pub(crate) use parser::parse_pattern;
pub(crate) use sampler::Sampler;

use crate::alphabet::Alphabet;
use crate::errors::PatternError;
use ast::Ast;

/// Checks that every class in the tree resolves to a non-empty candidate
/// set under `tables`, so emission can never hit an empty choice.
///
/// # Errors
///
/// Returns a [`PatternError`] for a class the alphabet leaves empty, e.g.
/// `[^\w\W]`.
pub(crate) fn validate(ast: &[Ast], tables: &Alphabet) -> Result<(), PatternError> {
    for node in ast {
        match node {
            Ast::In { items, negated } => {
                if tables.class_set(items, *negated).is_empty() {
                    return Err(PatternError::new(
                        "character class matches no characters under the current alphabet",
                        0,
                    ));
                }
            }
            Ast::Branch(alternatives) => {
                for alternative in alternatives {
                    validate(alternative, tables)?;
                }
            }
            Ast::Group { inner, .. }
            | Ast::Repeat { inner, .. }
            | Ast::Assert { inner, .. } => validate(inner, tables)?,
            _ => {}
        }
    }
    Ok(())
}
