// mailgen/src/error.rs
use thiserror::Error;

/// Error parsing a character-class selection from its string form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseClassesError {
    /// The selection named a class other than upper, lower, digits, symbols.
    #[error("unknown character class: {0}")]
    UnknownClass(String),
}
