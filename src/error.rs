use std::io;
use thiserror::Error;

/// Returned by a lookup when no tree path or fallback edge applies to the address.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("not found")]
pub struct NotFound;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read table: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: invalid IPv4 address '{value}'")]
    InvalidAddress { line: usize, value: String },

    #[error("line {line}: missing label")]
    MissingLabel { line: usize },
}
