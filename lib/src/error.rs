extern crate thiserror;

use std::io;

use thiserror::Error;

/// Error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("Pattern Error: {0}")]
    Pattern(#[from] regex::Error),
}

/// Part of speech parsing error.
#[derive(Debug, Error, PartialEq)]
pub enum PosError {
    #[error("Unknown POS tag: {0}")]
    UnknownTag(String),

    #[error("POS id must be non-zero")]
    Zero,
}

/// Lemma data loading errors.
#[derive(Debug, Error, PartialEq)]
pub enum LoadError {
    #[error("File I/O Error: {0}")]
    File(io::ErrorKind),

    #[error("Reader I/O Error: {0}")]
    Reader(io::ErrorKind),

    #[error("Line {line}: {reason}")]
    Line { line: usize, reason: String },

    #[error("Serialization Error: {0}")]
    Serialization(String),
}

impl From<io::Error> for LoadError {
    fn from(error: io::Error) -> Self {
        LoadError::Reader(error.kind())
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(error: serde_json::Error) -> Self {
        LoadError::Serialization(error.to_string())
    }
}
