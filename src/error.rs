extern crate thiserror;

use std::io;

use lemma::error::LoadError;
use thiserror::Error;

/// Error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Lemma(#[from] lemma::error::Error),

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("Output Error: {0}")]
    Output(io::ErrorKind),
}

impl Error {
    pub fn output(error: io::Error) -> Self {
        Error::Output(error.kind())
    }
}
