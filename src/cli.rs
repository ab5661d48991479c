extern crate clap;

use std::{num::NonZeroUsize, path::PathBuf};

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "lemma-bin", about = "Rule based English lemmatizer")]
pub struct Cli {
    /// Lemma list, one `lemma<TAB>POS` pair per line
    #[arg(long, short = 'l')]
    pub lemmas: PathBuf,

    /// Irregular forms, a JSON object of word -> [{lemma, pos}]
    #[arg(long, short = 'e')]
    pub exceptions: Option<PathBuf>,

    /// Candidates printed per word
    #[arg(long, short = 'm', default_value = "1")]
    pub max: NonZeroUsize,

    /// Log level, overridden by `RUST_LOG`
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Words to lemmatize, read from stdin when empty
    pub words: Vec<String>,
}
