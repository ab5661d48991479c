extern crate tokio;

mod cli;
mod error;
mod read;

use std::{
    collections::HashMap,
    io::{BufRead, Write},
    sync::Arc,
};

use clap::Parser;
use lemma::{
    english, load,
    normalizer::{Lowercase, NormalizerPipeline},
    token::{Token, Tokens},
    Lemmatizer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{cli::Cli, error::Error, read::FileReader};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    let mut reader = FileReader::new();

    info!("Loading lemmata from {:?}", cli.lemmas);
    let buffer = reader.read_to_string(&cli.lemmas).await?;
    let index = load::lemma_index(buffer.as_bytes())?;

    let exceptions = match &cli.exceptions {
        Some(path) => {
            info!("Loading exceptions from {:?}", path);
            let buffer = reader.read_to_string(path).await?;
            load::exceptions(buffer.as_bytes())?
        }
        None => HashMap::new(),
    };

    info!(
        "Loaded {} lemma(ta), {} exception(s)",
        index.len(),
        exceptions.len()
    );

    let lemmatizer = english::lemmatizer(Arc::new(index), exceptions)
        .map_err(lemma::error::Error::from)?;

    let mut tokens = if cli.words.is_empty() {
        std::io::stdin()
            .lock()
            .lines()
            .map(|line| line.map(|line| Token::from(line.trim())))
            .collect::<Result<Tokens, _>>()
            .map_err(|error| Error::Load(error.into()))?
    } else {
        cli.words.iter().map(|word| Token::from(word.as_str())).collect()
    };

    let mut pipeline = NormalizerPipeline::new();
    pipeline.insert(Box::new(Lowercase::new()));
    pipeline.run(&mut tokens);

    write_candidates(&lemmatizer, &tokens, cli.max.get())
}

/// Prints `word<TAB>lemma[POS]...` for every token, `-` when nothing is found.
fn write_candidates(lemmatizer: &Lemmatizer, tokens: &Tokens, max: usize) -> Result<(), Error> {
    let mut out = std::io::stdout().lock();

    for token in tokens.iter().filter(|token| !token.is_empty()) {
        let candidates = lemmatizer.lemma_candidates(token.as_str(), max);

        write!(out, "{}", token.as_str()).map_err(Error::output)?;

        if candidates.is_empty() {
            write!(out, "\t-").map_err(Error::output)?;
        }

        for lemma in candidates {
            write!(out, "\t{lemma}").map_err(Error::output)?;
        }

        writeln!(out).map_err(Error::output)?;
    }

    out.flush().map_err(Error::output)
}
