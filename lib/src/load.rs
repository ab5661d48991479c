//! Loaders for lemma data files.
//!
//! The lemma list is one `lemma<TAB>TAG` pair per line, the exception list a
//! JSON object mapping surface words to candidate lemmata:
//!
//! ```text
//! {"mice": [{"lemma": "mouse", "pos": ["NNS"]}]}
//! ```

use std::{
    collections::HashMap,
    io::{BufRead, Read},
};

use tracing::debug;

use crate::{checker::LemmaIndex, error::LoadError, lemma::Lemma, pos::PosId};

/// Reads a lemma index from `lemma<TAB>TAG` lines.
///
/// Blank lines and lines starting with `#` are skipped. A lemma listed on
/// several lines collects all of its tags.
pub fn lemma_index<R: BufRead>(reader: R) -> Result<LemmaIndex, LoadError> {
    let mut index = LemmaIndex::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches(['\r', '\n']);

        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((lemma, tag)) = line.split_once('\t') else {
            return Err(LoadError::Line {
                line: number + 1,
                reason: "expected `lemma<TAB>POS`".to_string(),
            });
        };

        let tag = tag.parse::<PosId>().map_err(|error| LoadError::Line {
            line: number + 1,
            reason: error.to_string(),
        })?;

        index.insert(lemma, [tag]);
    }

    debug!(lemmata = index.len(), "lemma index loaded");
    Ok(index)
}

/// Reads an exception map from JSON.
pub fn exceptions<R: Read>(reader: R) -> Result<HashMap<String, Vec<Lemma>>, LoadError> {
    let exceptions: HashMap<String, Vec<Lemma>> = serde_json::from_reader(reader)?;

    debug!(words = exceptions.len(), "exceptions loaded");
    Ok(exceptions)
}
