extern crate hashbrown;

use hashbrown::HashMap;
use tracing::debug;

use crate::{accumulator::LemmaAccumulator, lemma::Lemma, resolver::Resolve};

/// Resolves irregular forms (`mice` -> `mouse`) by direct lookup.
#[derive(Clone, Debug, Default)]
pub struct ExceptionResolver {
    exceptions: HashMap<String, Vec<Lemma>>,
}

impl ExceptionResolver {
    pub fn new<M>(exceptions: M) -> Self
    where
        M: IntoIterator<Item = (String, Vec<Lemma>)>,
    {
        Self {
            exceptions: exceptions.into_iter().collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.exceptions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exceptions.is_empty()
    }
}

impl Resolve for ExceptionResolver {
    fn resolve(&self, word: &str, acc: &mut LemmaAccumulator, max: usize) {
        let Some(lemmata) = self.exceptions.get(word) else {
            return;
        };

        for lemma in lemmata.iter().filter(|lemma| !lemma.is_empty()) {
            if acc.is_full(max) {
                return;
            }

            debug!(word, lemma = %lemma, "exception");
            acc.insert(&lemma.value, lemma.pos.iter().copied());
        }
    }
}
