extern crate hashbrown;

use std::fmt::Debug;

use hashbrown::HashMap;

use crate::{lemma::Lemma, pos::PosId};

/// Answers whether a string is a known lemma, and for which parts of speech.
pub trait LemmaChecker: Debug + Send + Sync {
    /// Returns the empty [`Lemma`] when `text` is not a known lemma.
    fn lookup(&self, text: &str) -> Lemma;
}

/// In-memory lemma index, the default [`LemmaChecker`].
///
/// Tags of a lemma are kept sorted and free of duplicates.
#[derive(Clone, Debug, Default)]
pub struct LemmaIndex {
    inner: HashMap<String, Vec<PosId>>,
}

impl LemmaIndex {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashMap::with_capacity(capacity),
        }
    }

    /// Registers `lemma`, merging `tags` into the ones already known.
    pub fn insert<I>(&mut self, lemma: &str, tags: I)
    where
        I: IntoIterator<Item = PosId>,
    {
        let known = self.inner.entry_ref(lemma).or_default();

        known.extend(tags);
        known.sort_unstable();
        known.dedup();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn contains(&self, lemma: &str) -> bool {
        self.inner.contains_key(lemma)
    }
}

impl LemmaChecker for LemmaIndex {
    fn lookup(&self, text: &str) -> Lemma {
        match self.inner.get_key_value(text) {
            Some((lemma, tags)) => Lemma::new(lemma.as_str(), tags.iter().copied()),
            None => Lemma::default(),
        }
    }
}

impl<S, T> FromIterator<(S, T)> for LemmaIndex
where
    S: AsRef<str>,
    T: IntoIterator<Item = PosId>,
{
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        let mut index = LemmaIndex::new();

        for (lemma, tags) in iter {
            index.insert(lemma.as_ref(), tags);
        }

        index
    }
}
