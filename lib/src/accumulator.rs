extern crate hashbrown;

use std::collections::BTreeSet;

use hashbrown::HashMap;

use crate::{lemma::Lemma, pos::PosId};

#[derive(Debug)]
struct Entry {
    lemma: String,
    tags: BTreeSet<PosId>,
}

impl Entry {
    #[inline]
    fn new(lemma: &str) -> Self {
        Self {
            lemma: lemma.to_string(),
            tags: BTreeSet::new(),
        }
    }
}

/// Collects lemma candidates of a single resolution call.
///
/// Every lemma is kept once and its tags are merged across insertions.
/// Candidates are enumerated in the order they were first inserted, tags in
/// ascending order, so the output of a call is reproducible.
#[derive(Debug, Default)]
pub struct LemmaAccumulator {
    index: HashMap<String, usize>,
    entries: Vec<Entry>,
}

impl LemmaAccumulator {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Number of distinct lemmata collected.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn is_full(&self, max: usize) -> bool {
        self.len() >= max
    }

    #[inline]
    pub fn contains(&self, lemma: &str) -> bool {
        self.index.contains_key(lemma)
    }

    /// Adds `lemma` with `tags`, merging the tags into an existing entry.
    pub fn insert<I>(&mut self, lemma: &str, tags: I)
    where
        I: IntoIterator<Item = PosId>,
    {
        let entries = &mut self.entries;
        let slot = *self.index.entry_ref(lemma).or_insert_with(|| {
            entries.push(Entry::new(lemma));
            entries.len() - 1
        });

        self.entries[slot].tags.extend(tags);
    }

    /// Tags collected so far for `lemma`.
    pub fn tags(&self, lemma: &str) -> Option<impl Iterator<Item = PosId> + '_> {
        self.index
            .get(lemma)
            .map(|&slot| self.entries[slot].tags.iter().copied())
    }

    pub fn clear(&mut self) {
        self.index.clear();
        self.entries.clear();
    }

    /// Collected candidates, at most `max` of them.
    pub fn lemmata(&self, max: usize) -> Vec<Lemma> {
        self.entries
            .iter()
            .take(max)
            .map(|entry| Lemma {
                value: entry.lemma.clone(),
                pos: entry.tags.iter().copied().collect(),
            })
            .collect()
    }

    pub fn into_lemmata(self, max: usize) -> Vec<Lemma> {
        self.entries
            .into_iter()
            .take(max)
            .map(|entry| Lemma {
                value: entry.lemma,
                pos: entry.tags.into_iter().collect(),
            })
            .collect()
    }
}
