use std::sync::Arc;

use tracing::trace;

use crate::{
    accumulator::LemmaAccumulator,
    checker::LemmaChecker,
    lemma::Lemma,
    resolver::{Resolve, ResolverChain},
};

/// Number of candidates returned when zero is asked for.
pub const DEFAULT_MAX: usize = 5;

/// Resolves the lemmata of inflected words.
///
/// A word that is already a known lemma always comes first. Otherwise the
/// resolvers are run in the order they were added until enough candidates are
/// collected. All state of a call lives on the stack, so a `Lemmatizer` can be
/// shared between threads.
#[derive(Debug)]
pub struct Lemmatizer {
    checker: Arc<dyn LemmaChecker>,
    resolvers: ResolverChain,
}

impl Lemmatizer {
    pub fn new(checker: Arc<dyn LemmaChecker>) -> Self {
        Self::with_resolvers(checker, ResolverChain::new())
    }

    pub fn with_resolvers(checker: Arc<dyn LemmaChecker>, resolvers: ResolverChain) -> Self {
        Self { checker, resolvers }
    }

    /// Appends a resolver to the chain.
    pub fn insert<R: Resolve + 'static>(&mut self, resolver: R) -> &mut Self {
        self.resolvers.insert(Box::new(resolver));
        self
    }

    #[inline]
    pub fn checker(&self) -> &Arc<dyn LemmaChecker> {
        &self.checker
    }

    #[inline]
    pub fn resolvers(&self) -> &ResolverChain {
        &self.resolvers
    }

    /// The best lemma for `word`, or the empty [`Lemma`].
    pub fn lemmatize(&self, word: &str) -> Lemma {
        self.lemma_candidates(word, 1)
            .into_iter()
            .next()
            .unwrap_or_default()
    }

    /// Up to `max` lemma candidates for `word`, [`DEFAULT_MAX`] if `max` is zero.
    ///
    /// Candidates are ordered by the resolver that found them first, following
    /// the resolver chain order.
    pub fn lemma_candidates(&self, word: &str, max: usize) -> Vec<Lemma> {
        let max = if max == 0 { DEFAULT_MAX } else { max };

        if word.is_empty() {
            return Vec::new();
        }

        let mut acc = LemmaAccumulator::with_capacity(max.min(DEFAULT_MAX));

        let lemma = self.checker.lookup(word);
        if !lemma.is_empty() {
            trace!(word, "known lemma");
            acc.insert(&lemma.value, lemma.pos);
        }

        self.resolvers.run(word, &mut acc, max);
        acc.into_lemmata(max)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{
        accumulator::LemmaAccumulator,
        checker::LemmaIndex,
        lemma::Lemma,
        lemmatizer::Lemmatizer,
        pos::PosId,
        resolver::{ExceptionResolver, Resolve, Rule, SuffixRuleResolver, Transform},
    };

    /// Adds a lemma that no other resolver would produce.
    #[derive(Debug)]
    struct Marker;

    impl Resolve for Marker {
        fn resolve(&self, _word: &str, acc: &mut LemmaAccumulator, _max: usize) {
            acc.insert("marker", [PosId::NUM]);
        }
    }

    fn index() -> Arc<LemmaIndex> {
        Arc::new(LemmaIndex::from_iter([
            ("some", vec![]),
            ("another", vec![]),
            ("pass", vec![PosId::VERB, PosId::NOUN]),
            ("leave", vec![PosId::VERB, PosId::NOUN]),
        ]))
    }

    fn exceptions() -> ExceptionResolver {
        ExceptionResolver::new([
            ("mice".to_string(), vec![Lemma::new("mouse", [PosId::NNS])]),
            (
                "leaves".to_string(),
                vec![
                    Lemma::new("leaf", [PosId::NNS]),
                    Lemma::new("leave", [PosId::NNS, PosId::VBZ]),
                ],
            ),
        ])
    }

    #[test]
    fn test_lemmatizer_empty() {
        let lemmatizer = Lemmatizer::new(Arc::new(LemmaIndex::new()));

        assert_eq!(lemmatizer.lemmatize(""), Lemma::default());
        assert_eq!(lemmatizer.lemmatize("sample"), Lemma::default());
        assert!(lemmatizer.lemma_candidates("sample", 10).is_empty());
    }

    #[test]
    fn test_lemmatizer_empty_word_skips_resolvers() {
        let mut lemmatizer = Lemmatizer::new(index());
        lemmatizer.insert(Marker);

        for max in [0, 1, 5, 10] {
            assert!(lemmatizer.lemma_candidates("", max).is_empty());
        }
    }

    #[test]
    fn test_lemmatizer_known_lemma() {
        let lemmatizer = Lemmatizer::new(index());

        assert_eq!(lemmatizer.lemmatize("some"), Lemma::untagged("some"));
        assert_eq!(
            lemmatizer.lemma_candidates("another", 10),
            vec![Lemma::untagged("another")]
        );
        assert_eq!(
            lemmatizer.lemma_candidates("pass", 10),
            vec![Lemma::new("pass", [PosId::NOUN, PosId::VERB])]
        );
        assert_eq!(lemmatizer.lemmatize("not existing text"), Lemma::default());
    }

    #[test]
    fn test_lemmatizer_known_lemma_first() {
        let mut lemmatizer = Lemmatizer::new(index());
        lemmatizer.insert(Marker);

        let candidates = lemmatizer.lemma_candidates("pass", 10);
        assert_eq!(candidates[0].value, "pass");
        assert_eq!(candidates[1].value, "marker");

        assert_eq!(lemmatizer.lemma_candidates("pass", 1).len(), 1);
        assert_eq!(lemmatizer.lemmatize("pass").value, "pass");
    }

    #[test]
    fn test_lemmatizer_exceptions() {
        let mut lemmatizer = Lemmatizer::new(index());
        lemmatizer.insert(exceptions());

        assert_eq!(
            lemmatizer.lemma_candidates("mice", 10),
            vec![Lemma::new("mouse", [PosId::NNS])]
        );
        assert_eq!(
            lemmatizer.lemma_candidates("leaves", 10),
            vec![
                Lemma::new("leaf", [PosId::NNS]),
                Lemma::new("leave", [PosId::NNS, PosId::VBZ]),
            ]
        );
        assert_eq!(
            lemmatizer.lemmatize("leaves"),
            Lemma::new("leaf", [PosId::NNS])
        );
    }

    #[test]
    fn test_lemmatizer_merges_tags_across_resolvers() {
        let rules = vec![Rule::new(
            "s",
            [PosId::NNS, PosId::VBZ],
            vec![Transform::new(1)],
        )];

        let mut lemmatizer = Lemmatizer::new(index());
        lemmatizer
            .insert(exceptions())
            .insert(SuffixRuleResolver::new(rules, index()));

        // `leave` comes from the exceptions, the suffix rule confirms it again.
        let candidates = lemmatizer.lemma_candidates("leaves", 10);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[1], Lemma::new("leave", [PosId::NNS, PosId::VBZ]));
    }

    #[test]
    fn test_lemmatizer_stops_when_full() {
        let mut lemmatizer = Lemmatizer::new(index());
        lemmatizer.insert(exceptions()).insert(Marker);

        let candidates = lemmatizer.lemma_candidates("leaves", 2);
        assert!(candidates.iter().all(|lemma| lemma.value != "marker"));

        let candidates = lemmatizer.lemma_candidates("leaves", 3);
        assert_eq!(candidates.last().unwrap().value, "marker");
    }

    #[test]
    fn test_lemmatizer_default_max() {
        let mut lemmatizer = Lemmatizer::new(index());
        lemmatizer.insert(exceptions()).insert(Marker);

        for word in ["leaves", "mice", "pass", "unknown"] {
            assert_eq!(
                lemmatizer.lemma_candidates(word, 0),
                lemmatizer.lemma_candidates(word, 5)
            );
        }
    }

    #[test]
    fn test_lemmatizer_unbounded_max() {
        let mut lemmatizer = Lemmatizer::new(index());
        lemmatizer.insert(exceptions()).insert(Marker);

        assert_eq!(
            lemmatizer.lemma_candidates("pass", usize::MAX),
            vec![
                Lemma::new("pass", [PosId::NOUN, PosId::VERB]),
                Lemma::new("marker", [PosId::NUM]),
            ]
        );
        assert_eq!(lemmatizer.lemma_candidates("leaves", usize::MAX).len(), 3);
    }

    #[test]
    fn test_lemmatizer_idempotent() {
        let mut lemmatizer = Lemmatizer::new(index());
        lemmatizer.insert(exceptions()).insert(Marker);

        let first = lemmatizer.lemma_candidates("leaves", 10);
        let second = lemmatizer.lemma_candidates("leaves", 10);

        assert_eq!(first, second);
    }
}
