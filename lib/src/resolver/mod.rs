pub mod exception;
pub mod rule;

pub use exception::ExceptionResolver;
pub use rule::{Rule, SuffixRuleResolver, Transform};

use std::fmt::Debug;

use crate::accumulator::LemmaAccumulator;

/// A lemma resolution strategy.
pub trait Resolve: Debug + Send + Sync {
    /// Proposes lemma candidates for `word` into `acc`.
    ///
    /// Implementations stop adding candidates once `acc` holds `max` lemmata.
    fn resolve(&self, word: &str, acc: &mut LemmaAccumulator, max: usize);
}

/// Resolvers applied in insertion order.
#[derive(Debug, Default)]
pub struct ResolverChain(Vec<Box<dyn Resolve>>);

impl ResolverChain {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, resolver: Box<dyn Resolve>) -> &mut Self {
        self.0.push(resolver);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Runs the resolvers until `acc` is full.
    pub fn run(&self, word: &str, acc: &mut LemmaAccumulator, max: usize) {
        for resolver in self.0.iter() {
            if acc.is_full(max) {
                return;
            }

            resolver.resolve(word, acc, max);
        }
    }
}
