pub mod case;
pub mod lemmatize;

pub use {case::Lowercase, lemmatize::Lemmatize};

use crate::token::Tokens;

pub trait TextNormalizerClone {
    fn clone_box(&self) -> Box<dyn TextNormalizer>;
}

impl<T> TextNormalizerClone for T
where
    T: 'static + TextNormalizer + Clone,
{
    fn clone_box(&self) -> Box<dyn TextNormalizer> {
        Box::new(self.clone())
    }
}

pub trait TextNormalizer: TextNormalizerClone + std::fmt::Debug + Send + Sync {
    fn normalize(&mut self, tokens: &mut Tokens);
}

impl Clone for Box<dyn TextNormalizer> {
    fn clone(&self) -> Box<dyn TextNormalizer> {
        self.clone_box()
    }
}

/// Normalizers applied in insertion order.
#[derive(Clone, Debug, Default)]
pub struct NormalizerPipeline(Vec<Box<dyn TextNormalizer>>);

impl NormalizerPipeline {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, normalizer: Box<dyn TextNormalizer>) -> &mut Self {
        self.0.push(normalizer);
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

    pub fn run(&mut self, tokens: &mut Tokens) {
        self.0.iter_mut().for_each(|normalizer| {
            normalizer.normalize(tokens);
        })
    }
}
