use std::sync::Arc;

use crate::{
    lemmatizer::Lemmatizer,
    normalizer::TextNormalizer,
    token::{Token, Tokens},
};

/// Replaces every token by its best lemma.
///
/// Tokens without a lemma are left as they are.
#[derive(Clone, Debug)]
pub struct Lemmatize {
    lemmatizer: Arc<Lemmatizer>,
}

impl Lemmatize {
    pub fn new(lemmatizer: Arc<Lemmatizer>) -> Self {
        Self { lemmatizer }
    }
}

impl TextNormalizer for Lemmatize {
    fn normalize(&mut self, tokens: &mut Tokens) {
        tokens.iter_mut().for_each(|token| {
            let lemma = self.lemmatizer.lemmatize(token.as_str());

            if !lemma.is_empty() && lemma.value != token.as_str() {
                *token = Token::from(lemma.value);
            }
        });
    }
}
