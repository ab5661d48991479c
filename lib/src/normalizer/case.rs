use crate::{
    normalizer::TextNormalizer,
    token::{Token, Tokens},
};

/// Lowercases tokens, so they can be looked up in a lowercase lemma index.
#[derive(Clone, Debug, Default)]
pub struct Lowercase;

impl Lowercase {
    pub fn new() -> Self {
        Self
    }
}

impl TextNormalizer for Lowercase {
    fn normalize(&mut self, tokens: &mut Tokens) {
        tokens.iter_mut().for_each(|token| {
            if token.is_ascii() {
                token.make_ascii_lowercase();
            } else {
                *token = Token::from(token.to_lowercase());
            }
        })
    }
}
