pub mod accumulator;
pub mod checker;
pub mod english;
pub mod error;
pub mod lemma;
pub mod lemmatizer;
pub mod load;
pub mod normalizer;
pub mod pos;
pub mod resolver;
pub mod token;

pub use {
    checker::{LemmaChecker, LemmaIndex},
    lemma::Lemma,
    lemmatizer::Lemmatizer,
    pos::PosId,
};
