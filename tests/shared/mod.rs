use std::sync::Arc;

use lemma::{LemmaIndex, PosId};

pub(crate) fn test_lemma_index() -> Arc<LemmaIndex> {
    const NOUN: PosId = PosId::NOUN;
    const ADJ: PosId = PosId::ADJ;
    const VERB: PosId = PosId::VERB;
    const ADV: PosId = PosId::ADV;

    Arc::new(LemmaIndex::from_iter([
        ("walk", vec![VERB, NOUN]),
        ("call", vec![VERB, NOUN]),
        ("close", vec![ADJ, NOUN, VERB, ADV]),
        ("free", vec![NOUN, ADV, VERB, ADJ]),
        ("play", vec![NOUN, VERB]),
        ("work", vec![VERB, NOUN]),
        ("overdress", vec![VERB]),
        ("stare", vec![VERB, NOUN]),
        ("star", vec![VERB, ADJ, NOUN]),
        ("easy", vec![ADJ, ADV]),
        ("fast", vec![NOUN, ADJ, ADV, VERB]),
        ("hot", vec![ADJ]),
        ("fine", vec![ADV, ADJ, NOUN, VERB]),
        ("wise", vec![NOUN, ADJ]),
        ("wolf", vec![NOUN, VERB]),
        ("jockey", vec![VERB, NOUN]),
        ("class", vec![NOUN, VERB]),
        ("classify", vec![VERB]),
        ("potato", vec![NOUN]),
        ("woman", vec![NOUN]),
    ]))
}

/// Inflected word -> expected lemma.
pub(crate) const TEST_SET: [(&str, &str); 29] = [
    ("walked", "walk"),
    ("called", "call"),
    ("calling", "call"),
    ("closed", "close"),
    ("closing", "close"),
    ("freed", "free"),
    ("freeing", "free"),
    ("played", "play"),
    ("playing", "play"),
    ("working", "work"),
    ("overdressed", "overdress"),
    ("staring", "stare"),
    ("starring", "star"),
    ("stared", "stare"),
    ("starred", "star"),
    ("calls", "call"),
    ("easier", "easy"),
    ("faster", "fast"),
    ("easiest", "easy"),
    ("fastest", "fast"),
    ("hotter", "hot"),
    ("hottest", "hot"),
    ("finest", "fine"),
    ("finer", "fine"),
    ("classifies", "classify"),
    ("classes", "class"),
    ("potatoes", "potato"),
    ("wolves", "wolf"),
    ("women", "woman"),
];
