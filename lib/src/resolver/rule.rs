use std::sync::Arc;

use regex::Regex;
use tracing::{debug, trace};

use crate::{
    accumulator::LemmaAccumulator,
    checker::LemmaChecker,
    lemma::Lemma,
    pos::{PosId, PosSet},
    resolver::Resolve,
};

/// One way of rebuilding a stem once a rule's affix matched.
///
/// `walking` -> `walk` is `Transform::new(3)`, `taking` -> `take` is
/// `Transform::new(3).augment("e")`.
#[derive(Clone, Debug, Default)]
pub struct Transform {
    /// Number of chars to discard from the end of the word.
    cutoff: usize,

    /// Appended after the cutoff to compensate spelling changes.
    augment: String,

    /// Words shorter than this (in chars) are skipped, `0` disables the gate.
    min_valid_len: usize,

    /// The word must match before anything is cut.
    before: Option<Regex>,

    /// The candidate must match after the cutoff and augment.
    after: Option<Regex>,
}

impl Transform {
    pub fn new(cutoff: usize) -> Self {
        Self {
            cutoff,
            ..Self::default()
        }
    }

    pub fn augment<S: Into<String>>(mut self, augment: S) -> Self {
        self.augment = augment.into();
        self
    }

    pub fn min_len(mut self, min_valid_len: usize) -> Self {
        self.min_valid_len = min_valid_len;
        self
    }

    pub fn before(self, pattern: &str) -> Result<Self, regex::Error> {
        Ok(self.with_before(Regex::new(pattern)?))
    }

    pub fn after(self, pattern: &str) -> Result<Self, regex::Error> {
        Ok(self.with_after(Regex::new(pattern)?))
    }

    pub fn with_before(mut self, regex: Regex) -> Self {
        self.before = Some(regex);
        self
    }

    pub fn with_after(mut self, regex: Regex) -> Self {
        self.after = Some(regex);
        self
    }

    #[inline]
    pub fn cutoff(&self) -> usize {
        self.cutoff
    }

    /// Builds the lemma candidate for `word`, `len` being its length in chars.
    fn apply(&self, word: &str, len: usize) -> Option<String> {
        if len < self.min_valid_len {
            return None;
        }

        let detach = len.checked_sub(self.cutoff).filter(|&detach| detach > 0)?;

        if let Some(before) = &self.before {
            if !before.is_match(word) {
                return None;
            }
        }

        let end = word
            .char_indices()
            .nth(detach)
            .map_or(word.len(), |(index, _)| index);

        let mut candidate = String::with_capacity(end + self.augment.len());
        candidate.push_str(&word[..end]);
        candidate.push_str(&self.augment);

        if let Some(after) = &self.after {
            if !after.is_match(&candidate) {
                return None;
            }
        }

        if candidate.is_empty() {
            return None;
        }

        Some(candidate)
    }
}

/// Suffix rule restoring a lemma from an inflected word.
#[derive(Clone, Debug)]
pub struct Rule {
    affix: String,

    /// Inflected forms the affix stands for.
    pos: PosSet,

    transforms: Vec<Transform>,
}

impl Rule {
    /// # Panics
    /// If `transforms` is empty, such a rule can never match.
    pub fn new<S, P>(affix: S, pos: P, transforms: Vec<Transform>) -> Self
    where
        S: Into<String>,
        P: IntoIterator<Item = PosId>,
    {
        let affix = affix.into();
        assert!(
            !transforms.is_empty(),
            "rule for suffix `{affix}` has no transforms"
        );

        Self {
            affix,
            pos: pos.into_iter().collect(),
            transforms,
        }
    }

    #[inline]
    pub fn affix(&self) -> &str {
        &self.affix
    }

    #[inline]
    pub fn pos(&self) -> PosSet {
        self.pos
    }

    #[inline]
    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    /// The word ends with the affix and has something left before it.
    #[inline]
    fn matches(&self, word: &str) -> bool {
        word.len() > self.affix.len() && word.ends_with(&self.affix)
    }

    /// Rule forms compatible with any part of speech of `lemma`.
    fn forms_of(&self, lemma: &Lemma) -> Vec<PosId> {
        let mut forms = Vec::with_capacity(self.pos.len());

        for general in lemma.pos.iter() {
            for form in self.pos {
                if general.has_form(form) && !forms.contains(&form) {
                    forms.push(form);
                }
            }
        }

        forms
    }
}

/// Resolves lemmata by stripping suffixes according to ordered rules.
///
/// Rules are tried in order. Within a matching rule the transforms are tried
/// in order, and the first candidate that the checker knows under a
/// compatible part of speech is the only one added. Without a checker every
/// word is taken as its own lemma.
#[derive(Debug)]
pub struct SuffixRuleResolver {
    rules: Vec<Rule>,
    checker: Option<Arc<dyn LemmaChecker>>,
}

impl SuffixRuleResolver {
    pub fn new(rules: Vec<Rule>, checker: Arc<dyn LemmaChecker>) -> Self {
        Self {
            rules,
            checker: Some(checker),
        }
    }

    /// A resolver that does not validate candidates.
    pub fn unchecked(rules: Vec<Rule>) -> Self {
        Self {
            rules,
            checker: None,
        }
    }

    #[inline]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

impl Resolve for SuffixRuleResolver {
    fn resolve(&self, word: &str, acc: &mut LemmaAccumulator, max: usize) {
        if self.rules.is_empty() || acc.is_full(max) {
            return;
        }

        let Some(checker) = &self.checker else {
            acc.insert(word, PosSet::new());
            return;
        };

        let len = word.chars().count();

        for rule in self.rules.iter().filter(|rule| rule.matches(word)) {
            for (step, transform) in rule.transforms.iter().enumerate() {
                let Some(candidate) = transform.apply(word, len) else {
                    trace!(word, affix = rule.affix(), step, "transform rejected");
                    continue;
                };

                let lemma = checker.lookup(&candidate);
                if lemma.is_empty() {
                    trace!(word, candidate = candidate.as_str(), step, "unknown candidate");
                    continue;
                }

                let forms = rule.forms_of(&lemma);
                if forms.is_empty() {
                    trace!(
                        word,
                        candidate = candidate.as_str(),
                        step,
                        "no compatible part of speech"
                    );
                    continue;
                }

                debug!(
                    word,
                    lemma = lemma.as_str(),
                    affix = rule.affix(),
                    step,
                    "suffix rule"
                );
                acc.insert(&lemma.value, forms);
                return;
            }
        }
    }
}
