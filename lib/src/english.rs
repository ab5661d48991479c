//! English inflection rules.
//!
//! `y` is neither in [`CONSONANT`] nor in [`VOWEL`], since it can spell
//! either.

use std::sync::Arc;

use crate::{
    checker::LemmaChecker,
    lemma::Lemma,
    lemmatizer::Lemmatizer,
    pos::PosId,
    resolver::{ExceptionResolver, Rule, SuffixRuleResolver, Transform},
};

pub const CONSONANT: &str = "[b-df-hj-np-tvwxz]";
pub const VOWEL: &str = "[aeiou]";

/// Doubled consonant, except `w` and `x` which never double.
///
/// The regex engine has no backreferences, so the pairs are spelled out.
pub const DOUBLE_CONSONANT: &str = "(bb|cc|dd|ff|gg|hh|jj|kk|ll|mm|nn|pp|rr|ss|tt|vv|zz)";

/// Ordered suffix rules for regular English inflections.
pub fn morph_rules() -> Result<Vec<Rule>, regex::Error> {
    let doubled = format!("{VOWEL}{DOUBLE_CONSONANT}");

    Ok(vec![
        Rule::new(
            "ing",
            [PosId::VBG],
            vec![
                // taking -> take
                Transform::new(3).augment("e").min_len(5),
                // stripping -> strip
                Transform::new(4)
                    .before(&format!(".{doubled}ing$"))?
                    .min_len(6),
                // tying -> tie
                Transform::new(4)
                    .before(".ying$")?
                    .augment("ie")
                    .min_len(5),
                Transform::new(3).min_len(5),
            ],
        ),
        Rule::new(
            "ed",
            [PosId::VBN, PosId::VBD],
            vec![
                // faked -> fake
                Transform::new(1).before(".[^i]ed$")?,
                // played -> play
                Transform::new(2).before(&format!(".{VOWEL}yed$"))?,
                // mimicked -> mimic
                Transform::new(3).before("..cked$")?,
                // tried -> try
                Transform::new(3).before(".ied$")?.augment("y"),
                // zipped -> zip
                Transform::new(3)
                    .before(&format!("{doubled}ed$"))?
                    .min_len(5),
                Transform::new(2).min_len(4),
            ],
        ),
        Rule::new(
            "er",
            [PosId::JJR],
            vec![
                // easier -> easy
                Transform::new(3).before("ier$")?.augment("y").min_len(6),
                // hotter -> hot
                Transform::new(3)
                    .before(&format!("{doubled}er$"))?
                    .min_len(5),
                // larger -> large
                Transform::new(1).min_len(4),
                // smaller -> small
                Transform::new(2).min_len(5),
            ],
        ),
        Rule::new(
            "est",
            [PosId::JJS],
            vec![
                // easiest -> easy
                Transform::new(4).before("iest$")?.augment("y").min_len(7),
                // hottest -> hot
                Transform::new(4)
                    .before(&format!("{doubled}est$"))?
                    .min_len(6),
                // largest -> large
                Transform::new(2).min_len(5),
                // smallest -> small
                Transform::new(3).min_len(6),
            ],
        ),
        Rule::new(
            "s",
            [PosId::NNS, PosId::VBZ],
            vec![
                Transform::new(2).before(".ches$")?,
                // wolves -> wolf
                Transform::new(3).before(".ves$")?.augment("f"),
                Transform::new(2).before(".ses$")?,
                Transform::new(2).before(".oes$")?,
                Transform::new(2).before(".shes$")?,
                Transform::new(2).before(".xes$")?,
                Transform::new(2).before(".zes$")?,
                Transform::new(1).before(".[^zs']s$")?,
                // countries -> country
                Transform::new(3)
                    .before(&format!(".{CONSONANT}ies$"))?
                    .augment("y"),
            ],
        ),
        Rule::new(
            "men",
            [PosId::NNS],
            vec![Transform::new(2).before("men$")?.augment("an").min_len(5)],
        ),
    ])
}

/// An English lemmatizer: exceptions first, then [`morph_rules`].
pub fn lemmatizer<I>(checker: Arc<dyn LemmaChecker>, exceptions: I) -> Result<Lemmatizer, regex::Error>
where
    I: IntoIterator<Item = (String, Vec<Lemma>)>,
{
    let rules = morph_rules()?;
    let mut lemmatizer = Lemmatizer::new(checker.clone());

    lemmatizer
        .insert(ExceptionResolver::new(exceptions))
        .insert(SuffixRuleResolver::new(rules, checker));

    Ok(lemmatizer)
}

#[cfg(test)]
mod tests {
    use crate::english::morph_rules;

    #[test]
    fn test_english_rules_compile() {
        let rules = morph_rules().unwrap();
        let affixes = rules.iter().map(|rule| rule.affix()).collect::<Vec<_>>();

        assert_eq!(affixes, ["ing", "ed", "er", "est", "s", "men"]);
        assert!(rules.iter().all(|rule| !rule.transforms().is_empty()));
    }
}
