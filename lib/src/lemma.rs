use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::pos::PosId;

/// A dictionary base form along with the parts of speech it was confirmed for.
///
/// The default value, with an empty `value`, stands for "no lemma found".
/// Deserialized lemmata go through [`Lemma::new`] and must not be empty.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LemmaEntry")]
pub struct Lemma {
    #[serde(rename = "lemma")]
    pub value: String,

    #[serde(default)]
    pub pos: Vec<PosId>,
}

/// Serialized shape of a [`Lemma`], before its tags are normalized.
#[derive(Deserialize)]
struct LemmaEntry {
    lemma: String,

    #[serde(default)]
    pos: Vec<PosId>,
}

impl TryFrom<LemmaEntry> for Lemma {
    type Error = &'static str;

    fn try_from(entry: LemmaEntry) -> Result<Self, Self::Error> {
        if entry.lemma.is_empty() {
            return Err("lemma must not be empty");
        }

        Ok(Lemma::new(entry.lemma, entry.pos))
    }
}

impl Lemma {
    /// Builds a lemma with its tags sorted and deduplicated.
    pub fn new<S: Into<String>>(value: S, pos: impl IntoIterator<Item = PosId>) -> Self {
        let mut pos = pos.into_iter().collect::<Vec<_>>();
        pos.sort_unstable();
        pos.dedup();

        Self {
            value: value.into(),
            pos,
        }
    }

    /// A lemma without part of speech tags.
    #[inline]
    pub fn untagged<S: Into<String>>(value: S) -> Self {
        Self {
            value: value.into(),
            pos: Vec::new(),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    #[inline]
    pub fn has_pos(&self, pos: PosId) -> bool {
        self.pos.contains(&pos)
    }
}

impl Display for Lemma {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)?;

        if !self.pos.is_empty() {
            let tags = self
                .pos
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>();
            write!(f, "[{}]", tags.join(","))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{lemma::Lemma, pos::PosId};

    #[test]
    fn test_lemma_new_normalizes_tags() {
        let lemma = Lemma::new("leave", [PosId::VBZ, PosId::NNS, PosId::VBZ]);

        assert_eq!(lemma.pos, vec![PosId::NNS, PosId::VBZ]);
        assert!(lemma.has_pos(PosId::NNS));
        assert!(!lemma.has_pos(PosId::VERB));
    }

    #[test]
    fn test_lemma_default_is_empty() {
        let lemma = Lemma::default();

        assert!(lemma.is_empty());
        assert!(lemma.pos.is_empty());
    }

    #[test]
    fn test_lemma_display() {
        assert_eq!(Lemma::new("walk", [PosId::VBD]).to_string(), "walk[VBD]");
        assert_eq!(
            Lemma::new("leave", [PosId::NNS, PosId::VBZ]).to_string(),
            "leave[NNS,VBZ]"
        );
        assert_eq!(Lemma::untagged("another").to_string(), "another");
    }

    #[test]
    fn test_lemma_deserialize() {
        let lemma: Lemma = serde_json::from_str(r#"{"lemma": "mouse", "pos": ["NNS"]}"#).unwrap();
        assert_eq!(lemma, Lemma::new("mouse", [PosId::NNS]));

        let bare: Lemma = serde_json::from_str(r#"{"lemma": "ox"}"#).unwrap();
        assert_eq!(bare, Lemma::untagged("ox"));
    }

    #[test]
    fn test_lemma_deserialize_normalizes_tags() {
        let lemma: Lemma =
            serde_json::from_str(r#"{"lemma": "leave", "pos": ["VBZ", "NNS", "VBZ"]}"#).unwrap();

        assert_eq!(lemma, Lemma::new("leave", [PosId::NNS, PosId::VBZ]));
    }

    #[test]
    fn test_lemma_deserialize_rejects_empty() {
        let result = serde_json::from_str::<Lemma>(r#"{"lemma": "", "pos": ["NNS"]}"#);
        assert!(result.is_err());
    }
}
