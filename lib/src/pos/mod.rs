mod set;

pub use set::{pack, unpack, Iter, PosSet, LANES};

use std::{
    fmt::{Display, Formatter},
    num::NonZeroU8,
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PosError;

/// Compact part of speech identifier.
///
/// Identifies either a general part of speech (`NOUN`, `VERB`, ...) or a
/// specific inflected form of one (`NNS`, `VBG`, ...). Zero is reserved as
/// the "no tag" sentinel of [`PosSet`], so it cannot be constructed.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PosId(NonZeroU8);

macro_rules! pos_ids {
    ( $( $name:ident = $id:literal, $tag:literal; )* ) => {
        impl PosId {
            $(
                pub const $name: PosId = PosId(match NonZeroU8::new($id) {
                    Some(id) => id,
                    None => panic!("pos id must be non-zero"),
                });
            )*

            /// Textual tag, `None` for ids without a registered name.
            pub fn tag(&self) -> Option<&'static str> {
                match self.get() {
                    $( $id => Some($tag), )*
                    _ => None,
                }
            }

            fn from_tag(tag: &str) -> Option<PosId> {
                match tag {
                    $( $tag => Some(PosId::$name), )*
                    _ => None,
                }
            }
        }
    };
}

pos_ids! {
    NOUN = 2, "NOUN";
    ADJ = 3, "ADJ";
    VERB = 4, "VERB";
    PRON = 5, "PRON";
    NUM = 6, "NUM";
    ADV = 7, "ADV";

    NNS = 30, "NNS";
    JJR = 40, "JJR";
    JJS = 41, "JJS";
    RBR = 42, "RBR";
    RBS = 43, "RBS";
    VBD = 44, "VBD";
    VBN = 45, "VBN";
    VBG = 46, "VBG";
    VBP = 47, "VBP";
    VBZ = 48, "VBZ";
}

/// Inflected form -> general part of speech.
const FORMS: [(PosId, PosId); 10] = [
    (PosId::NNS, PosId::NOUN),
    (PosId::JJR, PosId::ADJ),
    (PosId::JJS, PosId::ADJ),
    (PosId::RBR, PosId::ADV),
    (PosId::RBS, PosId::ADV),
    (PosId::VBD, PosId::VERB),
    (PosId::VBN, PosId::VERB),
    (PosId::VBG, PosId::VERB),
    (PosId::VBP, PosId::VERB),
    (PosId::VBZ, PosId::VERB),
];

impl PosId {
    #[inline]
    pub const fn new(id: u8) -> Option<Self> {
        match NonZeroU8::new(id) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    #[inline]
    pub const fn get(&self) -> u8 {
        self.0.get()
    }

    /// General part of speech this inflected form belongs to.
    ///
    /// Returns `None` for general ids and for ids that are not registered
    /// forms. The hierarchy is one level deep.
    pub fn general_of(form: PosId) -> Option<PosId> {
        FORMS
            .iter()
            .find(|(specific, _)| *specific == form)
            .map(|(_, general)| *general)
    }

    #[inline]
    pub fn is_form(&self) -> bool {
        Self::general_of(*self).is_some()
    }

    /// Whether `form` is an inflected form of `self`.
    ///
    /// `VERB.has_form(VBG)` holds, `VBG.has_form(VERB)` and
    /// `VERB.has_form(VERB)` don't.
    #[inline]
    pub fn has_form(&self, form: PosId) -> bool {
        Self::general_of(form) == Some(*self)
    }
}

impl Display for PosId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.tag() {
            Some(tag) => f.write_str(tag),
            None => write!(f, "{}", self.get()),
        }
    }
}

impl FromStr for PosId {
    type Err = PosError;

    /// Parses a tag (`"VERB"`, `"vbg"`) or a raw non-zero id (`"46"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(id) = PosId::from_tag(&s.to_ascii_uppercase()) {
            return Ok(id);
        }

        match s.parse::<u8>() {
            Ok(raw) => PosId::new(raw).ok_or(PosError::Zero),
            Err(_) => Err(PosError::UnknownTag(s.to_string())),
        }
    }
}

impl TryFrom<u8> for PosId {
    type Error = PosError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        PosId::new(value).ok_or(PosError::Zero)
    }
}

impl From<PosId> for u8 {
    #[inline]
    fn from(value: PosId) -> Self {
        value.get()
    }
}

impl Serialize for PosId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.tag() {
            Some(tag) => serializer.serialize_str(tag),
            None => serializer.serialize_u8(self.get()),
        }
    }
}

impl<'de> Deserialize<'de> for PosId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Tag(String),
            Id(u8),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Tag(tag) => tag.parse().map_err(serde::de::Error::custom),
            Raw::Id(id) => PosId::try_from(id).map_err(serde::de::Error::custom),
        }
    }
}
