use std::fmt::{Debug, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::pos::PosId;

/// Number of 8 bit lanes in a packed set.
pub const LANES: usize = 4;

/// Packs up to four tags into one `u32`, the `i`-th tag in the `i`-th byte.
///
/// Tags past the fourth are dropped. Since a [`PosId`] is never zero, an
/// unused lane always reads as zero and terminates the set.
pub fn pack(tags: &[PosId]) -> u32 {
    tags.iter()
        .take(LANES)
        .enumerate()
        .fold(0, |packed, (lane, tag)| {
            packed | (u32::from(tag.get()) << (8 * lane))
        })
}

/// Unpacks tags lane by lane up to the first zero lane.
pub fn unpack(packed: u32) -> Vec<PosId> {
    PosSet(packed).iter().collect()
}

/// Up to four [`PosId`] packed into a single word.
#[derive(Clone, Copy, Default, Hash, PartialEq, Eq)]
pub struct PosSet(u32);

impl PosSet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn from_packed(packed: u32) -> Self {
        Self(packed)
    }

    #[inline]
    pub fn packed(&self) -> u32 {
        self.0
    }

    #[inline]
    pub fn iter(&self) -> Iter {
        Iter {
            packed: self.0,
            lane: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 & 0xff == 0
    }

    #[inline]
    pub fn contains(&self, tag: PosId) -> bool {
        self.iter().any(|pos| pos == tag)
    }

    /// Appends `tag` into the first free lane.
    ///
    /// Returns `false` and leaves the set untouched once all lanes are taken.
    pub fn push(&mut self, tag: PosId) -> bool {
        let len = self.len();
        if len >= LANES {
            return false;
        }

        self.0 |= u32::from(tag.get()) << (8 * len);
        true
    }
}

impl From<&[PosId]> for PosSet {
    fn from(tags: &[PosId]) -> Self {
        Self(pack(tags))
    }
}

impl FromIterator<PosId> for PosSet {
    fn from_iter<I: IntoIterator<Item = PosId>>(iter: I) -> Self {
        let tags = iter.into_iter().take(LANES).collect::<Vec<_>>();
        Self(pack(&tags))
    }
}

impl IntoIterator for PosSet {
    type Item = PosId;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Debug for PosSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Serialize for PosSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for PosSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tags = Vec::<PosId>::deserialize(deserializer)?;
        Ok(PosSet::from(tags.as_slice()))
    }
}

pub struct Iter {
    packed: u32,
    lane: usize,
}

impl Iterator for Iter {
    type Item = PosId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.lane >= LANES {
            return None;
        }

        let byte = (self.packed >> (8 * self.lane)) as u8;
        self.lane += 1;

        match PosId::new(byte) {
            Some(tag) => Some(tag),
            None => {
                // Zero lane ends the set.
                self.lane = LANES;
                None
            }
        }
    }
}
