//! Keyed collection of packs

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Pack, PackType};

/// A set of packs keyed by formal id
///
/// Never holds two packs with the same id: [`PackSet::set`] and
/// [`PackSet::union`] overwrite. On disk a set is a JSON array of packs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackSet {
    packs: BTreeMap<String, Pack>,
}

impl PackSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.packs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Pack> {
        self.packs.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.packs.contains_key(id)
    }

    /// Insert under the pack's own id; a later insert wins
    pub fn set(&mut self, pack: Pack) {
        self.packs.insert(pack.id(), pack);
    }

    pub fn remove(&mut self, id: &str) -> Option<Pack> {
        self.packs.remove(id)
    }

    /// Merge `other` into `self`; entries from `other` win on duplicate ids
    pub fn union(&mut self, other: PackSet) {
        self.packs.extend(other.packs);
    }

    /// Like [`PackSet::union`] but returns the merged set
    #[allow(dead_code)] // Used in tests
    #[must_use]
    pub fn merged(mut self, other: PackSet) -> Self {
        self.union(other);
        self
    }

    #[must_use]
    pub fn filter_by_type(&self, types: &[PackType]) -> PackSet {
        self.iter()
            .filter(|pack| types.contains(&pack.pack_type))
            .cloned()
            .collect()
    }

    /// Snapshot of the packs, ordered by id
    #[allow(dead_code)] // Used in tests
    pub fn to_list(&self) -> Vec<Pack> {
        self.packs.values().cloned().collect()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.packs.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pack> {
        self.packs.values()
    }
}

impl FromIterator<Pack> for PackSet {
    fn from_iter<I: IntoIterator<Item = Pack>>(iter: I) -> Self {
        let mut set = PackSet::new();
        for pack in iter {
            set.set(pack);
        }
        set
    }
}

impl IntoIterator for PackSet {
    type Item = Pack;
    type IntoIter = std::collections::btree_map::IntoValues<String, Pack>;

    fn into_iter(self) -> Self::IntoIter {
        self.packs.into_values()
    }
}

impl Serialize for PackSet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.packs.values())
    }
}

impl<'de> Deserialize<'de> for PackSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let packs = Vec::<Pack>::deserialize(deserializer)?;
        Ok(packs.into_iter().collect())
    }
}
