//! Insertion-ordered key/value mapping.
//!
//! Entries live in a `Vec` in insertion order; a `hashbrown` index maps each
//! key to its entry position. Re-inserting an existing key replaces the value
//! in place.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::debug_invariants::DebugInvariants;
use crate::inspect_error::InspectError;
use crate::value::Value;

/// Key/value mapping with unique keys and stable iteration order.
///
/// Equality, ordering and hashing ignore iteration order: two mappings are
/// equal when they hold the same key/value pairs.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<(Value, Value)>", into = "Vec<(Value, Value)>")]
pub struct Mapping {
    entries: Vec<(Value, Value)>,
    index: HashMap<Value, usize>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Mapping {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts `value` under `key`.
    ///
    /// Returns the previous value if the key was present; the key keeps its
    /// original position in that case.
    pub fn insert(&mut self, key: impl Into<Value>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        if let Some(&pos) = self.index.get(&key) {
            return Some(core::mem::replace(&mut self.entries[pos].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.index.contains_key(key)
    }

    /// Position of `key` in iteration order.
    pub fn position(&self, key: &Value) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Key/value pairs in iteration order.
    pub fn iter(&self) -> core::slice::Iter<'_, (Value, Value)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> Keys<'_> {
        Keys {
            inner: self.entries.iter(),
        }
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn entries(&self) -> &[(Value, Value)] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<(Value, Value)> {
        self.entries
    }

    /// Entries sorted by key; the order-independent view used for comparison.
    fn canonical(&self) -> Vec<&(Value, Value)> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        sorted
    }
}

/// Iterator over the keys of a [`Mapping`] in iteration order.
#[derive(Clone, Debug)]
pub struct Keys<'a> {
    inner: core::slice::Iter<'a, (Value, Value)>,
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Keys<'_> {}

impl fmt::Debug for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|ov| ov == v))
    }
}

impl Eq for Mapping {}

impl PartialOrd for Mapping {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Mapping {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().cmp(&other.canonical())
    }
}

impl Hash for Mapping {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let canonical = self.canonical();
        canonical.len().hash(state);
        for (k, v) in canonical {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Mapping::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<Value>, V: Into<Value>> Extend<(K, V)> for Mapping {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl From<Vec<(Value, Value)>> for Mapping {
    fn from(pairs: Vec<(Value, Value)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<Mapping> for Vec<(Value, Value)> {
    fn from(map: Mapping) -> Self {
        map.entries
    }
}

impl IntoIterator for Mapping {
    type Item = (Value, Value);
    type IntoIter = std::vec::IntoIter<(Value, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = &'a (Value, Value);
    type IntoIter = core::slice::Iter<'a, (Value, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl DebugInvariants for Mapping {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Mapping");
    }

    fn validate_invariants(&self) -> Result<(), InspectError> {
        if self.index.len() != self.entries.len() {
            return Err(InspectError::MappingLengthMismatch {
                entries: self.entries.len(),
                index: self.index.len(),
            });
        }
        for (pos, (k, _)) in self.entries.iter().enumerate() {
            if self.index.get(k) != Some(&pos) {
                return Err(InspectError::MappingIndexMismatch {
                    key: format!("{k:?}"),
                });
            }
        }
        Ok(())
    }
}
