//! Position lookup built from a reference order.

use std::borrow::{Borrow, Cow};

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Which occurrence of a repeated element in the reference order defines its
/// position.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum DuplicatePolicy {
    /// The first occurrence wins; later repeats are ignored.
    FirstWins,
    /// Each repeat overwrites the recorded position.
    #[default]
    LastWins,
}

/// Element → 0-based position in a reference order.
///
/// Numbers are matched by value across kinds: `Bool(true)`, `Int(1)` and
/// `Float(1.0)` all resolve to the same position. Non-whole floats only match
/// themselves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderLookup {
    positions: HashMap<Value, usize>,
}

impl OrderLookup {
    /// Scans `sorted_order` once, recording each element's position.
    pub fn build<I>(sorted_order: I, policy: DuplicatePolicy) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<Value>,
    {
        let iter = sorted_order.into_iter();
        let mut positions: HashMap<Value, usize> = HashMap::with_capacity(iter.size_hint().0);
        for (pos, item) in iter.enumerate() {
            let key = lookup_key(item.borrow());
            if let Some(slot) = positions.get_mut(&*key) {
                log::trace!(
                    "duplicate order entry {key:?} at position {pos} (recorded {slot}, {policy:?})"
                );
                if policy == DuplicatePolicy::LastWins {
                    *slot = pos;
                }
                continue;
            }
            positions.insert(key.into_owned(), pos);
        }
        OrderLookup { positions }
    }

    /// Recorded position of `element`, if it appears in the reference order.
    pub fn position(&self, element: &Value) -> Option<usize> {
        self.positions.get(&*lookup_key(element)).copied()
    }

    /// Sort key for `element`: its position, or `usize::MAX` when absent so
    /// that unmatched elements sort after every matched one.
    pub fn rank(&self, element: &Value) -> usize {
        self.position(element).unwrap_or(usize::MAX)
    }

    /// Number of distinct elements recorded.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Folds booleans and whole floats onto the integer key of the same value.
fn lookup_key(value: &Value) -> Cow<'_, Value> {
    match value {
        Value::Bool(b) => Cow::Owned(Value::Int(i64::from(*b))),
        Value::Float(f) => match whole_float(f.into_inner()) {
            Some(i) => Cow::Owned(Value::Int(i)),
            None => Cow::Borrowed(value),
        },
        _ => Cow::Borrowed(value),
    }
}

// -2^63 is exact in f64; 2^63 is the first value past i64::MAX.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn whole_float(x: f64) -> Option<i64> {
    (x.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&x)).then(|| x as i64)
}
