//! Per-category reordering against an [`OrderLookup`].

use std::collections::BTreeSet;

use itertools::Itertools;

use crate::sort::lookup::OrderLookup;
use crate::value::{Mapping, NumericArray, Value};

/// A container that can be rebuilt with its elements in reference order.
///
/// Implementations sort stably by [`OrderLookup::rank`] and return a fresh
/// container of the same shape.
pub(crate) trait Reorder {
    fn reorder(&self, lookup: &OrderLookup) -> Self;
}

impl Reorder for Vec<Value> {
    fn reorder(&self, lookup: &OrderLookup) -> Self {
        self.iter()
            .sorted_by_key(|v| lookup.rank(v))
            .cloned()
            .collect()
    }
}

// BTreeSet iteration order is fixed by `Ord`; only membership carries over.
impl Reorder for BTreeSet<Value> {
    fn reorder(&self, lookup: &OrderLookup) -> Self {
        self.iter()
            .sorted_by_key(|v| lookup.rank(v))
            .cloned()
            .collect()
    }
}

/// Pairs are ranked by key.
impl Reorder for Mapping {
    fn reorder(&self, lookup: &OrderLookup) -> Self {
        self.iter()
            .sorted_by_key(|(k, _)| lookup.rank(k))
            .cloned()
            .collect()
    }
}

impl Reorder for NumericArray {
    fn reorder(&self, lookup: &OrderLookup) -> Self {
        let order: Vec<usize> = self
            .iter()
            .enumerate()
            .sorted_by_key(|(_, v)| lookup.rank(v))
            .map(|(i, _)| i)
            .collect();
        self.permuted(&order)
    }
}
