//! Order-based sorting of containers against a reference order.
//!
//! The reference order assigns each of its elements a position; the container
//! being sorted is rebuilt with its elements (or, for mappings, its entries by
//! key) stably ordered by that position. Elements missing from the reference
//! order go last, in their original relative order.
//!
//! Dispatch is over the closed set of sortable categories:
//!
//! | Category | Result |
//! |---|---|
//! | sequence / tuple | same variant, reordered |
//! | set | same members |
//! | numeric array | same dtype, reordered |
//! | mapping | same pairs, reordered by key |
//!
//! Everything else is rejected with [`InspectError::UnsupportedType`].

pub mod lookup;
mod reorder;

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

use crate::inspect_error::InspectError;
use crate::value::Value;

pub use lookup::{DuplicatePolicy, OrderLookup};
use reorder::Reorder;

/// Options for [`sort_iterables_by_sorted_order_with`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SortConfig {
    /// How repeated elements in the reference order are resolved.
    pub duplicates: DuplicatePolicy,
}

/// Reorders `iterable_to_sort` to follow `sorted_order`, using
/// [`SortConfig::default`].
///
/// Tuples are sorted like sequences and come back as tuples; this goes beyond
/// list-only sorting on purpose. Numbers match by value across kinds (see
/// [`OrderLookup`]).
///
/// # Errors
/// [`InspectError::UnsupportedType`] if `iterable_to_sort` is not a sequence,
/// tuple, set, mapping or numeric array.
pub fn sort_iterables_by_sorted_order<I>(
    iterable_to_sort: &Value,
    sorted_order: I,
) -> Result<Value, InspectError>
where
    I: IntoIterator,
    I::Item: Borrow<Value>,
{
    sort_iterables_by_sorted_order_with(iterable_to_sort, sorted_order, &SortConfig::default())
}

/// Reorders `iterable_to_sort` to follow `sorted_order` under `config`.
///
/// Neither input is modified; the result is always a freshly built container.
pub fn sort_iterables_by_sorted_order_with<I>(
    iterable_to_sort: &Value,
    sorted_order: I,
    config: &SortConfig,
) -> Result<Value, InspectError>
where
    I: IntoIterator,
    I::Item: Borrow<Value>,
{
    let category = iterable_to_sort.category();
    if !category.is_sortable() {
        log::debug!(
            "cannot sort `{}` ({category}) by reference order",
            iterable_to_sort.type_name()
        );
        return Err(InspectError::unsupported(iterable_to_sort));
    }

    let lookup = OrderLookup::build(sorted_order, config.duplicates);
    log::trace!(
        "sorting `{}` ({category}) against {} reference positions",
        iterable_to_sort.type_name(),
        lookup.len()
    );

    let sorted = match iterable_to_sort {
        Value::Sequence(items) => Value::Sequence(items.reorder(&lookup)),
        Value::Tuple(items) => Value::Tuple(items.reorder(&lookup)),
        Value::Set(members) => Value::Set(members.reorder(&lookup)),
        Value::Mapping(map) => Value::Mapping(map.reorder(&lookup)),
        Value::Array(array) => Value::Array(array.reorder(&lookup)),
        other => return Err(InspectError::unsupported(other)),
    };
    crate::debug_invariants!(
        crate::debug_invariants::DebugInvariants::validate_invariants(&sorted),
        "sorted container"
    );
    Ok(sorted)
}
