#![cfg_attr(docsrs, feature(doc_cfg))]
//! # iter-inspect
//!
//! iter-inspect is a small library of iterable-inspection helpers over a
//! closed, dynamically typed value model. It answers three questions about a
//! [`Value`]: is it iterable, is it an empty iterable, and should it be
//! replaced because it is empty. It also reorders containers to follow an
//! externally supplied reference order.
//!
//! ## Features
//! - [`is_iterable`] with an explicit policy for text values
//! - [`is_empty_iterable`] built on a fresh, non-consuming element cursor
//! - [`replace_empty_iterables`] / [`replace_empty_iterables_ref`] for
//!   substituting a default (identity passthrough otherwise)
//! - [`sort_iterables_by_sorted_order`] for sequences, tuples, sets, mappings
//!   and numeric arrays, with a configurable [`DuplicatePolicy`]
//!
//! ## Value model
//! [`Value`] is a closed enum: scalars, text, sequences, tuples, sets,
//! insertion-ordered [`Mapping`]s, 1-D [`NumericArray`]s, and [`Opaque`]
//! markers for foreign types. Each value carries a [`Category`] tag; the
//! helpers dispatch on that tag and never probe for capabilities.
//!
//! ```
//! use iter_inspect::prelude::*;
//!
//! assert!(is_iterable(&Value::text("hello"), true));
//! assert!(!is_iterable(&Value::text("hello"), false));
//! assert!(is_empty_iterable(&Value::sequence(Vec::<i32>::new()), false));
//!
//! let sorted = sort_iterables_by_sorted_order(
//!     &Value::mapping([("a", 1), ("b", 2), ("c", 3)]),
//!     ["c", "b", "a"].map(Value::from),
//! )
//! .unwrap();
//! let keys: Vec<_> = sorted.as_mapping().unwrap().keys().cloned().collect();
//! assert_eq!(keys, ["c", "b", "a"].map(Value::from));
//! ```
//!
//! ## Invariants
//! Enable `check-invariants` (or `strict-invariants`) to keep structural
//! assertions active in release builds; see [`DebugInvariants`].

pub mod category;
pub mod debug_invariants;
pub mod inspect;
pub mod inspect_error;
pub mod sort;
pub mod value;

pub use category::Category;
pub use debug_invariants::DebugInvariants;
pub use inspect::{
    INCLUDE_STR_EMPTY, INCLUDE_STR_ITERABLE, is_empty_iterable, is_iterable,
    replace_empty_iterables, replace_empty_iterables_ref,
};
pub use inspect_error::InspectError;
pub use sort::{
    DuplicatePolicy, OrderLookup, SortConfig, sort_iterables_by_sorted_order,
    sort_iterables_by_sorted_order_with,
};
pub use value::{DType, Mapping, NumericArray, Opaque, Value};

/// A convenient prelude to import the most-used functions & types:
pub mod prelude {
    pub use crate::category::Category;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::inspect::{
        is_empty_iterable, is_iterable, replace_empty_iterables, replace_empty_iterables_ref,
    };
    pub use crate::inspect_error::InspectError;
    pub use crate::sort::{
        DuplicatePolicy, SortConfig, sort_iterables_by_sorted_order,
        sort_iterables_by_sorted_order_with,
    };
    pub use crate::value::{Mapping, NumericArray, Value};
}
