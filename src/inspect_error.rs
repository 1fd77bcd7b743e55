//! InspectError: Unified error type for iter-inspect public APIs
//!
//! Classification helpers are total and never produce this error; it is
//! returned by the sorter and by invariant validation.

use thiserror::Error;

use crate::category::Category;

/// Unified error type for iter-inspect operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InspectError {
    /// The value's category has no reordering implementation.
    #[error("Unsupported type `{type_name}` ({category}): expected a sequence, set, mapping or numeric array")]
    UnsupportedType {
        /// Runtime type name of the rejected value.
        type_name: String,
        /// Category tag the value was classified under.
        category: Category,
    },
    /// A mapping's key index disagrees with the position of its entry.
    #[error("Mapping invariant violated: index entry for key `{key}` is stale")]
    MappingIndexMismatch { key: String },
    /// A mapping's key index and entry list have different lengths.
    #[error("Mapping invariant violated: {entries} entries but {index} indexed keys")]
    MappingLengthMismatch { entries: usize, index: usize },
}

impl InspectError {
    pub(crate) fn unsupported(value: &crate::value::Value) -> Self {
        InspectError::UnsupportedType {
            type_name: value.type_name().to_string(),
            category: value.category(),
        }
    }
}
