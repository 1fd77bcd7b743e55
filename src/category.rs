//! Category tags for the closed value model.
//!
//! Every [`Value`](crate::value::Value) maps to exactly one [`Category`]. The
//! iterable check and the sorter both dispatch on this tag rather than probing
//! values for capabilities.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Capability class of a value.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Category {
    /// Null, booleans, integers and floats.
    Scalar,
    /// Text; iterable per character, but classified under a policy flag.
    Text,
    /// Ordered, indexable sequences (lists and tuples).
    Sequence,
    /// Unique-element collections.
    Set,
    /// Key/value maps; iteration yields keys.
    Mapping,
    /// Homogeneous 1-D numeric buffers.
    NumericArray,
    /// Foreign values outside the closed model.
    Unsupported,
}

impl Category {
    /// Whether values of this category are iterable under the given text policy.
    pub const fn is_iterable(self, include_str: bool) -> bool {
        match self {
            Category::Text => include_str,
            Category::Sequence | Category::Set | Category::Mapping | Category::NumericArray => {
                true
            }
            Category::Scalar | Category::Unsupported => false,
        }
    }

    /// Whether the sorter has a reordering implementation for this category.
    pub const fn is_sortable(self) -> bool {
        matches!(
            self,
            Category::Sequence | Category::Set | Category::Mapping | Category::NumericArray
        )
    }

    /// Lower-case name used in messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Scalar => "scalar",
            Category::Text => "text",
            Category::Sequence => "sequence",
            Category::Set => "set",
            Category::Mapping => "mapping",
            Category::NumericArray => "numeric array",
            Category::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Category;

    const ALL: [Category; 7] = [
        Category::Scalar,
        Category::Text,
        Category::Sequence,
        Category::Set,
        Category::Mapping,
        Category::NumericArray,
        Category::Unsupported,
    ];

    #[test]
    fn text_follows_policy() {
        assert!(Category::Text.is_iterable(true));
        assert!(!Category::Text.is_iterable(false));
    }

    #[test]
    fn non_text_ignores_policy() {
        for c in ALL.into_iter().filter(|c| *c != Category::Text) {
            assert_eq!(c.is_iterable(true), c.is_iterable(false), "{c}");
        }
    }

    #[test]
    fn sortable_categories_are_iterable_containers() {
        for c in ALL {
            if c.is_sortable() {
                assert!(c.is_iterable(false), "{c}");
            }
        }
        assert!(!Category::Text.is_sortable());
        assert!(!Category::Unsupported.is_sortable());
    }
}
