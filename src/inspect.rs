//! Iterable classification, emptiness testing and empty substitution.
//!
//! All three helpers are total: every [`Value`] is accepted, and values that
//! are not iterable under the chosen text policy are simply "not iterable"
//! and therefore never "empty iterables".

use crate::value::Value;

/// Conventional text policy for [`is_iterable`]: text counts as iterable.
pub const INCLUDE_STR_ITERABLE: bool = true;

/// Conventional text policy for [`is_empty_iterable`] and the substituters:
/// text is treated as a scalar.
pub const INCLUDE_STR_EMPTY: bool = false;

/// Returns whether `value` is iterable.
///
/// Text is iterable exactly when `include_str` is set. Sequences, tuples,
/// sets, mappings and numeric arrays are always iterable; scalars and opaque
/// values never are.
pub fn is_iterable(value: &Value, include_str: bool) -> bool {
    value.category().is_iterable(include_str)
}

/// Returns whether `value` is an iterable that yields no elements.
///
/// Opens a fresh cursor and advances it once; the value itself is untouched.
pub fn is_empty_iterable(value: &Value, include_str: bool) -> bool {
    if !is_iterable(value, include_str) {
        return false;
    }
    value
        .elements()
        .is_some_and(|mut cursor| cursor.next().is_none())
}

/// Returns `empty_value` if `value` is an empty iterable, otherwise `value`
/// itself.
pub fn replace_empty_iterables(value: Value, include_str: bool, empty_value: Value) -> Value {
    if is_empty_iterable(&value, include_str) {
        empty_value
    } else {
        value
    }
}

/// Borrowing form of [`replace_empty_iterables`]: returns one of the two
/// references unchanged.
pub fn replace_empty_iterables_ref<'a>(
    value: &'a Value,
    include_str: bool,
    empty_value: &'a Value,
) -> &'a Value {
    if is_empty_iterable(value, include_str) {
        empty_value
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Mapping, NumericArray};

    #[test]
    fn integers_are_not_iterable() {
        assert!(!is_iterable(&Value::from(1), true));
        assert!(!is_iterable(&Value::from(1), false));
    }

    #[test]
    fn text_policy_controls_classification() {
        let hello = Value::text("hello");
        assert!(is_iterable(&hello, INCLUDE_STR_ITERABLE));
        assert!(!is_iterable(&hello, false));
    }

    #[test]
    fn empty_text_only_counts_when_included() {
        let empty = Value::text("");
        assert!(!is_empty_iterable(&empty, INCLUDE_STR_EMPTY));
        assert!(is_empty_iterable(&empty, true));
    }

    #[test]
    fn empty_containers_are_empty_iterables() {
        for v in [
            Value::sequence(Vec::<i32>::new()),
            Value::tuple(Vec::<i32>::new()),
            Value::set(Vec::<i32>::new()),
            Value::Mapping(Mapping::new()),
            Value::from(NumericArray::from(Vec::<f64>::new())),
        ] {
            assert!(is_empty_iterable(&v, false), "{v:?}");
        }
    }

    #[test]
    fn non_empty_containers_are_not_empty() {
        for v in [
            Value::sequence([1]),
            Value::tuple([1]),
            Value::set([1]),
            Value::mapping([(1, 1)]),
            Value::from(NumericArray::from(vec![1i32])),
        ] {
            assert!(!is_empty_iterable(&v, true), "{v:?}");
        }
    }

    #[test]
    fn opaque_values_are_never_empty_iterables() {
        let v = Value::opaque::<std::net::TcpStream>();
        assert!(!is_iterable(&v, true));
        assert!(!is_empty_iterable(&v, true));
    }

    #[test]
    fn substitution_defaults_to_null() {
        let out = replace_empty_iterables(Value::sequence(Vec::<i32>::new()), false, Value::Null);
        assert!(out.is_null());
    }

    #[test]
    fn substitution_uses_supplied_value() {
        let out = replace_empty_iterables(Value::sequence(Vec::<i32>::new()), false, Value::from(0));
        assert_eq!(out, Value::from(0));
    }

    #[test]
    fn non_empty_passes_through() {
        let out = replace_empty_iterables(Value::sequence([1]), false, Value::Null);
        assert_eq!(out, Value::sequence([1]));
    }

    #[test]
    fn borrowed_substitution_is_identity() {
        let v = Value::sequence([1, 2]);
        let fallback = Value::Null;
        assert!(std::ptr::eq(replace_empty_iterables_ref(&v, false, &fallback), &v));

        let empty = Value::Mapping(Mapping::new());
        assert!(std::ptr::eq(
            replace_empty_iterables_ref(&empty, false, &fallback),
            &fallback
        ));
    }
}
