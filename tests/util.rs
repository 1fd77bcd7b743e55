#![allow(dead_code)]
use iter_inspect::{Mapping, Value};

/// Sequence of integer values.
pub fn ints(items: &[i64]) -> Value {
    Value::sequence(items.iter().copied())
}

/// Reference order of integer values.
pub fn order_of(items: &[i64]) -> Vec<Value> {
    items.iter().map(|&i| Value::Int(i)).collect()
}

/// Keys of a mapping value, in iteration order.
pub fn mapping_keys(v: &Value) -> Vec<Value> {
    v.as_mapping()
        .map(|m| m.keys().cloned().collect())
        .unwrap_or_default()
}

/// Key/value pairs of a mapping value, in iteration order.
pub fn mapping_pairs(v: &Value) -> Vec<(Value, Value)> {
    v.as_mapping()
        .map(|m| m.entries().to_vec())
        .unwrap_or_default()
}

pub fn empty_mapping() -> Value {
    Value::Mapping(Mapping::new())
}

/// Assert vec is a permutation of another vec (order-agnostic).
pub fn assert_permutation(got: &[Value], want: &[Value]) {
    let mut a = got.to_vec();
    a.sort_unstable();
    let mut b = want.to_vec();
    b.sort_unstable();
    assert_eq!(a, b, "not a permutation\n got={:?}\nwant={:?}", got, want);
}
