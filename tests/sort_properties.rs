mod util;

use iter_inspect::{
    NumericArray, Value, is_empty_iterable, is_iterable, replace_empty_iterables,
    sort_iterables_by_sorted_order,
};
use proptest::prelude::*;
use util::{assert_permutation, ints, order_of};

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (-1.0e6..1.0e6f64).prop_map(Value::from),
    ]
}

fn any_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        scalar(),
        ".{0,4}".prop_map(Value::text),
        prop::collection::vec(scalar(), 0..4).prop_map(Value::Sequence),
        prop::collection::vec(scalar(), 0..4).prop_map(Value::Tuple),
        prop::collection::btree_set(any::<i64>().prop_map(Value::from), 0..4).prop_map(Value::Set),
        prop::collection::vec((any::<i16>(), scalar()), 0..4).prop_map(Value::mapping),
        prop::collection::vec(any::<i32>(), 0..4)
            .prop_map(|v| Value::from(NumericArray::from(v))),
    ]
}

proptest! {
    #[test]
    fn text_classified_by_policy(s in ".*") {
        let v = Value::text(s);
        prop_assert!(is_iterable(&v, true));
        prop_assert!(!is_iterable(&v, false));
    }

    #[test]
    fn scalars_are_never_iterable(v in scalar(), include_str in any::<bool>()) {
        prop_assert!(!is_iterable(&v, include_str));
        prop_assert!(!is_empty_iterable(&v, include_str));
    }

    #[test]
    fn empty_implies_iterable(v in any_value(), include_str in any::<bool>()) {
        if !is_iterable(&v, include_str) {
            prop_assert!(!is_empty_iterable(&v, include_str));
        }
        if is_empty_iterable(&v, include_str) {
            prop_assert_eq!(v.len_hint(), Some(0));
        }
    }

    #[test]
    fn replacement_exactly_when_empty(v in any_value(), include_str in any::<bool>()) {
        let marker = Value::text("<empty>");
        let empty = is_empty_iterable(&v, include_str);
        let out = replace_empty_iterables(v.clone(), include_str, marker.clone());
        if empty {
            prop_assert_eq!(out, marker);
        } else {
            prop_assert_eq!(out, v);
        }
    }

    #[test]
    fn sorting_by_own_order_is_noop(items in prop::collection::vec(0i64..50, 0..20)) {
        let v = ints(&items);
        let out = sort_iterables_by_sorted_order(&v, order_of(&items)).unwrap();
        // duplicates collapse to one rank, so compare against a stable re-sort
        let again = sort_iterables_by_sorted_order(&out, order_of(&items)).unwrap();
        prop_assert_eq!(&out, &again);
        let mut dedup = items.clone();
        dedup.sort_unstable();
        dedup.dedup();
        if dedup.len() == items.len() {
            prop_assert_eq!(out, v);
        }
    }

    #[test]
    fn sorting_is_idempotent(
        items in prop::collection::vec(0i64..30, 0..20),
        order in prop::collection::vec(0i64..30, 0..20),
    ) {
        let once = sort_iterables_by_sorted_order(&ints(&items), order_of(&order)).unwrap();
        let twice = sort_iterables_by_sorted_order(&once, order_of(&order)).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn unmatched_elements_trail_matched_ones(
        items in prop::collection::vec(0i64..30, 0..20),
        order in prop::collection::vec(0i64..30, 0..20),
    ) {
        let out = sort_iterables_by_sorted_order(&ints(&items), order_of(&order)).unwrap();
        let out_items = out.as_items().unwrap();
        assert_permutation(out_items, ints(&items).as_items().unwrap());
        let matched: Vec<bool> = out_items
            .iter()
            .map(|v| matches!(v, Value::Int(i) if order.contains(i)))
            .collect();
        let first_unmatched = matched.iter().position(|m| !m).unwrap_or(matched.len());
        prop_assert!(matched[first_unmatched..].iter().all(|m| !m));
    }

    #[test]
    fn mapping_sort_keeps_pairs(
        pairs in prop::collection::vec((0i64..20, any::<i64>()), 0..12),
        order in prop::collection::vec(0i64..20, 0..20),
    ) {
        let m = Value::mapping(pairs);
        let out = sort_iterables_by_sorted_order(&m, order_of(&order)).unwrap();
        prop_assert_eq!(&out, &m);
        prop_assert_eq!(out.len_hint(), m.len_hint());
    }
}
