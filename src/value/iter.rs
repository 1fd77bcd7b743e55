//! Element cursors over iterable values.

use std::borrow::Cow;
use std::collections::btree_set;

use crate::value::array::ArrayElements;
use crate::value::mapping::Keys;
use crate::value::Value;

/// Fresh cursor over the elements of an iterable [`Value`].
///
/// Stored elements are yielded borrowed; text characters and array elements
/// are materialized as owned values. Creating a cursor never mutates the
/// value it reads.
#[derive(Clone, Debug)]
pub struct Elements<'a> {
    inner: Inner<'a>,
}

#[derive(Clone, Debug)]
enum Inner<'a> {
    Chars(core::str::Chars<'a>),
    Items(core::slice::Iter<'a, Value>),
    Members(btree_set::Iter<'a, Value>),
    Keys(Keys<'a>),
    Array(ArrayElements<'a>),
}

impl<'a> Iterator for Elements<'a> {
    type Item = Cow<'a, Value>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Inner::Chars(chars) => chars.next().map(|c| Cow::Owned(Value::from(c))),
            Inner::Items(items) => items.next().map(Cow::Borrowed),
            Inner::Members(members) => members.next().map(Cow::Borrowed),
            Inner::Keys(keys) => keys.next().map(Cow::Borrowed),
            Inner::Array(array) => array.next().map(Cow::Owned),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Inner::Chars(chars) => chars.size_hint(),
            Inner::Items(items) => items.size_hint(),
            Inner::Members(members) => members.size_hint(),
            Inner::Keys(keys) => keys.size_hint(),
            Inner::Array(array) => array.size_hint(),
        }
    }
}

impl Value {
    /// Cursor over this value's elements.
    ///
    /// Text yields characters, mappings yield keys. Returns `None` for values
    /// that have no elements to iterate (scalars and opaque values). The text
    /// policy is applied by [`is_iterable`](crate::inspect::is_iterable), not
    /// here.
    pub fn elements(&self) -> Option<Elements<'_>> {
        let inner = match self {
            Value::Text(s) => Inner::Chars(s.chars()),
            Value::Sequence(items) | Value::Tuple(items) => Inner::Items(items.iter()),
            Value::Set(members) => Inner::Members(members.iter()),
            Value::Mapping(map) => Inner::Keys(map.keys()),
            Value::Array(array) => Inner::Array(array.iter()),
            Value::Null
            | Value::Bool(_)
            | Value::Int(_)
            | Value::Float(_)
            | Value::Opaque(_) => return None,
        };
        Some(Elements { inner })
    }
}
