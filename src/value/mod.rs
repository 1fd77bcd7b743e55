//! Closed dynamic value model.
//!
//! [`Value`] is the "any value" the inspection helpers accept. The set of
//! variants is closed: foreign types are carried as [`Opaque`] and are never
//! treated as containers.

pub mod array;
pub mod iter;
pub mod mapping;

use std::collections::{BTreeMap, BTreeSet, HashSet};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::debug_invariants::DebugInvariants;
use crate::inspect_error::InspectError;

pub use array::{ArrayElements, DType, NumericArray};
pub use iter::Elements;
pub use mapping::Mapping;

/// A dynamically typed value.
///
/// Floats are totally ordered so that every value can be used as a set member
/// or mapping key. Equality is strict across kinds: `Int(1) != Float(1.0)`;
/// the sorter's order lookup is the one place numbers compare by value.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Value {
    /// Absent value.
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(OrderedFloat<f64>),
    /// Text; iterates as one-character text values.
    Text(String),
    /// Growable ordered sequence.
    Sequence(Vec<Value>),
    /// Fixed ordered sequence.
    Tuple(Vec<Value>),
    Set(BTreeSet<Value>),
    Mapping(Mapping),
    Array(NumericArray),
    /// A value from outside the closed model.
    Opaque(Opaque),
}

/// Stand-in for a foreign value, identified only by its type name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Opaque {
    type_name: String,
}

impl Opaque {
    /// Opaque marker for a value of Rust type `T`.
    pub fn of<T: ?Sized>() -> Self {
        Self::named(std::any::type_name::<T>())
    }

    /// Opaque marker with an explicit type name.
    pub fn named(type_name: impl Into<String>) -> Self {
        Opaque {
            type_name: type_name.into(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

impl Value {
    pub fn float(x: f64) -> Self {
        Value::Float(OrderedFloat(x))
    }

    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    /// Sequence built from anything convertible to values.
    pub fn sequence<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }

    pub fn tuple<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Tuple(items.into_iter().map(Into::into).collect())
    }

    pub fn set<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Set(items.into_iter().map(Into::into).collect())
    }

    /// Mapping built from key/value pairs; later duplicate keys overwrite
    /// earlier values but keep the first position.
    pub fn mapping<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        Value::Mapping(pairs.into_iter().collect())
    }

    /// Opaque value standing in for a `T`.
    pub fn opaque<T: ?Sized>() -> Self {
        Value::Opaque(Opaque::of::<T>())
    }

    /// Category tag used for classification and dispatch.
    pub fn category(&self) -> Category {
        match self {
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) => Category::Scalar,
            Value::Text(_) => Category::Text,
            Value::Sequence(_) | Value::Tuple(_) => Category::Sequence,
            Value::Set(_) => Category::Set,
            Value::Mapping(_) => Category::Mapping,
            Value::Array(_) => Category::NumericArray,
            Value::Opaque(_) => Category::Unsupported,
        }
    }

    /// Runtime type name, as reported in errors.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "str",
            Value::Sequence(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Set(_) => "set",
            Value::Mapping(_) => "dict",
            Value::Array(_) => "ndarray",
            Value::Opaque(o) => o.type_name(),
        }
    }

    /// Number of elements a cursor over this value would yield.
    ///
    /// `None` for scalars and opaque values. Text counts characters.
    pub fn len_hint(&self) -> Option<usize> {
        match self {
            Value::Text(s) => Some(s.chars().count()),
            Value::Sequence(items) | Value::Tuple(items) => Some(items.len()),
            Value::Set(members) => Some(members.len()),
            Value::Mapping(map) => Some(map.len()),
            Value::Array(array) => Some(array.len()),
            Value::Null
            | Value::Bool(_)
            | Value::Int(_)
            | Value::Float(_)
            | Value::Opaque(_) => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Items of a sequence or tuple.
    pub fn as_items(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) | Value::Tuple(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_set(&self) -> Option<&BTreeSet<Value>> {
        match self {
            Value::Set(members) => Some(members),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&NumericArray> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }
}

impl DebugInvariants for Value {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Value");
    }

    fn validate_invariants(&self) -> Result<(), InspectError> {
        match self {
            Value::Sequence(items) | Value::Tuple(items) => {
                items.iter().try_for_each(Value::validate_invariants)
            }
            Value::Set(members) => members.iter().try_for_each(Value::validate_invariants),
            Value::Mapping(map) => {
                map.validate_invariants()?;
                map.iter().try_for_each(|(k, v)| {
                    k.validate_invariants()?;
                    v.validate_invariants()
                })
            }
            Value::Null
            | Value::Bool(_)
            | Value::Int(_)
            | Value::Float(_)
            | Value::Text(_)
            | Value::Array(_)
            | Value::Opaque(_) => Ok(()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! int_from {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(x: $t) -> Self {
                Value::Int(i64::from(x))
            }
        })*
    };
}

int_from!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::float(f64::from(x))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::float(x)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Text(c.to_string())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::sequence(items)
    }
}

impl<T: Into<Value>> From<BTreeSet<T>> for Value {
    fn from(members: BTreeSet<T>) -> Self {
        Value::set(members)
    }
}

impl<T: Into<Value>, S> From<HashSet<T, S>> for Value {
    fn from(members: HashSet<T, S>) -> Self {
        Value::set(members)
    }
}

impl<K: Into<Value>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(map: BTreeMap<K, V>) -> Self {
        Value::mapping(map)
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Value::Mapping(map)
    }
}

impl From<NumericArray> for Value {
    fn from(array: NumericArray) -> Self {
        Value::Array(array)
    }
}

impl From<Opaque> for Value {
    fn from(o: Opaque) -> Self {
        Value::Opaque(o)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::sequence(iter)
    }
}
