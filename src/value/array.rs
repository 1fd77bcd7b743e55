//! Homogeneous 1-D numeric arrays.

use core::fmt;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Element type of a [`NumericArray`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum DType {
    Int32,
    Int64,
    UInt8,
    UInt32,
    Float32,
    Float64,
}

impl DType {
    pub const fn name(self) -> &'static str {
        match self {
            DType::Int32 => "int32",
            DType::Int64 => "int64",
            DType::UInt8 => "uint8",
            DType::UInt32 => "uint32",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
        }
    }

    pub const fn is_float(self) -> bool {
        matches!(self, DType::Float32 | DType::Float64)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed-dtype, one-dimensional numeric buffer.
///
/// Elements surface as [`Value::Int`] for integer dtypes and [`Value::Float`]
/// for float dtypes.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NumericArray {
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    UInt8(Vec<u8>),
    UInt32(Vec<u32>),
    Float32(Vec<OrderedFloat<f32>>),
    Float64(Vec<OrderedFloat<f64>>),
}

/// Runs `$body` against the buffer of whichever dtype `$array` holds.
macro_rules! with_buffer {
    ($array:expr, $buf:ident => $body:expr) => {
        match $array {
            NumericArray::Int32($buf) => $body,
            NumericArray::Int64($buf) => $body,
            NumericArray::UInt8($buf) => $body,
            NumericArray::UInt32($buf) => $body,
            NumericArray::Float32($buf) => $body,
            NumericArray::Float64($buf) => $body,
        }
    };
}

/// Like `with_buffer!`, but rewraps the result in the same dtype.
macro_rules! map_buffer {
    ($array:expr, $buf:ident => $body:expr) => {
        match $array {
            NumericArray::Int32($buf) => NumericArray::Int32($body),
            NumericArray::Int64($buf) => NumericArray::Int64($body),
            NumericArray::UInt8($buf) => NumericArray::UInt8($body),
            NumericArray::UInt32($buf) => NumericArray::UInt32($body),
            NumericArray::Float32($buf) => NumericArray::Float32($body),
            NumericArray::Float64($buf) => NumericArray::Float64($body),
        }
    };
}

impl NumericArray {
    pub fn dtype(&self) -> DType {
        match self {
            NumericArray::Int32(_) => DType::Int32,
            NumericArray::Int64(_) => DType::Int64,
            NumericArray::UInt8(_) => DType::UInt8,
            NumericArray::UInt32(_) => DType::UInt32,
            NumericArray::Float32(_) => DType::Float32,
            NumericArray::Float64(_) => DType::Float64,
        }
    }

    pub fn len(&self) -> usize {
        with_buffer!(self, buf => buf.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element `i` as a value, or `None` past the end.
    pub fn get(&self, i: usize) -> Option<Value> {
        match self {
            NumericArray::Int32(buf) => buf.get(i).map(|&x| Value::from(x)),
            NumericArray::Int64(buf) => buf.get(i).map(|&x| Value::from(x)),
            NumericArray::UInt8(buf) => buf.get(i).map(|&x| Value::from(x)),
            NumericArray::UInt32(buf) => buf.get(i).map(|&x| Value::from(x)),
            NumericArray::Float32(buf) => buf.get(i).map(|x| Value::from(x.into_inner())),
            NumericArray::Float64(buf) => buf.get(i).map(|&x| Value::Float(x)),
        }
    }

    pub fn iter(&self) -> ArrayElements<'_> {
        ArrayElements {
            array: self,
            front: 0,
            back: self.len(),
        }
    }

    pub fn to_values(&self) -> Vec<Value> {
        self.iter().collect()
    }

    /// Gathers elements in the order given by `order`.
    ///
    /// `order` must be a permutation of `0..self.len()`; out-of-range indices
    /// are skipped.
    pub fn permuted(&self, order: &[usize]) -> NumericArray {
        map_buffer!(self, buf => order.iter().filter_map(|&i| buf.get(i).copied()).collect())
    }
}

impl From<Vec<i32>> for NumericArray {
    fn from(buf: Vec<i32>) -> Self {
        NumericArray::Int32(buf)
    }
}

impl From<Vec<i64>> for NumericArray {
    fn from(buf: Vec<i64>) -> Self {
        NumericArray::Int64(buf)
    }
}

impl From<Vec<u8>> for NumericArray {
    fn from(buf: Vec<u8>) -> Self {
        NumericArray::UInt8(buf)
    }
}

impl From<Vec<u32>> for NumericArray {
    fn from(buf: Vec<u32>) -> Self {
        NumericArray::UInt32(buf)
    }
}

impl From<Vec<f32>> for NumericArray {
    fn from(buf: Vec<f32>) -> Self {
        NumericArray::Float32(buf.into_iter().map(OrderedFloat).collect())
    }
}

impl From<Vec<f64>> for NumericArray {
    fn from(buf: Vec<f64>) -> Self {
        NumericArray::Float64(buf.into_iter().map(OrderedFloat).collect())
    }
}

/// Cursor over a [`NumericArray`], yielding owned element values.
#[derive(Clone, Debug)]
pub struct ArrayElements<'a> {
    array: &'a NumericArray,
    front: usize,
    back: usize,
}

impl Iterator for ArrayElements<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        if self.front >= self.back {
            return None;
        }
        let v = self.array.get(self.front);
        self.front += 1;
        v
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for ArrayElements<'_> {
    fn next_back(&mut self) -> Option<Value> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.array.get(self.back)
    }
}

impl ExactSizeIterator for ArrayElements<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_elements_surface_as_int() {
        let a = NumericArray::from(vec![7u8, 8]);
        assert_eq!(a.dtype(), DType::UInt8);
        assert_eq!(a.to_values(), vec![Value::Int(7), Value::Int(8)]);
    }

    #[test]
    fn float_elements_surface_as_float() {
        let a = NumericArray::from(vec![0.5f32, 1.5]);
        assert!(a.dtype().is_float());
        assert_eq!(a.get(1), Some(Value::float(1.5)));
        assert_eq!(a.get(2), None);
    }

    #[test]
    fn permuted_keeps_dtype() {
        let a = NumericArray::from(vec![10i32, 20, 30]);
        let p = a.permuted(&[2, 0, 1]);
        assert_eq!(p, NumericArray::Int32(vec![30, 10, 20]));
        assert_eq!(p.dtype(), DType::Int32);
    }

    #[test]
    fn iterates_from_both_ends() {
        let a = NumericArray::from(vec![1i64, 2, 3]);
        let back: Vec<_> = a.iter().rev().collect();
        assert_eq!(back, vec![Value::Int(3), Value::Int(2), Value::Int(1)]);
        assert_eq!(a.iter().len(), 3);
    }
}
