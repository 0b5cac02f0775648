//! The closed set of values the arithmetic operators accept.
//!
//! `Value` is a tagged variant over scalars, complex numbers, units, raw
//! nested arrays and matrix containers. Operators take values by reference
//! and always build fresh results, so callers keep ownership of their inputs.

use std::fmt;

use bitflags::bitflags;

use crate::matrix::Matrix;
use crate::types::{Complex, Unit};

bitflags! {
    /// Operand kind, used for classification and error reporting.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Kind: u32 {
        const BOOLEAN    = 0b0000_0001;
        const NUMBER     = 0b0000_0010;
        const COMPLEX    = 0b0000_0100;
        const UNIT       = 0b0000_1000;
        const STRING     = 0b0001_0000;
        const ARRAY      = 0b0010_0000;
        const MATRIX     = 0b0100_0000;
        const BOXED      = 0b1000_0000;
        const COLLECTION = Self::ARRAY.bits() | Self::MATRIX.bits();
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(Kind, &str); 8] = [
            (Kind::BOOLEAN, "boolean"),
            (Kind::NUMBER, "number"),
            (Kind::COMPLEX, "complex"),
            (Kind::UNIT, "unit"),
            (Kind::STRING, "string"),
            (Kind::ARRAY, "array"),
            (Kind::MATRIX, "matrix"),
            (Kind::BOXED, "boxed"),
        ];
        match NAMES.iter().find(|(kind, _)| kind == self) {
            Some((_, name)) => f.write_str(name),
            None => write!(f, "{self:?}"),
        }
    }
}

/// A value accepted by `multiply`, `add` and `conj`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(bool),
    Number(f64),
    Complex(Complex),
    Unit(Unit),
    /// Non-numeric text; every arithmetic operator rejects it.
    String(String),
    /// Raw nested sequence: rank 1 is a vector, rank 2 a matrix.
    Array(Vec<Value>),
    /// Container carrying matrix semantics around a raw nested sequence.
    Matrix(Matrix),
    /// Host object wrapping a primitive value (see [`Value::value_of`]).
    Boxed(Box<Value>),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Boolean(_) => Kind::BOOLEAN,
            Value::Number(_) => Kind::NUMBER,
            Value::Complex(_) => Kind::COMPLEX,
            Value::Unit(_) => Kind::UNIT,
            Value::String(_) => Kind::STRING,
            Value::Array(_) => Kind::ARRAY,
            Value::Matrix(_) => Kind::MATRIX,
            Value::Boxed(_) => Kind::BOXED,
        }
    }

    /// Real value of a number or boolean (booleans coerce to 0/1).
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(data) => Some(data),
            _ => None,
        }
    }

    /// Borrow the elements of an array or matrix container, with a flag
    /// telling whether they came from a container.
    pub fn as_collection(&self) -> Option<(&[Value], bool)> {
        match self {
            Value::Array(data) => Some((data, false)),
            Value::Matrix(m) => Some((m.data(), true)),
            _ => None,
        }
    }

    /// Underlying primitive of a boxed value; any other value is its own primitive.
    pub fn value_of(&self) -> &Value {
        match self {
            Value::Boxed(inner) => inner,
            other => other,
        }
    }

    pub fn boxed(inner: impl Into<Value>) -> Self {
        Value::Boxed(Box::new(inner.into()))
    }

    /// Wrap raw data in a matrix container when `wrap` is set.
    pub(crate) fn collection(data: Vec<Value>, wrap: bool) -> Self {
        if wrap { Value::Matrix(Matrix::new(data)) } else { Value::Array(data) }
    }

    /// Rewrap an array result in a matrix container; scalars pass through.
    pub(crate) fn rewrap(self) -> Self {
        match self {
            Value::Array(data) => Value::Matrix(Matrix::new(data)),
            other => other,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<Complex> for Value {
    fn from(z: Complex) -> Self {
        Value::Complex(z)
    }
}

impl From<Unit> for Value {
    fn from(u: Unit) -> Self {
        Value::Unit(u)
    }
}

impl From<Matrix> for Value {
    fn from(m: Matrix) -> Self {
        Value::Matrix(m)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_and_composites() {
        assert!(Kind::COLLECTION.contains(Value::from(vec![1.0]).kind()));
        assert!(!Kind::COLLECTION.contains(Value::from("x").kind()));
        assert_eq!(Kind::UNIT.to_string(), "unit");
    }

    #[test]
    fn nested_from_vec() {
        let v = Value::from(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let rows = v.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], Value::from(vec![3.0, 4.0]));
    }

    #[test]
    fn value_of_unwraps_one_level() {
        let b = Value::boxed(3.0);
        assert_eq!(b.value_of(), &Value::Number(3.0));
        assert_eq!(Value::Number(1.0).value_of(), &Value::Number(1.0));
        assert_eq!(Value::from(false).as_real(), Some(0.0));
    }
}
