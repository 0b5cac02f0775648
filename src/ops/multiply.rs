//! Top-level dispatch for `multiply`.
//!
//! Both operands are classified by kind and routed to one of:
//! - the vector/matrix products, after shape validation, for two arrays;
//! - container unwrap/rewrap when a matrix container is involved;
//! - an element-wise broadcast for a collection against anything else;
//! - the scalar kernels (real, complex, unit scaling) otherwise.
//!
//! Boxed primitives that match nothing are unwrapped and dispatched again.

use log::{debug, trace};

use crate::context::Multiplier;
use crate::core::traits::{AddOp, Shaped};
use crate::error::MulError;
use crate::ops::complex::multiply_complex;
use crate::types::{Complex, Kind, Value};
use crate::utils::collection::deep_map2;
use crate::utils::dimensions::{Product, check_product};

impl<A: AddOp + Sync> Multiplier<A> {
    /// Entry point for callers that pass a variable argument list.
    pub fn multiply_args(&self, args: &[Value]) -> Result<Value, MulError> {
        match args {
            [x, y] => self.multiply(x, y),
            _ => Err(MulError::ArgumentCount { name: "multiply", actual: args.len(), expected: 2 }),
        }
    }

    /// Multiply two values: `x * y`.
    pub fn multiply(&self, x: &Value, y: &Value) -> Result<Value, MulError> {
        trace!("multiply({}, {})", x.kind(), y.kind());
        match (x, y) {
            (Value::Array(a), Value::Array(b)) => self.multiply_arrays(a, b),
            (Value::Array(a), Value::Matrix(b)) => self.multiply_arrays(a, b.data()).map(Value::rewrap),
            (Value::Matrix(a), Value::Array(b)) => self.multiply_arrays(a.data(), b).map(Value::rewrap),
            (Value::Matrix(a), Value::Matrix(b)) => self.multiply_arrays(a.data(), b.data()).map(Value::rewrap),
            (Value::Array(_) | Value::Matrix(_), _) | (_, Value::Array(_) | Value::Matrix(_)) => {
                deep_map2(x, y, &|a, b| self.multiply(a, b))
            }
            _ => self.multiply_scalars(x, y),
        }
    }

    fn multiply_arrays(&self, x: &[Value], y: &[Value]) -> Result<Value, MulError> {
        let (sx, sy) = (x.shape()?, y.shape()?);
        let product = check_product(&sx, &sy)?;
        debug!("{product:?} product of {sx} and {sy}");
        match product {
            Product::Dot => self.dot(x, y),
            Product::VectorMatrix => self.vector_matrix(x, y),
            Product::MatrixVector => self.matrix_vector(x, y),
            Product::MatrixMatrix => self.matrix_matrix(x, y),
        }
    }

    fn multiply_scalars(&self, x: &Value, y: &Value) -> Result<Value, MulError> {
        let product = match (x, y) {
            (Value::Complex(a), Value::Complex(b)) => Some(multiply_complex(*a, *b)),
            _ => match (x.as_real(), y.as_real()) {
                (Some(a), Some(b)) => Some(Value::Number(a * b)),
                (Some(a), None) => match y {
                    Value::Complex(b) => Some(multiply_complex(Complex::from_real(a), *b)),
                    Value::Unit(u) => Some(Value::Unit(u.scaled(a))),
                    _ => None,
                },
                (None, Some(b)) => match x {
                    Value::Complex(a) => Some(multiply_complex(*a, Complex::from_real(b))),
                    Value::Unit(u) => Some(Value::Unit(u.scaled(b))),
                    _ => None,
                },
                (None, None) => None,
            },
        };
        match product {
            Some(value) => Ok(value),
            None if (x.kind() | y.kind()).intersects(Kind::BOXED) => self.multiply(x.value_of(), y.value_of()),
            None => Err(MulError::UnsupportedType { name: "multiply", left: x.kind(), right: y.kind() }),
        }
    }
}
