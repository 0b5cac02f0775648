//! Trait implementations for the crate's concrete types.
//!
//! `()` is the default addition operator, delegating to [`crate::ops::add`].
//! Raw arrays and matrix containers get shape inspection.

use crate::core::traits::{AddOp, Shaped};
use crate::error::MulError;
use crate::matrix::Matrix;
use crate::types::Value;
use crate::utils::dimensions::Shape;

/// Default accumulation operator: the polymorphic `add`.
impl AddOp for () {
    fn add(&self, a: &Value, b: &Value) -> Result<Value, MulError> {
        crate::ops::add(a, b)
    }
}

impl Shaped for [Value] {
    fn shape(&self) -> Result<Shape, MulError> {
        Shape::of(self)
    }
}

impl Shaped for Vec<Value> {
    fn shape(&self) -> Result<Shape, MulError> {
        Shape::of(self)
    }
}

impl Shaped for Matrix {
    fn shape(&self) -> Result<Shape, MulError> {
        self.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_adder_delegates_to_add() {
        assert_eq!(().add(&Value::Number(1.0), &Value::Number(2.0)), Ok(Value::Number(3.0)));
    }

    #[test]
    fn shapes_of_arrays_and_containers() {
        let rows = vec![Value::from(vec![1.0, 2.0]), Value::from(vec![3.0, 4.0])];
        assert_eq!(rows.rank(), Ok(2));
        assert_eq!(rows[..1].shape().map(|s| s.dims().to_vec()), Ok(vec![1, 2]));
        assert_eq!(Matrix::new(rows).shape(), Ok(Shape::new(vec![2, 2])));
    }
}
