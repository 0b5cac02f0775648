// Complex conjugate, element-wise over collections.

use crate::types::Value;
use crate::utils::collection::deep_map;

/// Complex conjugate of `x`.
///
/// Complex numbers get their imaginary part negated, collections are mapped
/// element-wise and boxed values are unwrapped. Numbers, booleans and any
/// other value are returned as a copy.
pub fn conj(x: &Value) -> Value {
    match x {
        Value::Complex(z) => Value::Complex(z.conj()),
        Value::Array(_) | Value::Matrix(_) => deep_map(x, &conj),
        Value::Boxed(inner) => conj(inner),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix;
    use crate::types::{Complex, Unit};

    #[test]
    fn conjugates_leaves() {
        assert_eq!(conj(&Value::Complex(Complex::new(2.0, 3.0))), Value::Complex(Complex::new(2.0, -3.0)));
        assert_eq!(conj(&Value::from(true)), Value::Boolean(true));
        assert_eq!(conj(&Value::from(-2.5)), Value::Number(-2.5));
        assert_eq!(conj(&Value::boxed(Complex::i())), Value::Complex(Complex::new(0.0, -1.0)));
        let u = Value::Unit(Unit::new(1.0, "m"));
        assert_eq!(conj(&u), u);
    }

    #[test]
    fn maps_collections() {
        let m = Value::Matrix(Matrix::new(vec![Value::Complex(Complex::new(1.0, 1.0)), Value::Number(2.0)]));
        assert_eq!(
            conj(&m),
            Value::Matrix(Matrix::new(vec![Value::Complex(Complex::new(1.0, -1.0)), Value::Number(2.0)]))
        );
    }
}
