// Polymorphic addition, used to accumulate matrix-product partial sums.

use crate::error::MulError;
use crate::types::{Complex, Kind, Value};
use crate::utils::collection::deep_map2;

/// Add two values: `x + y`.
///
/// Collections are added element-wise (equal sizes required) or broadcast
/// against a scalar. Adding anything to a complex number yields a complex
/// number; units add when their dimension tags match.
pub fn add(x: &Value, y: &Value) -> Result<Value, MulError> {
    if Kind::COLLECTION.intersects(x.kind() | y.kind()) {
        return deep_map2(x, y, &add);
    }
    match (x, y) {
        (Value::Complex(a), Value::Complex(b)) => Ok(complex_sum(*a, *b)),
        (Value::Unit(a), Value::Unit(b)) => a.checked_add(b).map(Value::Unit).ok_or_else(|| MulError::UnitMismatch {
            left: a.name().to_owned(),
            right: b.name().to_owned(),
        }),
        _ => match (x.as_real(), y.as_real(), x, y) {
            (Some(a), Some(b), _, _) => Ok(Value::Number(a + b)),
            (Some(a), None, _, Value::Complex(b)) => Ok(complex_sum(Complex::from_real(a), *b)),
            (None, Some(b), Value::Complex(a), _) => Ok(complex_sum(*a, Complex::from_real(b))),
            _ if (x.kind() | y.kind()).intersects(Kind::BOXED) => add(x.value_of(), y.value_of()),
            _ => Err(MulError::UnsupportedType { name: "add", left: x.kind(), right: y.kind() }),
        },
    }
}

fn complex_sum(a: Complex, b: Complex) -> Value {
    Value::Complex(Complex::new(a.re() + b.re(), a.im() + b.im()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix;
    use crate::types::Unit;

    #[test]
    fn scalars_and_complex() {
        assert_eq!(add(&Value::from(2.0), &Value::from(true)), Ok(Value::Number(3.0)));
        assert_eq!(
            add(&Value::from(1.0), &Value::Complex(Complex::new(0.0, 2.0))),
            Ok(Value::Complex(Complex::new(1.0, 2.0)))
        );
        assert_eq!(
            add(&Value::Complex(Complex::new(1.0, -2.0)), &Value::Complex(Complex::new(1.0, 2.0))),
            Ok(Value::Complex(Complex::new(2.0, 0.0)))
        );
    }

    #[test]
    fn units_need_matching_tags() {
        let a = Value::Unit(Unit::new(1.0, "mm"));
        let b = Value::Unit(Unit::new(2.0, "mm"));
        assert_eq!(add(&a, &b), Ok(Value::Unit(Unit::new(3.0, "mm"))));
        let c = Value::Unit(Unit::new(2.0, "s"));
        assert_eq!(add(&a, &c), Err(MulError::UnitMismatch { left: "mm".into(), right: "s".into() }));
    }

    #[test]
    fn collections_element_wise() {
        let x = Value::from(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let y = Value::Matrix(Matrix::from(vec![vec![10.0, 20.0], vec![30.0, 40.0]]));
        assert_eq!(
            add(&x, &y),
            Ok(Value::Matrix(Matrix::from(vec![vec![11.0, 22.0], vec![33.0, 44.0]])))
        );
        assert_eq!(add(&x, &Value::from(1.0)), Ok(Value::from(vec![vec![2.0, 3.0], vec![4.0, 5.0]])));
        assert!(matches!(add(&x, &Value::from(vec![1.0])), Err(MulError::SizeMismatch { .. })));
    }

    #[test]
    fn rejects_strings() {
        assert_eq!(
            add(&Value::from("a"), &Value::from(1.0)),
            Err(MulError::UnsupportedType { name: "add", left: Kind::STRING, right: Kind::NUMBER })
        );
        assert_eq!(add(&Value::boxed(1.0), &Value::boxed(2.0)), Ok(Value::Number(3.0)));
    }
}
