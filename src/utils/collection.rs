//! Deep structural maps over nested collections.
//!
//! Arrays and matrix containers are walked recursively and rebuilt with the
//! same nesting; matrix containers come back as containers.

use crate::error::MulError;
use crate::types::Value;
use crate::utils::dimensions::Shape;

/// Apply `f` to every leaf pair of `x` and `y`, preserving nesting.
///
/// Two collections are zipped and must have equal lengths at every level.
/// A collection paired with a non-collection maps over the collection while
/// holding the other operand fixed. Argument order to `f` is preserved.
pub fn deep_map2<F>(x: &Value, y: &Value, f: &F) -> Result<Value, MulError>
where
    F: Fn(&Value, &Value) -> Result<Value, MulError>,
{
    match (x.as_collection(), y.as_collection()) {
        (Some((a, wrap_a)), Some((b, wrap_b))) => {
            if a.len() != b.len() {
                return Err(MulError::SizeMismatch { left: Shape::of(a)?, right: Shape::of(b)? });
            }
            let data = a
                .iter()
                .zip(b)
                .map(|(p, q)| deep_map2(p, q, f))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::collection(data, wrap_a || wrap_b))
        }
        (Some((a, wrap)), None) => {
            let data = a.iter().map(|p| deep_map2(p, y, f)).collect::<Result<Vec<_>, _>>()?;
            Ok(Value::collection(data, wrap))
        }
        (None, Some((b, wrap))) => {
            let data = b.iter().map(|q| deep_map2(x, q, f)).collect::<Result<Vec<_>, _>>()?;
            Ok(Value::collection(data, wrap))
        }
        (None, None) => f(x, y),
    }
}

/// Apply `f` to every leaf of `x`, preserving nesting.
pub fn deep_map<F>(x: &Value, f: &F) -> Value
where
    F: Fn(&Value) -> Value,
{
    match x.as_collection() {
        Some((data, wrap)) => Value::collection(data.iter().map(|v| deep_map(v, f)).collect(), wrap),
        None => f(x),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix;

    fn pair(x: &Value, y: &Value) -> Result<Value, MulError> {
        Ok(Value::from(vec![x.clone(), y.clone()]))
    }

    #[test]
    fn broadcast_keeps_order_and_shape() {
        let x = Value::from(vec![vec![1.0], vec![2.0]]);
        let y = Value::Number(9.0);
        let left = deep_map2(&x, &y, &pair).unwrap();
        assert_eq!(left, Value::from(vec![vec![vec![1.0, 9.0]], vec![vec![2.0, 9.0]]]));
        let right = deep_map2(&y, &x, &pair).unwrap();
        assert_eq!(right, Value::from(vec![vec![vec![9.0, 1.0]], vec![vec![9.0, 2.0]]]));
    }

    #[test]
    fn zips_equal_lengths_and_rewraps() {
        let x = Value::Matrix(Matrix::from(vec![1.0, 2.0]));
        let y = Value::from(vec![3.0, 4.0]);
        let sum = deep_map2(&x, &y, &|a, b| Ok(Value::Number(a.as_real().unwrap() + b.as_real().unwrap()))).unwrap();
        assert_eq!(sum, Value::Matrix(Matrix::from(vec![4.0, 6.0])));
    }

    #[test]
    fn unequal_lengths_fail() {
        let x = Value::from(vec![1.0, 2.0]);
        let y = Value::from(vec![1.0]);
        let err = deep_map2(&x, &y, &pair).unwrap_err();
        assert!(matches!(err, MulError::SizeMismatch { .. }));
    }

    #[test]
    fn unary_map() {
        let x = Value::from(vec![vec![1.0, -2.0]]);
        let neg = deep_map(&x, &|v| Value::Number(-v.as_real().unwrap()));
        assert_eq!(neg, Value::from(vec![vec![-1.0, 2.0]]));
    }
}
