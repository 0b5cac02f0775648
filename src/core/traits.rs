//! Core operator traits for polymul.

use crate::error::MulError;
use crate::types::Value;
use crate::utils::dimensions::Shape;

/// Addition used to accumulate partial sums in the matrix products.
///
/// Must be total over any two values `multiply` can produce.
pub trait AddOp {
    /// Compute a + b.
    fn add(&self, a: &Value, b: &Value) -> Result<Value, MulError>;
}

/// Shape inspection for vector/matrix data.
pub trait Shaped {
    /// Extents per axis.
    fn shape(&self) -> Result<Shape, MulError>;

    /// Number of axes.
    fn rank(&self) -> Result<usize, MulError> {
        self.shape().map(|s| s.rank())
    }
}
