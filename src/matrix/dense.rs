//! Matrix container on top of raw nested arrays, with Faer interop.
//!
//! A [`Matrix`] owns a raw nested sequence and tags it as matrix-shaped.
//! Operators unwrap it by borrowing [`Matrix::data`] and rewrap results with
//! [`Matrix::new`]. Numeric rank-2 containers convert to and from `faer::Mat`.

use faer::Mat;
use num_traits::ToPrimitive;

use crate::error::MulError;
use crate::types::{Kind, Value};
use crate::utils::dimensions::{Shape, Side};

/// Container carrying matrix semantics around a raw nested sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matrix {
    data: Vec<Value>,
}

impl Matrix {
    pub fn new(data: Vec<Value>) -> Self {
        Self { data }
    }

    /// Raw nested sequence.
    pub fn data(&self) -> &[Value] {
        &self.data
    }

    /// Extents per axis; fails on ragged data.
    pub fn size(&self) -> Result<Shape, MulError> {
        Shape::of(&self.data)
    }

    /// Build a rank-2 container from a Faer dense matrix.
    pub fn from_faer<T: Copy + ToPrimitive>(m: &Mat<T>) -> Self {
        let rows = (0..m.nrows())
            .map(|i| {
                let row = (0..m.ncols())
                    .map(|j| Value::Number(m[(i, j)].to_f64().unwrap_or(f64::NAN)))
                    .collect();
                Value::Array(row)
            })
            .collect();
        Self { data: rows }
    }

    /// Copy a numeric rank-2 container into a Faer dense matrix.
    ///
    /// Booleans coerce to 0/1; any other cell kind is rejected.
    pub fn to_faer(&self) -> Result<Mat<f64>, MulError> {
        let shape = self.size()?;
        if shape.rank() != 2 {
            return Err(MulError::UnsupportedRank { rank: shape.rank(), side: Side::Left });
        }
        let (nrows, ncols) = (shape.extent(0), shape.extent(1));
        let mut out = Mat::<f64>::zeros(nrows, ncols);
        for (i, row) in self.data.iter().enumerate() {
            for (j, cell) in row.as_array().unwrap_or_default().iter().enumerate() {
                out[(i, j)] = cell.as_real().ok_or(MulError::UnsupportedType {
                    name: "to_faer",
                    left: cell.kind(),
                    right: Kind::NUMBER,
                })?;
            }
        }
        Ok(out)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Matrix {
    fn from(items: Vec<T>) -> Self {
        Self { data: items.into_iter().map(Into::into).collect() }
    }
}
