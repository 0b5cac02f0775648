//! Vector and matrix products over raw nested arrays.
//!
//! Shapes must already have passed [`crate::utils::check_product`]. Every
//! cell is a sum of per-element products taken in ascending index order:
//! the product comes from the dispatcher and the running total from the
//! context's `AddOp`, seeded by the first term. A sum with no terms is
//! resolved by `MulOptions::empty_sum`.
//!
//! The matrix-matrix product computes rows on the Rayon pool once the left
//! operand has `parallel_min_rows` rows. Rows are independent and the
//! summation order inside a cell is unchanged, so both paths give identical
//! results.

use log::debug;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::context::Multiplier;
use crate::core::traits::AddOp;
use crate::error::MulError;
use crate::types::Value;

impl<A: AddOp + Sync> Multiplier<A> {
    /// Sum of `multiply(a, b)` over the pairs, left to right.
    fn accumulate<'v, I>(&self, terms: I) -> Result<Value, MulError>
    where
        I: IntoIterator<Item = (&'v Value, &'v Value)>,
    {
        let mut sum: Option<Value> = None;
        for (a, b) in terms {
            let p = self.multiply(a, b)?;
            sum = Some(match sum {
                None => p,
                Some(total) => self.adder.add(&total, &p)?,
            });
        }
        match sum {
            Some(total) => Ok(total),
            None => self.options.empty_sum.resolve(),
        }
    }

    /// Vector(n) · Vector(n) → scalar.
    pub(crate) fn dot(&self, x: &[Value], y: &[Value]) -> Result<Value, MulError> {
        self.accumulate(x.iter().zip(y))
    }

    /// Vector(n) · Matrix(n×m) → Vector(m).
    pub(crate) fn vector_matrix(&self, x: &[Value], y: &[Value]) -> Result<Value, MulError> {
        let rows = rows_of(y);
        let cols = rows.first().map_or(0, |r| r.len());
        (0..cols)
            .map(|c| self.accumulate(x.iter().zip(rows.iter().map(|r| &r[c]))))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }

    /// Matrix(r×n) · Vector(n) → Vector(r).
    pub(crate) fn matrix_vector(&self, x: &[Value], y: &[Value]) -> Result<Value, MulError> {
        rows_of(x)
            .into_iter()
            .map(|row| self.accumulate(row.iter().zip(y)))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }

    /// Matrix(r×n) · Matrix(n×m) → Matrix(r×m).
    pub(crate) fn matrix_matrix(&self, x: &[Value], y: &[Value]) -> Result<Value, MulError> {
        let left = rows_of(x);
        let right = rows_of(y);
        let cols = right.first().map_or(0, |r| r.len());
        let row_product = |row: &[Value]| -> Result<Value, MulError> {
            (0..cols)
                .map(|c| self.accumulate(row.iter().zip(right.iter().map(|r| &r[c]))))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        };

        #[cfg(feature = "rayon")]
        {
            if left.len() >= self.options.parallel_min_rows {
                debug!("matrix product: {} rows on the thread pool", left.len());
                let run = || left.par_iter().map(|row| row_product(*row)).collect::<Result<Vec<_>, _>>();
                let rows = match self.pool() {
                    Some(pool) => pool.install(run),
                    None => run(),
                }?;
                return Ok(Value::Array(rows));
            }
        }

        debug!("matrix product: {} rows serial", left.len());
        left.iter()
            .map(|row| row_product(*row))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }
}

/// Rows of a validated rank-2 array.
fn rows_of(m: &[Value]) -> Vec<&[Value]> {
    m.iter().map(|row| row.as_array().unwrap_or_default()).collect()
}
