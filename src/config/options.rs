//! API options for the multiplication operator.
//!
//! This module provides the `MulOptions` struct, which controls how sums
//! over an empty inner dimension are resolved and when the matrix-matrix
//! product computes its rows on the Rayon thread pool.

use crate::error::MulError;
use crate::types::Value;

/// What a sum with no terms evaluates to (e.g. the dot product of two empty vectors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptySumPolicy {
    /// The conventional empty sum, `0`.
    #[default]
    Zero,
    /// Fail with `MulError::EmptyProduct`.
    Strict,
}

impl EmptySumPolicy {
    pub fn resolve(self) -> Result<Value, MulError> {
        match self {
            EmptySumPolicy::Zero => Ok(Value::Number(0.0)),
            EmptySumPolicy::Strict => Err(MulError::EmptyProduct),
        }
    }
}

/// Multiplication options.
#[derive(Debug, Clone)]
pub struct MulOptions {
    /// Result of a sum with no terms
    pub empty_sum: EmptySumPolicy,

    /// Worker threads for the parallel matrix-matrix product
    pub threads: usize,

    /// Minimum row count of the left operand before rows are computed in parallel
    pub parallel_min_rows: usize,
}

impl Default for MulOptions {
    fn default() -> Self {
        Self {
            empty_sum: EmptySumPolicy::default(),
            #[cfg(feature = "rayon")]
            threads: num_cpus::get(),
            #[cfg(not(feature = "rayon"))]
            threads: 1,
            parallel_min_rows: 64,
        }
    }
}
