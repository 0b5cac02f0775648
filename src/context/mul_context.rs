//! Context for the multiplication operator.
//!
//! `Multiplier` bundles the options that shape the operator's edge behaviour
//! with the addition operator used to accumulate partial sums. The dispatch
//! itself lives in [`crate::ops::multiply`]; this module only holds state.
//!
//! # Usage
//!
//! 1. Construct a `Multiplier` (defaults, custom `MulOptions`, or a custom `AddOp`).
//! 2. Call `multiply` or `multiply_args`.
//!
//! # Example
//! ```rust,ignore
//! use polymul::{Multiplier, MulOptions, EmptySumPolicy, Value};
//! let strict = Multiplier::with_options(MulOptions { empty_sum: EmptySumPolicy::Strict, ..Default::default() });
//! let dot = strict.multiply(&Value::from(vec![1.0, 2.0]), &Value::from(vec![3.0, 4.0]))?;
//! ```

#[cfg(feature = "rayon")]
use std::sync::OnceLock;

use crate::config::MulOptions;
use crate::core::traits::AddOp;

/// Multiplication context: options plus the accumulation operator.
#[derive(Debug)]
pub struct Multiplier<A = ()> {
    /// Edge-case and parallelism options
    pub options: MulOptions,
    /// Addition used for matrix-product partial sums
    pub adder: A,
    #[cfg(feature = "rayon")]
    pool: OnceLock<Option<rayon::ThreadPool>>,
}

impl Multiplier<()> {
    pub fn new() -> Self {
        Self::with_options(MulOptions::default())
    }

    pub fn with_options(options: MulOptions) -> Self {
        Self::with_adder(options, ())
    }
}

impl Default for Multiplier<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: AddOp> Multiplier<A> {
    pub fn with_adder(options: MulOptions, adder: A) -> Self {
        Self {
            options,
            adder,
            #[cfg(feature = "rayon")]
            pool: OnceLock::new(),
        }
    }

    /// Thread pool for the parallel matrix-matrix product, built on first use
    /// with `options.threads` workers. `None` falls back to Rayon's global pool.
    #[cfg(feature = "rayon")]
    pub(crate) fn pool(&self) -> Option<&rayon::ThreadPool> {
        self.pool
            .get_or_init(|| {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(self.options.threads)
                    .build()
                    .ok()
            })
            .as_ref()
    }
}
