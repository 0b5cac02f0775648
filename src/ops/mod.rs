//! Arithmetic operators over [`Value`].
//!
//! The free functions use a shared default [`Multiplier`]; build your own
//! context to change the empty-sum policy, parallelism or addition operator.

use std::sync::OnceLock;

use crate::context::Multiplier;
use crate::error::MulError;
use crate::types::Value;

pub mod add;
pub use add::add;

pub mod complex;
pub use complex::multiply_complex;

pub mod conj;
pub use conj::conj;

pub mod matmul;
pub mod multiply;

fn default_multiplier() -> &'static Multiplier {
    static DEFAULT: OnceLock<Multiplier> = OnceLock::new();
    DEFAULT.get_or_init(Multiplier::new)
}

/// Multiply two values with the default context.
pub fn multiply(x: &Value, y: &Value) -> Result<Value, MulError> {
    default_multiplier().multiply(x, y)
}

/// Multiply an argument list, which must hold exactly two values.
pub fn multiply_args(args: &[Value]) -> Result<Value, MulError> {
    default_multiplier().multiply_args(args)
}
