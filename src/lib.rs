//! polymul: a polymorphic multiplication operator
//!
//! This crate multiplies numbers, booleans, complex numbers, units, vectors
//! and matrices (raw nested arrays or matrix containers), selecting the
//! scalar kernel, vector/matrix product or element-wise broadcast from the
//! kinds of both operands.

pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod matrix;
pub mod ops;
pub mod types;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use context::*;
pub use crate::core::{AddOp, Shaped};
pub use error::*;
pub use matrix::*;
pub use ops::{add, conj, multiply, multiply_args, multiply_complex};
pub use types::*;
pub use utils::{Product, Shape, Side};
