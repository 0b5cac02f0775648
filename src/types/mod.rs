//! Value types: scalars, complex numbers, units and the `Value` variant.

pub mod complex;
pub use complex::Complex;
pub mod unit;
pub use unit::Unit;
pub mod value;
pub use value::{Kind, Value};
