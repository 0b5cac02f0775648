//! Matrix module: the matrix container and Faer interop.

pub mod dense;
pub use dense::Matrix;
