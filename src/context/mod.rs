//! Context module for polymul.
//!
//! Contexts hold operator configuration and the collaborators the operator
//! consumes (currently the addition operator).
//!
//! Modules:
//! - [`mul_context`]: Contains the `Multiplier` struct.

pub mod mul_context;
pub use mul_context::Multiplier;
