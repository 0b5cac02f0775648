//! Helpers shared by the operators: shape checks and structural maps.

pub mod collection;
pub mod dimensions;

pub use collection::{deep_map, deep_map2};
pub use dimensions::{Product, Shape, Side, check_product};
