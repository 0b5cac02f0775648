use thiserror::Error;

use crate::types::Kind;
use crate::utils::dimensions::{Product, Shape, Side};

// Unified error type for polymul

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MulError {
    #[error("wrong number of arguments in function {name} ({actual} provided, {expected} expected)")]
    ArgumentCount {
        name: &'static str,
        actual: usize,
        expected: usize,
    },
    #[error("dimension mismatch: {constraint} (left is {left}, right is {right})")]
    DimensionMismatch {
        left: Shape,
        right: Shape,
        constraint: Product,
    },
    #[error("can only multiply a 1 or 2 dimensional matrix ({side} operand has {rank} dimensions)")]
    UnsupportedRank { rank: usize, side: Side },
    #[error("function {name}({left}, {right}) not supported")]
    UnsupportedType {
        name: &'static str,
        left: Kind,
        right: Kind,
    },
    #[error("element-wise sizes do not match (left is {left}, right is {right})")]
    SizeMismatch { left: Shape, right: Shape },
    #[error("units do not match ({left} vs {right})")]
    UnitMismatch { left: String, right: String },
    #[error("ragged nested array at axis {axis}")]
    RaggedArray { axis: usize },
    #[error("sum over an empty inner dimension is undefined")]
    EmptyProduct,
}
