//! Shape inspection & dimension checks for vector/matrix products.
//!
//! [`Shape::of`] computes the per-axis extents of a raw nested array and
//! rejects ragged input. [`check_product`] decides which product a pair of
//! shapes calls for and checks that the inner extents agree.

use std::fmt;

use crate::error::MulError;
use crate::types::Value;

/// Per-axis extents of a nested array. `rank()` is the number of axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape(Vec<usize>);

impl Shape {
    pub fn new(dims: Vec<usize>) -> Self {
        Shape(dims)
    }

    /// Shape of a raw nested sequence.
    ///
    /// Extents are read along the first element of every level; the whole
    /// structure is then checked against them, so rows of unequal length or
    /// mixed array/leaf siblings fail with `RaggedArray`.
    pub fn of(data: &[Value]) -> Result<Self, MulError> {
        let mut dims = vec![data.len()];
        let mut level = data;
        while let Some(Value::Array(inner)) = level.first() {
            dims.push(inner.len());
            level = inner;
        }
        check_level(data, &dims, 0)?;
        Ok(Shape(dims))
    }

    pub fn rank(&self) -> usize {
        self.0.len()
    }

    pub fn dims(&self) -> &[usize] {
        &self.0
    }

    /// Extent along `axis`, 0 if the axis does not exist.
    pub fn extent(&self, axis: usize) -> usize {
        self.0.get(axis).copied().unwrap_or(0)
    }
}

fn check_level(level: &[Value], dims: &[usize], axis: usize) -> Result<(), MulError> {
    if level.len() != dims[axis] {
        return Err(MulError::RaggedArray { axis });
    }
    let leaf = axis + 1 == dims.len();
    for item in level {
        match (item, leaf) {
            (Value::Array(inner), false) => check_level(inner, dims, axis + 1)?,
            (Value::Array(_), true) | (_, false) => return Err(MulError::RaggedArray { axis: axis + 1 }),
            (_, true) => {}
        }
    }
    Ok(())
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dims: Vec<String> = self.0.iter().map(|d| d.to_string()).collect();
        write!(f, "[{}]", dims.join("x"))
    }
}

/// Operand position, used when reporting a bad rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Left => "left",
            Side::Right => "right",
        })
    }
}

/// Vector/matrix product selected for a pair of shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Product {
    /// Vector(n) · Vector(n)
    Dot,
    /// Vector(n) · Matrix(n×m)
    VectorMatrix,
    /// Matrix(r×n) · Vector(n)
    MatrixVector,
    /// Matrix(r×n) · Matrix(n×m)
    MatrixMatrix,
}

impl Product {
    /// The extent constraint this product imposes.
    pub fn constraint(&self) -> &'static str {
        match self {
            Product::Dot => "length of left must match length of right",
            Product::VectorMatrix => "length of left must match rows of right",
            Product::MatrixVector => "columns of left must match length of right",
            Product::MatrixMatrix => "columns of left must match rows of right",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.constraint())
    }
}

/// Select the product for two shapes and validate their inner extents.
///
/// The left rank is checked before the right one; ranks outside {1, 2}
/// fail with `UnsupportedRank`, disagreeing extents with `DimensionMismatch`.
pub fn check_product(x: &Shape, y: &Shape) -> Result<Product, MulError> {
    let mode = match (x.rank(), y.rank()) {
        (1, 1) => Product::Dot,
        (1, 2) => Product::VectorMatrix,
        (2, 1) => Product::MatrixVector,
        (2, 2) => Product::MatrixMatrix,
        (1 | 2, rank) => return Err(MulError::UnsupportedRank { rank, side: Side::Right }),
        (rank, _) => return Err(MulError::UnsupportedRank { rank, side: Side::Left }),
    };
    let (inner_x, inner_y) = match mode {
        Product::Dot | Product::VectorMatrix => (x.extent(0), y.extent(0)),
        Product::MatrixVector | Product::MatrixMatrix => (x.extent(1), y.extent(0)),
    };
    if inner_x != inner_y {
        return Err(MulError::DimensionMismatch { left: x.clone(), right: y.clone(), constraint: mode });
    }
    Ok(mode)
}
