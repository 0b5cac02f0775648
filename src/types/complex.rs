//! Complex number value.
//!
//! A `Complex` is an immutable `(re, im)` pair of `f64`. Arithmetic never
//! mutates an existing instance; every operation builds a new one.

use std::fmt;

use num_traits::Zero;

/// Complex number with real and imaginary parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    /// Create a new complex number from real and imaginary parts.
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Complex number with a zero imaginary part.
    #[inline]
    pub const fn from_real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// Imaginary unit i
    #[inline]
    pub const fn i() -> Self {
        Self { re: 0.0, im: 1.0 }
    }

    #[inline]
    pub fn re(&self) -> f64 {
        self.re
    }

    #[inline]
    pub fn im(&self) -> f64 {
        self.im
    }

    /// Complex conjugate: conj(a + bi) = a - bi
    #[inline]
    pub fn conj(&self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Imaginary part is exactly zero.
    #[inline]
    pub fn is_pure_real(&self) -> bool {
        self.im.is_zero()
    }

    /// Real part is exactly zero and the imaginary part is not.
    #[inline]
    pub fn is_pure_imaginary(&self) -> bool {
        self.re.is_zero() && !self.im.is_zero()
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < 0.0 {
            write!(f, "{} - {}i", self.re, -self.im)
        } else {
            write!(f, "{} + {}i", self.re, self.im)
        }
    }
}
