//! Complex multiplication kernel.
//!
//! Each operand is classified as pure real (`im == 0`), pure imaginary
//! (`re == 0`, `im != 0`) or mixed, and only the terms that can be non-zero
//! are computed. The closed form `(ac - bd, ad + bc)` would evaluate
//! `0 * inf` terms and turn e.g. `i * inf` into `NaN + inf i`.
//!
//! Real × real and imaginary × imaginary degrade to a plain number.

use crate::types::{Complex, Value};

/// Compute x · y.
pub fn multiply_complex(x: Complex, y: Complex) -> Value {
    let (xr, xi, yr, yi) = (x.re(), x.im(), y.re(), y.im());

    if x.is_pure_real() {
        if y.is_pure_real() {
            Value::Number(xr * yr)
        } else if y.is_pure_imaginary() {
            Value::Complex(Complex::new(0.0, xr * yi))
        } else {
            Value::Complex(Complex::new(xr * yr, xr * yi))
        }
    } else if x.is_pure_imaginary() {
        if y.is_pure_real() {
            Value::Complex(Complex::new(0.0, xi * yr))
        } else if y.is_pure_imaginary() {
            Value::Number(-xi * yi)
        } else {
            Value::Complex(Complex::new(-xi * yi, xi * yr))
        }
    } else if y.is_pure_real() {
        Value::Complex(Complex::new(xr * yr, xi * yr))
    } else if y.is_pure_imaginary() {
        Value::Complex(Complex::new(-xi * yi, xr * yi))
    } else {
        Value::Complex(Complex::new(xr * yr - xi * yi, xr * yi + xi * yr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex {
        Complex::new(re, im)
    }

    #[test]
    fn nine_branches() {
        let real = c(2.0, 0.0);
        let imag = c(0.0, 2.0);
        let mixed = c(2.0, 2.0);

        assert_eq!(multiply_complex(real, real), Value::Number(4.0));
        assert_eq!(multiply_complex(real, imag), Value::Complex(c(0.0, 4.0)));
        assert_eq!(multiply_complex(real, mixed), Value::Complex(c(4.0, 4.0)));
        assert_eq!(multiply_complex(imag, real), Value::Complex(c(0.0, 4.0)));
        assert_eq!(multiply_complex(imag, imag), Value::Number(-4.0));
        assert_eq!(multiply_complex(imag, mixed), Value::Complex(c(-4.0, 4.0)));
        assert_eq!(multiply_complex(mixed, real), Value::Complex(c(4.0, 4.0)));
        assert_eq!(multiply_complex(mixed, imag), Value::Complex(c(-4.0, 4.0)));
        assert_eq!(multiply_complex(mixed, mixed), Value::Complex(c(0.0, 8.0)));
    }

    #[test]
    fn signs_of_mixed_products() {
        assert_eq!(multiply_complex(c(2.0, 3.0), c(4.0, 5.0)), Value::Complex(c(-7.0, 22.0)));
        assert_eq!(multiply_complex(c(2.0, 3.0), c(4.0, -5.0)), Value::Complex(c(23.0, 2.0)));
        assert_eq!(multiply_complex(c(-2.0, -3.0), c(-4.0, 5.0)), Value::Complex(c(23.0, 2.0)));
        assert_eq!(multiply_complex(c(0.0, 3.0), c(0.0, -4.0)), Value::Number(12.0));
    }

    #[test]
    fn infinity_does_not_produce_nan() {
        let inf = Complex::from_real(f64::INFINITY);
        assert_eq!(multiply_complex(Complex::i(), inf), Value::Complex(c(0.0, f64::INFINITY)));
        assert_eq!(multiply_complex(inf, Complex::i()), Value::Complex(c(0.0, f64::INFINITY)));
        assert_eq!(
            multiply_complex(c(f64::INFINITY, 0.0), c(0.0, -1.0)),
            Value::Complex(c(0.0, f64::NEG_INFINITY))
        );
    }
}
