//! Complex arithmetic.
//!
//! Addition, subtraction, multiplication, division and conjugation are the
//! [`Complex`] operators and [`Complex::conj`].  Division by zero is not
//! guarded and follows IEEE semantics.

use crate::fft::Transform;
use crate::float::{from_f64, FftFloat};
pub use num_complex::Complex;

/// Returns `cos(theta) + i sin(theta)`.
#[inline]
pub fn polar_exp<T: FftFloat>(theta: T) -> Complex<T> {
    Complex::new(theta.cos(), theta.sin())
}

/// Returns `sqrt(re^2 + im^2)`.
#[inline]
pub fn magnitude<T: FftFloat>(x: Complex<T>) -> T {
    (x.re * x.re + x.im * x.im).sqrt()
}

/// Returns `ln(1 + |x|)`, the amplitude used when rendering spectra.
#[inline]
pub fn log_amplitude<T: FftFloat>(x: Complex<T>) -> T {
    magnitude(x).ln_1p()
}

/// Computes `exp(s 2 pi i index / size)` where `s` is the sign of the transform.
pub(crate) fn twiddle<T: FftFloat>(index: usize, size: usize, transform: Transform) -> Complex<T> {
    let index = (index as u128 % size as u128) as f64;
    let theta = transform.sign() * 2.0 * core::f64::consts::PI * index / size as f64;
    polar_exp(from_f64(theta))
}

/// Computes `exp(s pi i index / size)` where `s` is the sign of the transform.
pub(crate) fn half_twiddle<T: FftFloat>(
    index: usize,
    size: usize,
    transform: Transform,
) -> Complex<T> {
    let theta = transform.sign() * core::f64::consts::PI * index as f64 / size as f64;
    polar_exp(from_f64(theta))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn arithmetic() {
        let x = Complex::new(1.0, 2.0);
        let y = Complex::new(3.0, -1.0);
        assert_eq!(x + y, Complex::new(4.0, 1.0));
        assert_eq!(x - y, Complex::new(-2.0, 3.0));
        assert_eq!(x * y, Complex::new(5.0, 5.0));
        let q = (x * y) / y;
        assert!((q - x).norm() < 1e-12);
        assert_eq!(x.conj(), Complex::new(1.0, -2.0));
    }

    #[test]
    fn division_by_zero_is_not_finite() {
        let q = Complex::new(1.0, 1.0) / Complex::new(0.0f64, 0.0);
        assert!(!q.re.is_finite());
        assert!(!q.im.is_finite());
    }

    #[test]
    fn polar_and_magnitude() {
        let z = polar_exp(core::f64::consts::FRAC_PI_2);
        assert!(z.re.abs() < 1e-15);
        assert!((z.im - 1.0).abs() < 1e-15);
        assert_eq!(magnitude(Complex::new(3.0, 4.0)), 5.0);
        assert_eq!(log_amplitude(Complex::new(0.0f64, 0.0)), 0.0);
        assert!((log_amplitude(Complex::new(3.0f64, 4.0)) - 6f64.ln()).abs() < 1e-15);
    }

    #[test]
    fn twiddles_are_reduced() {
        let a: Complex<f64> = twiddle(1, 4, Transform::Fft);
        let b: Complex<f64> = twiddle(5, 4, Transform::Fft);
        assert_eq!(a, b);
        assert!((a - Complex::new(0.0, -1.0)).norm() < 1e-15);
        let c: Complex<f64> = half_twiddle(1, 2, Transform::Ifft);
        assert!((c - Complex::new(0.0, 1.0)).norm() < 1e-15);
    }
}
