//! Direct discrete Fourier transform.
//!
//! This is the O(N^2) reference implementation that the fast algorithms are validated against.
//! It accepts any nonzero length.

use crate::complex::{twiddle, Complex};
use crate::error::Result;
use crate::fft::Transform;
use crate::float::{from_usize, FftFloat};
use crate::sequence;

/// Apply a DFT or inverse DFT, returning a new sequence.
pub fn transform<T: FftFloat>(
    input: &[Complex<T>],
    transform: Transform,
) -> Result<Vec<Complex<T>>> {
    let size = input.len();
    sequence::validate_length(size)?;
    let mut output = sequence::allocate(size)?;
    let scale = from_usize::<T>(size);
    for k in 0..size {
        let mut sum = Complex::<T>::default();
        for (n, x) in input.iter().enumerate() {
            sum += x * twiddle::<T>(n * k % size, size, transform);
        }
        if !transform.is_forward() {
            sum = sum.unscale(scale);
        }
        output.push(sum);
    }
    Ok(output)
}

/// Apply a DFT.
pub fn fft<T: FftFloat>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
    transform(input, Transform::Fft)
}

/// Apply an inverse DFT.
pub fn ifft<T: FftFloat>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
    transform(input, Transform::Ifft)
}

#[cfg(test)]
mod test {
    use super::*;

    fn near(actual: &[Complex<f64>], expected: &[Complex<f64>]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).norm() < 1e-12, "{} != {}", a, e);
        }
    }

    #[test]
    fn unit_impulse() {
        let mut input = vec![Complex::new(0f64, 0f64); 4];
        input[0] = Complex::new(1f64, 0f64);
        near(&fft(&input).unwrap(), &[Complex::new(1.0, 0.0); 4]);
    }

    #[test]
    fn alternating() {
        let input = [1.0, -1.0, 1.0, -1.0].map(|x| Complex::new(x, 0.0));
        near(
            &fft(&input).unwrap(),
            &[0.0, 0.0, 4.0, 0.0].map(|x| Complex::new(x, 0.0)),
        );
    }

    #[test]
    fn size_one_is_identity() {
        let input = [Complex::new(2.5, -1.0)];
        assert_eq!(fft(&input).unwrap(), input);
        assert_eq!(ifft(&input).unwrap(), input);
    }

    #[test]
    fn inverse_is_scaled() {
        let input = vec![Complex::new(1f64, 0f64); 5];
        let output = ifft(&input).unwrap();
        near(&output[..1], &[Complex::new(1.0, 0.0)]);
        near(&output[1..], &[Complex::default(); 4]);
    }
}
