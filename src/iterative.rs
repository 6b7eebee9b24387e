//! Iterative radix-2 Cooley-Tukey FFT.
//!
//! The input is copied in bit-reversed order and the butterfly stages are applied in place on
//! that private copy.  This is the kernel behind Bluestein's algorithm.

use crate::complex::{twiddle, Complex};
use crate::error::{FftError, Result};
use crate::fft::Transform;
use crate::float::{from_usize, FftFloat};
use crate::sequence;

/// Apply an iterative radix-2 FFT or IFFT, returning a new sequence.
///
/// The length must be a power of two.  The input is never modified.
pub fn transform<T: FftFloat>(
    input: &[Complex<T>],
    transform: Transform,
) -> Result<Vec<Complex<T>>> {
    sequence::validate_length(input.len())?;
    if !input.len().is_power_of_two() {
        return Err(FftError::not_power_of_two(input.len()));
    }
    let mut work = sequence::bit_reverse_permute(input)?;
    butterflies(&mut work, transform);
    if !transform.is_forward() {
        let scale = from_usize::<T>(work.len());
        for x in work.iter_mut() {
            *x = x.unscale(scale);
        }
    }
    Ok(work)
}

/// Apply an iterative radix-2 FFT.
pub fn fft<T: FftFloat>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
    transform(input, Transform::Fft)
}

/// Apply an iterative radix-2 IFFT.
pub fn ifft<T: FftFloat>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
    transform(input, Transform::Ifft)
}

/// Applies every butterfly stage to bit-reversed `data`, without scaling.
fn butterflies<T: FftFloat>(data: &mut [Complex<T>], transform: Transform) {
    let size = data.len();
    let mut m = 2;
    while m <= size {
        let half = m / 2;
        let wm = twiddle::<T>(1, m, transform);
        for block in data.chunks_exact_mut(m) {
            let (lower, upper) = block.split_at_mut(half);
            let mut w = Complex::new(T::one(), T::zero());
            for (u, v) in lower.iter_mut().zip(upper.iter_mut()) {
                let t = w * *v;
                let a = *u;
                *u = a + t;
                *v = a - t;
                w = w * wm;
            }
        }
        m *= 2;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dft;

    fn near(actual: &[Complex<f64>], expected: &[Complex<f64>]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).norm() < 1e-10, "{} != {}", a, e);
        }
    }

    #[test]
    fn unit_128_forward() {
        let mut input = vec![Complex::new(0f64, 0f64); 128];
        input[0] = Complex::new(1f64, 0f64);
        let output = fft(&input).unwrap();
        for x in output {
            assert!((x - 1.0).norm() < 1e-10);
        }
    }

    #[test]
    fn unit_128_inverse() {
        let input = vec![Complex::new(1f64, 0f64); 128];
        let output = ifft(&input).unwrap();
        assert!((output[0] - 1.0).norm() < 1e-10);
        for x in output.iter().skip(1) {
            assert!(x.norm() < 1e-10);
        }
    }

    #[test]
    fn input_is_not_modified() {
        let input = (0..8).map(|i| Complex::new(i as f64, 1.0)).collect::<Vec<_>>();
        let copy = input.clone();
        let _ = fft(&input).unwrap();
        assert_eq!(input, copy);
    }

    #[test]
    fn matches_dft() {
        let input = [2.31, 5.4, 7.278, 0.76, 54.99, 6.81, 13.31, 9.67]
            .iter()
            .map(|x| Complex::new(*x, 0.0))
            .collect::<Vec<_>>();
        let spectrum = fft(&input).unwrap();
        near(&spectrum, &dft::fft(&input).unwrap());
        near(&ifft(&spectrum).unwrap(), &input);
    }

    #[test]
    fn rejects_non_power_of_two() {
        assert!(matches!(
            fft(&[Complex::new(1.0f64, 0.0); 3]),
            Err(FftError::InvalidLength { len: 3, .. })
        ));
    }
}
