//! Recursive radix-2 decimation-in-time Cooley-Tukey FFT.
//!
//! Each level of recursion owns its even/odd halves and the results of its two recursive calls,
//! so every buffer is dropped exactly once when its frame returns.  The inverse transform halves
//! the output at every level rather than scaling by `1 / N` at the end.

use crate::complex::{twiddle, Complex};
use crate::error::{FftError, Result};
use crate::fft::Transform;
use crate::float::FftFloat;
use crate::sequence;

/// Apply a recursive radix-2 FFT or IFFT, returning a new sequence.
///
/// The length must be a power of two.
pub fn transform<T: FftFloat>(
    input: &[Complex<T>],
    transform: Transform,
) -> Result<Vec<Complex<T>>> {
    sequence::validate_length(input.len())?;
    if !input.len().is_power_of_two() {
        return Err(FftError::not_power_of_two(input.len()));
    }
    recurse(input, transform)
}

/// Apply a recursive radix-2 FFT.
pub fn fft<T: FftFloat>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
    transform(input, Transform::Fft)
}

/// Apply a recursive radix-2 IFFT.
pub fn ifft<T: FftFloat>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
    transform(input, Transform::Ifft)
}

fn recurse<T: FftFloat>(input: &[Complex<T>], transform: Transform) -> Result<Vec<Complex<T>>> {
    let size = input.len();
    if size == 1 {
        let mut output = sequence::allocate(1)?;
        output.extend_from_slice(input);
        return Ok(output);
    }

    let half = size / 2;
    let mut even = sequence::allocate(half)?;
    let mut odd = sequence::allocate(half)?;
    for pair in input.chunks_exact(2) {
        even.push(pair[0]);
        odd.push(pair[1]);
    }

    let even = recurse(&even, transform)?;
    let odd = recurse(&odd, transform)?;

    let mut output: Vec<Complex<T>> = sequence::zeroed(size)?;
    let two = T::one() + T::one();
    for k in 0..half {
        let t = twiddle::<T>(k, size, transform) * odd[k];
        let (sum, difference) = (even[k] + t, even[k] - t);
        if transform.is_forward() {
            output[k] = sum;
            output[k + half] = difference;
        } else {
            output[k] = sum.unscale(two);
            output[k + half] = difference.unscale(two);
        }
    }
    Ok(output)
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
    fn matches_dft() {
        let input = (0..16)
            .map(|i| Complex::new((i as f64).sin(), (i as f64 * 0.3).cos()))
            .collect::<Vec<_>>();
        near(&fft(&input).unwrap(), &dft::fft(&input).unwrap());
        near(&ifft(&input).unwrap(), &dft::ifft(&input).unwrap());
    }

    #[test]
    fn ramp() {
        let input = (0..4).map(|i| Complex::new(i as f64, 0.0)).collect::<Vec<_>>();
        let expected = [
            Complex::new(6.0, 0.0),
            Complex::new(-2.0, 2.0),
            Complex::new(-2.0, 0.0),
            Complex::new(-2.0, -2.0),
        ];
        near(&fft(&input).unwrap(), &expected);
        near(&ifft(&expected).unwrap(), &input);
    }

    #[test]
    fn size_one_is_identity() {
        let input = [Complex::new(-3.0, 0.5)];
        assert_eq!(fft(&input).unwrap(), input);
        assert_eq!(ifft(&input).unwrap(), input);
    }

    #[test]
    fn rejects_non_power_of_two() {
        let input = vec![Complex::new(1.0f64, 0.0); 12];
        assert_eq!(fft(&input), Err(FftError::not_power_of_two(12)));
    }
}
