//! Bluestein's algorithm for transforms of arbitrary length.
//!
//! A length-`N` transform is rewritten as a circular convolution with a chirp sequence, which is
//! evaluated with power-of-two iterative FFTs of length `M = next_power_of_two(2N - 1)`.

use crate::complex::{half_twiddle, Complex};
use crate::error::{FftError, Result};
use crate::fft::Transform;
use crate::float::{from_usize, FftFloat};
use crate::{iterative, sequence};

/// Computes `chirp[k] = exp(s pi i (k^2 mod 2N) / N)`.
///
/// `k^2` is reduced in integer arithmetic so the angle never grows past `2 pi`.
fn chirp<T: FftFloat>(size: usize, transform: Transform) -> Result<Vec<Complex<T>>> {
    let period = 2 * size as u128;
    let mut chirp = sequence::allocate(size)?;
    chirp.extend((0..size).map(|k| {
        let index = (k as u128 * k as u128 % period) as usize;
        half_twiddle(index, size, transform)
    }));
    Ok(chirp)
}

/// Computes the spectrum of the zero-padded, conjugated chirp, wrapped symmetrically so the
/// circular convolution realizes the correlation.
fn chirp_spectrum<T: FftFloat>(chirp: &[Complex<T>], inner_size: usize) -> Result<Vec<Complex<T>>> {
    let mut b: Vec<Complex<T>> = sequence::zeroed(inner_size)?;
    b[0] = chirp[0].conj();
    for (k, c) in chirp.iter().enumerate().skip(1) {
        b[k] = c.conj();
        b[inner_size - k] = c.conj();
    }
    iterative::fft(&b)
}

/// A precomputed Bluestein's transform of a fixed size.
///
/// The chirps and filter spectra for both directions are computed once.  The plan is immutable
/// once created, so one plan can be reused for every row or column of the same length.
pub struct Bluesteins<T> {
    size: usize,
    inner_size: usize,
    x_forward: Vec<Complex<T>>,
    x_inverse: Vec<Complex<T>>,
    w_forward: Vec<Complex<T>>,
    w_inverse: Vec<Complex<T>>,
}

impl<T> core::fmt::Debug for Bluesteins<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Bluesteins")
            .field("size", &self.size)
            .field("inner_size", &self.inner_size)
            .finish()
    }
}

impl<T: FftFloat> Bluesteins<T> {
    /// Create a new Bluestein's algorithm plan.
    pub fn new(size: usize) -> Result<Self> {
        sequence::validate_length(size)?;
        let inner_size = size
            .checked_mul(2)
            .and_then(|double| (double - 1).checked_next_power_of_two())
            .ok_or(FftError::InvalidLength {
                len: size,
                reason: "convolution length overflows",
            })?;
        let x_forward = chirp(size, Transform::Fft)?;
        let x_inverse = chirp(size, Transform::Ifft)?;
        let w_forward = chirp_spectrum(&x_forward, inner_size)?;
        let w_inverse = chirp_spectrum(&x_inverse, inner_size)?;
        Ok(Self {
            size,
            inner_size,
            x_forward,
            x_inverse,
            w_forward,
            w_inverse,
        })
    }

    /// The size of the transform.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The size of the inner power-of-two convolution.
    pub fn inner_size(&self) -> usize {
        self.inner_size
    }

    /// Apply an FFT or IFFT, returning a new sequence.
    pub fn transform(
        &self,
        input: &[Complex<T>],
        transform: Transform,
    ) -> Result<Vec<Complex<T>>> {
        if input.len() != self.size {
            return Err(FftError::ShapeMismatch {
                expected: self.size,
                actual: input.len(),
            });
        }
        let (x, w) = if transform.is_forward() {
            (&self.x_forward, &self.w_forward)
        } else {
            (&self.x_inverse, &self.w_inverse)
        };

        let mut work: Vec<Complex<T>> = sequence::zeroed(self.inner_size)?;
        for (work, (i, x)) in work.iter_mut().zip(input.iter().zip(x.iter())) {
            *work = i * x;
        }

        let mut convolution = iterative::fft(&work)?;
        for (c, w) in convolution.iter_mut().zip(w.iter()) {
            *c *= *w;
        }
        let convolution = iterative::ifft(&convolution)?;

        let mut output = sequence::allocate(self.size)?;
        output.extend(convolution.iter().zip(x.iter()).map(|(c, x)| c * x));
        if !transform.is_forward() {
            let scale = from_usize::<T>(self.size);
            for y in output.iter_mut() {
                *y = y.unscale(scale);
            }
        }
        Ok(output)
    }

    /// Apply an FFT.
    pub fn fft(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
        self.transform(input, Transform::Fft)
    }

    /// Apply an IFFT.
    pub fn ifft(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
        self.transform(input, Transform::Ifft)
    }
}

/// Apply a Bluestein's FFT or IFFT, returning a new sequence.
pub fn transform<T: FftFloat>(
    input: &[Complex<T>],
    transform: Transform,
) -> Result<Vec<Complex<T>>> {
    Bluesteins::new(input.len())?.transform(input, transform)
}

/// Apply a Bluestein's FFT.
pub fn fft<T: FftFloat>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
    transform(input, Transform::Fft)
}

/// Apply a Bluestein's IFFT.
pub fn ifft<T: FftFloat>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
    transform(input, Transform::Ifft)
}
