//! Sequence utilities shared by the transforms.

use crate::complex::Complex;
use crate::error::{FftError, Result};
use crate::float::FftFloat;

/// Reverses the low `bits` bits of `x`.
///
/// ```
/// assert_eq!(chirpfft::bit_reverse(1, 3), 4);
/// assert_eq!(chirpfft::bit_reverse(6, 3), 3);
/// ```
#[inline]
pub fn bit_reverse(mut x: usize, bits: u32) -> usize {
    let mut reversed = 0;
    for _ in 0..bits {
        reversed = (reversed << 1) | (x & 1);
        x >>= 1;
    }
    reversed
}

/// Returns `log2(len)` if `len` is a power of two.
#[inline]
pub fn log2_exact(len: usize) -> Option<u32> {
    if len.is_power_of_two() {
        Some(len.trailing_zeros())
    } else {
        None
    }
}

/// Returns the smallest power of two greater than or equal to `x`, or 1 for `x <= 1`.
#[inline]
pub fn next_power_of_two(x: usize) -> usize {
    x.max(1).next_power_of_two()
}

/// Permutes `input` into bit-reversed order, so that `output[i] = input[bit_reverse(i, bits)]`.
///
/// The length must be a power of two.
pub fn bit_reverse_permute<T: Copy>(input: &[T]) -> Result<Vec<T>> {
    validate_length(input.len())?;
    let bits = log2_exact(input.len()).ok_or_else(|| FftError::not_power_of_two(input.len()))?;
    let mut output = allocate(input.len())?;
    output.extend((0..input.len()).map(|i| input[bit_reverse(i, bits)]));
    Ok(output)
}

/// Rejects empty sequences.
#[inline]
pub(crate) fn validate_length(len: usize) -> Result<()> {
    if len == 0 {
        Err(FftError::empty())
    } else {
        Ok(())
    }
}

/// Allocates an empty vector with capacity for exactly `len` elements.
///
/// Allocation failure is reported rather than aborting.
pub fn allocate<T>(len: usize) -> Result<Vec<T>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| FftError::Allocation { len })?;
    Ok(buffer)
}

/// Allocates a vector of `len` default (zero) elements.
pub fn zeroed<T: Default + Clone>(len: usize) -> Result<Vec<T>> {
    let mut buffer = allocate(len)?;
    buffer.resize(len, T::default());
    Ok(buffer)
}

/// Converts real values to complex values with zero imaginary parts.
pub fn to_complex<T: FftFloat>(values: &[T]) -> Result<Vec<Complex<T>>> {
    let mut output = allocate(values.len())?;
    output.extend(values.iter().map(|x| Complex::new(*x, T::zero())));
    Ok(output)
}

/// Keeps only the real component of each value.
pub fn to_real<T: FftFloat>(values: &[Complex<T>]) -> Result<Vec<T>> {
    let mut output = allocate(values.len())?;
    output.extend(values.iter().map(|x| x.re));
    Ok(output)
}
