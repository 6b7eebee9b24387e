//! This crate provides discrete Fourier transforms in pure Rust.
//!
//! # Algorithms
//! Four 1D algorithms are available, and one is always selected explicitly with [`Algorithm`]:
//! - **Direct**: O(N^2) summation for any length.  This is the reference implementation.
//! - **Recursive radix-2**: Cooley-Tukey divide and conquer, for power-of-two lengths.
//! - **Iterative radix-2**: bit-reversal followed by in-place butterflies, for power-of-two
//!   lengths.
//! - **Bluestein's**: any length, evaluated as a chirp convolution with iterative radix-2 FFTs.
//!
//! 2D transforms apply Bluestein's algorithm to every row and column of a [`Grid`].
//!
//! Every transform borrows its input and returns a newly allocated output.
//!
//! ```
//! use chirpfft::{Algorithm, Complex};
//!
//! let input = [1.0, -1.0, 1.0, -1.0].map(|x| Complex::new(x, 0.0));
//! let spectrum = Algorithm::IterativeRadix2.fft(&input)?;
//! assert!((spectrum[2] - 4.0).norm() < 1e-12);
//! let restored = Algorithm::IterativeRadix2.ifft(&spectrum)?;
//! assert!((restored[1] + 1.0).norm() < 1e-12);
//! # Ok::<(), chirpfft::FftError>(())
//! ```

pub mod bluesteins;
pub mod complex;
pub mod dft;
mod error;
mod fft;
mod float;
mod grid;
pub mod iterative;
pub mod radix2;
mod sequence;
pub mod two_dim;

pub use complex::{log_amplitude, magnitude, polar_exp, Complex};
pub use error::*;
pub use fft::*;
pub use float::FftFloat;
pub use grid::*;
pub use sequence::{
    allocate, bit_reverse, bit_reverse_permute, log2_exact, next_power_of_two, to_complex,
    to_real, zeroed,
};
pub use two_dim::{fft2d, fft_shift, ifft2d, ifft_shift};
