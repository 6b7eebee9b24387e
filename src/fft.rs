use crate::complex::Complex;
use crate::error::{FftError, Result};
use crate::float::FftFloat;
use crate::{bluesteins, dft, iterative, radix2, sequence};

/// Specifies a type of transform to perform.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Transform {
    /// Forward transform
    Fft,
    /// Inverse transform, scaled by `1 / N`
    Ifft,
}

impl Transform {
    /// Returns true if the transform is a forward transform.
    #[inline]
    pub fn is_forward(&self) -> bool {
        match self {
            Self::Fft => true,
            Self::Ifft => false,
        }
    }

    /// Returns the inverse transform.
    #[inline]
    pub fn inverse(&self) -> Self {
        match self {
            Self::Fft => Self::Ifft,
            Self::Ifft => Self::Fft,
        }
    }

    /// The sign of the exponent: -1 for forward, +1 for inverse.
    #[inline]
    pub fn sign(&self) -> f64 {
        if self.is_forward() {
            -1.0
        } else {
            1.0
        }
    }
}

/// Selects which algorithm computes a 1D transform.
///
/// The algorithm is never chosen automatically.  Radix-2 algorithms reject lengths that are not
/// powers of two instead of padding them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Direct O(N^2) summation
    Direct,
    /// Recursive radix-2 Cooley-Tukey
    RecursiveRadix2,
    /// Iterative radix-2 Cooley-Tukey
    IterativeRadix2,
    /// Bluestein's algorithm, for any length
    Bluesteins,
}

impl Algorithm {
    /// Every available algorithm.
    pub const ALL: [Algorithm; 4] = [
        Self::Direct,
        Self::RecursiveRadix2,
        Self::IterativeRadix2,
        Self::Bluesteins,
    ];

    /// Returns true if the algorithm only accepts power-of-two lengths.
    #[inline]
    pub fn requires_power_of_two(&self) -> bool {
        match self {
            Self::RecursiveRadix2 | Self::IterativeRadix2 => true,
            Self::Direct | Self::Bluesteins => false,
        }
    }

    /// Returns true if the algorithm can transform a sequence of length `len`.
    pub fn supports(&self, len: usize) -> bool {
        len != 0 && (!self.requires_power_of_two() || len.is_power_of_two())
    }

    /// Apply an FFT or IFFT, returning a new sequence.
    pub fn transform<T: FftFloat>(
        &self,
        input: &[Complex<T>],
        transform: Transform,
    ) -> Result<Vec<Complex<T>>> {
        match self {
            Self::Direct => dft::transform(input, transform),
            Self::RecursiveRadix2 => radix2::transform(input, transform),
            Self::IterativeRadix2 => iterative::transform(input, transform),
            Self::Bluesteins => bluesteins::transform(input, transform),
        }
    }

    /// Apply an FFT.
    pub fn fft<T: FftFloat>(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
        self.transform(input, Transform::Fft)
    }

    /// Apply an IFFT.
    pub fn ifft<T: FftFloat>(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>> {
        self.transform(input, Transform::Ifft)
    }

    /// Apply an FFT or IFFT to a real-valued sequence.
    pub fn transform_real<T: FftFloat>(
        &self,
        input: &[T],
        transform: Transform,
    ) -> Result<Vec<Complex<T>>> {
        self.transform(&sequence::to_complex(input)?, transform)
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Direct => "DFT",
            Self::RecursiveRadix2 => "RADIX_2",
            Self::IterativeRadix2 => "ITER_RADIX_2",
            Self::Bluesteins => "BLUESTEIN",
        }
    }
}

impl core::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for Algorithm {
    type Err = FftError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| FftError::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn transform_directions() {
        assert!(Transform::Fft.is_forward());
        assert!(!Transform::Ifft.is_forward());
        assert_eq!(Transform::Fft.inverse(), Transform::Ifft);
        assert_eq!(Transform::Ifft.inverse(), Transform::Fft);
        assert_eq!(Transform::Fft.sign(), -1.0);
        assert_eq!(Transform::Ifft.sign(), 1.0);
    }

    #[test]
    fn supported_lengths() {
        assert!(Algorithm::Direct.supports(5));
        assert!(Algorithm::Bluesteins.supports(5));
        assert!(!Algorithm::RecursiveRadix2.supports(5));
        assert!(!Algorithm::IterativeRadix2.supports(6));
        assert!(Algorithm::IterativeRadix2.supports(1));
        for algorithm in Algorithm::ALL.iter() {
            assert!(!algorithm.supports(0));
        }
    }

    #[test]
    fn rejects_unsupported_lengths_before_computing() {
        let input = vec![Complex::new(1.0f64, 0.0); 6];
        for algorithm in Algorithm::ALL.iter() {
            let result = algorithm.fft(&input);
            if algorithm.requires_power_of_two() {
                assert!(matches!(result, Err(FftError::InvalidLength { len: 6, .. })));
            } else {
                assert_eq!(result.unwrap().len(), 6);
            }
            assert!(matches!(
                algorithm.ifft::<f64>(&[]),
                Err(FftError::InvalidLength { len: 0, .. })
            ));
        }
    }

    #[test]
    fn parses_names() {
        for algorithm in Algorithm::ALL.iter() {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(*algorithm));
        }
        assert_eq!("bluestein".parse::<Algorithm>(), Ok(Algorithm::Bluesteins));
        assert_eq!("iter_radix_2".parse::<Algorithm>(), Ok(Algorithm::IterativeRadix2));
        assert_eq!(
            "RADIX_3".parse::<Algorithm>(),
            Err(FftError::UnknownAlgorithm("RADIX_3".to_string()))
        );
    }

    #[test]
    fn transforms_real_input() {
        let spectrum = Algorithm::Direct
            .transform_real(&[1.0, -1.0, 1.0, -1.0], Transform::Fft)
            .unwrap();
        let expected = [0.0, 0.0, 4.0, 0.0];
        for (x, e) in spectrum.iter().zip(expected.iter()) {
            assert!((x - Complex::new(*e, 0.0)).norm() < 1e-12);
        }
    }
}
