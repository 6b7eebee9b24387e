use num_traits::{Float, FloatConst, FromPrimitive, NumAssign};

/// Floating-point types used for performing Fourier transforms.
pub trait FftFloat:
    Float + FloatConst + FromPrimitive + NumAssign + Default + core::fmt::Debug + 'static
{
}
impl<T> FftFloat for T where
    T: Float + FloatConst + FromPrimitive + NumAssign + Default + core::fmt::Debug + 'static
{
}

/// Converts an `f64` to the transform's real type.
///
/// Angles and scale factors are formed in `f64` and narrowed once.
#[inline]
pub(crate) fn from_f64<T: FftFloat>(value: f64) -> T {
    T::from_f64(value).unwrap_or_else(T::nan)
}

#[inline]
pub(crate) fn from_usize<T: FftFloat>(value: usize) -> T {
    T::from_usize(value).unwrap_or_else(T::infinity)
}
