use thiserror::Error;

pub type Result<T> = core::result::Result<T, FftError>;

/// Errors reported by the transforms before any computation begins.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FftError {
    /// The length is zero, or is not supported by the selected algorithm.
    #[error("invalid length {len}: {reason}")]
    InvalidLength { len: usize, reason: &'static str },
    /// A buffer of the requested length could not be allocated.
    #[error("failed to allocate a buffer of {len} elements")]
    Allocation { len: usize },
    /// A flat buffer does not match the requested grid shape.
    #[error("shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
    /// A row or column index is outside the grid.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    /// An algorithm name could not be parsed.
    #[error("unknown algorithm `{0}`")]
    UnknownAlgorithm(String),
}

impl FftError {
    pub(crate) fn empty() -> Self {
        Self::InvalidLength {
            len: 0,
            reason: "sequences must contain at least one element",
        }
    }

    pub(crate) fn not_power_of_two(len: usize) -> Self {
        Self::InvalidLength {
            len,
            reason: "radix-2 transforms require a power-of-two length",
        }
    }
}
