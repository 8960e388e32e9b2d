use thiserror::Error;

/// Errors raised when a sampler is handed input it cannot serve.
///
/// Numerical edge cases (a probability vector that does not sum to one,
/// `lambda == 0`) are not errors; they produce degenerate but deterministic
/// results.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SampleError {
    #[error("probability vector is empty")]
    Empty,

    #[error("probability vector contains a negative value at index {index}: {value}")]
    Negative { index: usize, value: f64 },

    #[error("probability vector contains a non-finite value at index {index}: {value}")]
    NonFinite { index: usize, value: f64 },

    #[error("invalid Poisson rate: {0}")]
    InvalidLambda(f64),

    #[error("invalid Poisson method cutoff: {0}")]
    InvalidCutoff(f64),

    #[error("binomial probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),
}

/// Check that `p` is a usable probability vector: non-empty, finite and
/// non-negative. The sum is not checked and nothing is renormalized.
pub(crate) fn validate(p: &[f64]) -> Result<(), SampleError> {
    if p.is_empty() {
        return Err(SampleError::Empty);
    }
    for (index, &value) in p.iter().enumerate() {
        if !value.is_finite() {
            return Err(SampleError::NonFinite { index, value });
        }
        if value < 0.0 {
            return Err(SampleError::Negative { index, value });
        }
    }
    Ok(())
}
