//! Adapters for probabilities supplied in the log domain.
//!
//! Tiny probabilities are often easier to carry as `ln(p)` or `log1p(p)`.
//! These helpers convert back to linear probabilities and hand off to the
//! categorical sampler. Nothing is renormalized.

use rand::Rng;

use crate::categorical::sample_categorical;
use crate::error::SampleError;

/// Invert `log1p` entry-wise with `expm1`.
pub fn probabilities_from_log1p(log_p: &[f64]) -> Vec<f64> {
    log_p.iter().map(|&l| l.exp_m1()).collect()
}

/// Invert `ln` entry-wise. `-inf` is probability 0 and `0` is probability 1.
pub fn probabilities_from_log(log_p: &[f64]) -> Vec<f64> {
    log_p
        .iter()
        .map(|&l| {
            if l == f64::NEG_INFINITY {
                0.0
            } else if l == 0.0 {
                1.0
            } else {
                l.exp()
            }
        })
        .collect()
}

/// [`sample_categorical`] over probabilities given as `log1p(p)`.
pub fn sample_categorical_log1p<R: Rng + ?Sized>(
    rng: &mut R,
    n: u64,
    log_p: &[f64],
) -> Result<Vec<u64>, SampleError> {
    sample_categorical(rng, n, &probabilities_from_log1p(log_p))
}

/// [`sample_categorical`] over probabilities given as `ln(p)`.
pub fn sample_categorical_log<R: Rng + ?Sized>(
    rng: &mut R,
    n: u64,
    log_p: &[f64],
) -> Result<Vec<u64>, SampleError> {
    sample_categorical(rng, n, &probabilities_from_log(log_p))
}
