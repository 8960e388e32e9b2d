use rand::Rng;

use crate::categorical::sample_categorical;
use crate::error::SampleError;

/// Number of successes in `n` trials that each succeed with probability `p`.
///
/// This is the first count of a two-category draw over `[p, 1 - p]`.
///
/// # Errors
/// [`SampleError::InvalidProbability`] if `p` is outside `[0, 1]` or NaN.
pub fn sample_binomial<R: Rng + ?Sized>(rng: &mut R, n: u64, p: f64) -> Result<u64, SampleError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(SampleError::InvalidProbability(p));
    }
    let counts = sample_categorical(rng, n, &[p, 1.0 - p])?;
    Ok(counts[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn rejects_bad_probability() {
        let mut rng = StdRng::seed_from_u64(0);
        for p in [-0.1, 1.1, f64::NAN] {
            assert!(matches!(
                sample_binomial(&mut rng, 3, p),
                Err(SampleError::InvalidProbability(_))
            ));
        }
    }

    #[test]
    fn certain_outcomes() {
        let mut rng = StdRng::seed_from_u64(0);
        for n in [0u64, 1, 2, 25] {
            assert_eq!(sample_binomial(&mut rng, n, 1.0).unwrap(), n);
            assert_eq!(sample_binomial(&mut rng, n, 0.0).unwrap(), 0);
        }
    }

    #[test]
    fn success_frequency() {
        let iterations = 1000u64;
        let mut rng = StdRng::seed_from_u64(0);
        for n in [1u64, 2] {
            for p in [0.5, 0.9, 0.1] {
                let sum: u64 = (0..iterations)
                    .map(|_| sample_binomial(&mut rng, n, p).unwrap())
                    .sum();
                let freq = sum as f64 / (iterations * n) as f64;
                assert!((freq - p).abs() <= 0.05, "n={n} p={p} freq={freq}");
            }
        }
    }
}
