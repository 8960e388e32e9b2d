//! Inversion sampling against a cumulative distribution.

use rand::Rng;

use crate::error::{SampleError, validate};

/// Running sums of a probability vector.
#[derive(Debug, Clone)]
pub struct CumulativeDistribution {
    cum: Vec<f64>,
}

impl CumulativeDistribution {
    /// Build the cumulative distribution of `p`. O(k).
    ///
    /// # Errors
    /// * [`SampleError::Empty`] if `p` has no entries.
    /// * [`SampleError::Negative`] / [`SampleError::NonFinite`] for a bad entry.
    pub fn new(p: &[f64]) -> Result<Self, SampleError> {
        validate(p)?;
        Ok(Self::build(p))
    }

    pub(crate) fn build(p: &[f64]) -> Self {
        let cum = p
            .iter()
            .scan(0.0f64, |acc, &w| {
                *acc += w;
                Some(*acc)
            })
            .collect();
        Self { cum }
    }

    /// Draw one category: the first `i` with `x < cum[i]` for a uniform
    /// `x` in `[0, 1)`.
    pub fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.locate(rng.random::<f64>())
    }

    /// Category credited for the uniform draw `x`.
    ///
    /// A draw on a boundary goes to the following category; anything at or
    /// past the final sum goes to the last category.
    pub fn locate(&self, x: f64) -> usize {
        // `cum` is non-decreasing, so the first bound above `x` is found by
        // bisection instead of a scan.
        let i = self.cum.partition_point(|&c| c <= x);
        i.min(self.cum.len() - 1)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.cum
    }

    pub fn len(&self) -> usize {
        self.cum.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cum.is_empty()
    }
}
