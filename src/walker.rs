//! Vose's alias method for O(1) sampling from a discrete distribution.

use rand::Rng;

use crate::error::{SampleError, validate};
use crate::round::round;

/// Decimal place rescaled mass is snapped to before it is compared with the
/// bucket height of 1.
const SNAP_PLACE: i32 = -12;

/// Alias table for discrete distribution sampling.
///
/// Bucket `i` keeps category `i` with probability `prob[i]` and hands the
/// rest of its mass to `alias[i]`.
#[derive(Debug, Clone)]
pub struct AliasTable {
    prob: Vec<f64>,
    alias: Vec<usize>,
}

impl AliasTable {
    /// Construct an alias table from a probability vector. O(k).
    ///
    /// The vector is not renormalized; callers supply one that sums to ~1.
    ///
    /// # Errors
    /// * [`SampleError::Empty`] if `p` has no entries.
    /// * [`SampleError::Negative`] / [`SampleError::NonFinite`] for a bad entry.
    pub fn new(p: &[f64]) -> Result<Self, SampleError> {
        validate(p)?;
        Ok(Self::build(p))
    }

    pub(crate) fn build(p: &[f64]) -> Self {
        let n = p.len();

        // Scale so a fair bucket holds exactly 1.
        let mut scaled: Vec<f64> = p.iter().map(|&w| w * n as f64).collect();

        let mut prob = vec![1.0f64; n];
        let mut alias = (0..n).collect::<Vec<_>>();

        let mut small = Vec::with_capacity(n);
        let mut large = Vec::with_capacity(n);

        for (i, &q) in scaled.iter().enumerate() {
            if q < 1.0 {
                small.push(i);
            } else {
                large.push(i);
            }
        }

        while let (Some(&s), Some(&l)) = (small.last(), large.last()) {
            small.pop();
            large.pop();

            prob[s] = scaled[s]; // in [0,1)
            alias[s] = l;

            scaled[l] = (scaled[l] + scaled[s]) - 1.0;

            if round(scaled[l], SNAP_PLACE) < 1.0 {
                small.push(l);
            } else {
                large.push(l);
            }
        }

        // Whatever is left fills its own bucket. A zero-probability leftover
        // can only come from drift and must still never be drawn directly.
        let heaviest = heaviest(p);
        for i in small.into_iter().chain(large) {
            if p[i] > 0.0 {
                prob[i] = 1.0;
                alias[i] = i;
            } else {
                prob[i] = 0.0;
                alias[i] = heaviest;
            }
        }

        tracing::debug!(categories = n, "built alias table");
        Self { prob, alias }
    }

    /// Draw a single sample in O(1).
    pub fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let n = self.prob.len();
        let i = rng.random_range(0..n);
        let u: f64 = rng.random();
        if u < self.prob[i] { i } else { self.alias[i] }
    }

    /// Keep-threshold of bucket `i`.
    ///
    /// With [`alias`](Self::alias) this exposes the built table for
    /// inspection, e.g. to total the mass each category receives.
    pub fn threshold(&self, i: usize) -> f64 {
        self.prob[i]
    }

    /// Alias category of bucket `i`.
    pub fn alias(&self, i: usize) -> usize {
        self.alias[i]
    }

    pub fn len(&self) -> usize {
        self.prob.len()
    }
    pub fn is_empty(&self) -> bool {
        self.prob.is_empty()
    }
}

fn heaviest(p: &[f64]) -> usize {
    p.iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map_or(0, |(i, _)| i)
}
