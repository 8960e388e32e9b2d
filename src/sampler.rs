use rand::Rng;

use crate::{IndexSampler, inversion::CumulativeDistribution, walker::AliasTable};

/// Tally `n` independent draws from `sampler` into per-category counts.
///
/// The result has one entry per category, in category order, and sums to `n`.
pub fn sample_counts<S, R>(sampler: &S, rng: &mut R, n: u64) -> Vec<u64>
where
    S: IndexSampler + ?Sized,
    R: Rng + ?Sized,
{
    let mut counts = vec![0u64; sampler.len()];
    for _ in 0..n {
        counts[sampler.sample_index(rng)] += 1;
    }
    counts
}

/// `AliasTable` is the O(1) sampler; wire it into the trait.
impl IndexSampler for AliasTable {
    #[inline]
    fn len(&self) -> usize {
        // call the inherent method explicitly to avoid trait-recursion
        AliasTable::len(self)
    }
    #[inline]
    fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        AliasTable::sample_index(self, rng)
    }
}

impl IndexSampler for CumulativeDistribution {
    #[inline]
    fn len(&self) -> usize {
        CumulativeDistribution::len(self)
    }
    #[inline]
    fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        CumulativeDistribution::sample_index(self, rng)
    }
}
