//! Categorical (multinomial) sampling with a selectable strategy.

use rand::Rng;
use rand::distr::Distribution;

use crate::IndexSampler;
use crate::error::{SampleError, validate};
use crate::inversion::CumulativeDistribution;
use crate::logspace::{probabilities_from_log, probabilities_from_log1p};
use crate::sampler::sample_counts;
use crate::walker::AliasTable;

/// Below this many categories [`Method::Auto`] uses inversion.
pub const AUTO_ALIAS_MIN_CATEGORIES: usize = 16;

/// How a [`Categorical`] turns uniform draws into categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Method {
    /// Search the cumulative distribution. Cheap to build, O(log k) per draw.
    Inversion,
    /// Vose's alias table. O(k) to build, O(1) per draw.
    Alias,
    /// Inversion for small `k`, alias otherwise.
    #[default]
    Auto,
}

impl Method {
    /// The concrete method used for `k` categories.
    pub fn resolve(self, k: usize) -> Method {
        match self {
            Method::Auto if k < AUTO_ALIAS_MIN_CATEGORIES => Method::Inversion,
            Method::Auto => Method::Alias,
            m => m,
        }
    }
}

#[derive(Debug, Clone)]
enum Table {
    Inversion(CumulativeDistribution),
    Alias(AliasTable),
}

/// A categorical distribution prepared for repeated sampling.
///
/// Building is the expensive part; keep one of these around when the same
/// probability vector is sampled many times.
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use randvariate::{Categorical, Method};
///
/// let dist = Categorical::new(&[0.2, 0.3, 0.5], Method::Alias).unwrap();
/// let mut rng = StdRng::seed_from_u64(1);
/// let counts = dist.sample_counts(&mut rng, 100);
/// assert_eq!(counts.iter().sum::<u64>(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct Categorical {
    table: Table,
}

impl Categorical {
    /// Prepare `p` for sampling with `method`.
    ///
    /// # Errors
    /// * [`SampleError::Empty`] if `p` has no entries.
    /// * [`SampleError::Negative`] / [`SampleError::NonFinite`] for a bad entry.
    pub fn new(p: &[f64], method: Method) -> Result<Self, SampleError> {
        validate(p)?;
        let table = match method.resolve(p.len()) {
            Method::Alias => Table::Alias(AliasTable::build(p)),
            _ => Table::Inversion(CumulativeDistribution::build(p)),
        };
        Ok(Self { table })
    }

    /// Prepare from `log1p(p)` values.
    pub fn from_log1p(log_p: &[f64], method: Method) -> Result<Self, SampleError> {
        Self::new(&probabilities_from_log1p(log_p), method)
    }

    /// Prepare from `ln(p)` values; `-inf` stands for probability zero.
    pub fn from_log(log_p: &[f64], method: Method) -> Result<Self, SampleError> {
        Self::new(&probabilities_from_log(log_p), method)
    }

    /// The concrete method backing this distribution.
    pub fn method(&self) -> Method {
        match self.table {
            Table::Inversion(_) => Method::Inversion,
            Table::Alias(_) => Method::Alias,
        }
    }

    /// Number of categories.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        match &self.table {
            Table::Inversion(t) => t.len(),
            Table::Alias(t) => t.len(),
        }
    }

    /// Draw one category index.
    pub fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        match &self.table {
            Table::Inversion(t) => t.sample_index(rng),
            Table::Alias(t) => t.sample_index(rng),
        }
    }

    /// Draw `n` categories and return how many landed in each.
    pub fn sample_counts<R: Rng + ?Sized>(&self, rng: &mut R, n: u64) -> Vec<u64> {
        let counts = sample_counts(self, rng, n);
        tracing::trace!(method = ?self.method(), n, categories = counts.len(), "sampled counts");
        counts
    }
}

impl IndexSampler for Categorical {
    #[inline]
    fn len(&self) -> usize {
        Categorical::len(self)
    }
    #[inline]
    fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        Categorical::sample_index(self, rng)
    }
}

impl Distribution<usize> for Categorical {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.sample_index(rng)
    }
}

/// Draw `n` samples from `p`, letting [`Method::Auto`] pick the strategy.
///
/// Returns one count per category, in order, summing to `n`.
pub fn sample_categorical<R: Rng + ?Sized>(
    rng: &mut R,
    n: u64,
    p: &[f64],
) -> Result<Vec<u64>, SampleError> {
    Ok(Categorical::new(p, Method::Auto)?.sample_counts(rng, n))
}

/// Draw `n` samples from `p` by inversion.
pub fn sample_inversion<R: Rng + ?Sized>(
    rng: &mut R,
    n: u64,
    p: &[f64],
) -> Result<Vec<u64>, SampleError> {
    Ok(Categorical::new(p, Method::Inversion)?.sample_counts(rng, n))
}

/// Draw `n` samples from `p` with an alias table.
pub fn sample_alias<R: Rng + ?Sized>(
    rng: &mut R,
    n: u64,
    p: &[f64],
) -> Result<Vec<u64>, SampleError> {
    Ok(Categorical::new(p, Method::Alias)?.sample_counts(rng, n))
}
