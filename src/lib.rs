//! # randvariate
//!
//! Random variates for categorical (multinomial), binomial and Poisson
//! distributions, driven by any [`rand::Rng`].
//!
//! Categorical draws come in two flavours behind one [`Method`] switch:
//!
//! 1. **Inversion** over a [`CumulativeDistribution`]: nothing to build
//!    beyond the running sums; the fallback for small `k`.
//! 2. **Alias** via [Vose's alias method](https://en.wikipedia.org/wiki/Alias_method)
//!    in an [`AliasTable`]: O(k) setup, then O(1) per draw.
//!
//! Probabilities may also be supplied as `ln(p)` or `log1p(p)` (see
//! [`sample_categorical_log`] and [`sample_categorical_log1p`]).
//!
//! ## Quick start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use randvariate::{sample_binomial, sample_categorical, sample_poisson};
//!
//! # fn main() -> Result<(), randvariate::SampleError> {
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let counts = sample_categorical(&mut rng, 10, &[0.6, 0.3, 0.1])?;
//! assert_eq!(counts.iter().sum::<u64>(), 10);
//!
//! let heads = sample_binomial(&mut rng, 10, 0.5)?;
//! assert!(heads <= 10);
//!
//! let _arrivals = sample_poisson(&mut rng, 4.5)?;
//! # Ok(()) }
//! ```
//!
//! ## Reuse
//! The free functions build and discard their table on every call. When the
//! same vector is sampled repeatedly, build a [`Categorical`] (or a
//! [`Poisson`]) once and keep it.
//!
//! ## Gotchas
//! * Probabilities must be finite and non-negative; empty vectors are rejected.
//! * Nothing is renormalized. A vector that does not sum to ~1 gives skewed
//!   but deterministic results.
//! * There is no global generator. Pass a seeded one for reproducible draws.

mod binomial;
mod categorical;
mod error;
mod inversion;
mod logspace;
mod poisson;
mod round;
mod sampler;
mod walker;

/// A minimal interface for "index samplers".
/// Implemented by [`CumulativeDistribution`], [`AliasTable`] and [`Categorical`].
#[allow(clippy::len_without_is_empty)]
pub trait IndexSampler {
    fn len(&self) -> usize;
    fn sample_index<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> usize;
}

pub use binomial::sample_binomial;
pub use categorical::{
    AUTO_ALIAS_MIN_CATEGORIES, Categorical, Method, sample_alias, sample_categorical,
    sample_inversion,
};
pub use error::SampleError;
pub use inversion::CumulativeDistribution;
pub use logspace::{
    probabilities_from_log, probabilities_from_log1p, sample_categorical_log,
    sample_categorical_log1p,
};
pub use poisson::{
    DEFAULT_POISSON_CUTOFF, DIRECT_MAX_LAMBDA, Poisson, PoissonMethod, REJECTION_MIN_LAMBDA,
    poisson_direct, poisson_rejection, sample_poisson,
};
pub use round::round;
pub use sampler::sample_counts;
pub use walker::AliasTable;
