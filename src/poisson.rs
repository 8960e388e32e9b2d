//! Poisson variates.
//!
//! Two algorithms are provided:
//!
//! * **Direct**: multiply uniforms until the product drops to `e^-λ`.
//!   Exact, but the expected number of draws is `λ + 1` and `e^-λ`
//!   underflows for large rates.
//! * **Rejection**: Atkinson's transformed rejection with a logistic
//!   envelope. A small constant number of draws per sample, but only
//!   defined for `λ > 3.36 / 0.767`.
//!
//! [`Poisson`] picks between them by a rate cutoff.

use std::f64::consts::PI;

use rand::Rng;
use rand::distr::{Distribution, Open01};
use statrs::function::gamma::ln_gamma;

use crate::error::SampleError;

/// Rates below this use the direct method by default.
pub const DEFAULT_POISSON_CUTOFF: f64 = 30.0;

/// Above this `e^-λ` and the running product drop into subnormals, so the
/// direct method no longer stops at the right count.
pub const DIRECT_MAX_LAMBDA: f64 = 700.0;

/// The rejection envelope needs `0.767 - 3.36 / λ > 0`.
pub const REJECTION_MIN_LAMBDA: f64 = 3.36 / 0.767;

/// Which algorithm a [`Poisson`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoissonMethod {
    Direct,
    Rejection,
}

#[derive(Debug, Clone, Copy)]
enum Kernel {
    Direct { limit: f64 },
    Rejection(Rejection),
}

/// A Poisson distribution with rate `λ`, prepared for sampling.
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use rand::distr::Distribution;
/// use randvariate::{Poisson, PoissonMethod};
///
/// let poisson = Poisson::new(100.0).unwrap();
/// assert_eq!(poisson.method(), PoissonMethod::Rejection);
/// let mut rng = StdRng::seed_from_u64(1);
/// let _draw: u64 = poisson.sample(&mut rng);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Poisson {
    lambda: f64,
    kernel: Kernel,
}

impl Poisson {
    /// Use the direct method below [`DEFAULT_POISSON_CUTOFF`], rejection above.
    ///
    /// # Errors
    /// [`SampleError::InvalidLambda`] if `lambda` is negative or not finite.
    pub fn new(lambda: f64) -> Result<Self, SampleError> {
        Self::with_cutoff(lambda, DEFAULT_POISSON_CUTOFF)
    }

    /// Use the direct method for `lambda < cutoff`, rejection otherwise.
    ///
    /// # Errors
    /// * [`SampleError::InvalidLambda`] if `lambda` is negative or not finite.
    /// * [`SampleError::InvalidCutoff`] if `cutoff` is not finite, is at or
    ///   below [`REJECTION_MIN_LAMBDA`], or is above [`DIRECT_MAX_LAMBDA`].
    pub fn with_cutoff(lambda: f64, cutoff: f64) -> Result<Self, SampleError> {
        check_lambda(lambda)?;
        if !cutoff.is_finite() || cutoff <= REJECTION_MIN_LAMBDA || cutoff > DIRECT_MAX_LAMBDA {
            return Err(SampleError::InvalidCutoff(cutoff));
        }
        let method = if lambda < cutoff {
            PoissonMethod::Direct
        } else {
            PoissonMethod::Rejection
        };
        let poisson = Self::with_method(lambda, method)?;
        tracing::debug!(lambda, cutoff, method = ?method, "prepared poisson sampler");
        Ok(poisson)
    }

    /// Force one algorithm regardless of the rate.
    ///
    /// # Errors
    /// [`SampleError::InvalidLambda`] if `lambda` is negative or not finite,
    /// if `method` is [`PoissonMethod::Rejection`] and `lambda` is at or
    /// below [`REJECTION_MIN_LAMBDA`], or if `method` is
    /// [`PoissonMethod::Direct`] and `lambda` is above [`DIRECT_MAX_LAMBDA`].
    pub fn with_method(lambda: f64, method: PoissonMethod) -> Result<Self, SampleError> {
        check_lambda(lambda)?;
        let kernel = match method {
            PoissonMethod::Direct if lambda > DIRECT_MAX_LAMBDA => {
                return Err(SampleError::InvalidLambda(lambda));
            }
            PoissonMethod::Direct => Kernel::Direct {
                limit: (-lambda).exp(),
            },
            PoissonMethod::Rejection => Kernel::Rejection(Rejection::new(lambda)?),
        };
        Ok(Self { lambda, kernel })
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn method(&self) -> PoissonMethod {
        match self.kernel {
            Kernel::Direct { .. } => PoissonMethod::Direct,
            Kernel::Rejection(_) => PoissonMethod::Rejection,
        }
    }
}

impl Distribution<u64> for Poisson {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        match &self.kernel {
            Kernel::Direct { limit } => direct(rng, *limit),
            Kernel::Rejection(r) => r.sample(rng),
        }
    }
}

fn check_lambda(lambda: f64) -> Result<(), SampleError> {
    if lambda.is_finite() && lambda >= 0.0 {
        Ok(())
    } else {
        Err(SampleError::InvalidLambda(lambda))
    }
}

fn direct<R: Rng + ?Sized>(rng: &mut R, limit: f64) -> u64 {
    let mut k = 0u64;
    let mut acc = 1.0f64;
    loop {
        acc *= rng.random::<f64>();
        if acc <= limit {
            return k;
        }
        k += 1;
    }
}

/// Precomputed envelope for the transformed rejection sampler.
#[derive(Debug, Clone, Copy)]
struct Rejection {
    alpha: f64,
    beta: f64,
    k: f64,
    log_lambda: f64,
}

impl Rejection {
    fn new(lambda: f64) -> Result<Self, SampleError> {
        if lambda <= REJECTION_MIN_LAMBDA {
            return Err(SampleError::InvalidLambda(lambda));
        }
        let c = 0.767 - 3.36 / lambda;
        let beta = PI / (3.0 * lambda).sqrt();
        let alpha = beta * lambda;
        let k = c.ln() - lambda - beta.ln();
        Ok(Self {
            alpha,
            beta,
            k,
            log_lambda: lambda.ln(),
        })
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        // No retry cap: capping would bias the tail.
        loop {
            let u: f64 = rng.sample(Open01);
            let x = (self.alpha - ((1.0 - u) / u).ln()) / self.beta;
            let n = (x + 0.5).floor();
            if n < 0.0 {
                continue;
            }

            let v: f64 = rng.sample(Open01);
            let y = self.alpha - self.beta * x;
            // ln(v / (1 + e^y)^2) without overflowing e^y
            let lhs = y + v.ln() - 2.0 * softplus(y);
            let rhs = self.k + n * self.log_lambda - ln_gamma(n + 1.0);
            if lhs <= rhs {
                return n as u64;
            }
        }
    }
}

/// `ln(1 + e^y)`.
fn softplus(y: f64) -> f64 {
    y.max(0.0) + (-y.abs()).exp().ln_1p()
}

/// One draw using the default cutoff between the two methods.
pub fn sample_poisson<R: Rng + ?Sized>(rng: &mut R, lambda: f64) -> Result<u64, SampleError> {
    Ok(Poisson::new(lambda)?.sample(rng))
}

/// One draw by the direct multiplicative method.
pub fn poisson_direct<R: Rng + ?Sized>(rng: &mut R, lambda: f64) -> Result<u64, SampleError> {
    Ok(Poisson::with_method(lambda, PoissonMethod::Direct)?.sample(rng))
}

/// One draw by transformed rejection. Requires `lambda > REJECTION_MIN_LAMBDA`.
pub fn poisson_rejection<R: Rng + ?Sized>(rng: &mut R, lambda: f64) -> Result<u64, SampleError> {
    Ok(Poisson::with_method(lambda, PoissonMethod::Rejection)?.sample(rng))
}
