//! Random variate generation for the generalized Gaussian.
//!
//! If `G ~ Gamma(1/β, 1)` and `B` is a fair random sign, then
//! `μ + α · B · G^(1/β)` is distributed as `GGD(μ, α, β)`.
//!
//! Every sampling routine takes the random stream explicitly. The `*_default`
//! variants draw from a lazily-seeded, process-wide [`StdRng`] and exist only
//! for call sites that do not care about reproducibility; concurrent callers
//! are serialized on its mutex.

use std::sync::{LazyLock, Mutex, PoisonError};

use ggd_core::{Error, Result};
use ndarray::{ArrayD, IxDyn};
use rand::distr::Bernoulli;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Gamma};

use crate::gamma;
use crate::generalized_gaussian::GeneralizedGaussian;

static DEFAULT_RNG: LazyLock<Mutex<StdRng>> =
    LazyLock::new(|| Mutex::new(StdRng::from_os_rng()));

/// Run `f` with exclusive access to the process-wide default stream.
pub fn with_default_rng<T>(f: impl FnOnce(&mut StdRng) -> T) -> T {
    // A panic while holding the lock cannot leave the RNG in an invalid state.
    let mut rng = DEFAULT_RNG.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut rng)
}

/// Reseed the process-wide default stream (for reproducible runs).
pub fn seed_default_rng(seed: u64) {
    with_default_rng(|rng| *rng = StdRng::seed_from_u64(seed));
}

/// Pre-built sampler for one distribution.
///
/// Construction validates the auxiliary Gamma/Bernoulli collaborators once;
/// drawing is infallible afterwards.
#[derive(Debug, Clone)]
pub struct GgdSampler {
    location: f64,
    scale: f64,
    inv_shape: f64,
    gamma: Gamma<f64>,
    sign: Bernoulli,
}

impl GgdSampler {
    /// Create a sampler for `dist`.
    pub fn new(dist: &GeneralizedGaussian) -> Result<Self> {
        let inv_shape = 1.0 / dist.shape();
        let gamma = gamma::sampler(inv_shape, 1.0)?;
        let sign = Bernoulli::new(0.5)
            .map_err(|e| Error::Computation(format!("sign sampler: {}", e)))?;
        Ok(Self { location: dist.location(), scale: dist.scale(), inv_shape, gamma, sign })
    }
}

impl Distribution<f64> for GgdSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let g: f64 = self.gamma.sample(rng);
        let b = if self.sign.sample(rng) { 1.0 } else { -1.0 };
        self.location + self.scale * b * g.powf(self.inv_shape)
    }
}

/// Draw a single value from `dist`.
pub fn sample<R: Rng + ?Sized>(rng: &mut R, dist: &GeneralizedGaussian) -> Result<f64> {
    Ok(GgdSampler::new(dist)?.sample(rng))
}

/// Draw `n` independent values from `dist`, in stream order.
pub fn sample_n<R: Rng + ?Sized>(
    rng: &mut R,
    dist: &GeneralizedGaussian,
    n: usize,
) -> Result<Vec<f64>> {
    let sampler = GgdSampler::new(dist)?;
    Ok((0..n).map(|_| sampler.sample(rng)).collect())
}

/// Draw an array of shape `dims`, filled in row-major order.
pub fn sample_dims<R: Rng + ?Sized>(
    rng: &mut R,
    dist: &GeneralizedGaussian,
    dims: &[usize],
) -> Result<ArrayD<f64>> {
    let total = dims
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .filter(|&t| t <= isize::MAX as usize)
        .ok_or_else(|| Error::Validation(format!("array shape {:?} overflows", dims)))?;
    let data = sample_n(rng, dist, total)?;
    ArrayD::from_shape_vec(IxDyn(dims), data)
        .map_err(|e| Error::Computation(format!("array shape {:?}: {}", dims, e)))
}

/// [`sample`] using the process-wide default stream.
pub fn sample_default(dist: &GeneralizedGaussian) -> Result<f64> {
    with_default_rng(|rng| sample(rng, dist))
}

/// [`sample_n`] using the process-wide default stream.
pub fn sample_n_default(dist: &GeneralizedGaussian, n: usize) -> Result<Vec<f64>> {
    with_default_rng(|rng| sample_n(rng, dist, n))
}

/// [`sample_dims`] using the process-wide default stream.
pub fn sample_dims_default(dist: &GeneralizedGaussian, dims: &[usize]) -> Result<ArrayD<f64>> {
    with_default_rng(|rng| sample_dims(rng, dist, dims))
}
