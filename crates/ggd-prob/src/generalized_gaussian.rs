//! Generalized Gaussian distribution.
//!
//! Density:
//!
//! ```text
//! f(x; μ, α, β) = β / (2 α Γ(1/β)) · exp(-(|x - μ| / α)^β)
//! ```
//!
//! with location `μ`, scale `α > 0`, and shape `β > 0`. `β = 2` is the Normal
//! family (`σ = α/√2`), `β = 1` the Laplace family, and `β → ∞` approaches the
//! uniform distribution on `[μ - α, μ + α]`.

use std::fmt;

use ggd_core::{ContinuousDistribution, Error, Result};
use statrs::function::gamma::ln_gamma;

use crate::gamma;
use crate::math::gamma_ratio;

const LN_2: f64 = std::f64::consts::LN_2;

/// Generalized Gaussian distribution `GGD(μ, α, β)`.
///
/// Immutable after construction; parameters are validated once in [`new`](Self::new).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneralizedGaussian {
    location: f64,
    scale: f64,
    shape: f64,
    /// `ln(β / (2 α Γ(1/β)))`.
    ln_norm: f64,
}

impl GeneralizedGaussian {
    /// Create a distribution with location `mu`, scale `alpha`, and shape `beta`.
    ///
    /// Fails with [`Error::InvalidParameter`] unless `alpha > 0`, `beta > 0`,
    /// and all three parameters are finite.
    pub fn new(mu: f64, alpha: f64, beta: f64) -> Result<Self> {
        if !mu.is_finite() {
            return Err(Error::InvalidParameter(format!("location must be finite, got {}", mu)));
        }
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "scale must be finite and > 0, got {}",
                alpha
            )));
        }
        if !beta.is_finite() || beta <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "shape must be finite and > 0, got {}",
                beta
            )));
        }
        let ln_norm = beta.ln() - LN_2 - alpha.ln() - ln_gamma(1.0 / beta);
        Ok(Self { location: mu, scale: alpha, shape: beta, ln_norm })
    }

    /// Zero-location, unit-scale distribution with shape `beta`.
    pub fn with_shape(beta: f64) -> Result<Self> {
        Self::new(0.0, 1.0, beta)
    }

    /// Standard Normal: `μ = 0`, `α = √2`, `β = 2` (unit variance).
    pub fn standard() -> Self {
        Self {
            location: 0.0,
            scale: std::f64::consts::SQRT_2,
            shape: 2.0,
            // ln(1/√(2π))
            ln_norm: -0.918_938_533_204_672_7,
        }
    }

    /// Normal `N(mu, sigma)` expressed as `GGD(mu, sigma·√2, 2)`.
    pub fn normal(mu: f64, sigma: f64) -> Result<Self> {
        Self::new(mu, sigma * std::f64::consts::SQRT_2, 2.0)
    }

    /// Laplace with location `mu` and diversity `b`: `GGD(mu, b, 1)`.
    pub fn laplace(mu: f64, b: f64) -> Result<Self> {
        Self::new(mu, b, 1.0)
    }

    /// `(μ, α, β)`.
    pub fn params(&self) -> (f64, f64, f64) {
        (self.location, self.scale, self.shape)
    }

    /// Location `μ`.
    pub fn location(&self) -> f64 {
        self.location
    }

    /// Scale `α`.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Shape `β`.
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Alias for [`ContinuousDistribution::variance`].
    pub fn var(&self) -> f64 {
        self.variance()
    }

    /// Log of the density normalizing constant, `ln(β / (2 α Γ(1/β)))`.
    pub fn ln_norm(&self) -> f64 {
        self.ln_norm
    }

    /// `(|x - μ| / α)^β`, the kernel exponent.
    #[inline]
    fn kernel(&self, x: f64) -> f64 {
        ((x - self.location).abs() / self.scale).powf(self.shape)
    }

    /// `ln((|x - μ| / α)^β)`; `-inf` at `x = μ`.
    #[inline]
    fn ln_kernel(&self, x: f64) -> f64 {
        self.shape * ((x - self.location).abs() / self.scale).ln()
    }

    /// Probability mass between `μ` and `x` (always in `[0, 1/2]`).
    fn half_mass(&self, x: f64) -> f64 {
        0.5 * gamma::lower_regularized_ln(1.0 / self.shape, self.ln_kernel(x))
    }
}

impl Default for GeneralizedGaussian {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for GeneralizedGaussian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeneralizedGaussian(μ={}, α={}, β={})", self.location, self.scale, self.shape)
    }
}

impl ContinuousDistribution for GeneralizedGaussian {
    fn mean(&self) -> f64 {
        self.location
    }

    fn median(&self) -> f64 {
        self.location
    }

    fn mode(&self) -> f64 {
        self.location
    }

    /// `α² Γ(3/β) / Γ(1/β)`
    fn variance(&self) -> f64 {
        let inv = 1.0 / self.shape;
        self.scale * self.scale * gamma_ratio(3.0 * inv, inv)
    }

    fn skewness(&self) -> f64 {
        0.0
    }

    /// Excess kurtosis `Γ(5/β) Γ(1/β) / Γ(3/β)² - 3`.
    fn kurtosis(&self) -> f64 {
        let inv = 1.0 / self.shape;
        let ln_ratio = ln_gamma(5.0 * inv) + ln_gamma(inv) - 2.0 * ln_gamma(3.0 * inv);
        ln_ratio.exp() - 3.0
    }

    /// `1/β - ln(β / (2 α Γ(1/β)))`
    fn entropy(&self) -> f64 {
        1.0 / self.shape - self.ln_norm
    }

    fn pdf(&self, x: f64) -> f64 {
        if x.is_infinite() {
            return 0.0;
        }
        self.logpdf(x).exp()
    }

    /// Evaluated in log space, so it stays finite where `pdf` underflows.
    /// `±inf` maps to `-inf`.
    fn logpdf(&self, x: f64) -> f64 {
        if x.is_infinite() {
            return f64::NEG_INFINITY;
        }
        self.ln_norm - self.kernel(x)
    }

    /// `1/2 + sign(x - μ) · 1/2 · P(1/β, (|x - μ|/α)^β)`
    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x == f64::NEG_INFINITY {
            return 0.0;
        }
        if x == f64::INFINITY {
            return 1.0;
        }
        let p = self.half_mass(x);
        if x >= self.location { 0.5 + p } else { 0.5 - p }
    }

    fn sf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x == f64::NEG_INFINITY {
            return 1.0;
        }
        if x == f64::INFINITY {
            return 0.0;
        }
        // Upper tail mass beyond |x - μ| on one side.
        let tail = 0.5 * gamma::upper_regularized_ln(1.0 / self.shape, self.ln_kernel(x));
        if x >= self.location { tail } else { 1.0 - tail }
    }
}
