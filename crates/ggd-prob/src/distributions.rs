//! Free-function density/cumulative evaluators.
//!
//! `pdf(d, x)`-style entry points over [`GeneralizedGaussian`].

use ggd_core::ContinuousDistribution;

use crate::generalized_gaussian::GeneralizedGaussian;

/// Density of `d` at `x` (`0` at `±inf`).
pub fn pdf(d: &GeneralizedGaussian, x: f64) -> f64 {
    d.pdf(x)
}

/// Log-density of `d` at `x`.
///
/// Never fails: points where the density is zero (`±inf`) yield `-inf`.
pub fn logpdf(d: &GeneralizedGaussian, x: f64) -> f64 {
    d.logpdf(x)
}

/// CDF of `d` at `x`.
pub fn cdf(d: &GeneralizedGaussian, x: f64) -> f64 {
    d.cdf(x)
}

/// Survival function of `d` at `x`.
pub fn sf(d: &GeneralizedGaussian, x: f64) -> f64 {
    d.sf(x)
}
