//! Probability building blocks for the generalized Gaussian toolkit.
//!
//! This crate hosts:
//! - the [`GeneralizedGaussian`] distribution model (parameters + closed-form statistics),
//! - density/CDF evaluation (methods and `pdf(d, x)`-style free functions),
//! - random variate generation with explicit or process-wide random streams,
//! - small numeric helpers (gamma ratios, hyperbolic cotangent pair).

pub mod distributions;
pub mod gamma;
pub mod generalized_gaussian;
pub mod math;
pub mod sampling;

pub use generalized_gaussian::GeneralizedGaussian;
pub use ggd_core::ContinuousDistribution;
pub use sampling::GgdSampler;
