//! Common data types for the generalized Gaussian toolkit

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a shape-parameter search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeEstimate {
    /// Estimated shape parameter (last iterate).
    pub shape: f64,

    /// Number of Newton-Raphson updates performed
    pub n_iter: usize,

    /// Whether the successive-iterate distance fell below tolerance
    pub converged: bool,

    /// Absolute distance between the last two iterates
    pub last_step: f64,

    /// Number of samples the estimate was computed from (after zero filtering)
    pub n: usize,
}

impl ShapeEstimate {
    /// Create a new shape estimate
    pub fn new(shape: f64, n_iter: usize, converged: bool, last_step: f64, n: usize) -> Self {
        Self { shape, n_iter, converged, last_step, n }
    }
}

impl fmt::Display for ShapeEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ShapeEstimate(shape={:.6}, n_iter={}, converged={}, last_step={:.3e}, n={})",
            self.shape, self.n_iter, self.converged, self.last_step, self.n
        )
    }
}

/// Two-sided confidence interval for a shape estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound
    pub lower: f64,

    /// Upper bound (may be `+inf` for tiny samples)
    pub upper: f64,

    /// Standard-normal quantile used to build the interval
    pub z: f64,

    /// Sample size
    pub n: usize,
}

impl ConfidenceInterval {
    /// `lower <= value <= upper`.
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Interval width (`upper - lower`).
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Bounds as a `(lower, upper)` tuple.
    pub fn bounds(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }
}

impl From<ConfidenceInterval> for (f64, f64) {
    fn from(ci: ConfidenceInterval) -> Self {
        ci.bounds()
    }
}
