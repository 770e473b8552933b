//! Error types for the generalized Gaussian toolkit

use thiserror::Error;

/// Toolkit error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Distribution parameter outside its admissible range (scale <= 0, shape <= 0, non-finite)
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Function evaluated outside its analytic domain
    #[error("Domain error: {0}")]
    Domain(String),

    /// Newton-Raphson iteration cannot proceed.
    ///
    /// Carries the last finite iterate and the number of completed iterations.
    #[error("Numerical divergence after {n_iter} iterations (last shape {shape}): {reason}")]
    NumericalDivergence {
        /// Last finite iterate.
        shape: f64,
        /// Completed iterations.
        n_iter: usize,
        /// What went wrong.
        reason: String,
    },

    /// Malformed input (too few samples, bad configuration, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Failure reported by a numerical collaborator
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
