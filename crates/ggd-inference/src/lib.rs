//! # ggd-inference
//!
//! Shape estimation for the generalized Gaussian distribution.
//!
//! This crate provides:
//! - the moment-ratio residual `Zn` and its derivative `Zp`
//! - globally convergent Newton-Raphson shape search ([`gcm_search`])
//! - the asymptotic confidence interval for the estimate ([`gcm_ci`])
//!
//! Location is assumed to be zero; scale cancels out of the moment ratio and
//! is never estimated.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// GCM shape search: `Zn`, `Zp`, Newton-Raphson driver.
pub mod gcm;
/// Confidence interval for a GCM estimate.
pub mod gcm_ci;

pub use gcm::{
    GcmConfig, GcmEstimator, ZeroPolicy, gcm_search, gcm_search_from, gcm_search_with,
    initial_estimate, zn, zp,
};
pub use gcm_ci::{DEFAULT_Z, gcm_ci, gcm_ci_default, z_for_level};
