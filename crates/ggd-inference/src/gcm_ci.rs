//! Asymptotic confidence interval for a GCM shape estimate.
//!
//! With `c = acoth(√(β̂ + 1))` and `d = z / √(2N)`:
//!
//! ```text
//! A = coth(c + d)²,  B = coth(c - d)²
//! CI = (min(A, B) - 1, max(A, B) - 1)
//! ```
//!
//! The transform `β ↦ acoth(√(β + 1))` is approximately normal with standard
//! error `1/√(2N)`, so the interval is symmetric on that scale and mapped back.

use ggd_core::{ConfidenceInterval, Error, Result};
use ggd_prob::math::{acoth, coth};
use statrs::distribution::{ContinuousCDF, Normal};

/// Two-sided 95% normal quantile.
pub const DEFAULT_Z: f64 = 1.96;

/// Two-sided standard-normal quantile for a confidence `level` in `(0, 1)`.
pub fn z_for_level(level: f64) -> Result<f64> {
    if !(level > 0.0 && level < 1.0) {
        return Err(Error::Validation(format!("confidence level must be in (0, 1), got {}", level)));
    }
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| Error::Computation(format!("standard normal: {}", e)))?;
    Ok(normal.inverse_cdf(0.5 + 0.5 * level))
}

/// Confidence interval for `shape_hat` estimated from `n` samples.
///
/// The upper bound is `+inf` when `z/√(2N)` reaches `acoth(√(β̂ + 1))`
/// (small samples or very large shapes). `shape_hat = 0` yields `(0, 0)`.
pub fn gcm_ci(shape_hat: f64, n: usize, z: f64) -> Result<ConfidenceInterval> {
    if !(shape_hat.is_finite() && shape_hat >= 0.0) {
        return Err(Error::Domain(format!(
            "acoth(sqrt(shape + 1)) requires a finite shape >= 0, got {}",
            shape_hat
        )));
    }
    if n == 0 {
        return Err(Error::Validation("sample size must be >= 1".to_string()));
    }
    if !(z.is_finite() && z >= 0.0) {
        return Err(Error::Validation(format!("z must be finite and >= 0, got {}", z)));
    }

    let c = acoth((shape_hat + 1.0).sqrt());
    let d = z / (2.0 * n as f64).sqrt();

    let a = coth(c + d).powi(2);
    let b = if c - d > 0.0 { coth(c - d).powi(2) } else { f64::INFINITY };

    let lower = a.min(b) - 1.0;
    let upper = a.max(b) - 1.0;
    log::trace!("gcm_ci: shape={} n={} z={} -> [{}, {}]", shape_hat, n, z, lower, upper);
    Ok(ConfidenceInterval { lower, upper, z, n })
}

/// [`gcm_ci`] at the default `z = 1.96`.
pub fn gcm_ci_default(shape_hat: f64, n: usize) -> Result<ConfidenceInterval> {
    gcm_ci(shape_hat, n, DEFAULT_Z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_values() {
        let ci = gcm_ci_default(1.8, 7000).unwrap();
        assert_relative_eq!(ci.lower, 1.7037546786152298, epsilon = 1e-10);
        assert_relative_eq!(ci.upper, 1.9035623545601137, epsilon = 1e-10);

        let ci = gcm_ci_default(1.0, 1000).unwrap();
        assert_relative_eq!(ci.lower, 0.885044905022391, epsilon = 1e-10);
        assert_relative_eq!(ci.upper, 1.1342420770418031, epsilon = 1e-10);
    }

    #[test]
    fn test_interval_brackets_estimate() {
        for &shape in &[0.3, 1.0, 2.0, 5.0, 20.0] {
            for &n in &[10usize, 100, 10_000] {
                let ci = gcm_ci_default(shape, n).unwrap();
                assert!(ci.lower <= ci.upper, "shape={shape} n={n}: {:?}", ci);
                assert!(ci.contains(shape), "shape={shape} n={n}: {:?}", ci);
                assert!(ci.lower > -1.0);
            }
        }
    }

    #[test]
    fn test_interval_narrows_with_n() {
        let w1 = gcm_ci_default(2.0, 100).unwrap().width();
        let w2 = gcm_ci_default(2.0, 10_000).unwrap().width();
        assert!(w2 < w1 / 5.0);
    }

    #[test]
    fn test_zero_shape_collapses() {
        let ci = gcm_ci_default(0.0, 50).unwrap();
        assert_eq!(ci.bounds(), (0.0, 0.0));
    }

    #[test]
    fn test_zero_z_is_a_point() {
        let ci = gcm_ci(1.5, 100, 0.0).unwrap();
        assert_relative_eq!(ci.lower, 1.5, epsilon = 1e-12);
        assert_relative_eq!(ci.upper, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_unbounded_upper() {
        assert_eq!(gcm_ci_default(1.8, 2).unwrap().upper, f64::INFINITY);
        let ci = gcm_ci_default(100.0, 10).unwrap();
        assert_eq!(ci.upper, f64::INFINITY);
        assert!(ci.lower.is_finite() && ci.lower < 100.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(gcm_ci_default(-0.5, 100), Err(Error::Domain(_))));
        assert!(matches!(gcm_ci_default(f64::NAN, 100), Err(Error::Domain(_))));
        assert!(matches!(gcm_ci_default(f64::INFINITY, 100), Err(Error::Domain(_))));
        assert!(matches!(gcm_ci_default(1.0, 0), Err(Error::Validation(_))));
        assert!(matches!(gcm_ci(1.0, 10, -1.0), Err(Error::Validation(_))));
        assert!(matches!(gcm_ci(1.0, 10, f64::NAN), Err(Error::Validation(_))));
    }

    #[test]
    fn test_z_for_level() {
        assert_relative_eq!(z_for_level(0.95).unwrap(), 1.959963984540054, epsilon = 1e-6);
        assert_relative_eq!(z_for_level(0.99).unwrap(), 2.5758293035489, epsilon = 1e-6);
        assert!(matches!(z_for_level(1.0), Err(Error::Validation(_))));
        assert!(matches!(z_for_level(0.0), Err(Error::Validation(_))));
        assert!(matches!(z_for_level(f64::NAN), Err(Error::Validation(_))));
    }

    #[test]
    fn test_higher_level_is_wider() {
        let z99 = z_for_level(0.99).unwrap();
        let ci95 = gcm_ci_default(2.0, 100).unwrap();
        let ci99 = gcm_ci(2.0, 100, z99).unwrap();
        assert!(ci99.lower < ci95.lower && ci99.upper > ci95.upper);
        assert_relative_eq!(ci99.lower, 1.1241224043408056, epsilon = 1e-5);
    }
}
