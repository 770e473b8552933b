//! Gamma distribution utilities.
//!
//! Regularized incomplete gamma functions over `statrs`, taking `ln t` and
//! patching the small-argument range, plus a validated `rand_distr` sampler.

use ggd_core::{Error, Result};
use statrs::function::gamma::{gamma_lr, gamma_ur, ln_gamma};

/// Below this argument `statrs` rounds `P(a, t)` to zero; the series is used instead.
const SERIES_CUTOFF: f64 = 1e-10;

fn check_shape_scale(shape: f64, scale: f64) -> Result<()> {
    if !shape.is_finite() || shape <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "shape must be finite and > 0, got {}",
            shape
        )));
    }
    if !scale.is_finite() || scale <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "scale must be finite and > 0, got {}",
            scale
        )));
    }
    Ok(())
}

/// `P(a, t)` for small `t`, from the first two series terms:
/// `t^a / Γ(a + 1) · (1 - a·t / (a + 1))`.
fn small_arg_lower(a: f64, ln_t: f64) -> f64 {
    let t = ln_t.exp();
    (a * ln_t - ln_gamma(a + 1.0)).exp() * (1.0 - a * t / (a + 1.0))
}

/// Regularized lower incomplete gamma `P(a, t)` given `ln t`.
///
/// Taking the logarithm keeps `t = z^β` usable when it underflows, as it
/// does near the mode of a large-shape generalized Gaussian. `a` must be
/// finite and positive; NaN propagates.
pub fn lower_regularized_ln(a: f64, ln_t: f64) -> f64 {
    if ln_t.is_nan() {
        return f64::NAN;
    }
    if ln_t == f64::NEG_INFINITY {
        return 0.0;
    }
    if ln_t == f64::INFINITY {
        return 1.0;
    }
    if ln_t < SERIES_CUTOFF.ln() {
        return small_arg_lower(a, ln_t);
    }
    let t = ln_t.exp();
    if t.is_infinite() {
        return 1.0;
    }
    gamma_lr(a, t)
}

/// Regularized upper incomplete gamma `Q(a, t)` given `ln t`.
///
/// Same conventions as [`lower_regularized_ln`].
pub fn upper_regularized_ln(a: f64, ln_t: f64) -> f64 {
    if ln_t.is_nan() {
        return f64::NAN;
    }
    if ln_t == f64::NEG_INFINITY {
        return 1.0;
    }
    if ln_t == f64::INFINITY {
        return 0.0;
    }
    if ln_t < SERIES_CUTOFF.ln() {
        return 1.0 - small_arg_lower(a, ln_t);
    }
    let t = ln_t.exp();
    if t.is_infinite() {
        return 0.0;
    }
    gamma_ur(a, t)
}

/// Gamma(`shape`, `scale`) sampler.
pub fn sampler(shape: f64, scale: f64) -> Result<rand_distr::Gamma<f64>> {
    check_shape_scale(shape, scale)?;
    rand_distr::Gamma::new(shape, scale)
        .map_err(|e| Error::Computation(format!("gamma sampler: {}", e)))
}
