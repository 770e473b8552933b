//! Small numerically-stable math utilities used across the distribution code.

use statrs::function::gamma::ln_gamma;

/// Ratio of gamma functions `Γ(a) / Γ(b)` for `a, b > 0`.
///
/// Evaluated as `exp(lnΓ(a) - lnΓ(b))`: both gammas overflow long before
/// their ratio does (small shape parameters push arguments into the hundreds).
#[inline]
pub fn gamma_ratio(a: f64, b: f64) -> f64 {
    (ln_gamma(a) - ln_gamma(b)).exp()
}

/// Hyperbolic cotangent.
///
/// Written as `1 / tanh(x)` so that `coth(±inf) = ±1` instead of `inf/inf`.
#[inline]
pub fn coth(x: f64) -> f64 {
    1.0 / x.tanh()
}

/// Inverse hyperbolic cotangent, defined for `|x| >= 1`.
///
/// `acoth(x) = atanh(1/x)`; `acoth(±1) = ±inf`, `|x| < 1` gives `NaN`.
#[inline]
pub fn acoth(x: f64) -> f64 {
    if x.abs() < 1.0 {
        return f64::NAN;
    }
    x.recip().atanh()
}
