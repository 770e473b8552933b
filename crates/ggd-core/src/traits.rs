//! Core traits for the generalized Gaussian toolkit
//!
//! Distribution models expose their moments and their density/CDF through
//! one trait so that evaluation and estimation code can stay generic over
//! the concrete family.

/// Univariate continuous distribution with closed-form summary statistics.
pub trait ContinuousDistribution {
    /// Mean
    fn mean(&self) -> f64;

    /// Median
    fn median(&self) -> f64;

    /// Mode
    fn mode(&self) -> f64;

    /// Variance
    fn variance(&self) -> f64;

    /// Standard deviation
    fn std(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Skewness
    fn skewness(&self) -> f64;

    /// Excess kurtosis
    fn kurtosis(&self) -> f64;

    /// Differential entropy (nats)
    fn entropy(&self) -> f64;

    /// Probability density at `x`.
    fn pdf(&self, x: f64) -> f64;

    /// Log-density at `x`.
    fn logpdf(&self, x: f64) -> f64 {
        self.pdf(x).ln()
    }

    /// Cumulative distribution function at `x`.
    fn cdf(&self, x: f64) -> f64;

    /// Survival function `1 - cdf(x)`.
    fn sf(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Uniform on [0, 1].
    struct UnitUniform;

    impl ContinuousDistribution for UnitUniform {
        fn mean(&self) -> f64 {
            0.5
        }

        fn median(&self) -> f64 {
            0.5
        }

        fn mode(&self) -> f64 {
            0.5
        }

        fn variance(&self) -> f64 {
            1.0 / 12.0
        }

        fn skewness(&self) -> f64 {
            0.0
        }

        fn kurtosis(&self) -> f64 {
            -1.2
        }

        fn entropy(&self) -> f64 {
            0.0
        }

        fn pdf(&self, x: f64) -> f64 {
            if (0.0..=1.0).contains(&x) { 1.0 } else { 0.0 }
        }

        fn cdf(&self, x: f64) -> f64 {
            x.clamp(0.0, 1.0)
        }
    }

    #[test]
    fn test_default_methods() {
        let u = UnitUniform;
        assert!((u.std() - (1.0f64 / 12.0).sqrt()).abs() < 1e-15);
        assert_eq!(u.logpdf(0.3), 0.0);
        assert!(u.logpdf(2.0).is_infinite() && u.logpdf(2.0).is_sign_negative());
        assert!((u.sf(0.25) - 0.75).abs() < 1e-15);
    }
}
