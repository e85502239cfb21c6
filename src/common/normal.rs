// Copyright 2024 Vladimir Kharchev

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The normal distribution.

use rand::Rng;

use crate::common::acklam::acklam;
use crate::distribution::continuous::ContinuousDistribution;
use crate::distribution::modal::{modes_of_unimodal, FiniteModal, Unimodal};
use crate::distribution::moments::{DistributionWithMean, DistributionWithVariance, Moments};
use crate::distribution::quantile::{ClosedFormMedian, ClosedFormQuantile};
use crate::distribution::ProbabilityDistribution;
use crate::error::{Result, StatsError};
use crate::real::Real;
use crate::sample::Samplable;

/// A normal distribution, also known as a Gaussian distribution.
///
/// The mean, the variance and the standard deviation are all stored, so constructing a
/// distribution from a standard deviation does not pay for a square root later.
///
/// # Example
/// ```
/// use stats_lattice::common::Normal;
/// use stats_lattice::prelude::*;
///
/// let height = Normal::by_standard_deviation(170.0_f64, 10.0).unwrap();
/// assert_eq!(height.variance(), 100.0);
/// assert_eq!(height.probability_of_at_most(170.0), 0.5);
/// assert!((height.probability_of_within(10.0, 170.0) - 0.6827).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal<T = f64> {
    mean: T,
    variance: T,
    standard_deviation: T,
}

impl<T: Real> Normal<T> {
    /// Creates a normal distribution with the given mean μ and variance σ².
    ///
    /// # Errors
    /// Returns [`StatsError::InvalidParameter`] if `mean` is not finite or if `variance` is not
    /// finite and positive.
    pub fn by_variance(mean: T, variance: T) -> Result<Self> {
        check_mean(mean)?;
        check_positive("variance", variance)?;
        Ok(Self {
            mean,
            variance,
            standard_deviation: variance.sqrt(),
        })
    }

    /// Creates a normal distribution with the given mean μ and standard deviation σ.
    ///
    /// # Errors
    /// Returns [`StatsError::InvalidParameter`] if `mean` is not finite or if
    /// `standard_deviation` is not finite and positive.
    pub fn by_standard_deviation(mean: T, standard_deviation: T) -> Result<Self> {
        check_mean(mean)?;
        check_positive("standard_deviation", standard_deviation)?;
        Ok(Self {
            mean,
            variance: standard_deviation * standard_deviation,
            standard_deviation,
        })
    }

    /// The standard normal distribution, with mean 0 and variance 1.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            mean: T::zero(),
            variance: T::one(),
            standard_deviation: T::one(),
        }
    }
}

fn check_mean<T: Real>(mean: T) -> Result<()> {
    if mean.is_finite() {
        Ok(())
    } else {
        Err(StatsError::invalid_parameter(
            "mean",
            mean.to_f64().unwrap_or(f64::NAN),
            "must be finite",
        ))
    }
}

fn check_positive<T: Real>(parameter: &'static str, value: T) -> Result<()> {
    if value.is_finite() && value > T::zero() {
        Ok(())
    } else {
        Err(StatsError::invalid_parameter(
            parameter,
            value.to_f64().unwrap_or(f64::NAN),
            "must be finite and positive",
        ))
    }
}

impl<T: Real> ProbabilityDistribution for Normal<T> {
    type Value = T;
    type Statistic = T;

    /// Always true: a normal distribution is symmetric about its mean.
    fn is_symmetric(&self) -> bool {
        true
    }

    fn probability_of_exactly(&self, _value: T) -> T {
        T::zero()
    }

    /// `erfc((μ − x) / (σ√2)) / 2`, usually denoted Φ(x) for the standard normal distribution.
    fn probability_of_at_most(&self, value: T) -> T {
        let scale = T::SQRT_2() * self.standard_deviation;
        ((self.mean - value) / scale).erfc() / T::constant(2.0)
    }
}

impl<T: Real> ContinuousDistribution<T> for Normal<T> {
    /// `exp(−(x − μ)² / 2σ²) / sqrt(2πσ²)`
    fn probability_density(&self, value: T) -> T {
        let two = T::constant(2.0);
        let deviation = value - self.mean;
        let numerator = (-(deviation * deviation) / self.variance / two).exp();
        let denominator = (two * self.variance * T::PI()).sqrt();
        numerator / denominator
    }
}

impl<T: Real> DistributionWithMean for Normal<T> {
    fn mean(&self) -> T {
        self.mean
    }
}

impl<T: Real> DistributionWithVariance for Normal<T> {
    fn variance(&self) -> T {
        self.variance
    }

    fn standard_deviation(&self) -> T {
        self.standard_deviation
    }
}

impl<T: Real> Moments for Normal<T> {
    /// Always 0.
    fn skewness(&self) -> T {
        T::zero()
    }

    fn moment_generating_function(&self, t: u32) -> T {
        let t = T::from_int(i64::from(t));
        (self.mean * t + self.variance * t * t / T::constant(2.0)).exp()
    }
}

impl<T: Real> ClosedFormMedian for Normal<T> {
    /// Always the mean.
    fn median(&self) -> T {
        self.mean
    }
}

impl<T: Real> ClosedFormQuantile for Normal<T> {
    /// The inverse normal CDF, computed with Acklam's algorithm. For the standard normal
    /// distribution this is the probit function.
    ///
    /// # Panics
    /// Panics unless `0 < fraction < 1`: a normal distribution has neither a 0th nor a 1st
    /// quantile.
    fn quantile(&self, fraction: T) -> T {
        acklam(fraction, self.standard_deviation, self.mean)
    }
}

impl<T: Real> FiniteModal for Normal<T> {
    fn modes(&self) -> Vec<T> {
        modes_of_unimodal(self)
    }
}

impl<T: Real> Unimodal for Normal<T> {
    /// Always the mean.
    fn mode(&self) -> T {
        self.mean
    }
}

impl<T: Real> Samplable for Normal<T> {
    /// Draws a value with the basic form of the Box–Muller transform.
    ///
    /// Only one of the two variates the transform produces is used.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        // (0, 1] keeps the logarithm finite.
        let uniform1 = T::one() - T::unit_uniform(rng);
        let uniform2 = T::unit_uniform(rng);
        let two = T::constant(2.0);
        let radius = (-two * uniform1.ln()).sqrt();
        let standard_variate = radius * (two * T::PI() * uniform2).cos();
        standard_variate * self.standard_deviation + self.mean
    }
}

impl<T: Real> rand::distributions::Distribution<T> for Normal<T> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        Samplable::sample(self, rng)
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use statrs::distribution::{Continuous, ContinuousCDF};

    use super::*;
    use crate::statistics;

    #[test]
    fn rejects_invalid_parameters() {
        assert!(Normal::by_variance(0.0_f64, 0.0).is_err());
        assert!(Normal::by_variance(0.0_f64, -1.0).is_err());
        assert!(Normal::by_standard_deviation(0.0_f64, 0.0).is_err());
        assert!(Normal::by_standard_deviation(0.0_f64, f64::INFINITY).is_err());
        assert!(Normal::by_standard_deviation(f64::NAN, 1.0).is_err());
        assert!(matches!(
            Normal::by_variance(0.0_f64, -2.0),
            Err(StatsError::InvalidParameter {
                parameter: "variance",
                ..
            })
        ));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn stores_all_three_scales() {
        let by_variance = Normal::by_variance(70.0_f64, 9.0).unwrap();
        assert_eq!(by_variance.standard_deviation(), 3.0);
        let by_deviation = Normal::by_standard_deviation(70.0_f64, 3.0).unwrap();
        assert_eq!(by_deviation.variance(), 9.0);
        assert_eq!(by_variance, by_deviation);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn centered_at_mean() {
        let normal = Normal::by_standard_deviation(0.0_f64, 4.2).unwrap();
        assert_eq!(normal.probability_of_at_most(0.0), 0.5);
        assert_eq!(normal.probability_of_less_than(f64::INFINITY), 1.0);
        assert_eq!(normal.median(), normal.mean());
        assert_eq!(normal.mode(), normal.mean());
        assert_eq!(normal.modes(), vec![0.0]);
        assert_eq!(normal.probability_of_exactly(1.234), 0.0);
    }

    #[test]
    fn density_at_one() {
        let normal = Normal::<f64>::standard();
        assert_relative_eq!(
            normal.probability_density(1.0),
            0.241_970_724_519_143_35,
            max_relative = 1e-15
        );
        assert_relative_eq!(
            normal.probability_density(1.0),
            1.0 / (2.0 * std::f64::consts::E * std::f64::consts::PI).sqrt(),
            max_relative = 1e-15
        );
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn density_is_symmetric() {
        let normal = Normal::by_standard_deviation(0.0_f64, 2.5).unwrap();
        for &x in &[0.1, 0.5, 1.0, 3.3, 7.0] {
            assert_eq!(normal.probability_density(x), normal.probability_density(-x));
        }
    }

    #[test]
    fn agrees_with_statrs() {
        let ours = Normal::by_standard_deviation(1.5_f64, 2.0).unwrap();
        let reference = statrs::distribution::Normal::new(1.5, 2.0).unwrap();
        for &x in &[-5.0, -1.0, 0.0, 1.5, 2.2, 6.0] {
            assert_relative_eq!(ours.probability_of_at_most(x), reference.cdf(x), max_relative = 1e-12);
            assert_relative_eq!(ours.probability_density(x), reference.pdf(x), max_relative = 1e-12);
        }
    }

    #[test]
    fn empirical_rule() {
        let normal = Normal::by_standard_deviation(-123.0_f64, 7.0).unwrap();
        assert_relative_eq!(normal.probability_of_within(7.0, -123.0), 0.68, max_relative = 0.01);
        assert_relative_eq!(normal.probability_of_within(14.0, -123.0), 0.95, max_relative = 0.01);
        assert_relative_eq!(normal.probability_of_within(21.0, -123.0), 0.997, max_relative = 0.01);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn moment_generating_function() {
        let normal = Normal::<f64>::standard();
        assert_eq!(normal.moment_generating_function(0), 1.0);
        let expected = [1.64872, 7.38906, 90.0171, 2_980.96];
        for (t, &value) in (1..).zip(expected.iter()) {
            assert_relative_eq!(normal.moment_generating_function(t), value, max_relative = 1e-6);
        }
        assert_relative_eq!(normal.moment_generating_function(5), 268_337.0, max_relative = 1e-5);
        assert_abs_diff_eq!(normal.skewness(), 0.0);
    }

    #[test]
    fn quantile_inverts_cdf() {
        let normal = Normal::by_standard_deviation(10.0_f64, 3.0).unwrap();
        for i in 1..200 {
            let p = f64::from(i) / 200.0;
            assert_abs_diff_eq!(normal.probability_of_at_most(normal.quantile(p)), p, epsilon = 1e-8);
        }
        assert_abs_diff_eq!(normal.quantile(0.5), 10.0);
    }

    #[test]
    #[should_panic(expected = "(0, 1)")]
    fn quantile_rejects_zero() {
        let _ = Normal::<f64>::standard().quantile(0.0);
    }

    #[test]
    fn box_muller_moments() {
        let mut rng = StdRng::seed_from_u64(21);
        let normal = Normal::by_standard_deviation(5.0_f64, 2.0).unwrap();
        let draws = normal.sample_n(&mut rng, 200_000);
        assert!(draws.iter().all(|x| x.is_finite()));
        assert_abs_diff_eq!(statistics::mean(&draws).unwrap(), 5.0, epsilon = 0.03);
        assert_abs_diff_eq!(statistics::sample_variance(&draws).unwrap(), 4.0, epsilon = 0.1);
    }

    #[test]
    fn box_muller_matches_reference_sampler() {
        use rand::distributions::Distribution;

        let mut rng = StdRng::seed_from_u64(22);
        let ours = Normal::by_standard_deviation(-1.0_f64, 0.5).unwrap();
        let reference = rand_distr::Normal::new(-1.0, 0.5).unwrap();
        let ours: Vec<f64> = ours.sample_iter(&mut rng).take(100_000).collect();
        let theirs: Vec<f64> = reference.sample_iter(&mut rng).take(100_000).collect();
        let tail = |data: &[f64]| {
            #[allow(clippy::cast_precision_loss)]
            let fraction = data.iter().filter(|&&x| x > 0.0).count() as f64 / data.len() as f64;
            fraction
        };
        // P(X > 0) = 1 − Φ(2) ≈ 0.0228
        assert_abs_diff_eq!(tail(&ours), 0.0228, epsilon = 0.003);
        assert_abs_diff_eq!(tail(&ours), tail(&theirs), epsilon = 0.004);
    }

    #[test]
    fn single_precision() {
        let normal = Normal::<f32>::standard();
        assert!((normal.probability_density(1.0) - 0.241_970_7).abs() < 1e-6);
        assert!((normal.probability_of_at_most(1.0) - 0.841_344_7).abs() < 1e-6);
    }
}
