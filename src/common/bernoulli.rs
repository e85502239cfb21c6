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

//! The Bernoulli distribution.

use num_traits::Float;
use rand::Rng;

use crate::distribution::bounded::{
    BoundedDiscreteDistribution, BoundedDistribution, DiscreteDistribution,
    LowerBoundedDistribution,
};
use crate::distribution::modal::FiniteModal;
use crate::distribution::moments::{DistributionWithMean, DistributionWithVariance, Moments};
use crate::distribution::quantile::{median_from_quantile, ClosedFormMedian, ClosedFormQuantile};
use crate::distribution::ProbabilityDistribution;
use crate::error::{Result, StatsError};
use crate::real::Real;
use crate::sample::Samplable;

/// The distribution of a random variable that is either 0 or 1.
///
/// # Example
/// ```
/// use stats_lattice::common::Bernoulli;
/// use stats_lattice::prelude::*;
///
/// let coin = Bernoulli::<f64>::fair();
/// assert_eq!(coin.mean(), 0.5);
/// assert_eq!(coin.variance(), 0.25);
/// assert_eq!(coin.modes(), vec![0, 1]);
/// assert_eq!(coin.median(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bernoulli<T = f64> {
    probability_of_one: T,
}

impl<T: Real> Bernoulli<T> {
    /// Creates a Bernoulli distribution with the given probability of sampling 1.
    ///
    /// # Errors
    /// Returns [`StatsError::InvalidParameter`] unless `0 ≤ probability_of_one ≤ 1`.
    pub fn new(probability_of_one: T) -> Result<Self> {
        if !(T::zero() <= probability_of_one && probability_of_one <= T::one()) {
            return Err(StatsError::invalid_parameter(
                "probability_of_one",
                probability_of_one.to_f64().unwrap_or(f64::NAN),
                "must be in range [0, 1]",
            ));
        }
        Ok(Self { probability_of_one })
    }

    /// A distribution modeling a fair coin.
    #[must_use]
    pub fn fair() -> Self {
        Self {
            probability_of_one: T::constant(0.5),
        }
    }

    /// The probability of sampling 1.
    #[must_use]
    pub fn probability_of_one(&self) -> T {
        self.probability_of_one
    }

    /// The probability of sampling 0.
    #[must_use]
    pub fn probability_of_zero(&self) -> T {
        T::one() - self.probability_of_one
    }
}

impl<T: Real> ProbabilityDistribution for Bernoulli<T> {
    type Value = i64;
    type Statistic = T;

    fn is_symmetric(&self) -> bool {
        let p = self.probability_of_one;
        p.is_zero() || p == T::constant(0.5) || p.is_one()
    }

    fn probability_of_exactly(&self, value: i64) -> T {
        match value {
            0 => self.probability_of_zero(),
            1 => self.probability_of_one,
            _ => T::zero(),
        }
    }

    fn probability_of_at_most(&self, value: i64) -> T {
        match value {
            v if v < 0 => T::zero(),
            0 => self.probability_of_zero(),
            _ => T::one(),
        }
    }
}

impl<T: Real> DiscreteDistribution for Bernoulli<T> {}

impl<T: Real> LowerBoundedDistribution for Bernoulli<T> {
    fn min(&self) -> i64 {
        i64::from(self.probability_of_one.is_one())
    }
}

impl<T: Real> BoundedDistribution for Bernoulli<T> {
    fn max(&self) -> i64 {
        i64::from(!self.probability_of_one.is_zero())
    }
}

impl<T: Real> DistributionWithMean for Bernoulli<T> {
    fn mean(&self) -> T {
        self.probability_of_one
    }
}

impl<T: Real> DistributionWithVariance for Bernoulli<T> {
    fn variance(&self) -> T {
        self.probability_of_one * self.probability_of_zero()
    }
}

impl<T: Real> Moments for Bernoulli<T> {
    fn skewness(&self) -> T {
        let p = self.probability_of_one;
        let q = self.probability_of_zero();
        (q - p) / Float::sqrt(p * q)
    }

    fn moment_generating_function(&self, t: u32) -> T {
        self.probability_of_zero()
            + self.probability_of_one * Float::exp(T::from_int(i64::from(t)))
    }
}

impl<T: Real> ClosedFormMedian for Bernoulli<T> {
    fn median(&self) -> i64 {
        median_from_quantile(self)
    }
}

impl<T: Real> ClosedFormQuantile for Bernoulli<T> {
    /// # Panics
    /// Panics unless `0 ≤ fraction ≤ 1`.
    fn quantile(&self, fraction: T) -> i64 {
        assert!(
            T::zero() <= fraction && fraction <= T::one(),
            "the quantile fraction must be in [0, 1], got {fraction}"
        );
        i64::from(fraction > self.probability_of_zero())
    }
}

impl<T: Real> BoundedDiscreteDistribution for Bernoulli<T> {
    fn domain() -> Vec<i64> {
        vec![0, 1]
    }

    fn support(&self) -> Vec<i64> {
        let p = self.probability_of_one;
        if p.is_zero() {
            vec![0]
        } else if p.is_one() {
            vec![1]
        } else {
            vec![0, 1]
        }
    }
}

impl<T: Real> FiniteModal for Bernoulli<T> {
    fn modes(&self) -> Vec<i64> {
        let half = T::constant(0.5);
        let p = self.probability_of_one;
        if p < half {
            vec![0]
        } else if p == half {
            vec![0, 1]
        } else {
            vec![1]
        }
    }
}

impl<T: Real> Samplable for Bernoulli<T> {
    /// Compares one uniform draw with the probability of one, which is cheaper than the
    /// quantile of the draw.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        i64::from(T::unit_uniform(rng) < self.probability_of_one)
    }
}

impl<T: Real> rand::distributions::Distribution<i64> for Bernoulli<T> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        Samplable::sample(self, rng)
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn rejects_probabilities_outside_unit_interval() {
        assert!(Bernoulli::new(-0.1_f64).is_err());
        assert!(Bernoulli::new(1.1_f64).is_err());
        assert!(Bernoulli::new(f64::NAN).is_err());
        assert!(Bernoulli::new(0.0_f64).is_ok());
        assert!(Bernoulli::new(1.0_f64).is_ok());
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn mass_and_cumulative() {
        let bern = Bernoulli::new(0.3_f64).unwrap();
        assert_eq!(bern.probability_of_exactly(1), 0.3);
        assert_eq!(bern.probability_of_exactly(0), bern.probability_of_zero());
        assert_eq!(bern.probability_of_exactly(2), 0.0);
        assert_eq!(bern.probability_of_exactly(-1), 0.0);
        assert_eq!(bern.probability_of_at_most(-1), 0.0);
        assert_eq!(bern.probability_of_at_most(0), bern.probability_of_zero());
        assert_eq!(bern.probability_of_at_most(1), 1.0);
        assert_eq!(bern.probability_of_at_most(5), 1.0);
        assert_eq!(bern.probability_of_any([0, 1]), 1.0);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn mean_is_probability_of_one() {
        for &p in &[0.0, 0.1, 0.37, 0.5, 0.9, 1.0] {
            assert_eq!(Bernoulli::new(p).unwrap().mean(), p);
        }
    }

    #[test]
    fn medians() {
        assert_eq!(Bernoulli::new(0.4_f64).unwrap().median(), 0);
        assert_eq!(Bernoulli::new(0.6_f64).unwrap().median(), 1);
        assert_eq!(Bernoulli::<f64>::fair().median(), 0);
    }

    #[test]
    fn quantiles() {
        let bern = Bernoulli::new(0.25_f64).unwrap();
        assert_eq!(bern.quantile(0.0), 0);
        assert_eq!(bern.quantile(0.75), 0);
        assert_eq!(bern.quantile(0.76), 1);
        assert_eq!(bern.quantile(1.0), 1);
        assert_eq!(bern.bottom_one_percent(), 0);
        assert_eq!(bern.top_one_percent(), 1);
    }

    #[test]
    #[should_panic(expected = "[0, 1]")]
    fn quantile_rejects_fraction_above_one() {
        let _ = Bernoulli::<f64>::fair().quantile(1.5);
    }

    #[test]
    fn modes() {
        assert_eq!(Bernoulli::new(0.2_f64).unwrap().modes(), vec![0]);
        assert_eq!(Bernoulli::<f64>::fair().modes(), vec![0, 1]);
        assert_eq!(Bernoulli::new(0.8_f64).unwrap().modes(), vec![1]);
    }

    #[test]
    fn bounds_collapse_at_degenerate_probabilities() {
        let never = Bernoulli::new(0.0_f64).unwrap();
        assert_eq!((never.min(), never.max()), (0, 0));
        assert_eq!(never.support(), vec![0]);
        let always = Bernoulli::new(1.0_f64).unwrap();
        assert_eq!((always.min(), always.max()), (1, 1));
        assert_eq!(always.support(), vec![1]);
        let coin = Bernoulli::<f64>::fair();
        assert_eq!((coin.min(), coin.max(), coin.range()), (0, 1, 1));
        assert_eq!(coin.support(), vec![0, 1]);
        assert_eq!(Bernoulli::<f64>::domain(), vec![0, 1]);
    }

    #[test]
    fn symmetry() {
        assert!(Bernoulli::new(0.0_f64).unwrap().is_symmetric());
        assert!(Bernoulli::<f64>::fair().is_symmetric());
        assert!(Bernoulli::new(1.0_f64).unwrap().is_symmetric());
        assert!(!Bernoulli::new(0.3_f64).unwrap().is_symmetric());
    }

    #[test]
    fn moments() {
        let bern = Bernoulli::new(0.2_f64).unwrap();
        assert_relative_eq!(bern.variance(), 0.16, max_relative = 1e-12);
        assert_relative_eq!(bern.standard_deviation(), 0.4, max_relative = 1e-12);
        assert_relative_eq!(bern.skewness(), 0.6 / 0.4, max_relative = 1e-12);
        assert_abs_diff_eq!(Bernoulli::<f64>::fair().skewness(), 0.0);
        assert_abs_diff_eq!(bern.moment_generating_function(0), 1.0, epsilon = 1e-15);
        assert_relative_eq!(
            bern.moment_generating_function(2),
            0.8 + 0.2 * 2.0_f64.exp(),
            max_relative = 1e-12
        );
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn direct_sampling_frequency() {
        let mut rng = StdRng::seed_from_u64(11);
        let bern = Bernoulli::new(0.7_f64).unwrap();
        let draws = bern.sample_n(&mut rng, 100_000);
        let frequency = draws.iter().sum::<i64>() as f64 / draws.len() as f64;
        assert!((frequency - 0.7).abs() < 0.01);
    }

    #[test]
    fn degenerate_sampling() {
        let mut rng = StdRng::seed_from_u64(12);
        let never = Bernoulli::new(0.0_f64).unwrap();
        let always = Bernoulli::new(1.0_f64).unwrap();
        assert!(never.sample_n(&mut rng, 1_000).iter().all(|&v| v == 0));
        assert!(always.sample_n(&mut rng, 1_000).iter().all(|&v| v == 1));
    }

    #[test]
    fn rand_distribution_interop() {
        use rand::distributions::Distribution;

        let rng = StdRng::seed_from_u64(13);
        let coin = Bernoulli::<f64>::fair();
        let flips: Vec<i64> = coin.sample_iter(rng).take(50).collect();
        assert_eq!(flips.len(), 50);
    }
}
