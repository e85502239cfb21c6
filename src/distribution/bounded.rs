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

//! Bounded and discrete distributions.

use std::ops::Sub;

use num_traits::{Bounded, Float, One, PrimInt, Zero};

use super::moments::Moments;
use super::quantile::ClosedFormQuantile;
use super::ProbabilityDistribution;

/// A probability distribution with a lower bound.
pub trait LowerBoundedDistribution: ProbabilityDistribution {
    /// The lowest value with a positive probability.
    fn min(&self) -> Self::Value;
}

/// A probability distribution with a lower and an upper bound.
///
/// All values with a positive probability lie in `[min, max]`.
pub trait BoundedDistribution: LowerBoundedDistribution {
    /// The highest value with a positive probability.
    fn max(&self) -> Self::Value;

    /// The difference between the maximum and the minimum.
    ///
    /// While technically a statistic, the range has the type of the values.
    fn range(&self) -> Self::Value
    where
        Self::Value: Sub<Output = Self::Value>,
    {
        self.max() - self.min()
    }
}

/// Marker for distributions whose values are countable.
///
/// A discrete distribution with a lower bound and integer values can use
/// [`cumulative_probability`] as its CDF.
pub trait DiscreteDistribution: ProbabilityDistribution {}

/// The default CDF of a lower-bounded discrete distribution over integers: the sum of the PMF
/// from [`LowerBoundedDistribution::min`] to `value`.
///
/// Takes O(`value` − `min`) evaluations of the PMF, so distributions with a closed-form CDF
/// should use it instead.
///
/// # Example
/// ```
/// use stats_lattice::common::Poisson;
/// use stats_lattice::distribution::bounded::cumulative_probability;
/// use stats_lattice::distribution::ProbabilityDistribution;
///
/// let poisson = Poisson::<f64>::new(2.0).unwrap();
/// let by_hand = poisson.probability_of_exactly(0)
///     + poisson.probability_of_exactly(1)
///     + poisson.probability_of_exactly(2);
/// assert!((cumulative_probability(&poisson, 2) - by_hand).abs() < 1e-15);
/// ```
#[must_use]
pub fn cumulative_probability<D>(distribution: &D, value: D::Value) -> D::Statistic
where
    D: DiscreteDistribution + LowerBoundedDistribution,
    D::Value: PrimInt,
{
    let mut total = D::Statistic::zero();
    let mut outcome = distribution.min();
    while outcome <= value {
        total = total + distribution.probability_of_exactly(outcome);
        if outcome == <D::Value as Bounded>::max_value() {
            break;
        }
        outcome = outcome + D::Value::one();
    }
    // Rounding in the sum may overshoot 1.
    total.min(D::Statistic::one())
}

/// A discrete distribution over a finite set of values.
///
/// Such a distribution always has every moment and a closed-form quantile.
pub trait BoundedDiscreteDistribution:
    DiscreteDistribution + BoundedDistribution + Moments + ClosedFormQuantile
{
    /// The values that may have a positive probability for some member of the family,
    /// in ascending order.
    ///
    /// For example, the domain of every Bernoulli distribution is `[0, 1]`, even though 1 can
    /// never be sampled when the probability of one is 0.
    fn domain() -> Vec<Self::Value>
    where
        Self: Sized;

    /// The values with a positive probability for this particular distribution, in ascending
    /// order.
    fn support(&self) -> Vec<Self::Value>;
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{cumulative_probability, DiscreteDistribution, LowerBoundedDistribution};
    use crate::distribution::tests::Die;
    use crate::distribution::ProbabilityDistribution;

    /// Uniform over the three largest `i64` values.
    struct TopThree;

    impl ProbabilityDistribution for TopThree {
        type Value = i64;
        type Statistic = f64;

        fn is_symmetric(&self) -> bool {
            true
        }

        fn probability_of_exactly(&self, value: i64) -> f64 {
            if value >= i64::MAX - 2 {
                1.0 / 3.0
            } else {
                0.0
            }
        }

        fn probability_of_at_most(&self, value: i64) -> f64 {
            cumulative_probability(self, value)
        }
    }

    impl DiscreteDistribution for TopThree {}

    impl LowerBoundedDistribution for TopThree {
        fn min(&self) -> i64 {
            i64::MAX - 2
        }
    }

    #[test]
    fn sums_from_the_lower_bound() {
        assert_abs_diff_eq!(cumulative_probability(&Die, 1), 1.0 / 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(cumulative_probability(&Die, 3), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(cumulative_probability(&Die, 0), 0.0);
    }

    #[test]
    fn never_exceeds_one() {
        assert!(cumulative_probability(&Die, 60) <= 1.0);
        assert_abs_diff_eq!(cumulative_probability(&Die, 60), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn stops_at_the_largest_value() {
        assert_abs_diff_eq!(TopThree.probability_of_at_most(i64::MAX - 1), 2.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(TopThree.probability_of_at_most(i64::MAX), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(TopThree.probability_of_at_most(0), 0.0);
    }
}
