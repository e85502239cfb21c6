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

//! The capability lattice of probability distributions.
//!
//! Every distribution implements [`ProbabilityDistribution`], which only requires the
//! probability mass function and the cumulative distribution function. All the other
//! probabilities (tails, ranges, collections) are derived from these two by default methods.
//!
//! The remaining capabilities are independent traits layered on top of the root:
//! - [`bounded`]: lower and upper bounds, discreteness, and the summation CDF.
//! - [`continuous`]: densities.
//! - [`moments`]: mean, variance, skewness and the moment-generating function.
//! - [`quantile`]: closed-form medians and quantiles.
//! - [`modal`]: modes.
//!
//! Sampling lives in [`crate::sample`].

use std::ops::{Add, Bound, RangeBounds, Sub};

use num_traits::{Float, One, Zero};

use crate::real::Real;

pub mod bounded;
pub mod continuous;
pub mod modal;
pub mod moments;
pub mod quantile;

/// A distribution of all possible values of a random variable together with their
/// probabilities.
///
/// Implementors provide [`probability_of_exactly`](Self::probability_of_exactly) (the PMF) and
/// [`probability_of_at_most`](Self::probability_of_at_most) (the CDF). Queries outside the
/// support are not errors: they return 0 or 1, consistently with the CDF being non-decreasing.
///
/// # Example
/// ```
/// use stats_lattice::common::Bernoulli;
/// use stats_lattice::distribution::ProbabilityDistribution;
///
/// let coin = Bernoulli::<f64>::fair();
/// assert_eq!(coin.probability_of_at_least(1), 0.5);
/// assert_eq!(coin.probability_of_any([0, 1]), 1.0);
/// assert_eq!(coin.probability_in(-5..=5), 1.0);
/// ```
pub trait ProbabilityDistribution {
    /// The type of values from the distribution.
    type Value: Copy + PartialOrd;

    /// The type of probabilities and statistics of the distribution.
    ///
    /// For continuous distributions this is the same type as [`Self::Value`].
    type Statistic: Real;

    /// Whether the distribution is symmetric about some center.
    ///
    /// The center does not need to be a valid value: a fair Bernoulli distribution is
    /// symmetric about 0.5.
    fn is_symmetric(&self) -> bool;

    /// The probability mass function, P(X = `value`).
    ///
    /// Always 0 for continuous distributions.
    fn probability_of_exactly(&self, value: Self::Value) -> Self::Statistic;

    /// The cumulative distribution function, P(X ≤ `value`).
    fn probability_of_at_most(&self, value: Self::Value) -> Self::Statistic;

    /// P(X ≠ `value`)
    fn probability_of_not(&self, value: Self::Value) -> Self::Statistic {
        Self::Statistic::one() - self.probability_of_exactly(value)
    }

    /// P(X < `value`)
    fn probability_of_less_than(&self, value: Self::Value) -> Self::Statistic {
        self.probability_of_at_most(value) - self.probability_of_exactly(value)
    }

    /// P(X > `value`)
    fn probability_of_greater_than(&self, value: Self::Value) -> Self::Statistic {
        Self::Statistic::one() - self.probability_of_at_most(value)
    }

    /// P(X ≥ `value`)
    fn probability_of_at_least(&self, value: Self::Value) -> Self::Statistic {
        Self::Statistic::one() - self.probability_of_less_than(value)
    }

    /// P(X ∈ `values`), the sum of the PMF over `values`.
    ///
    /// Repeated values are counted every time they occur.
    fn probability_of_any<I>(&self, values: I) -> Self::Statistic
    where
        I: IntoIterator<Item = Self::Value>,
        Self: Sized,
    {
        values
            .into_iter()
            .map(|value| self.probability_of_exactly(value))
            .sum()
    }

    /// P(X ∈ `range`).
    ///
    /// For `a..b` this is `P(X < b) - P(X < a)` and for `a..=b` it is `P(X ≤ b) - P(X < a)`.
    /// An empty range has probability 0.
    fn probability_in<R>(&self, range: R) -> Self::Statistic
    where
        R: RangeBounds<Self::Value>,
        Self: Sized,
    {
        let upper = match range.end_bound() {
            Bound::Included(&end) => self.probability_of_at_most(end),
            Bound::Excluded(&end) => self.probability_of_less_than(end),
            Bound::Unbounded => Self::Statistic::one(),
        };
        let lower = match range.start_bound() {
            Bound::Included(&start) => self.probability_of_less_than(start),
            Bound::Excluded(&start) => self.probability_of_at_most(start),
            Bound::Unbounded => Self::Statistic::zero(),
        };
        (upper - lower).max(Self::Statistic::zero())
    }

    /// P(|X − `center`| ≤ `tolerance`)
    fn probability_of_within(&self, tolerance: Self::Value, center: Self::Value) -> Self::Statistic
    where
        Self::Value: Add<Output = Self::Value> + Sub<Output = Self::Value>,
        Self: Sized,
    {
        self.probability_in(center - tolerance..=center + tolerance)
    }
}
