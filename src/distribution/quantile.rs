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

//! Closed-form medians and quantiles.

use crate::real::Real;

use super::ProbabilityDistribution;

/// A probability distribution with a closed-form median.
pub trait ClosedFormMedian: ProbabilityDistribution {
    /// A median of the distribution.
    ///
    /// If there are multiple medians, the smallest is chosen.
    fn median(&self) -> Self::Value;
}

/// A probability distribution with a closed-form quantile function.
///
/// Distributions without a more direct formula for the median can implement
/// [`ClosedFormMedian`] with [`median_from_quantile`].
pub trait ClosedFormQuantile: ClosedFormMedian {
    /// The quantile function, the generalized inverse of the CDF.
    ///
    /// Returns the smallest value `x` such that `probability_of_at_most(x) ≥ fraction`. If the CDF
    /// is strictly increasing, this is the unique `x` with `probability_of_at_most(x) == fraction`.
    ///
    /// # Panics
    /// Implementations panic if `fraction` is outside the interval of probabilities for which
    /// the distribution has a quantile (at most `[0, 1]`).
    fn quantile(&self, fraction: Self::Statistic) -> Self::Value;

    /// The smallest first percentile of the distribution.
    fn bottom_one_percent(&self) -> Self::Value {
        self.quantile(Self::Statistic::constant(0.01))
    }

    /// The smallest 99th percentile of the distribution.
    fn top_one_percent(&self) -> Self::Value {
        self.quantile(Self::Statistic::constant(0.99))
    }
}

/// The default median of a distribution with a closed-form quantile: `quantile(0.5)`.
///
/// # Example
/// ```
/// use stats_lattice::common::Bernoulli;
/// use stats_lattice::distribution::quantile::{median_from_quantile, ClosedFormMedian};
///
/// let coin = Bernoulli::<f64>::new(0.6).unwrap();
/// assert_eq!(median_from_quantile(&coin), 1);
/// assert_eq!(coin.median(), 1);
/// ```
#[must_use]
pub fn median_from_quantile<D: ClosedFormQuantile>(distribution: &D) -> D::Value {
    distribution.quantile(D::Statistic::constant(0.5))
}
