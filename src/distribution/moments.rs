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

//! Moments of distributions.
//!
//! Every distribution with a variance has a mean, so the traits form a chain:
//! [`DistributionWithMean`] ⊂ [`DistributionWithVariance`] ⊂ [`Moments`].

use num_traits::Float;

use super::ProbabilityDistribution;

/// A probability distribution that always has a mean.
pub trait DistributionWithMean: ProbabilityDistribution {
    /// The mean, also known as the expectation or the first raw moment.
    fn mean(&self) -> Self::Statistic;
}

/// A probability distribution that always has a variance.
pub trait DistributionWithVariance: DistributionWithMean {
    /// The variance, also known as the second central moment. Never negative.
    fn variance(&self) -> Self::Statistic;

    /// The standard deviation, `sqrt(variance)`.
    ///
    /// Distributions that store the standard deviation return it directly.
    fn standard_deviation(&self) -> Self::Statistic {
        Float::sqrt(self.variance())
    }
}

/// A probability distribution for which all moments are defined.
pub trait Moments: DistributionWithVariance {
    /// The skewness, also known as the third standardized moment.
    fn skewness(&self) -> Self::Statistic;

    /// The moment-generating function, E\[exp(`t`X)\].
    ///
    /// `moment_generating_function(0)` is always 1.
    ///
    /// # Example
    /// ```
    /// use stats_lattice::common::Normal;
    /// use stats_lattice::distribution::moments::Moments;
    ///
    /// let normal = Normal::<f64>::standard();
    /// assert_eq!(normal.moment_generating_function(0), 1.0);
    /// assert!((normal.moment_generating_function(1) - 1.64872).abs() < 1e-5);
    /// ```
    fn moment_generating_function(&self, t: u32) -> Self::Statistic;
}
