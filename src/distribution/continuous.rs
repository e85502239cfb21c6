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

//! Continuous distributions.

use crate::real::Real;

use super::ProbabilityDistribution;

/// A continuous probability distribution over real values of type `T`.
///
/// The values and the statistics of a continuous distribution share the same floating-point
/// type. Because every single value has probability 0, implementors return 0 from
/// [`ProbabilityDistribution::probability_of_exactly`].
pub trait ContinuousDistribution<T: Real>: ProbabilityDistribution<Value = T, Statistic = T> {
    /// The probability density function.
    fn probability_density(&self, value: T) -> T;
}
