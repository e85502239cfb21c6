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

//! Modes of distributions.

use super::ProbabilityDistribution;

/// A probability distribution with a finite set of modes.
///
/// # Example
/// ```
/// use stats_lattice::common::Poisson;
/// use stats_lattice::distribution::modal::FiniteModal;
///
/// let calls_per_minute = Poisson::<f64>::new(3.0).unwrap();
/// assert_eq!(calls_per_minute.modes(), vec![2, 3]);
/// ```
pub trait FiniteModal: ProbabilityDistribution {
    /// The values that are the most likely to be sampled, in ascending order and without
    /// duplicates.
    fn modes(&self) -> Vec<Self::Value>;
}

/// A probability distribution that always has a single mode.
pub trait Unimodal: FiniteModal {
    /// The unique most likely value.
    fn mode(&self) -> Self::Value;
}

/// The default modes of a unimodal distribution: just its [`Unimodal::mode`].
#[must_use]
pub fn modes_of_unimodal<D: Unimodal>(distribution: &D) -> Vec<D::Value> {
    vec![distribution.mode()]
}
