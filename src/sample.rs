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

//! Contains the [`Samplable`] trait for drawing random values from distributions.
//!
//! The random generator is always supplied by the caller, so independent callers can use
//! independent generators and no generator is shared behind their back.

use rand::Rng;

use crate::distribution::quantile::ClosedFormQuantile;
use crate::distribution::ProbabilityDistribution;
use crate::real::Real;

/// A probability distribution that can be randomly sampled.
///
/// Implementing [`Samplable::sample`] is enough. Distributions with a closed-form quantile can
/// implement it with [`inverse_transform_sample`].
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use stats_lattice::common::Exponential;
/// use stats_lattice::sample::Samplable;
///
/// let waiting_time = Exponential::<f64>::new(0.5).unwrap();
/// let mut rng = StdRng::seed_from_u64(42);
/// let times = waiting_time.sample_n(&mut rng, 1_000);
/// assert_eq!(times.len(), 1_000);
/// assert!(times.iter().all(|&t| t >= 0.0));
/// ```
pub trait Samplable: ProbabilityDistribution {
    /// Generates one random value from the distribution.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Value;

    /// Generates `count` independent random values from the distribution, one
    /// [`Samplable::sample`] call at a time.
    fn sample_n<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<Self::Value> {
        (0..count).map(|_| self.sample(rng)).collect()
    }
}

/// Inverse transform sampling: the quantile of a uniform draw from `[0, 1)`.
pub fn inverse_transform_sample<D, R>(distribution: &D, rng: &mut R) -> D::Value
where
    D: ClosedFormQuantile,
    R: Rng + ?Sized,
{
    distribution.quantile(D::Statistic::unit_uniform(rng))
}
