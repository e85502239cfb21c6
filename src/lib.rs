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

//! Probability distributions described by what they can do.
//!
//! Every distribution implements [`ProbabilityDistribution`](distribution::ProbabilityDistribution):
//! it can report the probability of exactly one value and the probability of at most one value.
//! Everything else a distribution may be able to do is a separate capability trait, such as
//! [`Moments`](distribution::moments::Moments) or
//! [`ClosedFormQuantile`](distribution::quantile::ClosedFormQuantile). Generic code asks only for
//! the capabilities it uses, and gets the derived probabilities (tails, ranges, collections)
//! for free.
//!
//! The crate also has the statistics of a dataset in [`statistics`] and hypothesis tests built
//! on top of them in [`hypothesis`].
//!
//! # Examples
//!
//! A call center receives 3 calls per minute on average. The number of calls in a minute
//! follows a Poisson distribution:
//! ```
//! use stats_lattice::common::Poisson;
//! use stats_lattice::prelude::*;
//!
//! let calls = Poisson::new(3.0_f64).unwrap();
//!
//! // The two most likely counts are equally likely
//! assert_eq!(calls.modes(), vec![2, 3]);
//! // Probability of a quiet minute with at most one call, about 0.199
//! let quiet = calls.probability_of_at_most(1);
//! assert!((quiet - 0.199).abs() < 1e-3);
//! // Probability of a busy minute
//! let busy = calls.probability_of_greater_than(5);
//! assert!((quiet + calls.probability_in(2..=5) + busy - 1.0).abs() < 1e-12);
//! ```
//!
//! Any distribution with a closed-form quantile can be sampled by inverse transform sampling.
//! The random generator is always passed in, so simulations are reproducible:
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use stats_lattice::common::Exponential;
//! use stats_lattice::prelude::*;
//! use stats_lattice::statistics;
//!
//! // Two arrivals per hour on average
//! let arrival_gap = Exponential::new(2.0_f64).unwrap();
//! let mut rng = StdRng::seed_from_u64(2024);
//! let gaps = arrival_gap.sample_n(&mut rng, 10_000);
//!
//! // The sample mean is close to the mean of the distribution, half an hour
//! let sample_mean = statistics::mean(&gaps).unwrap();
//! assert!((sample_mean - arrival_gap.mean()).abs() < 0.05);
//! // 99% of the gaps are shorter than 2.3 hours
//! assert!((arrival_gap.top_one_percent() - 2.302_585).abs() < 1e-6);
//! ```
//!
//! Generic code can be written against the capabilities alone. The function below works for
//! any distribution with a mean and a variance:
//! ```
//! use stats_lattice::common::{Bernoulli, Normal};
//! use stats_lattice::prelude::*;
//!
//! // The coefficient of variation
//! fn relative_spread<D>(distribution: &D) -> f64
//! where
//!     D: DistributionWithVariance<Statistic = f64>,
//! {
//!     distribution.standard_deviation() / distribution.mean()
//! }
//!
//! let heights = Normal::by_standard_deviation(170.0, 8.5).unwrap();
//! assert!((relative_spread(&heights) - 0.05).abs() < 1e-12);
//! let coin = Bernoulli::fair();
//! assert!((relative_spread(&coin) - 1.0).abs() < 1e-12);
//! ```
//!
//! Finally, a Wald test decides whether measurements are compatible with a hypothesis about
//! their mean:
//! ```
//! use stats_lattice::hypothesis::wald::WaldTest;
//! use stats_lattice::prelude::*;
//!
//! let measurements = [67.0, 64.1, 66.3, 65.2, 68.4, 66.9, 65.8, 67.7, 66.1, 64.9];
//! // The theoretical prediction is 63.2
//! let test = WaldTest::does_mean_equal(63.2);
//! assert_eq!(test.test(&measurements[..], LOW_PROBABILITY).unwrap(), Outcome::Reject);
//! ```
#![deny(clippy::pedantic)]
#![deny(missing_docs)]

pub mod common;
pub mod distribution;
pub mod error;
pub mod hypothesis;
pub mod real;
pub mod sample;
pub mod statistics;

/// Re-exports the capability traits, the hypothesis test interface, and the default levels.
///
/// Bringing the traits into scope is needed to call their methods on concrete distributions.
pub mod prelude {
    pub use crate::distribution::bounded::{
        BoundedDiscreteDistribution, BoundedDistribution, DiscreteDistribution,
        LowerBoundedDistribution,
    };
    pub use crate::distribution::continuous::ContinuousDistribution;
    pub use crate::distribution::modal::{FiniteModal, Unimodal};
    pub use crate::distribution::moments::{
        DistributionWithMean, DistributionWithVariance, Moments,
    };
    pub use crate::distribution::quantile::{ClosedFormMedian, ClosedFormQuantile};
    pub use crate::distribution::ProbabilityDistribution;
    pub use crate::error::{Result, StatsError};
    pub use crate::hypothesis::{HypothesisTest, Outcome, LOW_PROBABILITY, VERY_LOW_PROBABILITY};
    pub use crate::real::Real;
    pub use crate::sample::Samplable;
}
