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

//! The exponential distribution.

use rand::Rng;

use crate::distribution::bounded::LowerBoundedDistribution;
use crate::distribution::continuous::ContinuousDistribution;
use crate::distribution::modal::{modes_of_unimodal, FiniteModal, Unimodal};
use crate::distribution::moments::{DistributionWithMean, DistributionWithVariance, Moments};
use crate::distribution::quantile::{ClosedFormMedian, ClosedFormQuantile};
use crate::distribution::ProbabilityDistribution;
use crate::error::{Result, StatsError};
use crate::real::Real;
use crate::sample::{inverse_transform_sample, Samplable};

/// An exponential distribution.
///
/// In a process where independent events occur at a constant rate, the time between events
/// follows this distribution.
///
/// # Example
/// ```
/// use stats_lattice::common::Exponential;
/// use stats_lattice::prelude::*;
///
/// let between_calls = Exponential::new(1.0_f64).unwrap();
/// assert!((between_calls.median() - 0.6931).abs() < 1e-4);
/// assert_eq!(between_calls.mode(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential<T = f64> {
    rate: T,
}

impl<T: Real> Exponential<T> {
    /// Creates an exponential distribution with the given rate λ.
    ///
    /// # Errors
    /// Returns [`StatsError::InvalidParameter`] unless `rate` is finite and positive.
    pub fn new(rate: T) -> Result<Self> {
        if rate.is_finite() && rate > T::zero() {
            Ok(Self { rate })
        } else {
            Err(StatsError::invalid_parameter(
                "rate",
                rate.to_f64().unwrap_or(f64::NAN),
                "must be finite and positive",
            ))
        }
    }

    /// The rate λ.
    #[must_use]
    pub fn rate(&self) -> T {
        self.rate
    }
}

impl<T: Real> ProbabilityDistribution for Exponential<T> {
    type Value = T;
    type Statistic = T;

    /// Always false.
    fn is_symmetric(&self) -> bool {
        false
    }

    fn probability_of_exactly(&self, _value: T) -> T {
        T::zero()
    }

    /// `1 − exp(−λx)` for non-negative `x`, and 0 below the support.
    fn probability_of_at_most(&self, value: T) -> T {
        if value <= T::zero() {
            T::zero()
        } else {
            -(-self.rate * value).exp_m1()
        }
    }
}

impl<T: Real> ContinuousDistribution<T> for Exponential<T> {
    /// `λ·exp(−λx)` for non-negative `x`, and 0 below the support.
    fn probability_density(&self, value: T) -> T {
        if value < T::zero() {
            T::zero()
        } else {
            self.rate * (-self.rate * value).exp()
        }
    }
}

impl<T: Real> LowerBoundedDistribution for Exponential<T> {
    fn min(&self) -> T {
        T::zero()
    }
}

impl<T: Real> DistributionWithMean for Exponential<T> {
    fn mean(&self) -> T {
        self.rate.recip()
    }
}

impl<T: Real> DistributionWithVariance for Exponential<T> {
    fn variance(&self) -> T {
        (self.rate * self.rate).recip()
    }

    fn standard_deviation(&self) -> T {
        self.rate.recip()
    }
}

impl<T: Real> Moments for Exponential<T> {
    /// Always 2.
    fn skewness(&self) -> T {
        T::constant(2.0)
    }

    /// `λ / (λ − t)`
    ///
    /// # Panics
    /// Panics unless `t` is less than the rate.
    fn moment_generating_function(&self, t: u32) -> T {
        let t = T::from_int(i64::from(t));
        assert!(
            t < self.rate,
            "the exponential moment-generating function requires t < rate, got t = {t} and rate = {}",
            self.rate
        );
        self.rate / (self.rate - t)
    }
}

impl<T: Real> ClosedFormMedian for Exponential<T> {
    /// `ln(2) / λ`
    fn median(&self) -> T {
        T::LN_2() / self.rate
    }
}

impl<T: Real> ClosedFormQuantile for Exponential<T> {
    /// `−ln(1 − p) / λ`
    ///
    /// # Panics
    /// Panics unless `0 ≤ fraction ≤ 1`.
    fn quantile(&self, fraction: T) -> T {
        assert!(
            T::zero() <= fraction && fraction <= T::one(),
            "the quantile fraction must be in [0, 1], got {fraction}"
        );
        -(-fraction).ln_1p() / self.rate
    }
}

impl<T: Real> FiniteModal for Exponential<T> {
    fn modes(&self) -> Vec<T> {
        modes_of_unimodal(self)
    }
}

impl<T: Real> Unimodal for Exponential<T> {
    /// Always 0.
    fn mode(&self) -> T {
        T::zero()
    }
}

impl<T: Real> Samplable for Exponential<T> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        inverse_transform_sample(self, rng)
    }
}

impl<T: Real> rand::distributions::Distribution<T> for Exponential<T> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        Samplable::sample(self, rng)
    }
}
