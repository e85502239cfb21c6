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

//! The Poisson distribution.

use rand::Rng;

use crate::distribution::bounded::{DiscreteDistribution, LowerBoundedDistribution};
use crate::distribution::modal::FiniteModal;
use crate::distribution::moments::{DistributionWithMean, DistributionWithVariance, Moments};
use crate::distribution::ProbabilityDistribution;
use crate::error::{Result, StatsError};
use crate::real::Real;
use crate::sample::Samplable;

/// A Poisson distribution.
///
/// In a process where independent events occur at a constant rate, the number of events in a
/// unit of time follows this distribution. For example, if a call center receives 3 calls per
/// minute on average, the number of calls in any given minute follows a Poisson distribution
/// with rate 3.
///
/// # Example
/// ```
/// use stats_lattice::common::Poisson;
/// use stats_lattice::prelude::*;
///
/// let calls_per_minute = Poisson::new(3.0_f64).unwrap();
/// assert_eq!(calls_per_minute.modes(), vec![2, 3]);
/// assert!((calls_per_minute.probability_of_exactly(2) - 0.224).abs() < 1e-3);
/// assert!((calls_per_minute.probability_of_at_most(1) - 0.199).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Poisson<T = f64> {
    rate: T,
}

impl<T: Real> Poisson<T> {
    /// The largest rate sampled directly by multiplying uniforms. Larger rates are split into
    /// chunks of at most this rate, and the counts of the chunks are added.
    pub const SAMPLING_CHUNK_RATE: f64 = 30.0;

    /// Creates a Poisson distribution with the given rate λ.
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

    /// The rate λ, which is also the mean number of events.
    #[must_use]
    pub fn rate(&self) -> T {
        self.rate
    }
}

/// Above this count `k!` overflows double precision.
const LARGEST_DIRECT_FACTORIAL: i64 = 170;

impl<T: Real> ProbabilityDistribution for Poisson<T> {
    type Value = i64;
    type Statistic = T;

    /// Always false.
    fn is_symmetric(&self) -> bool {
        false
    }

    /// `λᵏ·exp(−λ) / k!`
    ///
    /// Computed directly while every factor is a normal floating point number, and from
    /// `ln Γ(k + 1)` otherwise. Takes O(1) time.
    fn probability_of_exactly(&self, value: i64) -> T {
        if value < 0 {
            return T::zero();
        }
        if value > LARGEST_DIRECT_FACTORIAL {
            return self.log_space_probability(value);
        }
        let Ok(power) = i32::try_from(value) else {
            return self.log_space_probability(value);
        };

        let exponentiated = self.rate.powi(power);
        let damping = (-self.rate).exp();
        // Multiplying in floating point keeps k! from overflowing an integer.
        let factorial = (2..=value).map(T::from_int).fold(T::one(), |acc, k| acc * k);
        let probability = exponentiated * damping / factorial;

        let smallest = T::min_positive_value();
        let representable = [exponentiated, damping, factorial, probability]
            .iter()
            .all(|&factor| factor.is_finite() && factor >= smallest);
        if representable {
            probability
        } else {
            self.log_space_probability(value)
        }
    }

    /// The sum of the PMF from 0 to `value`.
    ///
    /// Past the mode the terms only decrease, so the sum stops at the first term that is 0.
    /// Takes O(`value`) time at most.
    fn probability_of_at_most(&self, value: i64) -> T {
        let mut total = T::zero();
        for k in 0..=value {
            let term = self.probability_of_exactly(k);
            if term.is_zero() && T::from_int(k) > self.rate {
                break;
            }
            total = total + term;
        }
        // Rounding in the sum may overshoot 1.
        total.min(T::one())
    }
}

impl<T: Real> Poisson<T> {
    fn log_space_probability(&self, value: i64) -> T {
        #[allow(clippy::cast_precision_loss)]
        let k = value as f64;
        let rate = self.rate.to_f64().unwrap_or(f64::NAN);
        let log_probability = k * rate.ln() - rate - statrs::function::gamma::ln_gamma(k + 1.0);
        T::constant(log_probability.exp())
    }
}

impl<T: Real> DiscreteDistribution for Poisson<T> {}

impl<T: Real> LowerBoundedDistribution for Poisson<T> {
    /// Always 0.
    fn min(&self) -> i64 {
        0
    }
}

impl<T: Real> FiniteModal for Poisson<T> {
    /// `⌈λ⌉ − 1` and `⌊λ⌋`, which coincide unless λ is an integer.
    fn modes(&self) -> Vec<i64> {
        let below = self.rate.ceil().to_i64().unwrap_or(i64::MAX) - 1;
        let floor = self.rate.floor().to_i64().unwrap_or(i64::MAX);
        if below == floor {
            vec![floor]
        } else {
            vec![below, floor]
        }
    }
}

impl<T: Real> DistributionWithMean for Poisson<T> {
    fn mean(&self) -> T {
        self.rate
    }
}

impl<T: Real> DistributionWithVariance for Poisson<T> {
    fn variance(&self) -> T {
        self.rate
    }
}

impl<T: Real> Moments for Poisson<T> {
    /// `1 / sqrt(λ)`
    fn skewness(&self) -> T {
        self.rate.sqrt().recip()
    }

    /// `exp(λ(exp(t) − 1))`
    fn moment_generating_function(&self, t: u32) -> T {
        let t = T::from_int(i64::from(t));
        (self.rate * t.exp_m1()).exp()
    }
}

impl<T: Real> Samplable for Poisson<T> {
    /// Draws a count by multiplying uniforms until the product falls to `exp(−λ)`.
    ///
    /// Takes O(λ) time on average.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        let chunk = T::constant(Self::SAMPLING_CHUNK_RATE);
        let mut remaining = self.rate;
        let mut count = 0;
        if remaining > chunk {
            log::trace!(
                "sampling poisson rate {} in chunks of {}",
                self.rate,
                Self::SAMPLING_CHUNK_RATE
            );
        }
        while remaining > chunk {
            count += multiply_uniforms(chunk, rng);
            remaining = remaining - chunk;
        }
        count + multiply_uniforms(remaining, rng)
    }
}

/// Counts how many uniforms can be multiplied together before the product drops to
/// `exp(−rate)`.
fn multiply_uniforms<T: Real, R: Rng + ?Sized>(rate: T, rng: &mut R) -> i64 {
    let threshold = (-rate).exp();
    let mut product = T::one();
    let mut count = 0;
    loop {
        product = product * T::unit_uniform(rng);
        if product <= threshold {
            return count;
        }
        count += 1;
    }
}

impl<T: Real> rand::distributions::Distribution<i64> for Poisson<T> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        Samplable::sample(self, rng)
    }
}
