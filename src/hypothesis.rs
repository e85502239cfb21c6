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

//! Hypothesis tests: deciding whether a dataset rejects a hypothesis about a population parameter.
//!
//! A test is anything implementing [`HypothesisTest`]. [`wald::WaldTest`] covers parameters with
//! an approximately normal estimator, and [`create_hypothesis_test`] builds a one-off test from
//! closures.
//!
//! # Example
//! ```
//! use stats_lattice::hypothesis::{HypothesisTest, Outcome, LOW_PROBABILITY};
//! use stats_lattice::hypothesis::wald::WaldTest;
//!
//! let measurements = [9.8, 10.4, 10.1, 9.7, 10.0, 10.3, 9.9, 10.2];
//! let test = WaldTest::does_mean_equal(10.0);
//! assert_eq!(
//!     test.test(&measurements[..], LOW_PROBABILITY).unwrap(),
//!     Outcome::FailToReject
//! );
//! assert!(test.p_value(&measurements[..]).unwrap() > LOW_PROBABILITY);
//! ```

pub mod wald;

use crate::error::{Result, StatsError};

/// The conventional level of a test: a 5% probability of rejecting a true null hypothesis.
pub const LOW_PROBABILITY: f64 = 0.05;

/// A stricter level: a 1% probability of rejecting a true null hypothesis.
pub const VERY_LOW_PROBABILITY: f64 = 0.01;

/// Either reject or fail to reject the null hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The test has rejected the null hypothesis.
    ///
    /// This does not mean the alternative hypothesis is true: the data may be an improbable
    /// outlier.
    Reject,
    /// The test has failed to reject the null hypothesis.
    ///
    /// This does not mean the null hypothesis is true: the sample may be too small to reject it.
    FailToReject,
}

/// Checks that `level` is a probability of a type I error, strictly between 0 and 1.
///
/// # Errors
/// Returns [`StatsError::InvalidLevel`] otherwise.
pub fn check_level(level: f64) -> Result<f64> {
    if level > 0.0 && level < 1.0 {
        Ok(level)
    } else {
        Err(StatsError::InvalidLevel { value: level })
    }
}

/// A statistical test of a null hypothesis on datasets of type `D`.
///
/// The test rejects the null hypothesis when its statistic strictly exceeds its critical value.
pub trait HypothesisTest<D: ?Sized> {
    /// A function of the dataset that characterizes the test.
    ///
    /// # Errors
    /// Returns an error if the statistic is undefined for `data`.
    fn test_statistic(&self, data: &D) -> Result<f64>;

    /// The value the statistic must exceed for the test to reject at `level`.
    ///
    /// Some tests, such as the Wald test, ignore the dataset here.
    ///
    /// # Errors
    /// Returns an error if `level` is not in `(0, 1)`, or if the critical value is undefined for
    /// `data`.
    fn critical_value(&self, level: f64, data: &D) -> Result<f64>;

    /// The smallest level at which the test rejects the null hypothesis on `data`.
    ///
    /// # Errors
    /// Returns an error if the p-value is undefined for `data`.
    fn p_value(&self, data: &D) -> Result<f64>;

    /// Runs the test on `data` at `level`, usually [`LOW_PROBABILITY`].
    ///
    /// `level` is the probability that the test rejects the null hypothesis when it is true.
    ///
    /// # Errors
    /// Returns [`StatsError::InvalidLevel`] if `level` is not in `(0, 1)`, or any error from
    /// [`HypothesisTest::test_statistic`] or [`HypothesisTest::critical_value`].
    fn test(&self, data: &D, level: f64) -> Result<Outcome> {
        let level = check_level(level)?;
        let statistic = self.test_statistic(data)?;
        let critical_value = self.critical_value(level, data)?;
        let outcome = if statistic > critical_value {
            Outcome::Reject
        } else {
            Outcome::FailToReject
        };
        log::debug!(
            "statistic {statistic} against critical value {critical_value} at level {level}: {outcome:?}"
        );
        Ok(outcome)
    }
}

/// A hypothesis test backed by three closures. Created by [`create_hypothesis_test`].
#[derive(Clone)]
pub struct FnHypothesisTest<S, C, P> {
    statistic: S,
    critical_value: C,
    p_value: P,
}

/// Creates a single custom hypothesis test without declaring a new type.
///
/// - `statistic` computes the test statistic of a dataset.
/// - `critical_value` maps the level and the dataset to the critical value.
/// - `p_value` computes the p-value of a dataset.
///
/// To create a reusable family of tests with parameters, implement [`HypothesisTest`] instead.
///
/// # Example
/// ```
/// use stats_lattice::hypothesis::{create_hypothesis_test, HypothesisTest, Outcome};
///
/// // Rejects datasets whose largest value is too far from zero.
/// let largest = |data: &[f64]| Ok(data.iter().copied().fold(0.0, f64::max));
/// let test = create_hypothesis_test(
///     largest,
///     |level, _data: &[f64]| Ok(1.0 / level),
///     |data: &[f64]| largest(data).map(|m| (1.0 / m).min(1.0)),
/// );
/// assert_eq!(test.test(&[3.0, 25.0][..], 0.05).unwrap(), Outcome::Reject);
/// assert_eq!(test.test(&[3.0, 15.0][..], 0.05).unwrap(), Outcome::FailToReject);
/// ```
#[must_use]
pub fn create_hypothesis_test<D, S, C, P>(
    statistic: S,
    critical_value: C,
    p_value: P,
) -> FnHypothesisTest<S, C, P>
where
    D: ?Sized,
    S: Fn(&D) -> Result<f64>,
    C: Fn(f64, &D) -> Result<f64>,
    P: Fn(&D) -> Result<f64>,
{
    FnHypothesisTest {
        statistic,
        critical_value,
        p_value,
    }
}

impl<D, S, C, P> HypothesisTest<D> for FnHypothesisTest<S, C, P>
where
    D: ?Sized,
    S: Fn(&D) -> Result<f64>,
    C: Fn(f64, &D) -> Result<f64>,
    P: Fn(&D) -> Result<f64>,
{
    fn test_statistic(&self, data: &D) -> Result<f64> {
        (self.statistic)(data)
    }

    fn critical_value(&self, level: f64, data: &D) -> Result<f64> {
        (self.critical_value)(check_level(level)?, data)
    }

    fn p_value(&self, data: &D) -> Result<f64> {
        (self.p_value)(data)
    }
}
