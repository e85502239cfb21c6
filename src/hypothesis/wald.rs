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

//! The Wald test: a two-sided test for parameters with an approximately normal estimator.

use crate::common::Normal;
use crate::distribution::quantile::ClosedFormQuantile;
use crate::distribution::ProbabilityDistribution;
use crate::error::{Result, StatsError};
use crate::statistics::{mean, sample_variance};

use super::{check_level, HypothesisTest};

type Estimator<D: ?Sized> = Box<dyn Fn(&D) -> Result<f64> + Send + Sync>;

/// A two-sided hypothesis test using a normally distributed parameter estimator.
///
/// The test rejects the null hypothesis θ = θ₀ at level α when the Wald statistic
/// `|θ̂ − θ₀| / SE` exceeds `−Φ⁻¹(α/2)`, where Φ is the standard normal CDF. Its p-value is
/// `2·(1 − Φ(W))`.
///
/// Use it only when the estimator is approximately normal. The sample mean of a large sample is,
/// by the central limit theorem, so [`WaldTest::does_mean_equal`] and
/// [`WaldTest::do_means_differ`] are appropriate for large samples and not for small ones.
///
/// # Example
/// ```
/// use stats_lattice::hypothesis::{HypothesisTest, Outcome, VERY_LOW_PROBABILITY};
/// use stats_lattice::hypothesis::wald::WaldTest;
///
/// let before = vec![12.1, 11.8, 12.4, 12.0, 11.9, 12.2, 12.3, 11.7];
/// let after = vec![13.0, 13.4, 12.9, 13.1, 13.3, 12.8, 13.2, 13.5];
/// let test = WaldTest::do_means_differ(0.0);
/// assert_eq!(
///     test.test(&[before, after], VERY_LOW_PROBABILITY).unwrap(),
///     Outcome::Reject
/// );
/// ```
pub struct WaldTest<D: ?Sized> {
    estimator: Estimator<D>,
    null_value: f64,
    standard_error: Estimator<D>,
}

impl<D: ?Sized> WaldTest<D> {
    /// Creates any Wald test.
    ///
    /// - `estimator` estimates the parameter of interest from a dataset.
    /// - `null_value` is the value of the parameter under the null hypothesis, usually 0.
    /// - `standard_error` estimates the standard error of `estimator` from a dataset.
    #[must_use]
    pub fn general<E, S>(estimator: E, null_value: f64, standard_error: S) -> Self
    where
        E: Fn(&D) -> Result<f64> + Send + Sync + 'static,
        S: Fn(&D) -> Result<f64> + Send + Sync + 'static,
    {
        Self {
            estimator: Box::new(estimator),
            null_value,
            standard_error: Box::new(standard_error),
        }
    }

    /// The value of the parameter under the null hypothesis.
    #[must_use]
    pub fn null_value(&self) -> f64 {
        self.null_value
    }
}

impl WaldTest<[f64]> {
    /// Creates a Wald test of whether a population mean equals `mean_under_null`.
    ///
    /// The estimator is the sample mean and its standard error is `sqrt(s²/n)`, so datasets need
    /// at least two values.
    #[must_use]
    pub fn does_mean_equal(mean_under_null: f64) -> Self {
        Self::general(
            |data: &[f64]| mean(data),
            mean_under_null,
            |data: &[f64]| Ok((sample_variance(data)? / len(data.len())).sqrt()),
        )
    }
}

impl WaldTest<[Vec<f64>; 2]> {
    /// Creates a Wald test of whether the means of two populations differ by
    /// `difference_under_null`.
    ///
    /// The dataset is a pair of samples, and the estimator is the difference between their
    /// means. Each sample needs at least two values.
    #[must_use]
    pub fn do_means_differ(difference_under_null: f64) -> Self {
        Self::general(
            |[first, second]: &[Vec<f64>; 2]| {
                Ok(mean(first.as_slice())? - mean(second.as_slice())?)
            },
            difference_under_null,
            |[first, second]: &[Vec<f64>; 2]| {
                let first_error = sample_variance(first.as_slice())? / len(first.len());
                let second_error = sample_variance(second.as_slice())? / len(second.len());
                Ok((first_error + second_error).sqrt())
            },
        )
    }
}

#[allow(clippy::cast_precision_loss)]
fn len(count: usize) -> f64 {
    count as f64
}

impl<D: ?Sized> HypothesisTest<D> for WaldTest<D> {
    /// `|θ̂ − θ₀| / SE`
    ///
    /// # Errors
    /// Returns any error of the estimators, and [`StatsError::InvalidParameter`] if the
    /// standard error is not positive.
    fn test_statistic(&self, data: &D) -> Result<f64> {
        let estimate = (self.estimator)(data)?;
        let standard_error = (self.standard_error)(data)?;
        if standard_error.is_nan() || standard_error <= 0.0 {
            return Err(StatsError::invalid_parameter(
                "standard_error",
                standard_error,
                "must be positive",
            ));
        }
        Ok(((estimate - self.null_value) / standard_error).abs())
    }

    /// `−Φ⁻¹(α/2)`, independent of the dataset.
    fn critical_value(&self, level: f64, _data: &D) -> Result<f64> {
        let level = check_level(level)?;
        Ok(-Normal::<f64>::standard().quantile(level / 2.0))
    }

    /// `2·(1 − Φ(W))`, computed as `2·Φ(−W)`.
    fn p_value(&self, data: &D) -> Result<f64> {
        let statistic = self.test_statistic(data)?;
        Ok(2.0 * Normal::<f64>::standard().probability_of_at_most(-statistic))
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::hypothesis::{Outcome, LOW_PROBABILITY, VERY_LOW_PROBABILITY};
    use crate::sample::Samplable;

    #[test]
    fn critical_values() {
        let test = WaldTest::does_mean_equal(0.0);
        let five_percent = test.critical_value(0.05, &[]).unwrap();
        assert_abs_diff_eq!(five_percent, 1.959_964, epsilon = 1e-6);
        let one_percent = test.critical_value(0.01, &[]).unwrap();
        assert_abs_diff_eq!(one_percent, 2.575_829, epsilon = 1e-6);
        assert!(test.critical_value(0.0, &[]).is_err());
        assert!(test.critical_value(1.0, &[]).is_err());
    }

    #[test]
    fn statistic_of_the_mean() {
        // Mean 2, sample variance 2.5, n = 5: SE = sqrt(0.5)
        let data = [0.0, 1.0, 2.0, 3.0, 4.0];
        let test = WaldTest::does_mean_equal(1.0);
        assert_relative_eq!(
            test.test_statistic(&data).unwrap(),
            1.0 / 0.5_f64.sqrt(),
            max_relative = 1e-12
        );
        let p_value = test.p_value(&data).unwrap();
        assert_abs_diff_eq!(p_value, 0.157_299, epsilon = 1e-5);
        assert_eq!(test.test(&data, LOW_PROBABILITY), Ok(Outcome::FailToReject));
    }

    #[test]
    fn p_value_is_the_smallest_rejecting_level() {
        let data = [4.1, 3.9, 4.4, 4.0, 4.3, 4.2, 3.8, 4.5, 4.1, 4.6];
        let test = WaldTest::does_mean_equal(4.0);
        let p_value = test.p_value(&data).unwrap();
        assert!(p_value > 0.0 && p_value < 1.0);
        assert_eq!(test.test(&data, p_value * 1.01), Ok(Outcome::Reject));
        assert_eq!(test.test(&data, p_value * 0.99), Ok(Outcome::FailToReject));
    }

    #[test]
    fn p_value_at_the_null_is_one() {
        let test = WaldTest::does_mean_equal(2.0);
        assert_abs_diff_eq!(test.p_value(&[1.0, 2.0, 3.0]).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn mean_test_needs_two_values() {
        let test = WaldTest::does_mean_equal(0.0);
        assert_eq!(
            test.test(&[1.0], LOW_PROBABILITY),
            Err(StatsError::insufficient_data(2, 1))
        );
        assert!(test.p_value(&[]).is_err());
    }

    #[test]
    fn constant_data_has_no_standard_error() {
        let test = WaldTest::does_mean_equal(0.0);
        assert!(matches!(
            test.test_statistic(&[3.0, 3.0, 3.0]),
            Err(StatsError::InvalidParameter {
                parameter: "standard_error",
                ..
            })
        ));
    }

    #[test]
    fn detects_shifted_mean() {
        let mut rng = StdRng::seed_from_u64(7);
        let population = Normal::by_standard_deviation(0.3, 1.0).unwrap();
        let data = population.sample_n(&mut rng, 2_000);
        assert_eq!(
            WaldTest::does_mean_equal(0.0).test(&data, VERY_LOW_PROBABILITY),
            Ok(Outcome::Reject)
        );
        assert_eq!(
            WaldTest::does_mean_equal(0.3).test(&data, 1e-6),
            Ok(Outcome::FailToReject)
        );
    }

    #[test]
    fn difference_of_two_means() {
        let first = vec![1.0, 2.0, 3.0, 4.0];
        let second = vec![0.0, 2.0, 4.0];
        // Means 2.5 and 2, sample variances 5/3 and 4.
        let standard_error = (5.0 / 12.0 + 4.0 / 3.0_f64).sqrt();
        let test = WaldTest::do_means_differ(0.0);
        let samples = [first, second];
        assert_relative_eq!(
            test.test_statistic(&samples).unwrap(),
            0.5 / standard_error,
            max_relative = 1e-12
        );
        assert_abs_diff_eq!(
            WaldTest::do_means_differ(0.5).test_statistic(&samples).unwrap(),
            0.0
        );
        assert_eq!(test.test(&samples, LOW_PROBABILITY), Ok(Outcome::FailToReject));
    }

    #[test]
    fn general_case_with_custom_estimators() {
        // A proportion test: the estimator is the fraction of ones.
        let test = WaldTest::general(
            |flips: &[i64]| {
                let ones = flips.iter().filter(|&&flip| flip == 1).count();
                Ok(len(ones) / len(flips.len()))
            },
            0.5,
            |flips: &[i64]| Ok((0.25 / len(flips.len())).sqrt()),
        );
        assert_abs_diff_eq!(test.null_value(), 0.5);
        let fair: Vec<i64> = (0..100).map(|i| i % 2).collect();
        let biased: Vec<i64> = (0..100).map(|i| i64::from(i % 5 != 0)).collect();
        assert_eq!(test.test(&fair, LOW_PROBABILITY), Ok(Outcome::FailToReject));
        assert_eq!(test.test(&biased, LOW_PROBABILITY), Ok(Outcome::Reject));
    }
}
