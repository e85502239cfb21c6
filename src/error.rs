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

//! Contains [`StatsError`], the error type returned by fallible operations of the crate.

use thiserror::Error;

/// Errors reported when constructing distributions or computing statistics of a dataset.
///
/// Contract violations on queries of an already constructed distribution (such as asking
/// for the quantile of a probability outside `[0, 1]`) are programmer errors and panic instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// A distribution parameter does not satisfy its constraint.
    #[error("Invalid parameter '{parameter}': value {value} {constraint}")]
    InvalidParameter {
        /// The name of the parameter
        parameter: &'static str,
        /// The rejected value
        value: f64,
        /// The violated constraint
        constraint: &'static str,
    },

    /// A dataset is too small for the requested statistic.
    #[error("Insufficient data: at least {required} values are required, got {actual}")]
    InsufficientData {
        /// The smallest acceptable number of values
        required: usize,
        /// The number of values that was provided
        actual: usize,
    },

    /// A hypothesis test level is not a probability strictly between 0 and 1.
    #[error("Invalid level: {value} (must be in range (0, 1))")]
    InvalidLevel {
        /// The rejected level
        value: f64,
    },
}

/// A specialized `Result` type for the crate.
pub type Result<T> = std::result::Result<T, StatsError>;

impl StatsError {
    /// Creates an error for a parameter that violates `constraint`.
    ///
    /// # Example
    /// ```
    /// use stats_lattice::error::StatsError;
    ///
    /// let error = StatsError::invalid_parameter("rate", -1.0, "must be positive");
    /// assert!(error.to_string().contains("rate"));
    /// ```
    #[must_use]
    pub fn invalid_parameter(parameter: &'static str, value: f64, constraint: &'static str) -> Self {
        Self::InvalidParameter {
            parameter,
            value,
            constraint,
        }
    }

    /// Creates an error for a dataset of `actual` values where `required` are needed.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_message() {
        let error = StatsError::invalid_parameter("variance", 0.0, "must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'variance': value 0 must be positive"
        );
    }

    #[test]
    fn insufficient_data_message() {
        let error = StatsError::insufficient_data(2, 1);
        assert_eq!(
            error.to_string(),
            "Insufficient data: at least 2 values are required, got 1"
        );
    }

    #[test]
    fn invalid_level_message() {
        let error = StatsError::InvalidLevel { value: 1.5 };
        assert!(error.to_string().contains("1.5"));
        assert!(error.to_string().contains("(0, 1)"));
    }

    #[test]
    fn errors_compare_by_content() {
        assert_eq!(
            StatsError::insufficient_data(2, 0),
            StatsError::insufficient_data(2, 0)
        );
        assert_ne!(
            StatsError::insufficient_data(2, 0),
            StatsError::insufficient_data(1, 0)
        );
    }
}
