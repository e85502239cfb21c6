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

//! Statistics of a dataset: sums, means, and variances of slices of real numbers.
//!
//! Statistics that are undefined for small datasets return
//! [`StatsError::InsufficientData`] instead of NaN.
//!
//! # Example
//! ```
//! use stats_lattice::statistics;
//!
//! let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! assert_eq!(statistics::mean(&data).unwrap(), 5.0);
//! assert_eq!(statistics::population_variance(&data).unwrap(), 4.0);
//! assert!(statistics::sample_variance(&data[..1]).is_err());
//! ```

use crate::error::{Result, StatsError};
use crate::real::Real;

fn count<T: Real>(data_len: usize) -> T {
    T::from_int(i64::try_from(data_len).unwrap_or(i64::MAX))
}

fn require<T>(data: &[T], required: usize) -> Result<()> {
    if data.len() < required {
        Err(StatsError::insufficient_data(required, data.len()))
    } else {
        Ok(())
    }
}

/// The sum of the values. Zero for an empty slice.
#[must_use]
pub fn sum<T: Real>(data: &[T]) -> T {
    data.iter().copied().sum()
}

/// The arithmetic mean of the values.
///
/// # Errors
/// Returns [`StatsError::InsufficientData`] if `data` is empty.
pub fn mean<T: Real>(data: &[T]) -> Result<T> {
    require(data, 1)?;
    Ok(sum(data) / count(data.len()))
}

/// The squared distance from each value to the mean of all values.
///
/// An empty slice has no mean, and gives an empty vector.
#[must_use]
pub fn squared_deviations<T: Real>(data: &[T]) -> Vec<T> {
    let Ok(center) = mean(data) else {
        return Vec::new();
    };
    data.iter()
        .map(|&value| (value - center) * (value - center))
        .collect()
}

/// The population variance: the total squared deviation divided by `n`.
///
/// # Errors
/// Returns [`StatsError::InsufficientData`] if `data` is empty.
pub fn population_variance<T: Real>(data: &[T]) -> Result<T> {
    require(data, 1)?;
    Ok(sum(&squared_deviations(data)) / count(data.len()))
}

/// The sample variance: the total squared deviation divided by `n − 1`.
///
/// This estimates the variance of the distribution the values were drawn from better than
/// [`population_variance`] does, and is always slightly larger than it.
///
/// # Errors
/// Returns [`StatsError::InsufficientData`] if `data` has fewer than two values.
pub fn sample_variance<T: Real>(data: &[T]) -> Result<T> {
    require(data, 2)?;
    Ok(sum(&squared_deviations(data)) / count(data.len() - 1))
}

/// The mean of the first elements of the pairs minus the mean of the second elements.
///
/// # Errors
/// Returns [`StatsError::InsufficientData`] if `pairs` is empty.
pub fn difference_of_means<T: Real>(pairs: &[(T, T)]) -> Result<T> {
    require(pairs, 1)?;
    let (firsts, seconds): (Vec<T>, Vec<T>) = pairs.iter().copied().unzip();
    Ok(mean(&firsts)? - mean(&seconds)?)
}
