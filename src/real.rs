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

//! Contains the [`Real`] trait: the numeric capability required from the type of
//! probabilities and statistics.
//!
//! Most of what a distribution needs (arithmetic, comparisons, `sqrt`, `exp`, `ln`, `powi`,
//! `cos`) comes from [`num_traits::Float`]. [`Real`] adds the complementary error function,
//! infallible conversions for constants and integer outcomes, and uniform sampling.

use std::fmt::{Debug, Display};
use std::iter::Sum;

use num_traits::{Float, FloatConst};
use rand::Rng;

/// A real-number type usable as the `Statistic` of a probability distribution.
///
/// Implemented for [`f32`] and [`f64`].
pub trait Real: Float + FloatConst + Debug + Display + Sum + Send + Sync + 'static {
    /// The complementary error function, `erfc(x) = 1 - erf(x)`.
    #[must_use]
    fn erfc(self) -> Self;

    /// Converts a double precision constant, rounding if `Self` is narrower.
    fn constant(value: f64) -> Self;

    /// Converts an integer outcome, rounding if it cannot be represented exactly.
    fn from_int(value: i64) -> Self;

    /// Draws a value uniformly from `[0, 1)`.
    fn unit_uniform<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl Real for f64 {
    fn erfc(self) -> Self {
        statrs::function::erf::erfc(self)
    }

    fn constant(value: f64) -> Self {
        value
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_int(value: i64) -> Self {
        value as f64
    }

    fn unit_uniform<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.gen()
    }
}

impl Real for f32 {
    #[allow(clippy::cast_possible_truncation)]
    fn erfc(self) -> Self {
        statrs::function::erf::erfc(f64::from(self)) as f32
    }

    #[allow(clippy::cast_possible_truncation)]
    fn constant(value: f64) -> Self {
        value as f32
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_int(value: i64) -> Self {
        value as f32
    }

    fn unit_uniform<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.gen()
    }
}
