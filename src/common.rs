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

//! Commonly used probability distributions.
//!
//! Every distribution here is generic over its floating point type `T`, which defaults to `f64`.

pub mod acklam;
mod bernoulli;
mod exponential;
mod normal;
mod poisson;

pub use bernoulli::Bernoulli;
pub use exponential::Exponential;
pub use normal::Normal;
pub use poisson::Poisson;
