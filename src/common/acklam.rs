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

//! Acklam's algorithm for the inverse of the standard normal CDF.
//!
//! A rational approximation by Peter J. Acklam with a relative error below 1.15e-9 over the
//! whole open interval (0, 1). The algorithm and its coefficients are free for any use.
//! See <https://web.archive.org/web/20151030215612/http://home.online.no/~pjacklam/notes/invnorm>.

use crate::real::Real;

/// Numerator coefficients of the central region.
const A: [f64; 6] = [
    -3.969_683_028_665_376e1,
    2.209_460_984_245_205e2,
    -2.759_285_104_469_687e2,
    1.383_577_518_672_690e2,
    -3.066_479_806_614_716e1,
    2.506_628_277_459_239e0,
];

/// Denominator coefficients of the central region.
const B: [f64; 5] = [
    -5.447_609_879_822_406e1,
    1.615_858_368_580_409e2,
    -1.556_989_798_598_866e2,
    6.680_131_188_771_972e1,
    -1.328_068_155_288_572e1,
];

/// Numerator coefficients of the tail regions.
const C: [f64; 6] = [
    -7.784_894_002_430_293e-3,
    -3.223_964_580_411_365e-1,
    -2.400_758_277_161_838e0,
    -2.549_732_539_343_734e0,
    4.374_664_141_464_968e0,
    2.938_163_982_698_783e0,
];

/// Denominator coefficients of the tail regions.
const D: [f64; 4] = [
    7.784_695_709_041_462e-3,
    3.224_671_290_700_398e-1,
    2.445_134_137_142_996e0,
    3.754_408_661_907_416e0,
];

/// Below this probability the lower tail approximation is used, and above `1 - P_LOW` the
/// upper tail approximation.
pub const P_LOW: f64 = 0.02425;

/// Evaluates a polynomial with coefficients in order of decreasing degree (Horner's method).
fn horner(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// The ratio of the tail polynomials at `q = sqrt(-2 ln p)`, where `p` is the distance of the
/// probability from the nearest end of (0, 1).
fn tail(q: f64) -> f64 {
    horner(&C, q) / (horner(&D, q) * q + 1.0)
}

/// The quantile of the standard normal distribution, Φ⁻¹(`p`).
///
/// The rational functions are always evaluated in double precision. Their coefficients are
/// large enough that single precision loses about four digits in the central region.
///
/// # Panics
/// Panics unless `0 < p < 1`. A normal distribution is unbounded in both directions, so it has
/// neither a 0th nor a 1st quantile.
///
/// # Example
/// ```
/// use stats_lattice::common::acklam::standard_acklam;
///
/// assert_eq!(standard_acklam(0.5_f64), 0.0);
/// assert!((standard_acklam(0.975_f64) - 1.959_963_985).abs() < 1e-8);
/// ```
#[must_use]
pub fn standard_acklam<T: Real>(p: T) -> T {
    assert!(
        T::zero() < p && p < T::one(),
        "the normal quantile is only defined for probabilities in (0, 1), got {p}"
    );
    T::constant(standard_acklam_f64(p.to_f64().unwrap_or(f64::NAN)))
}

fn standard_acklam_f64(p: f64) -> f64 {
    if p < P_LOW {
        tail((-2.0 * p.ln()).sqrt())
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        horner(&A, r) * q / (horner(&B, r) * r + 1.0)
    } else {
        -tail((-2.0 * (1.0 - p).ln()).sqrt())
    }
}

/// The quantile of a normal distribution with the given standard deviation and mean.
///
/// # Panics
/// Panics unless `0 < p < 1`.
#[must_use]
pub fn acklam<T: Real>(p: T, standard_deviation: T, mean: T) -> T {
    standard_acklam(p) * standard_deviation + mean
}
