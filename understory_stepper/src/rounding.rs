// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decimal rounding and tolerance-aware comparison for stepped values.
//!
//! Repeated `value + step` arithmetic accumulates representation error
//! (`0.1 + 0.2 != 0.3`). Two tools keep that drift out of a stepper:
//!
//! - [`Rounding`] snaps every step result to a fixed number of decimal places.
//! - [`approx_eq`] and friends compare against the bounds with an absolute
//!   tolerance of [`EPSILON`], so a value a few ULPs off a bound still counts
//!   as being on it.
//!
//! Everything here uses `core` arithmetic only.
//!
//! ```
//! use understory_stepper::{Rounding, RoundingMode};
//!
//! let two_places = Rounding::Decimal { scale: 2, mode: RoundingMode::HalfEven };
//! assert_eq!(two_places.apply(4.8 - 0.4), 4.4);
//! assert_eq!(Rounding::None.apply(4.8 - 0.4), 4.8 - 0.4);
//! ```

/// Absolute tolerance used for boundary comparisons.
pub const EPSILON: f64 = 1e-15;

/// Largest decimal scale [`Rounding::Decimal`] honors; larger scales are capped.
pub const MAX_SCALE: u8 = 15;

/// 2^52: at or above this magnitude every `f64` is already an integer.
const EXACT_INTEGER_LIMIT: f64 = 4_503_599_627_370_496.0;

/// Returns `true` if `a` and `b` differ by at most [`EPSILON`].
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    let diff = a - b;
    (-EPSILON..=EPSILON).contains(&diff)
}

/// Tolerance-aware `a < b`.
#[must_use]
pub fn approx_lt(a: f64, b: f64) -> bool {
    a < b && !approx_eq(a, b)
}

/// Tolerance-aware `a > b`.
#[must_use]
pub fn approx_gt(a: f64, b: f64) -> bool {
    a > b && !approx_eq(a, b)
}

/// Tolerance-aware `a <= b`.
#[must_use]
pub fn approx_le(a: f64, b: f64) -> bool {
    a <= b || approx_eq(a, b)
}

/// Tolerance-aware `a >= b`.
#[must_use]
pub fn approx_ge(a: f64, b: f64) -> bool {
    a >= b || approx_eq(a, b)
}

/// How a value that falls between two representable decimals is resolved.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round to nearest; ties go to the even neighbor (bankers' rounding).
    #[default]
    HalfEven,
    /// Round to nearest; ties go away from zero.
    HalfAwayFromZero,
    /// Round toward negative infinity.
    Down,
    /// Round toward positive infinity.
    Up,
}

/// Rounding rule applied to the result of every step computation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Keep the raw floating-point result.
    None,
    /// Round to `scale` decimal places (capped at [`MAX_SCALE`]).
    Decimal {
        /// Number of digits kept after the decimal point.
        scale: u8,
        /// Tie-breaking and direction rule.
        mode: RoundingMode,
    },
}

impl Default for Rounding {
    /// Two decimal places, round-half-to-even.
    fn default() -> Self {
        Self::Decimal {
            scale: 2,
            mode: RoundingMode::HalfEven,
        }
    }
}

impl Rounding {
    /// The smallest increment this rule keeps, or `None` without rounding.
    ///
    /// Steps finer than this can be swallowed: they report a step but round
    /// back onto the value they started from.
    #[must_use]
    pub fn resolution(self) -> Option<f64> {
        match self {
            Self::None => None,
            Self::Decimal { scale, .. } => Some(1.0 / pow10(scale.min(MAX_SCALE))),
        }
    }

    /// Applies this rule to `value`.
    ///
    /// Non-finite inputs, and inputs too large to carry a fractional part at the
    /// requested scale, are returned unchanged.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        let Self::Decimal { scale, mode } = self else {
            return value;
        };
        if !value.is_finite() {
            return value;
        }
        let factor = pow10(scale.min(MAX_SCALE));
        let scaled = value * factor;
        if !(-EXACT_INTEGER_LIMIT..EXACT_INTEGER_LIMIT).contains(&scaled) {
            return value;
        }
        round_integer(scaled, mode) / factor
    }
}

fn pow10(scale: u8) -> f64 {
    let mut factor = 1.0;
    for _ in 0..scale {
        factor *= 10.0;
    }
    factor
}

/// `x` must be within the exact-integer range.
#[expect(
    clippy::cast_possible_truncation,
    reason = "callers keep |x| below 2^52, well inside i64"
)]
fn trunc(x: f64) -> f64 {
    x as i64 as f64
}

fn floor(x: f64) -> f64 {
    let t = trunc(x);
    if t > x { t - 1.0 } else { t }
}

fn ceil(x: f64) -> f64 {
    let t = trunc(x);
    if t < x { t + 1.0 } else { t }
}

fn round_integer(x: f64, mode: RoundingMode) -> f64 {
    match mode {
        RoundingMode::Down => floor(x),
        RoundingMode::Up => ceil(x),
        RoundingMode::HalfEven | RoundingMode::HalfAwayFromZero => {
            let below = floor(x);
            // Exact: both operands are in the exact-integer range.
            let frac = x - below;
            if frac < 0.5 {
                below
            } else if frac > 0.5 {
                below + 1.0
            } else if mode == RoundingMode::HalfEven {
                if below % 2.0 == 0.0 { below } else { below + 1.0 }
            } else if x > 0.0 {
                below + 1.0
            } else {
                below
            }
        }
    }
}
