// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Up-front stepper configuration.

use crate::error::{ConfigError, StepKind};
use crate::rounding::Rounding;

/// Default lower bound.
pub const DEFAULT_MINIMUM_VALUE: f64 = 0.0;
/// Default upper bound.
pub const DEFAULT_MAXIMUM_VALUE: f64 = 100.0;
/// Default increment and decrement step.
pub const DEFAULT_STEP_VALUE: f64 = 1.0;
/// Default auto-repeat interval, in seconds.
///
/// Also the value an invalid interval is reset to.
pub const DEFAULT_AUTO_REPEAT_INTERVAL: f64 = 0.10;

/// Everything needed to build a [`Stepper`](crate::Stepper) in one go.
///
/// Unlike the individual setters, a config is validated as a whole, so bounds
/// can be moved past each other without tripping the `minimum < maximum` check
/// halfway through.
///
/// ```
/// use understory_stepper::StepperConfig;
///
/// let config = StepperConfig {
///     maximum_value: 8.0,
///     wraps: true,
///     ..StepperConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepperConfig {
    /// Initial value; clamped into the bounds on construction.
    pub value: f64,
    /// Lower bound, strictly less than `maximum_value`.
    pub minimum_value: f64,
    /// Upper bound.
    pub maximum_value: f64,
    /// Delta for stepping up; must be positive.
    pub increment_step_value: f64,
    /// Delta for stepping down; must be positive.
    pub decrement_step_value: f64,
    /// Jump to the opposite bound instead of clamping.
    pub wraps: bool,
    /// Whether holding a trigger repeats the step.
    pub auto_repeat: bool,
    /// Seconds between repeated steps. Invalid intervals fall back to
    /// [`DEFAULT_AUTO_REPEAT_INTERVAL`] and disable `auto_repeat`.
    pub auto_repeat_interval: f64,
    /// Rounding applied to each step result.
    pub rounding: Rounding,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            value: DEFAULT_MINIMUM_VALUE,
            minimum_value: DEFAULT_MINIMUM_VALUE,
            maximum_value: DEFAULT_MAXIMUM_VALUE,
            increment_step_value: DEFAULT_STEP_VALUE,
            decrement_step_value: DEFAULT_STEP_VALUE,
            wraps: false,
            auto_repeat: true,
            auto_repeat_interval: DEFAULT_AUTO_REPEAT_INTERVAL,
            rounding: Rounding::default(),
        }
    }
}

impl StepperConfig {
    /// Checks bounds, steps and value.
    ///
    /// The auto-repeat interval is not checked: an invalid interval is
    /// corrected, never rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_finite(self.value, "value")?;
        check_bounds(self.minimum_value, self.maximum_value)?;
        check_step(self.increment_step_value, StepKind::Increment)?;
        check_step(self.decrement_step_value, StepKind::Decrement)
    }
}

/// Returns `true` if `interval` is usable as a repeat period.
#[must_use]
pub fn is_valid_interval(interval: f64) -> bool {
    interval > 0.0 && interval.is_finite()
}

pub(crate) fn check_finite(value: f64, field: &'static str) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field })
    }
}

pub(crate) fn check_bounds(minimum: f64, maximum: f64) -> Result<(), ConfigError> {
    check_finite(minimum, "minimum value")?;
    check_finite(maximum, "maximum value")?;
    if minimum < maximum {
        Ok(())
    } else {
        Err(ConfigError::InvalidBounds { minimum, maximum })
    }
}

pub(crate) fn check_step(step: f64, kind: StepKind) -> Result<(), ConfigError> {
    check_finite(step, kind.field())?;
    if step > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveStep { kind, step })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = StepperConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert!(config.auto_repeat);
        assert_eq!(config.auto_repeat_interval, 0.10);
    }

    #[test]
    fn rejects_inverted_or_equal_bounds() {
        let config = StepperConfig {
            minimum_value: 10.0,
            maximum_value: 10.0,
            ..StepperConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidBounds {
                minimum: 10.0,
                maximum: 10.0
            })
        );
    }

    #[test]
    fn rejects_non_positive_steps() {
        let config = StepperConfig {
            decrement_step_value: 0.0,
            ..StepperConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveStep {
                kind: StepKind::Decrement,
                step: 0.0
            })
        );
    }

    #[test]
    fn rejects_nan_fields() {
        let config = StepperConfig {
            increment_step_value: f64::NAN,
            ..StepperConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFinite {
                field: "increment step value"
            })
        );
    }

    #[test]
    fn interval_validity() {
        assert!(is_valid_interval(0.05));
        assert!(!is_valid_interval(0.0));
        assert!(!is_valid_interval(-1.0));
        assert!(!is_valid_interval(f64::NAN));
        assert!(!is_valid_interval(f64::INFINITY));
    }
}
