// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The value engine: a bounded value, step arithmetic, clamp and wrap.
//!
//! [`StepperModel`] is pure state. Stepping returns a [`StepOutcome`] that
//! says what happened; it never notifies anyone. [`Stepper`](crate::Stepper)
//! turns outcomes into notifications and repeat cancellation.
//!
//! ## Minimal example
//!
//! ```
//! use understory_stepper::{Bound, StepOutcome, StepperConfig, StepperModel};
//!
//! let mut model = StepperModel::from_config(&StepperConfig {
//!     maximum_value: 2.0,
//!     ..StepperConfig::default()
//! })
//! .unwrap();
//!
//! assert_eq!(model.step_up(), StepOutcome::Stepped { from: 0.0, to: 1.0 });
//! assert_eq!(model.step_up(), StepOutcome::Stepped { from: 1.0, to: 2.0 });
//! assert_eq!(model.step_up(), StepOutcome::Clamped(Bound::Maximum));
//! assert_eq!(model.value(), 2.0);
//! ```

use crate::config::{StepperConfig, check_bounds, check_step};
use crate::error::{ConfigError, StepKind};
use crate::rounding::{Rounding, approx_eq, approx_ge, approx_gt, approx_le, approx_lt};

/// Which way a step moves the value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StepDirection {
    /// Subtract the decrement step.
    Down,
    /// Add the increment step.
    Up,
}

/// One end of the value range.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Bound {
    /// The minimum value.
    Minimum,
    /// The maximum value.
    Maximum,
}

/// A value transition `from -> to`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ValueChange {
    /// Value before the change.
    pub from: f64,
    /// Value after the change.
    pub to: f64,
}

/// Result of a single step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StepOutcome {
    /// The value moved by one step.
    ///
    /// `from` and `to` can be equal when rounding swallows a step smaller than
    /// the rounding scale.
    Stepped {
        /// Value before the step.
        from: f64,
        /// Value after the step.
        to: f64,
    },
    /// The step crossed a bound and the value jumped to the opposite one.
    Wrapped {
        /// Value before the step.
        from: f64,
        /// The opposite bound.
        to: f64,
    },
    /// The step would cross a bound; the value was left alone.
    Clamped(Bound),
}

impl StepOutcome {
    /// Returns the value transition, if the value actually changed.
    #[must_use]
    pub fn change(&self) -> Option<ValueChange> {
        match *self {
            Self::Stepped { from, to } | Self::Wrapped { from, to } if !approx_eq(from, to) => {
                Some(ValueChange { from, to })
            }
            _ => None,
        }
    }
}

/// A bounded, steppable value.
///
/// Invariants, upheld by every method:
/// - `minimum_value < maximum_value`, both finite.
/// - `minimum_value <= value <= maximum_value`.
/// - Both step values are finite and positive.
#[derive(Clone, Debug, PartialEq)]
pub struct StepperModel {
    value: f64,
    minimum_value: f64,
    maximum_value: f64,
    increment_step_value: f64,
    decrement_step_value: f64,
    wraps: bool,
    rounding: Rounding,
}

impl Default for StepperModel {
    fn default() -> Self {
        Self::new()
    }
}

impl StepperModel {
    /// Creates a model with the default configuration: `0` in `[0, 100]`, step `1`.
    #[must_use]
    pub fn new() -> Self {
        let config = StepperConfig::default();
        Self {
            value: config.value,
            minimum_value: config.minimum_value,
            maximum_value: config.maximum_value,
            increment_step_value: config.increment_step_value,
            decrement_step_value: config.decrement_step_value,
            wraps: config.wraps,
            rounding: config.rounding,
        }
    }

    /// Creates a model from `config`, clamping the initial value into the bounds.
    pub fn from_config(config: &StepperConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            value: config
                .value
                .clamp(config.minimum_value, config.maximum_value),
            minimum_value: config.minimum_value,
            maximum_value: config.maximum_value,
            increment_step_value: config.increment_step_value,
            decrement_step_value: config.decrement_step_value,
            wraps: config.wraps,
            rounding: config.rounding,
        })
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Lower bound.
    #[must_use]
    pub fn minimum_value(&self) -> f64 {
        self.minimum_value
    }

    /// Upper bound.
    #[must_use]
    pub fn maximum_value(&self) -> f64 {
        self.maximum_value
    }

    /// Delta applied by [`StepperModel::step_up`].
    #[must_use]
    pub fn increment_step_value(&self) -> f64 {
        self.increment_step_value
    }

    /// Delta applied by [`StepperModel::step_down`].
    #[must_use]
    pub fn decrement_step_value(&self) -> f64 {
        self.decrement_step_value
    }

    /// Whether stepping past a bound wraps to the opposite bound.
    #[must_use]
    pub fn wraps(&self) -> bool {
        self.wraps
    }

    /// Rounding applied to step results.
    #[must_use]
    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Returns `true` if the value sits on `bound` (within tolerance).
    #[must_use]
    pub fn is_at(&self, bound: Bound) -> bool {
        match bound {
            Bound::Minimum => approx_eq(self.value, self.minimum_value),
            Bound::Maximum => approx_eq(self.value, self.maximum_value),
        }
    }

    /// Sets the value, clamped into the bounds.
    ///
    /// Returns the change, or `None` if the clamped value equals the current one.
    /// NaN is rejected; infinities clamp to the nearest bound.
    pub fn set_value(&mut self, value: f64) -> Result<Option<ValueChange>, ConfigError> {
        if value.is_nan() {
            return Err(ConfigError::NonFinite { field: "value" });
        }
        let target = value.clamp(self.minimum_value, self.maximum_value);
        Ok(self.assign(target))
    }

    /// Sets the lower bound, re-clamping the value if needed.
    pub fn set_minimum_value(&mut self, minimum: f64) -> Result<Option<ValueChange>, ConfigError> {
        self.set_bounds(minimum, self.maximum_value)
    }

    /// Sets the upper bound, re-clamping the value if needed.
    pub fn set_maximum_value(&mut self, maximum: f64) -> Result<Option<ValueChange>, ConfigError> {
        self.set_bounds(self.minimum_value, maximum)
    }

    /// Sets both bounds at once, re-clamping the value if needed.
    ///
    /// Useful when the new range does not overlap the old one, where setting
    /// the bounds one at a time would briefly invert them.
    pub fn set_bounds(
        &mut self,
        minimum: f64,
        maximum: f64,
    ) -> Result<Option<ValueChange>, ConfigError> {
        check_bounds(minimum, maximum)?;
        self.minimum_value = minimum;
        self.maximum_value = maximum;
        let target = self.value.clamp(minimum, maximum);
        Ok(self.assign(target))
    }

    /// Sets the delta applied when stepping up.
    ///
    /// A delta finer than the [rounding resolution](Rounding::resolution) is
    /// swallowed by each step; pair it with a finer [`Rounding`].
    pub fn set_increment_step_value(&mut self, step: f64) -> Result<(), ConfigError> {
        check_step(step, StepKind::Increment)?;
        self.increment_step_value = step;
        Ok(())
    }

    /// Sets the delta applied when stepping down.
    pub fn set_decrement_step_value(&mut self, step: f64) -> Result<(), ConfigError> {
        check_step(step, StepKind::Decrement)?;
        self.decrement_step_value = step;
        Ok(())
    }

    /// Sets both deltas to the same value.
    pub fn set_step_value(&mut self, step: f64) -> Result<(), ConfigError> {
        check_step(step, StepKind::Both)?;
        self.increment_step_value = step;
        self.decrement_step_value = step;
        Ok(())
    }

    /// Enables or disables wrap-around.
    pub fn set_wraps(&mut self, wraps: bool) {
        self.wraps = wraps;
    }

    /// Sets the rounding applied to subsequent step results.
    pub fn set_rounding(&mut self, rounding: Rounding) {
        self.rounding = rounding;
    }

    /// Steps in `direction`.
    pub fn step(&mut self, direction: StepDirection) -> StepOutcome {
        match direction {
            StepDirection::Down => self.step_down(),
            StepDirection::Up => self.step_up(),
        }
    }

    /// Subtracts the decrement step.
    ///
    /// - Below the minimum with wrapping: jumps to the maximum.
    /// - At or above the minimum: takes the rounded candidate.
    /// - Otherwise: leaves the value alone and reports a minimum clamp.
    pub fn step_down(&mut self) -> StepOutcome {
        let from = self.value;
        let candidate = self.rounding.apply(from - self.decrement_step_value);

        if self.wraps && approx_lt(candidate, self.minimum_value) {
            self.value = self.maximum_value;
            StepOutcome::Wrapped {
                from,
                to: self.maximum_value,
            }
        } else if approx_ge(candidate, self.minimum_value) {
            let to = candidate.clamp(self.minimum_value, self.maximum_value);
            self.value = to;
            StepOutcome::Stepped { from, to }
        } else {
            StepOutcome::Clamped(Bound::Minimum)
        }
    }

    /// Adds the increment step. Mirror image of [`StepperModel::step_down`].
    pub fn step_up(&mut self) -> StepOutcome {
        let from = self.value;
        let candidate = self.rounding.apply(from + self.increment_step_value);

        if self.wraps && approx_gt(candidate, self.maximum_value) {
            self.value = self.minimum_value;
            StepOutcome::Wrapped {
                from,
                to: self.minimum_value,
            }
        } else if approx_le(candidate, self.maximum_value) {
            let to = candidate.clamp(self.minimum_value, self.maximum_value);
            self.value = to;
            StepOutcome::Stepped { from, to }
        } else {
            StepOutcome::Clamped(Bound::Maximum)
        }
    }

    // Always stores `target`; the tolerance only decides whether it counts
    // as a change.
    fn assign(&mut self, target: f64) -> Option<ValueChange> {
        let from = self.value;
        self.value = target;
        (!approx_eq(target, from)).then_some(ValueChange { from, to: target })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rounding::RoundingMode;

    fn model(config: StepperConfig) -> StepperModel {
        StepperModel::from_config(&config).unwrap()
    }

    #[test]
    fn new_model_uses_reference_defaults() {
        let m = StepperModel::new();
        assert_eq!(m.value(), 0.0);
        assert_eq!(m.minimum_value(), 0.0);
        assert_eq!(m.maximum_value(), 100.0);
        assert_eq!(m.increment_step_value(), 1.0);
        assert_eq!(m.decrement_step_value(), 1.0);
        assert!(!m.wraps());
        assert!(m.is_at(Bound::Minimum));
    }

    #[test]
    fn from_config_clamps_initial_value() {
        let m = model(StepperConfig {
            value: 250.0,
            ..StepperConfig::default()
        });
        assert_eq!(m.value(), 100.0);
    }

    #[test]
    fn step_down_rounds_candidate() {
        let mut m = model(StepperConfig {
            value: 4.8,
            decrement_step_value: 0.4,
            ..StepperConfig::default()
        });
        assert_eq!(m.step_down(), StepOutcome::Stepped { from: 4.8, to: 4.4 });
        assert_eq!(m.value(), 4.4);
    }

    #[test]
    fn unrounded_drift_still_lands_on_bound() {
        // 0.3 - 0.1 - 0.1 - 0.1 is 2.7e-17 without rounding, within tolerance of 0.
        let mut m = model(StepperConfig {
            value: 0.3,
            decrement_step_value: 0.1,
            rounding: Rounding::None,
            ..StepperConfig::default()
        });
        m.step_down();
        m.step_down();
        let outcome = m.step_down();
        assert!(matches!(outcome, StepOutcome::Stepped { .. }));
        assert!(m.value() >= m.minimum_value());
        assert!(m.is_at(Bound::Minimum));
        assert_eq!(m.step_down(), StepOutcome::Clamped(Bound::Minimum));
    }

    #[test]
    fn clamp_leaves_value_untouched() {
        let mut m = model(StepperConfig {
            value: 0.5,
            ..StepperConfig::default()
        });
        assert_eq!(m.step_down(), StepOutcome::Clamped(Bound::Minimum));
        assert_eq!(m.value(), 0.5);
    }

    #[test]
    fn wrap_jumps_to_opposite_bound() {
        let mut m = model(StepperConfig {
            wraps: true,
            ..StepperConfig::default()
        });
        assert_eq!(
            m.step_down(),
            StepOutcome::Wrapped {
                from: 0.0,
                to: 100.0
            }
        );
        assert_eq!(
            m.step_up(),
            StepOutcome::Wrapped {
                from: 100.0,
                to: 0.0
            }
        );
    }

    #[test]
    fn stepping_onto_a_bound_is_not_a_clamp() {
        let mut m = model(StepperConfig {
            value: 99.0,
            wraps: true,
            ..StepperConfig::default()
        });
        assert_eq!(
            m.step_up(),
            StepOutcome::Stepped {
                from: 99.0,
                to: 100.0
            }
        );
    }

    #[test]
    fn outcome_change_ignores_swallowed_steps() {
        let mut m = model(StepperConfig {
            value: 1.0,
            increment_step_value: 0.001,
            rounding: Rounding::Decimal {
                scale: 2,
                mode: RoundingMode::HalfEven,
            },
            ..StepperConfig::default()
        });
        let outcome = m.step_up();
        assert_eq!(outcome, StepOutcome::Stepped { from: 1.0, to: 1.0 });
        assert_eq!(outcome.change(), None);
        assert_eq!(StepOutcome::Clamped(Bound::Maximum).change(), None);
    }

    #[test]
    fn set_value_clamps_and_reports_change() {
        let mut m = StepperModel::new();
        assert_eq!(
            m.set_value(150.0),
            Ok(Some(ValueChange {
                from: 0.0,
                to: 100.0
            }))
        );
        assert_eq!(m.set_value(100.0), Ok(None));
        assert_eq!(m.set_value(f64::NEG_INFINITY).unwrap().unwrap().to, 0.0);
        assert_eq!(
            m.set_value(f64::NAN),
            Err(ConfigError::NonFinite { field: "value" })
        );
    }

    #[test]
    fn shrinking_bounds_reclamps_value() {
        let mut m = model(StepperConfig {
            value: 50.0,
            ..StepperConfig::default()
        });
        assert_eq!(
            m.set_maximum_value(10.0),
            Ok(Some(ValueChange {
                from: 50.0,
                to: 10.0
            }))
        );
        assert_eq!(m.set_minimum_value(5.0), Ok(None));
        assert_eq!(m.value(), 10.0);
    }

    #[test]
    fn invalid_configuration_is_rejected_and_state_kept() {
        let mut m = StepperModel::new();
        assert!(m.set_minimum_value(100.0).is_err());
        assert!(m.set_maximum_value(-1.0).is_err());
        assert!(m.set_bounds(3.0, 2.0).is_err());
        assert!(m.set_increment_step_value(0.0).is_err());
        assert!(m.set_decrement_step_value(-0.5).is_err());
        assert!(m.set_step_value(f64::INFINITY).is_err());
        assert_eq!(m, StepperModel::new());
    }

    #[test]
    fn set_bounds_moves_disjoint_range() {
        let mut m = StepperModel::new();
        m.set_bounds(200.0, 300.0).unwrap();
        assert_eq!(m.value(), 200.0);
        assert_eq!(m.minimum_value(), 200.0);
    }

    #[test]
    fn set_step_value_sets_both() {
        let mut m = StepperModel::new();
        m.set_step_value(2.5).unwrap();
        assert_eq!(m.increment_step_value(), 2.5);
        assert_eq!(m.decrement_step_value(), 2.5);
    }

    #[test]
    fn rejected_shared_step_names_both_deltas() {
        let mut m = StepperModel::new();
        assert_eq!(
            m.set_step_value(0.0),
            Err(ConfigError::NonPositiveStep {
                kind: StepKind::Both,
                step: 0.0
            })
        );
    }

    #[test]
    fn bound_moving_within_tolerance_still_reclamps_silently() {
        let mut m = StepperModel::new();
        assert_eq!(m.set_bounds(1e-16, 100.0), Ok(None));
        assert_eq!(m.value(), 1e-16);
        assert!(m.value() >= m.minimum_value());

        m.set_bounds(-100.0, 100.0).unwrap();
        m.set_value(0.0).unwrap();
        assert_eq!(m.set_maximum_value(-1e-16), Ok(None));
        assert_eq!(m.value(), -1e-16);
    }
}
