// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

use core::fmt;

/// Which step delta a [`ConfigError::NonPositiveStep`] refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// The delta applied by [`step_up`](crate::StepperModel::step_up).
    Increment,
    /// The delta applied by [`step_down`](crate::StepperModel::step_down).
    Decrement,
    /// Both deltas at once, as set by
    /// [`set_step_value`](crate::StepperModel::set_step_value).
    Both,
}

impl StepKind {
    pub(crate) const fn field(self) -> &'static str {
        match self {
            Self::Increment => "increment step value",
            Self::Decrement => "decrement step value",
            Self::Both => "step value",
        }
    }
}

/// Error returned when a stepper would be configured into an invalid state.
///
/// These are programmer errors. The panicking setters on [`Stepper`](crate::Stepper)
/// report them with the [`Display`](fmt::Display) message; the `try_*` variants
/// hand them back instead.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The minimum would not be strictly less than the maximum.
    InvalidBounds {
        /// Requested minimum.
        minimum: f64,
        /// Requested maximum.
        maximum: f64,
    },
    /// A step delta would be zero or negative.
    NonPositiveStep {
        /// Which delta was rejected.
        kind: StepKind,
        /// The rejected delta.
        step: f64,
    },
    /// A bound, step or value was NaN or infinite.
    NonFinite {
        /// Name of the rejected field.
        field: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds { minimum, maximum } => write!(
                f,
                "minimum value ({minimum}) must be less than maximum value ({maximum})"
            ),
            Self::NonPositiveStep { kind, step } => {
                write!(f, "{} ({step}) must be greater than zero", kind.field())
            }
            Self::NonFinite { field } => write!(f, "{field} must be a finite number"),
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_offending_field() {
        let bounds = ConfigError::InvalidBounds {
            minimum: 5.0,
            maximum: 5.0,
        };
        assert_eq!(
            bounds.to_string(),
            "minimum value (5) must be less than maximum value (5)"
        );

        let step = ConfigError::NonPositiveStep {
            kind: StepKind::Decrement,
            step: -1.0,
        };
        assert_eq!(
            step.to_string(),
            "decrement step value (-1) must be greater than zero"
        );

        let shared = ConfigError::NonPositiveStep {
            kind: StepKind::Both,
            step: 0.0,
        };
        assert_eq!(shared.to_string(), "step value (0) must be greater than zero");

        let nan = ConfigError::NonFinite { field: "value" };
        assert_eq!(nan.to_string(), "value must be a finite number");
    }
}
