// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_stepper --heading-base-level=0

//! Understory Stepper: the state machine behind a value stepper control.
//!
//! A stepper owns a bounded numeric value and two logical triggers, "step
//! down" and "step up". This crate implements everything about that control
//! except drawing it:
//!
//! - **Value engine** ([`StepperModel`]): bounds, step deltas, clamping,
//!   optional wrap-around, and per-step decimal [`Rounding`] so repeated
//!   `0.1` steps do not drift.
//! - **Repeat scheduler** ([`AutoRepeat`], [`RepeatScheduler`]): turns a held
//!   press into periodic steps and stops cleanly on release or at a bound.
//! - **Notification dispatcher** ([`Notifier`]): a weakly held
//!   [`StepperDelegate`] plus one callback per [`EventKind`].
//!
//! [`Stepper`] ties the three together behind the API a host UI layer calls.
//! The crate does not know about buttons, gestures or run loops: the host routes
//! taps and long-press phases in, provides a timer through [`RepeatScheduler`],
//! and listens for notifications to update its own display.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use understory_stepper::{ManualScheduler, PressPhase, Stepper};
//!
//! #[derive(PartialEq, Debug)]
//! enum Button {
//!     Minus,
//!     Plus,
//! }
//!
//! let label = Rc::new(RefCell::new(String::new()));
//! let mut stepper = Stepper::new(Button::Minus, Button::Plus, ManualScheduler::new());
//!
//! let text = label.clone();
//! stepper
//!     .set_bounds(0.0, 8.0)
//!     .on_value_changed(move |model| *text.borrow_mut() = format!("{:.0}", model.value()));
//!
//! // A tap is one step.
//! stepper.tap(&Button::Plus);
//! assert_eq!(*label.borrow(), "1");
//!
//! // Holding repeats every 100 ms until released.
//! stepper.long_press(&Button::Plus, PressPhase::Began);
//! stepper.advance(core::time::Duration::from_millis(300));
//! stepper.long_press(&Button::Plus, PressPhase::Ended);
//! assert_eq!(stepper.value(), 4.0);
//! ```
//!
//! ## Notification order
//!
//! Within one step the value changes first, then the specific notification
//! ([`EventKind::Incremented`] / [`EventKind::Decremented`], or a clamp kind)
//! fires, then [`EventKind::ValueChanged`] fires if the value actually moved.
//! A wrap fires only [`EventKind::ValueChanged`]. A clamp ends any active
//! repeat ([`EventKind::LongPressEnded`]) before reporting the clamp.
//!
//! ## Threading
//!
//! A stepper is single-threaded: it holds boxed closures and weak delegate
//! pointers and is neither `Send` nor `Sync`. Timer ticks are expected on the
//! same thread as every other call, typically the UI thread.
//!
//! ## Logging
//!
//! Repeat and boundary transitions are reported through [`tracing`] at
//! `debug` level, individual steps and notifications at `trace` level.
//!
//! ## Features
//!
//! - `std` (default): forwards to `tracing/std`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod model;
mod notify;
mod repeat;
pub mod rounding;
mod stepper;

pub use config::{
    DEFAULT_AUTO_REPEAT_INTERVAL, DEFAULT_MAXIMUM_VALUE, DEFAULT_MINIMUM_VALUE,
    DEFAULT_STEP_VALUE, StepperConfig, is_valid_interval,
};
pub use error::{ConfigError, StepKind};
pub use model::{Bound, StepDirection, StepOutcome, StepperModel, ValueChange};
pub use notify::{Callback, Callbacks, EventKind, EventRecorder, Notifier, StepperDelegate};
pub use repeat::{
    AutoRepeat, ManualScheduler, NoopScheduler, PressPhase, RepeatScheduler, RepeatState, TimerId,
};
pub use rounding::{Rounding, RoundingMode};
pub use stepper::Stepper;
