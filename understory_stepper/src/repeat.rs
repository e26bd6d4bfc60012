// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Repeat-on-hold: turn a sustained press into periodic steps.
//!
//! The crate never owns a clock. A host supplies a [`RepeatScheduler`] that can
//! start and cancel a periodic timer, and delivers each firing back by calling
//! [`Stepper::tick`](crate::Stepper::tick) with the timer's [`TimerId`]. Ticks
//! for a timer that is no longer active are ignored, so cancelling a timer from
//! inside its own tick is safe, as is a host that delivers one stale tick after
//! cancellation.
//!
//! [`ManualScheduler`] is a deterministic implementation driven by explicit
//! time advances, for tests and headless hosts.
//!
//! ## State machine
//!
//! ```text
//!            press began (auto-repeat on)
//!   Idle  ─────────────────────────────────▶  Repeating { direction, timer }
//!    ▲                                              │
//!    └──────── press ended / cancelled / failed ────┤
//!    └──────── a tick clamps at a bound ────────────┘
//! ```

use alloc::vec::Vec;
use core::time::Duration;

use crate::config::{DEFAULT_AUTO_REPEAT_INTERVAL, is_valid_interval};
use crate::model::StepDirection;

/// Opaque handle for a scheduled periodic timer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Wraps a raw host timer id.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Host capability: schedule and cancel a periodic callback.
///
/// Implementations arrange for [`Stepper::tick`](crate::Stepper::tick) to be
/// called with the returned id every `interval` until [`cancel`] is called.
/// Ticks must run on the same thread as every other stepper call.
///
/// [`cancel`]: RepeatScheduler::cancel
pub trait RepeatScheduler {
    /// Starts a periodic timer; the first tick is due one `interval` from now.
    fn schedule_repeating(&mut self, interval: Duration) -> TimerId;

    /// Stops `timer`. No tick for it may be delivered after this returns.
    fn cancel(&mut self, timer: TimerId);
}

/// A scheduler for hosts that never auto-repeat: hands out ids, never ticks.
#[derive(Clone, Debug, Default)]
pub struct NoopScheduler {
    next_id: u64,
}

impl RepeatScheduler for NoopScheduler {
    fn schedule_repeating(&mut self, _interval: Duration) -> TimerId {
        self.next_id += 1;
        TimerId(self.next_id)
    }

    fn cancel(&mut self, _timer: TimerId) {}
}

#[derive(Clone, Debug)]
struct ManualTimer {
    id: TimerId,
    interval: Duration,
    next_due: Duration,
    // Set once `next_due` can no longer move forward.
    exhausted: bool,
}

/// A deterministic scheduler with a manually advanced clock.
///
/// ```
/// use core::time::Duration;
/// use understory_stepper::{ManualScheduler, RepeatScheduler};
///
/// let mut clock = ManualScheduler::new();
/// let timer = clock.schedule_repeating(Duration::from_millis(100));
///
/// assert!(clock.advance(Duration::from_millis(99)).is_empty());
/// assert_eq!(clock.advance(Duration::from_millis(201)), vec![timer, timer, timer]);
///
/// clock.cancel(timer);
/// assert!(clock.advance(Duration::from_secs(1)).is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    timers: Vec<ManualTimer>,
}

impl ManualScheduler {
    /// Creates a scheduler at time zero with no timers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers that have not been cancelled.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.timers.len()
    }

    /// Returns `true` if `timer` is scheduled and not cancelled.
    #[must_use]
    pub fn is_active(&self, timer: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == timer)
    }

    /// Moves the clock forward by `by`, returning every tick that fell due, in
    /// time order (ties in scheduling order).
    ///
    /// A timer that fell due several times yields its id several times.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        let target = self.now.saturating_add(by);
        let mut fired = Vec::new();
        loop {
            let next = self
                .timers
                .iter_mut()
                .filter(|t| t.next_due <= target && !t.exhausted)
                .min_by_key(|t| (t.next_due, t.id));
            let Some(timer) = next else {
                break;
            };
            fired.push(timer.id);
            let due = timer.next_due.saturating_add(timer.interval);
            timer.exhausted = due == timer.next_due;
            timer.next_due = due;
        }
        self.now = target;
        fired
    }
}

impl RepeatScheduler for ManualScheduler {
    fn schedule_repeating(&mut self, interval: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        // A zero period would fire forever within a single advance.
        let interval = interval.max(Duration::from_nanos(1));
        self.timers.push(ManualTimer {
            id,
            interval,
            next_due: self.now.saturating_add(interval),
            exhausted: false,
        });
        id
    }

    fn cancel(&mut self, timer: TimerId) {
        self.timers.retain(|t| t.id != timer);
    }
}

/// Phases of a long-press gesture, as reported by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PressPhase {
    /// The press was recognized.
    Began,
    /// The press is still held (for example the finger moved).
    Changed,
    /// The press was released.
    Ended,
    /// The host cancelled the press.
    Cancelled,
    /// The gesture failed to be recognized.
    Failed,
}

impl PressPhase {
    /// Returns `true` for the phases that end a press.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled | Self::Failed)
    }
}

/// Whether a repeat is in progress.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RepeatState {
    /// No press is being repeated.
    #[default]
    Idle,
    /// A press is held and `timer` steps the value in `direction`.
    Repeating {
        /// Which way each tick steps.
        direction: StepDirection,
        /// The active periodic timer.
        timer: TimerId,
    },
}

/// Auto-repeat settings plus the repeat state machine.
///
/// Invariants:
/// - `interval` is always positive and finite.
/// - `enabled` is `false` whenever the last interval assignment was invalid.
/// - A timer handle exists only in [`RepeatState::Repeating`].
#[derive(Clone, Debug, PartialEq)]
pub struct AutoRepeat {
    enabled: bool,
    interval: f64,
    state: RepeatState,
}

impl Default for AutoRepeat {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoRepeat {
    /// Enabled, repeating every [`DEFAULT_AUTO_REPEAT_INTERVAL`] seconds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            enabled: true,
            interval: DEFAULT_AUTO_REPEAT_INTERVAL,
            state: RepeatState::Idle,
        }
    }

    /// Whether a held press repeats.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Seconds between repeated steps.
    #[must_use]
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> RepeatState {
        self.state
    }

    /// Returns `true` while a repeat is active.
    #[must_use]
    pub fn is_repeating(&self) -> bool {
        matches!(self.state, RepeatState::Repeating { .. })
    }

    /// The interval as a [`Duration`], saturating for absurdly long intervals.
    #[must_use]
    pub fn interval_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.interval).unwrap_or(Duration::MAX)
    }

    /// Enables or disables repeating.
    ///
    /// This does not touch an active repeat; see
    /// [`Stepper::set_auto_repeat`](crate::Stepper::set_auto_repeat).
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Sets the interval in seconds.
    ///
    /// A zero, negative or non-finite interval resets it to
    /// [`DEFAULT_AUTO_REPEAT_INTERVAL`] and disables repeating. Returns `false`
    /// in that case.
    pub fn set_interval(&mut self, seconds: f64) -> bool {
        if is_valid_interval(seconds) {
            self.interval = seconds;
            true
        } else {
            self.interval = DEFAULT_AUTO_REPEAT_INTERVAL;
            self.enabled = false;
            false
        }
    }

    /// Idle → Repeating. Returns `false` (no transition) when disabled or
    /// already repeating.
    pub fn begin<S: RepeatScheduler + ?Sized>(
        &mut self,
        direction: StepDirection,
        scheduler: &mut S,
    ) -> bool {
        if !self.enabled || self.is_repeating() {
            return false;
        }
        let timer = scheduler.schedule_repeating(self.interval_duration());
        self.state = RepeatState::Repeating { direction, timer };
        true
    }

    /// Repeating → Idle, cancelling the timer. Returns `false` when already idle.
    pub fn end<S: RepeatScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        match core::mem::take(&mut self.state) {
            RepeatState::Idle => false,
            RepeatState::Repeating { timer, .. } => {
                scheduler.cancel(timer);
                true
            }
        }
    }

    /// Direction to step for a tick of `timer`, or `None` if `timer` is stale.
    #[must_use]
    pub fn direction_for(&self, timer: TimerId) -> Option<StepDirection> {
        match self.state {
            RepeatState::Repeating {
                direction,
                timer: active,
            } if active == timer => Some(direction),
            _ => None,
        }
    }
}
