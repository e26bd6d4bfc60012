// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Stepper`] aggregate: value engine, repeat scheduler and notifier
//! behind one host-facing API.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use core::time::Duration;

use crate::config::StepperConfig;
use crate::error::ConfigError;
use crate::model::{Bound, StepDirection, StepOutcome, StepperModel, ValueChange};
use crate::notify::{EventKind, Notifier, StepperDelegate};
use crate::repeat::{
    AutoRepeat, ManualScheduler, PressPhase, RepeatScheduler, RepeatState, TimerId,
};
use crate::rounding::Rounding;

/// A bounded numeric control driven by two logical triggers.
///
/// `T` is whatever the host uses to identify its decrement and increment
/// triggers (widget ids, button handles, key codes); it only needs
/// [`PartialEq`] for [`Stepper::tap`] and [`Stepper::long_press`] to tell
/// them apart. `S` schedules repeat ticks.
///
/// Setters return `&mut Self` so configuration chains:
///
/// ```
/// use understory_stepper::{NoopScheduler, Stepper};
///
/// let mut stepper = Stepper::new("minus", "plus", NoopScheduler::default());
/// stepper
///     .set_wraps(true)
///     .set_maximum_value(10.0)
///     .on_value_changed(|model| println!("value is now {}", model.value()));
///
/// stepper.tap(&"minus");
/// assert_eq!(stepper.value(), 10.0);
/// ```
///
/// Configuration setters panic on invalid input (bounds that do not satisfy
/// `minimum < maximum`, non-positive steps); their `try_*` counterparts return
/// a [`ConfigError`] instead.
#[derive(Debug)]
pub struct Stepper<T, S> {
    decrement: T,
    increment: T,
    model: StepperModel,
    repeat: AutoRepeat,
    scheduler: S,
    notifier: Notifier,
}

#[track_caller]
fn expect_valid<R>(result: Result<R, ConfigError>) -> R {
    match result {
        Ok(value) => value,
        Err(err) => panic!("invalid stepper configuration: {err}"),
    }
}

impl<T, S: RepeatScheduler> Stepper<T, S> {
    /// Creates a stepper with the default configuration.
    pub fn new(decrement: T, increment: T, scheduler: S) -> Self {
        Self {
            decrement,
            increment,
            model: StepperModel::new(),
            repeat: AutoRepeat::new(),
            scheduler,
            notifier: Notifier::new(),
        }
    }

    /// Creates a stepper from a validated [`StepperConfig`].
    pub fn with_config(
        decrement: T,
        increment: T,
        scheduler: S,
        config: &StepperConfig,
    ) -> Result<Self, ConfigError> {
        let model = StepperModel::from_config(config)?;
        let mut repeat = AutoRepeat::new();
        // An invalid interval forces repeating off, whatever the flag says.
        repeat.set_enabled(config.auto_repeat);
        repeat.set_interval(config.auto_repeat_interval);
        Ok(Self {
            decrement,
            increment,
            model,
            repeat,
            scheduler,
            notifier: Notifier::new(),
        })
    }

    // Queries

    /// The value engine's state, as observers see it.
    #[must_use]
    pub fn model(&self) -> &StepperModel {
        &self.model
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.model.value()
    }

    /// Lower bound.
    #[must_use]
    pub fn minimum_value(&self) -> f64 {
        self.model.minimum_value()
    }

    /// Upper bound.
    #[must_use]
    pub fn maximum_value(&self) -> f64 {
        self.model.maximum_value()
    }

    /// Delta applied by [`Stepper::step_up`].
    #[must_use]
    pub fn increment_step_value(&self) -> f64 {
        self.model.increment_step_value()
    }

    /// Delta applied by [`Stepper::step_down`].
    #[must_use]
    pub fn decrement_step_value(&self) -> f64 {
        self.model.decrement_step_value()
    }

    /// Whether stepping past a bound wraps.
    #[must_use]
    pub fn wraps(&self) -> bool {
        self.model.wraps()
    }

    /// Rounding applied to each step.
    #[must_use]
    pub fn rounding(&self) -> Rounding {
        self.model.rounding()
    }

    /// Whether holding a trigger repeats the step.
    #[must_use]
    pub fn auto_repeat(&self) -> bool {
        self.repeat.enabled()
    }

    /// Seconds between repeated steps.
    #[must_use]
    pub fn auto_repeat_interval(&self) -> f64 {
        self.repeat.interval()
    }

    /// Repeat state machine state.
    #[must_use]
    pub fn repeat_state(&self) -> RepeatState {
        self.repeat.state()
    }

    /// Returns `true` while a long press is repeating.
    #[must_use]
    pub fn is_repeating(&self) -> bool {
        self.repeat.is_repeating()
    }

    /// The decrement trigger handle.
    #[must_use]
    pub fn decrement_trigger(&self) -> &T {
        &self.decrement
    }

    /// The increment trigger handle.
    #[must_use]
    pub fn increment_trigger(&self) -> &T {
        &self.increment
    }

    /// The repeat scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the repeat scheduler.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// The notification dispatcher.
    #[must_use]
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    // Value and configuration

    /// Sets the value, clamped into the bounds. Fires
    /// [`EventKind::ValueChanged`] only if the value actually changed.
    ///
    /// # Panics
    ///
    /// Panics if `value` is NaN.
    #[track_caller]
    pub fn set_value(&mut self, value: f64) -> &mut Self {
        expect_valid(self.try_set_value(value))
    }

    /// Fallible [`Stepper::set_value`].
    pub fn try_set_value(&mut self, value: f64) -> Result<&mut Self, ConfigError> {
        let change = self.model.set_value(value)?;
        self.value_assigned(change);
        Ok(self)
    }

    /// Sets the lower bound, re-clamping the value.
    ///
    /// # Panics
    ///
    /// Panics if `minimum` is not finite or not below the maximum.
    #[track_caller]
    pub fn set_minimum_value(&mut self, minimum: f64) -> &mut Self {
        expect_valid(self.try_set_minimum_value(minimum))
    }

    /// Fallible [`Stepper::set_minimum_value`].
    pub fn try_set_minimum_value(&mut self, minimum: f64) -> Result<&mut Self, ConfigError> {
        let change = self.model.set_minimum_value(minimum)?;
        self.value_assigned(change);
        Ok(self)
    }

    /// Sets the upper bound, re-clamping the value.
    ///
    /// # Panics
    ///
    /// Panics if `maximum` is not finite or not above the minimum.
    #[track_caller]
    pub fn set_maximum_value(&mut self, maximum: f64) -> &mut Self {
        expect_valid(self.try_set_maximum_value(maximum))
    }

    /// Fallible [`Stepper::set_maximum_value`].
    pub fn try_set_maximum_value(&mut self, maximum: f64) -> Result<&mut Self, ConfigError> {
        let change = self.model.set_maximum_value(maximum)?;
        self.value_assigned(change);
        Ok(self)
    }

    /// Sets both bounds at once, re-clamping the value.
    ///
    /// # Panics
    ///
    /// Panics unless `minimum < maximum` and both are finite.
    #[track_caller]
    pub fn set_bounds(&mut self, minimum: f64, maximum: f64) -> &mut Self {
        expect_valid(self.try_set_bounds(minimum, maximum))
    }

    /// Fallible [`Stepper::set_bounds`].
    pub fn try_set_bounds(&mut self, minimum: f64, maximum: f64) -> Result<&mut Self, ConfigError> {
        let change = self.model.set_bounds(minimum, maximum)?;
        self.value_assigned(change);
        Ok(self)
    }

    /// Sets the delta for stepping up.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not finite and positive.
    #[track_caller]
    pub fn set_increment_step_value(&mut self, step: f64) -> &mut Self {
        expect_valid(self.try_set_increment_step_value(step))
    }

    /// Fallible [`Stepper::set_increment_step_value`].
    pub fn try_set_increment_step_value(&mut self, step: f64) -> Result<&mut Self, ConfigError> {
        self.model.set_increment_step_value(step)?;
        Ok(self)
    }

    /// Sets the delta for stepping down.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not finite and positive.
    #[track_caller]
    pub fn set_decrement_step_value(&mut self, step: f64) -> &mut Self {
        expect_valid(self.try_set_decrement_step_value(step))
    }

    /// Fallible [`Stepper::set_decrement_step_value`].
    pub fn try_set_decrement_step_value(&mut self, step: f64) -> Result<&mut Self, ConfigError> {
        self.model.set_decrement_step_value(step)?;
        Ok(self)
    }

    /// Sets both deltas.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not finite and positive.
    #[track_caller]
    pub fn set_step_value(&mut self, step: f64) -> &mut Self {
        expect_valid(self.try_set_step_value(step))
    }

    /// Fallible [`Stepper::set_step_value`].
    pub fn try_set_step_value(&mut self, step: f64) -> Result<&mut Self, ConfigError> {
        self.model.set_step_value(step)?;
        Ok(self)
    }

    /// Enables or disables wrap-around.
    pub fn set_wraps(&mut self, wraps: bool) -> &mut Self {
        self.model.set_wraps(wraps);
        self
    }

    /// Sets the rounding applied to subsequent steps.
    pub fn set_rounding(&mut self, rounding: Rounding) -> &mut Self {
        self.model.set_rounding(rounding);
        self
    }

    /// Enables or disables repeat-on-hold.
    ///
    /// Disabling ends an active repeat, firing [`EventKind::LongPressEnded`].
    pub fn set_auto_repeat(&mut self, auto_repeat: bool) -> &mut Self {
        self.repeat.set_enabled(auto_repeat);
        self.end_repeat_if_disabled();
        self
    }

    /// Sets the repeat interval in seconds.
    ///
    /// A zero, negative or non-finite interval resets it to
    /// [`DEFAULT_AUTO_REPEAT_INTERVAL`](crate::DEFAULT_AUTO_REPEAT_INTERVAL) and
    /// turns auto-repeat off (ending an active repeat). A valid interval takes
    /// effect on the next press.
    pub fn set_auto_repeat_interval(&mut self, seconds: f64) -> &mut Self {
        if !self.repeat.set_interval(seconds) {
            tracing::debug!(seconds, "invalid auto-repeat interval, auto-repeat disabled");
        }
        self.end_repeat_if_disabled();
        self
    }

    // Observers

    /// Registers `delegate` without taking ownership of it.
    pub fn set_delegate<D: StepperDelegate + 'static>(&mut self, delegate: &Rc<D>) -> &mut Self {
        let weak: Weak<D> = Rc::downgrade(delegate);
        self.notifier.set_delegate(Some(weak));
        self
    }

    /// Registers an already-downgraded delegate.
    pub fn set_delegate_weak(&mut self, delegate: Weak<dyn StepperDelegate>) -> &mut Self {
        self.notifier.set_delegate(Some(delegate));
        self
    }

    /// Removes the delegate.
    pub fn clear_delegate(&mut self) -> &mut Self {
        self.notifier.set_delegate(None);
        self
    }

    fn on(&mut self, kind: EventKind, callback: impl FnMut(&StepperModel) + 'static) -> &mut Self {
        self.notifier.set_callback(kind, Some(Box::new(callback)));
        self
    }

    /// Sets the [`EventKind::ValueChanged`] callback.
    pub fn on_value_changed(&mut self, callback: impl FnMut(&StepperModel) + 'static) -> &mut Self {
        self.on(EventKind::ValueChanged, callback)
    }

    /// Sets the [`EventKind::Decremented`] callback.
    pub fn on_decremented(&mut self, callback: impl FnMut(&StepperModel) + 'static) -> &mut Self {
        self.on(EventKind::Decremented, callback)
    }

    /// Sets the [`EventKind::Incremented`] callback.
    pub fn on_incremented(&mut self, callback: impl FnMut(&StepperModel) + 'static) -> &mut Self {
        self.on(EventKind::Incremented, callback)
    }

    /// Sets the [`EventKind::MinValueClamped`] callback.
    pub fn on_min_value_clamped(
        &mut self,
        callback: impl FnMut(&StepperModel) + 'static,
    ) -> &mut Self {
        self.on(EventKind::MinValueClamped, callback)
    }

    /// Sets the [`EventKind::MaxValueClamped`] callback.
    pub fn on_max_value_clamped(
        &mut self,
        callback: impl FnMut(&StepperModel) + 'static,
    ) -> &mut Self {
        self.on(EventKind::MaxValueClamped, callback)
    }

    /// Sets the same callback for both clamp kinds.
    pub fn on_value_clamped<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnMut(&StepperModel) + Clone + 'static,
    {
        self.on(EventKind::MinValueClamped, callback.clone());
        self.on(EventKind::MaxValueClamped, callback)
    }

    /// Sets the [`EventKind::LongPressEnded`] callback.
    pub fn on_long_press_ended(
        &mut self,
        callback: impl FnMut(&StepperModel) + 'static,
    ) -> &mut Self {
        self.on(EventKind::LongPressEnded, callback)
    }

    /// Removes the callback for `kind`.
    pub fn clear_callback(&mut self, kind: EventKind) -> &mut Self {
        self.notifier.set_callback(kind, None);
        self
    }

    // Stepping

    /// Steps down once. See [`StepperModel::step_down`] for the rules.
    ///
    /// Notifies [`EventKind::Decremented`] then [`EventKind::ValueChanged`] on
    /// a plain step, only [`EventKind::ValueChanged`] on a wrap, and
    /// [`EventKind::MinValueClamped`] on a clamp (after ending any active repeat).
    pub fn step_down(&mut self) -> &mut Self {
        self.step(StepDirection::Down)
    }

    /// Steps up once. Mirror image of [`Stepper::step_down`].
    pub fn step_up(&mut self) -> &mut Self {
        self.step(StepDirection::Up)
    }

    /// Steps once in `direction`.
    pub fn step(&mut self, direction: StepDirection) -> &mut Self {
        self.apply_step(direction);
        self
    }

    fn apply_step(&mut self, direction: StepDirection) -> StepOutcome {
        let outcome = self.model.step(direction);
        tracing::trace!(?direction, ?outcome, "stepper step");

        match outcome {
            StepOutcome::Stepped { .. } => {
                let kind = match direction {
                    StepDirection::Down => EventKind::Decremented,
                    StepDirection::Up => EventKind::Incremented,
                };
                self.notifier.notify(kind, &self.model);
                self.value_assigned(outcome.change());
            }
            StepOutcome::Wrapped { from, to } => {
                tracing::debug!(from, to, "stepper wrapped");
                self.value_assigned(outcome.change());
            }
            StepOutcome::Clamped(bound) => {
                tracing::debug!(?bound, value = self.model.value(), "stepper clamped");
                self.end_repeat();
                let kind = match bound {
                    Bound::Minimum => EventKind::MinValueClamped,
                    Bound::Maximum => EventKind::MaxValueClamped,
                };
                self.notifier.notify(kind, &self.model);
            }
        }
        outcome
    }

    // Repeat

    /// Starts repeating in `direction`, if auto-repeat is on and no repeat is
    /// active. Returns `true` if a repeat started.
    pub fn begin_repeat(&mut self, direction: StepDirection) -> bool {
        let started = self.repeat.begin(direction, &mut self.scheduler);
        if started {
            tracing::debug!(?direction, interval = self.repeat.interval(), "repeat began");
        }
        started
    }

    /// Ends an active repeat, firing [`EventKind::LongPressEnded`]. Does
    /// nothing when idle.
    pub fn end_long_press(&mut self) -> &mut Self {
        self.end_repeat();
        self
    }

    /// Delivers a tick for `timer`. Returns `false` and does nothing if
    /// `timer` is not the active repeat timer.
    ///
    /// A tick whose step cannot move the value (a step finer than the
    /// rounding resolution) ends the repeat, since every later tick would be
    /// swallowed the same way.
    pub fn tick(&mut self, timer: TimerId) -> bool {
        let Some(direction) = self.repeat.direction_for(timer) else {
            tracing::trace!(?timer, "ignoring stale repeat tick");
            return false;
        };
        let outcome = self.apply_step(direction);
        if matches!(outcome, StepOutcome::Stepped { .. }) && outcome.change().is_none() {
            tracing::debug!(?direction, "repeat step made no progress");
            self.end_repeat();
        }
        true
    }

    fn end_repeat(&mut self) {
        if self.repeat.end(&mut self.scheduler) {
            tracing::debug!(value = self.model.value(), "repeat ended");
            self.notifier.notify(EventKind::LongPressEnded, &self.model);
        }
    }

    fn end_repeat_if_disabled(&mut self) {
        if !self.repeat.enabled() {
            self.end_repeat();
        }
    }

    fn value_assigned(&mut self, change: Option<ValueChange>) {
        if change.is_some() {
            self.notifier.notify(EventKind::ValueChanged, &self.model);
        }
    }
}

impl<T: PartialEq, S: RepeatScheduler> Stepper<T, S> {
    /// Which direction `trigger` steps in, or `None` if it is neither trigger.
    ///
    /// If both handles compare equal, the increment trigger wins.
    #[must_use]
    pub fn direction_of(&self, trigger: &T) -> Option<StepDirection> {
        if *trigger == self.increment {
            Some(StepDirection::Up)
        } else if *trigger == self.decrement {
            Some(StepDirection::Down)
        } else {
            None
        }
    }

    /// Routes a tap on `trigger` to a single step. Unknown triggers are ignored.
    pub fn tap(&mut self, trigger: &T) -> &mut Self {
        if let Some(direction) = self.direction_of(trigger) {
            self.step(direction);
        }
        self
    }

    /// Routes a long-press phase on `trigger`.
    ///
    /// - [`PressPhase::Began`] starts repeating (if enabled and idle).
    /// - [`PressPhase::Changed`] does nothing.
    /// - Terminal phases end any active repeat, whichever trigger reports them.
    pub fn long_press(&mut self, trigger: &T, phase: PressPhase) -> &mut Self {
        if phase.is_terminal() {
            self.end_repeat();
        } else if phase == PressPhase::Began {
            self.begin_long_press(trigger);
        }
        self
    }

    /// Starts repeating for `trigger`. Returns `true` if a repeat started.
    pub fn begin_long_press(&mut self, trigger: &T) -> bool {
        if !self.repeat.enabled() {
            return false;
        }
        match self.direction_of(trigger) {
            Some(direction) => self.begin_repeat(direction),
            None => false,
        }
    }
}

impl<T> Stepper<T, ManualScheduler> {
    /// Advances the manual clock by `by` and delivers every tick that fell
    /// due. Returns how many ticks were accepted.
    ///
    /// Ticks queued behind a clamp that ended the repeat are dropped.
    pub fn advance(&mut self, by: Duration) -> usize {
        let due = self.scheduler.advance(by);
        due.into_iter().filter(|timer| self.tick(*timer)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use crate::notify::EventRecorder;

    type TestStepper = Stepper<u8, ManualScheduler>;

    const DOWN: u8 = 1;
    const UP: u8 = 2;

    fn stepper() -> (TestStepper, Rc<EventRecorder>) {
        let mut stepper = Stepper::new(DOWN, UP, ManualScheduler::new());
        let recorder = EventRecorder::new();
        stepper.set_delegate(&recorder);
        (stepper, recorder)
    }

    #[test]
    fn step_order_is_specific_then_value_changed() {
        let (mut s, rec) = stepper();
        s.set_value(5.0);
        rec.clear();

        s.step_up();
        s.step_down();
        assert_eq!(
            rec.events(),
            vec![
                (EventKind::Incremented, 6.0),
                (EventKind::ValueChanged, 6.0),
                (EventKind::Decremented, 5.0),
                (EventKind::ValueChanged, 5.0),
            ]
        );
    }

    #[test]
    fn min_clamp_never_reports_max() {
        let (mut s, rec) = stepper();
        s.step_down();
        assert_eq!(rec.kinds(), vec![EventKind::MinValueClamped]);
        assert_eq!(rec.count(EventKind::MaxValueClamped), 0);
    }

    #[test]
    fn tap_routes_by_trigger() {
        let (mut s, _) = stepper();
        s.tap(&UP).tap(&UP).tap(&DOWN).tap(&99);
        assert_eq!(s.value(), 1.0);
    }

    #[test]
    fn long_press_repeats_until_released() {
        let (mut s, rec) = stepper();
        s.long_press(&UP, PressPhase::Began);
        assert!(s.is_repeating());
        assert_eq!(s.advance(Duration::from_millis(350)), 3);
        assert_eq!(s.value(), 3.0);

        s.long_press(&UP, PressPhase::Changed);
        assert!(s.is_repeating());

        s.long_press(&DOWN, PressPhase::Ended);
        assert!(!s.is_repeating());
        assert_eq!(s.scheduler().active_count(), 0);
        assert_eq!(rec.count(EventKind::LongPressEnded), 1);
        assert_eq!(s.advance(Duration::from_secs(1)), 0);
    }

    #[test]
    fn repeat_into_clamp_stops_ticking() {
        let (mut s, rec) = stepper();
        s.set_maximum_value(2.0);
        assert!(s.begin_long_press(&UP));
        assert_eq!(s.advance(Duration::from_secs(1)), 3);
        assert_eq!(s.value(), 2.0);
        assert!(!s.is_repeating());
        assert_eq!(
            rec.kinds()[rec.kinds().len() - 2..],
            [EventKind::LongPressEnded, EventKind::MaxValueClamped]
        );
    }

    #[test]
    fn disabling_auto_repeat_ends_active_repeat() {
        let (mut s, rec) = stepper();
        s.begin_long_press(&DOWN);
        s.set_auto_repeat(false);
        assert!(!s.is_repeating());
        assert_eq!(rec.kinds(), vec![EventKind::LongPressEnded]);
        assert!(!s.begin_long_press(&DOWN));
    }

    #[test]
    fn invalid_interval_disables_auto_repeat() {
        let (mut s, _) = stepper();
        s.begin_long_press(&UP);
        s.set_auto_repeat_interval(-1.0);
        assert!(!s.auto_repeat());
        assert!(!s.is_repeating());
        assert_eq!(s.auto_repeat_interval(), 0.10);
    }

    #[test]
    fn stale_tick_is_ignored() {
        let (mut s, _) = stepper();
        s.begin_long_press(&UP);
        let RepeatState::Repeating { timer, .. } = s.repeat_state() else {
            panic!("expected an active repeat");
        };
        s.end_long_press();
        assert!(!s.tick(timer));
        assert_eq!(s.value(), 0.0);
    }

    #[test]
    fn callbacks_fire_after_delegate() {
        let (mut s, rec) = stepper();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let rec_in_cb = rec.clone();
        s.on_incremented(move |model| {
            log.borrow_mut().push((rec_in_cb.count(EventKind::Incremented), model.value()));
        });
        s.step_up();
        assert_eq!(*seen.borrow(), vec![(1, 1.0)]);
    }

    #[test]
    fn repeat_ends_when_rounding_swallows_the_step() {
        let (mut s, rec) = stepper();
        s.set_step_value(0.001);
        s.begin_long_press(&UP);

        assert_eq!(s.advance(Duration::from_secs(1)), 1);
        assert_eq!(s.value(), 0.0);
        assert!(!s.is_repeating());
        assert_eq!(s.scheduler().active_count(), 0);
        assert_eq!(
            rec.kinds(),
            vec![EventKind::Incremented, EventKind::LongPressEnded]
        );

        // A tap still reports the step; only the repeat gives up.
        s.tap(&UP);
        assert_eq!(rec.count(EventKind::Incremented), 2);
    }

    #[test]
    fn with_config_applies_repeat_settings() {
        let config = StepperConfig {
            auto_repeat_interval: 0.0,
            ..StepperConfig::default()
        };
        let s = Stepper::with_config(DOWN, UP, ManualScheduler::new(), &config).unwrap();
        assert!(!s.auto_repeat());
        assert_eq!(s.auto_repeat_interval(), 0.10);

        let bad = StepperConfig {
            increment_step_value: -1.0,
            ..StepperConfig::default()
        };
        assert!(Stepper::with_config(DOWN, UP, ManualScheduler::new(), &bad).is_err());
    }

    #[test]
    #[should_panic(expected = "invalid stepper configuration")]
    fn panicking_setter_rejects_inverted_bounds() {
        let (mut s, _) = stepper();
        s.set_minimum_value(100.0);
    }
}
