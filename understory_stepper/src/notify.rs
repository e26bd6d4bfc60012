// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notification dispatch: a weak delegate plus one callback slot per event kind.
//!
//! Observers see the stepper through a shared [`StepperModel`] reference, so a
//! callback can read the value and bounds but cannot re-enter the stepper.
//!
//! Every notification goes to the delegate first (if one is set and still
//! alive), then to the callback slot for that kind (if any).
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use understory_stepper::{EventKind, Notifier, StepperModel};
//!
//! let hits = Rc::new(Cell::new(0));
//! let mut notifier = Notifier::new();
//! let counter = hits.clone();
//! notifier.set_callback(
//!     EventKind::Incremented,
//!     Some(Box::new(move |_: &StepperModel| counter.set(counter.get() + 1))),
//! );
//!
//! let model = StepperModel::new();
//! notifier.notify(EventKind::Incremented, &model);
//! notifier.notify(EventKind::Decremented, &model);
//! assert_eq!(hits.get(), 1);
//! ```

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use crate::model::StepperModel;

/// The kinds of notification a stepper emits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The value actually changed (after clamping).
    ValueChanged,
    /// A step down succeeded without clamp or wrap.
    Decremented,
    /// A step up succeeded without clamp or wrap.
    Incremented,
    /// A step down would pass the minimum and wrapping is off.
    MinValueClamped,
    /// A step up would pass the maximum and wrapping is off.
    MaxValueClamped,
    /// An active repeat went back to idle.
    LongPressEnded,
}

impl EventKind {
    /// Every kind, in slot order.
    pub const ALL: [Self; 6] = [
        Self::ValueChanged,
        Self::Decremented,
        Self::Incremented,
        Self::MinValueClamped,
        Self::MaxValueClamped,
        Self::LongPressEnded,
    ];

    const fn slot(self) -> usize {
        match self {
            Self::ValueChanged => 0,
            Self::Decremented => 1,
            Self::Incremented => 2,
            Self::MinValueClamped => 3,
            Self::MaxValueClamped => 4,
            Self::LongPressEnded => 5,
        }
    }
}

/// An observer object with one optional method per [`EventKind`].
///
/// Every method defaults to a no-op; implement only what you need. Methods
/// take `&self`, so stateful delegates use interior mutability.
pub trait StepperDelegate {
    /// See [`EventKind::ValueChanged`].
    fn value_changed(&self, model: &StepperModel) {
        let _ = model;
    }

    /// See [`EventKind::Decremented`].
    fn did_decrement(&self, model: &StepperModel) {
        let _ = model;
    }

    /// See [`EventKind::Incremented`].
    fn did_increment(&self, model: &StepperModel) {
        let _ = model;
    }

    /// See [`EventKind::MinValueClamped`].
    fn min_value_clamped(&self, model: &StepperModel) {
        let _ = model;
    }

    /// See [`EventKind::MaxValueClamped`].
    fn max_value_clamped(&self, model: &StepperModel) {
        let _ = model;
    }

    /// See [`EventKind::LongPressEnded`].
    fn long_press_ended(&self, model: &StepperModel) {
        let _ = model;
    }
}

/// A per-kind notification callback.
pub type Callback = Box<dyn FnMut(&StepperModel)>;

/// One optional callback per [`EventKind`]; assigning a slot replaces its
/// previous occupant.
#[derive(Default)]
pub struct Callbacks {
    slots: [Option<Callback>; 6],
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for kind in EventKind::ALL {
            if self.is_set(kind) {
                set.entry(&kind);
            }
        }
        set.finish()
    }
}

impl Callbacks {
    /// Creates a set of empty slots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the callback for `kind`, returning the previous one.
    pub fn set(&mut self, kind: EventKind, callback: Option<Callback>) -> Option<Callback> {
        core::mem::replace(&mut self.slots[kind.slot()], callback)
    }

    /// Returns `true` if a callback is registered for `kind`.
    #[must_use]
    pub fn is_set(&self, kind: EventKind) -> bool {
        self.slots[kind.slot()].is_some()
    }

    /// Removes every callback.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }

    fn call(&mut self, kind: EventKind, model: &StepperModel) {
        if let Some(callback) = self.slots[kind.slot()].as_mut() {
            callback(model);
        }
    }
}

/// Routes notifications to a delegate and the callback slots.
///
/// The delegate is held weakly: the notifier never keeps its observer alive,
/// and a dropped delegate is skipped.
#[derive(Default)]
pub struct Notifier {
    delegate: Option<Weak<dyn StepperDelegate>>,
    callbacks: Callbacks,
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("has_delegate", &self.has_delegate())
            .field("callbacks", &self.callbacks)
            .finish()
    }
}

impl Notifier {
    /// Creates a notifier with no delegate and no callbacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears the delegate.
    pub fn set_delegate(&mut self, delegate: Option<Weak<dyn StepperDelegate>>) {
        self.delegate = delegate;
    }

    /// Returns `true` if a delegate is set and still alive.
    #[must_use]
    pub fn has_delegate(&self) -> bool {
        self.delegate
            .as_ref()
            .is_some_and(|delegate| delegate.strong_count() > 0)
    }

    /// Replaces the callback for `kind`, returning the previous one.
    pub fn set_callback(&mut self, kind: EventKind, callback: Option<Callback>) -> Option<Callback> {
        self.callbacks.set(kind, callback)
    }

    /// Read access to the callback slots.
    #[must_use]
    pub fn callbacks(&self) -> &Callbacks {
        &self.callbacks
    }

    /// Mutable access to the callback slots.
    pub fn callbacks_mut(&mut self) -> &mut Callbacks {
        &mut self.callbacks
    }

    /// Delivers `kind` to the delegate, then to the callback slot.
    pub fn notify(&mut self, kind: EventKind, model: &StepperModel) {
        tracing::trace!(?kind, value = model.value(), "stepper notification");

        if let Some(delegate) = self.delegate.as_ref().and_then(Weak::upgrade) {
            match kind {
                EventKind::ValueChanged => delegate.value_changed(model),
                EventKind::Decremented => delegate.did_decrement(model),
                EventKind::Incremented => delegate.did_increment(model),
                EventKind::MinValueClamped => delegate.min_value_clamped(model),
                EventKind::MaxValueClamped => delegate.max_value_clamped(model),
                EventKind::LongPressEnded => delegate.long_press_ended(model),
            }
        }

        self.callbacks.call(kind, model);
    }
}

/// A delegate that records every notification it receives, with the value at
/// the time.
///
/// Handy in tests and when debugging a host integration.
#[derive(Debug, Default)]
pub struct EventRecorder {
    events: RefCell<Vec<(EventKind, f64)>>,
}

impl EventRecorder {
    /// Creates an empty recorder, ready to pass to
    /// [`Stepper::set_delegate`](crate::Stepper::set_delegate).
    #[must_use]
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Recorded event kinds, oldest first.
    #[must_use]
    pub fn kinds(&self) -> Vec<EventKind> {
        self.events.borrow().iter().map(|(kind, _)| *kind).collect()
    }

    /// Recorded events with the value each was observed at.
    #[must_use]
    pub fn events(&self) -> Vec<(EventKind, f64)> {
        self.events.borrow().clone()
    }

    /// Number of recorded events of `kind`.
    #[must_use]
    pub fn count(&self, kind: EventKind) -> usize {
        self.events.borrow().iter().filter(|(k, _)| *k == kind).count()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    fn record(&self, kind: EventKind, model: &StepperModel) {
        self.events.borrow_mut().push((kind, model.value()));
    }
}

impl StepperDelegate for EventRecorder {
    fn value_changed(&self, model: &StepperModel) {
        self.record(EventKind::ValueChanged, model);
    }

    fn did_decrement(&self, model: &StepperModel) {
        self.record(EventKind::Decremented, model);
    }

    fn did_increment(&self, model: &StepperModel) {
        self.record(EventKind::Incremented, model);
    }

    fn min_value_clamped(&self, model: &StepperModel) {
        self.record(EventKind::MinValueClamped, model);
    }

    fn max_value_clamped(&self, model: &StepperModel) {
        self.record(EventKind::MaxValueClamped, model);
    }

    fn long_press_ended(&self, model: &StepperModel) {
        self.record(EventKind::LongPressEnded, model);
    }
}
