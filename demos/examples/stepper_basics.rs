// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stepper basics.
//!
//! Configure a 0..=8 stepper with a chained setter call, tap it past both ends
//! with and without wrapping, and watch the notifications.
//!
//! Run:
//! - `cargo run -p understory_stepper_demos --example stepper_basics`

use std::rc::Rc;

use understory_stepper::{NoopScheduler, Stepper};
use understory_stepper_demos::{ConsoleDelegate, init_tracing};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Button {
    Decrement,
    Increment,
}

fn main() {
    init_tracing();

    let delegate = Rc::new(ConsoleDelegate::default());
    let mut stepper = Stepper::new(Button::Decrement, Button::Increment, NoopScheduler::default());
    stepper
        .set_bounds(0.0, 8.0)
        .set_step_value(1.0)
        .set_delegate(&delegate)
        .on_decremented(|_| println!("decremented"))
        .on_incremented(|_| println!("incremented"));

    for _ in 0..9 {
        stepper.tap(&Button::Increment);
    }
    println!("label after nine taps: {}", delegate.label());

    stepper.set_wraps(true);
    stepper.tap(&Button::Increment);
    println!("label after wrapping: {}", delegate.label());

    stepper.set_wraps(false);
    stepper.tap(&Button::Decrement);
    println!("{} clamp alert(s) shown", delegate.alerts().len());
}
