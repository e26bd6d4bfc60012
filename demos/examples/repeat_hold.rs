// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press and hold.
//!
//! Drive a long press with a manual clock: hold "+" until the stepper clamps
//! at its maximum, then hold "-" and release early.
//!
//! Run:
//! - `cargo run -p understory_stepper_demos --example repeat_hold`
//! - `RUST_LOG=understory_stepper=trace cargo run -p understory_stepper_demos --example repeat_hold`

use std::rc::Rc;
use std::time::Duration;

use understory_stepper::{ManualScheduler, PressPhase, Stepper, StepperConfig};
use understory_stepper_demos::{ConsoleDelegate, init_tracing};

fn main() {
    init_tracing();

    let config = StepperConfig {
        maximum_value: 8.0,
        auto_repeat_interval: 0.25,
        ..StepperConfig::default()
    };
    let mut stepper = Stepper::with_config("-", "+", ManualScheduler::new(), &config)
        .expect("demo configuration is valid");
    let delegate = Rc::new(ConsoleDelegate::default());
    stepper.set_delegate(&delegate);

    // Hold "+" for five seconds; the repeat stops on its own at 8.
    stepper.long_press(&"+", PressPhase::Began);
    let ticks = stepper.advance(Duration::from_secs(5));
    tracing::info!(ticks, repeating = stepper.is_repeating(), "held + for five seconds");
    stepper.long_press(&"+", PressPhase::Ended);

    // Hold "-" for one second, then let go.
    stepper.long_press(&"-", PressPhase::Began);
    stepper.advance(Duration::from_secs(1));
    stepper.long_press(&"-", PressPhase::Ended);
    println!("released at {}", delegate.label());

    // Nothing moves once released.
    stepper.advance(Duration::from_secs(1));
    println!("still at {}", delegate.label());
}
