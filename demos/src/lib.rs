// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared host-side pieces for the stepper demos.
//!
//! A real host would draw a label and two buttons; these demos print instead.

use std::cell::RefCell;

use tracing_subscriber::EnvFilter;
use understory_stepper::{StepperDelegate, StepperModel};

/// Installs a `fmt` subscriber so the stepper's `tracing` output is visible.
///
/// Honors `RUST_LOG`; defaults to `debug` for the stepper crate.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,understory_stepper=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Formats a value the way the demo's count label shows it.
pub fn format_count(value: f64) -> String {
    format!("{value:.0}")
}

/// A delegate standing in for a view controller: keeps the label text and
/// reports clamps the way an alert would.
#[derive(Debug, Default)]
pub struct ConsoleDelegate {
    label: RefCell<String>,
    alerts: RefCell<Vec<String>>,
}

impl ConsoleDelegate {
    /// Current label text.
    pub fn label(&self) -> String {
        self.label.borrow().clone()
    }

    /// Every clamp alert shown so far.
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    fn alert(&self, model: &StepperModel) {
        let message = format!(
            "Stepper limit reached: the value must be between {} and {}.",
            format_count(model.minimum_value()),
            format_count(model.maximum_value())
        );
        println!("{message}");
        self.alerts.borrow_mut().push(message);
    }
}

impl StepperDelegate for ConsoleDelegate {
    fn value_changed(&self, model: &StepperModel) {
        *self.label.borrow_mut() = format_count(model.value());
        println!("count: {}", self.label.borrow());
    }

    fn min_value_clamped(&self, model: &StepperModel) {
        self.alert(model);
    }

    fn max_value_clamped(&self, model: &StepperModel) {
        self.alert(model);
    }

    fn long_press_ended(&self, model: &StepperModel) {
        println!("long press ended at {}", format_count(model.value()));
    }
}
