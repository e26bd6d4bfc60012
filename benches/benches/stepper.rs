// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use understory_stepper::{
    EventRecorder, ManualScheduler, NoopScheduler, Rounding, RoundingMode, Stepper, StepperModel,
};

fn bench_model_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("stepper/model");

    // Rounding is the only non-trivial arithmetic on the step path.
    for (name, rounding) in [
        ("unrounded", Rounding::None),
        (
            "two_places",
            Rounding::Decimal {
                scale: 2,
                mode: RoundingMode::HalfEven,
            },
        ),
    ] {
        group.bench_with_input(BenchmarkId::new("step_up_down", name), &rounding, |b, r| {
            let mut model = StepperModel::new();
            model.set_rounding(*r);
            model.set_value(50.0).unwrap();
            model.set_step_value(0.1).unwrap();
            b.iter(|| {
                black_box(model.step_up());
                black_box(model.step_down());
            });
        });
    }

    group.bench_function("clamp_at_max", |b| {
        let mut model = StepperModel::new();
        model.set_value(100.0).unwrap();
        b.iter(|| black_box(model.step_up()));
    });

    group.bench_function("wrap", |b| {
        let mut model = StepperModel::new();
        model.set_wraps(true);
        b.iter(|| black_box(model.step_down()));
    });

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("stepper/dispatch");

    group.bench_function("no_observers", |b| {
        let mut stepper = Stepper::new(0_u8, 1_u8, NoopScheduler::default());
        stepper.set_wraps(true);
        b.iter(|| {
            stepper.tap(black_box(&1));
        });
    });

    group.bench_function("delegate_and_callbacks", |b| {
        let count = Rc::new(Cell::new(0_u64));
        let inner = count.clone();
        let mut stepper = Stepper::new(0_u8, 1_u8, NoopScheduler::default());
        stepper
            .set_wraps(true)
            .on_value_changed(move |_| inner.set(inner.get() + 1));
        b.iter_batched(
            EventRecorder::new,
            |recorder| {
                stepper.set_delegate(&recorder);
                stepper.tap(&1);
                black_box(recorder);
            },
            BatchSize::SmallInput,
        );
        black_box(count.get());
    });

    group.finish();
}

fn bench_repeat(c: &mut Criterion) {
    let mut group = c.benchmark_group("stepper/repeat");

    // One second of holding at the default 100 ms interval, from press to release.
    group.bench_function("hold_one_second", |b| {
        b.iter_batched(
            || Stepper::new('-', '+', ManualScheduler::new()),
            |mut stepper| {
                stepper.begin_long_press(&'+');
                black_box(stepper.advance(Duration::from_secs(1)));
                stepper.end_long_press();
                stepper
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_model_steps, bench_dispatch, bench_repeat);
criterion_main!(benches);
