// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_scale::{Scale, move_by_divisions, number_of_divisions, stick_to_scale};
use understory_swipe::{Picker, PickerConfig, SwipeTracker};

/// A scale of `len` ascending entries with irregular gaps.
fn make_scale(len: usize) -> Scale {
    let values: Vec<f64> = (0..len)
        .map(|i| {
            let i = i as f64;
            i * 1.5 + (i * 0.37).sin() * 0.5
        })
        .collect();
    Scale::new(values).unwrap()
}

/// Probe values spread over the scale and a margin on either side.
fn probes(scale: &Scale, count: usize) -> Vec<f64> {
    let span = scale.last() - scale.first();
    let start = scale.first() - span * 0.25;
    (0..count)
        .map(|i| start + span * 1.5 * (i as f64) / (count as f64))
        .collect()
}

fn bench_move_by_divisions(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale/move_by_divisions");

    // One gesture replay per probe: the division count grows one unit at a
    // time from the start value, as a drag would.
    for len in [16usize, 256, 4_096] {
        let scale = make_scale(len);
        let starts = probes(&scale, 64);
        group.throughput(Throughput::Elements((starts.len() * 32) as u64));

        group.bench_with_input(BenchmarkId::new("walk", len), &starts, |b, starts| {
            b.iter(|| {
                let mut acc = 0.0;
                for &start in starts {
                    for division in -16..16 {
                        acc += move_by_divisions(Some(&scale), 1.5, start, division);
                    }
                }
                black_box(acc)
            });
        });
    }

    group.bench_function("without_scale", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for division in -512..512 {
                acc += move_by_divisions(None, black_box(0.25), black_box(3.0), division);
            }
            black_box(acc)
        });
    });

    group.finish();
}

fn bench_stick_and_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale/snap_count");

    for len in [16usize, 256, 4_096] {
        let scale = make_scale(len);
        let values = probes(&scale, 1_024);
        group.throughput(Throughput::Elements(values.len() as u64));

        group.bench_with_input(BenchmarkId::new("stick", len), &values, |b, values| {
            b.iter(|| {
                let mut acc = 0.0;
                for &value in values {
                    acc += stick_to_scale(Some(&scale), 1.5, value);
                }
                black_box(acc)
            });
        });

        group.bench_with_input(BenchmarkId::new("count", len), &values, |b, values| {
            b.iter(|| {
                let mut acc = 0_i64;
                for pair in values.windows(2) {
                    acc += i64::from(number_of_divisions(Some(&scale), 1.5, pair[1], pair[0]));
                }
                black_box(acc)
            });
        });
    }

    group.finish();
}

fn bench_picker_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe/gesture");

    for looped in [false, true] {
        let config = PickerConfig::builder()
            .scale([1.0, 2.0, 5.0, 10.0, 20.0, 50.0])
            .step(25.0)
            .range(1.0, 200.0)
            .sticky(true)
            .looped(looped)
            .build()
            .unwrap();
        let name = if looped { "looped" } else { "clamped" };

        group.bench_function(name, |b| {
            b.iter(|| {
                let mut picker = Picker::with_value(config.clone(), 5.0);
                let mut tracker = SwipeTracker::new(8.0).unwrap();
                picker.begin_swipe(&mut tracker, Point::ZERO);
                for x in 0..400 {
                    picker.track(&mut tracker, Point::new(f64::from(x), 0.0));
                }
                tracker.end();
                black_box(picker.value())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_move_by_divisions,
    bench_stick_and_count,
    bench_picker_gesture
);
criterion_main!(benches);
