// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the carousel controller hot paths.
//!
//! Measures:
//! - Command dispatch on a desktop strip (offset recomputed every move)
//! - A full gesture (start, move, release) on a mobile slideshow
//! - Auto-play ticking with no deadline due

use criterion::{criterion_group, criterion_main, Criterion};
use iced::Point;
use iced_showcase::carousel::{Carousel, Command, Input, MountSettings, Preset, Slide};
use std::hint::black_box;
use std::time::{Duration, Instant};

fn mounted(preset: Preset, count: usize, width: f32) -> Carousel {
    let slides = (0..count)
        .map(|i| Slide::new(format!("title-{i}"), format!("body-{i}")))
        .collect();
    Carousel::mount(
        preset,
        slides,
        count,
        MountSettings {
            viewport_width: width,
            ..MountSettings::default()
        },
        Instant::now(),
    )
    .expect("mount")
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_dispatch");

    group.bench_function("strip_next", |b| {
        let mut carousel = mounted(Preset::reviews(), 6, 1280.0);
        let now = Instant::now();
        b.iter(|| black_box(carousel.dispatch(black_box(Command::Next), now)));
    });

    group.bench_function("go_to_arbitrary", |b| {
        let mut carousel = mounted(Preset::reviews(), 6, 1280.0);
        let now = Instant::now();
        let mut index = -1_000_i64;
        b.iter(|| {
            index = index.wrapping_add(7);
            black_box(carousel.go_to(black_box(index), now))
        });
    });

    group.finish();
}

fn bench_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_gesture");

    group.bench_function("swipe_left", |b| {
        let mut carousel = mounted(Preset::feature_cards(), 5, 375.0);
        let mut now = Instant::now();
        b.iter(|| {
            // Step past the transition lock so each swipe moves.
            now += Duration::from_millis(500);
            carousel.handle(Input::GestureStarted(Point::new(200.0, 100.0)), now);
            carousel.handle(Input::GestureMoved(Point::new(170.0, 102.0)), now);
            black_box(carousel.handle(
                Input::GestureEnded(Point::new(140.0, 104.0)),
                now + Duration::from_millis(150),
            ))
        });
    });

    group.finish();
}

fn bench_idle_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_tick");

    group.bench_function("idle_tick", |b| {
        let mut carousel = mounted(Preset::app_screens(), 4, 375.0);
        let now = Instant::now();
        b.iter(|| black_box(carousel.handle(Input::Tick, now)));
    });

    group.finish();
}

criterion_group!(benches, bench_dispatch, bench_gesture, bench_idle_tick);
criterion_main!(benches);
